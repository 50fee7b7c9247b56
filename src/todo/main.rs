use todo::error::TodoError;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        match e {
            TodoError::NotInitialized(_) => println!("Database not initialized!"),
            e => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}
