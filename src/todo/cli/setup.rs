use clap::Parser;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.1" for releases, "0.3.1@abc1234 2024-01-15" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "todo", bin_name = "todo", version = get_version())]
#[command(about = "A tiny line-oriented task list", long_about = None)]
pub struct Cli {
    /// Initializes the database.
    #[arg(short, long, help_heading = "Available Options")]
    pub init: bool,

    /// Lists all the items in the database.
    #[arg(short, long, help_heading = "Available Options")]
    pub list: bool,

    /// Add item to the database.
    #[arg(short, long, value_name = "TEXT", help_heading = "Available Options")]
    pub add: Option<String>,

    /// Remove item from the database from the given index.
    #[arg(
        short,
        long,
        value_name = "INDEX",
        allow_negative_numbers = true,
        help_heading = "Available Options"
    )]
    pub remove: Option<i64>,

    /// Searches the database for the given text.
    #[arg(short, long, value_name = "TEXT", help_heading = "Available Options")]
    pub search: Option<String>,

    /// Prints the location of the database file.
    #[arg(short, long, help_heading = "Available Options")]
    pub path: bool,

    /// Wipes the entire database. Might need re-initialization.
    #[arg(short, long, help_heading = "Dangerous Options")]
    pub clean: bool,

    /// Answer yes to the re-initialization prompt
    #[arg(short, long, help_heading = "Options")]
    pub yes: bool,

    /// Verbose output
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,
}

/// The one operation a run performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Init,
    List,
    Add(String),
    Remove(i64),
    Search(String),
    Clean,
    Path,
}

impl Cli {
    /// Picks the operation to run. When several flags are given the first in
    /// init, list, add, remove, search, clean, path order wins.
    pub fn operation(&self) -> Option<Operation> {
        if self.init {
            Some(Operation::Init)
        } else if self.list {
            Some(Operation::List)
        } else if let Some(text) = &self.add {
            Some(Operation::Add(text.clone()))
        } else if let Some(index) = self.remove {
            Some(Operation::Remove(index))
        } else if let Some(pattern) = &self.search {
            Some(Operation::Search(pattern.clone()))
        } else if self.clean {
            Some(Operation::Clean)
        } else if self.path {
            Some(Operation::Path)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("todo").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_means_no_operation() {
        assert_eq!(parse(&[]).operation(), None);
        assert_eq!(parse(&["-v"]).operation(), None);
    }

    #[test]
    fn short_and_long_flags() {
        assert_eq!(parse(&["-i"]).operation(), Some(Operation::Init));
        assert_eq!(parse(&["--list"]).operation(), Some(Operation::List));
        assert_eq!(
            parse(&["-a", "buy milk"]).operation(),
            Some(Operation::Add("buy milk".into()))
        );
        assert_eq!(parse(&["--remove", "3"]).operation(), Some(Operation::Remove(3)));
        assert_eq!(
            parse(&["-s", "mom"]).operation(),
            Some(Operation::Search("mom".into()))
        );
        assert_eq!(parse(&["-c"]).operation(), Some(Operation::Clean));
        assert_eq!(parse(&["-p"]).operation(), Some(Operation::Path));
    }

    #[test]
    fn first_operation_in_priority_order_wins() {
        assert_eq!(parse(&["-c", "-l"]).operation(), Some(Operation::List));
        assert_eq!(parse(&["-s", "x", "-i"]).operation(), Some(Operation::Init));
        assert_eq!(
            parse(&["-r", "2", "-a", "x"]).operation(),
            Some(Operation::Add("x".into()))
        );
    }

    #[test]
    fn accepts_negative_index() {
        assert_eq!(parse(&["-r", "-1"]).operation(), Some(Operation::Remove(-1)));
    }

    #[test]
    fn rejects_non_numeric_index() {
        let args = ["todo", "-r", "first"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
