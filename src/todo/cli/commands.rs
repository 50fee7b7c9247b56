//! # CLI Layer
//!
//! One possible client of the todo library, and the only code that knows
//! about the terminal: it parses flags, sets up logging, resolves the
//! database location, prompts for confirmation and prints results.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves paths and config, builds the API
//! - `handle_*()`: Per-operation handlers that call the API and print

use super::render::{print_location, print_messages, print_records};
use super::setup::{Cli, Operation};
use clap::{CommandFactory, Parser};
use todo::api::TodoApi;
use todo::config::{TodoConfig, TodoPaths};
use todo::error::{Result, TodoError};
use todo::prompt::{AssumeYes, Confirm, StdinPrompt};
use todo::store::fs::FileStore;

struct AppContext {
    api: TodoApi<FileStore>,
    config: TodoConfig,
    assume_yes: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let Some(operation) = cli.operation() else {
        Cli::command().print_help().map_err(TodoError::Io)?;
        return Ok(());
    };

    let mut ctx = init_context(&cli)?;
    log::debug!("running {:?}", operation);

    match operation {
        Operation::Init => handle_init(&mut ctx),
        Operation::List => handle_list(&ctx),
        Operation::Add(text) => handle_add(&mut ctx, &text),
        Operation::Remove(index) => handle_remove(&mut ctx, index),
        Operation::Search(pattern) => handle_search(&ctx, &pattern),
        Operation::Clean => handle_clean(&mut ctx),
        Operation::Path => handle_path(&ctx),
    }
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose`.
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .format_timestamp(None)
    .target(env_logger::Target::Stderr)
    .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let (paths, config) = TodoPaths::from_env()?;
    let store = FileStore::new(paths.database);

    Ok(AppContext {
        api: TodoApi::new(store),
        config,
        assume_yes: cli.yes,
    })
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let mut confirm: Box<dyn Confirm> = if ctx.assume_yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinPrompt::new(ctx.config.confirm_default))
    };
    let result = ctx.api.init(confirm.as_mut())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, text: &str) -> Result<()> {
    let result = ctx.api.add(text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, index: i64) -> Result<()> {
    // negative indexes name no record, same as 0
    let result = ctx.api.remove(usize::try_from(index).unwrap_or(0))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, pattern: &str) -> Result<()> {
    let result = ctx.api.search(pattern)?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_clean(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clean()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.path()?;
    print_location(result.location.as_deref());
    print_messages(&result.messages);
    Ok(())
}
