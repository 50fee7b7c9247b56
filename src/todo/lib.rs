//! # Todo Architecture
//!
//! Todo keeps a task list in one plain-text file, one task per line. A task
//! is addressed by its position among the non-empty lines, so the numbers
//! shown by `todo -l` are exactly what `todo -r` accepts.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags, prints records and messages, prompts       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, one call per invocation                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - init, list, add, remove, search, clean                   │
//! │  - Returns `CmdResult`, never prints                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - LineStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Configuration is resolved once at startup ([`config::TodoPaths::from_env`])
//! and handed to the store; nothing below the CLI reads the environment.
//! Confirmation before wiping a database on re-init is an injected
//! [`prompt::Confirm`] capability, so the core runs without a terminal.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`index`]: Non-empty-line numbering shared by list, search and remove
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Record` type
//! - [`config`]: Config directory resolution and `config.json`
//! - [`prompt`]: Yes/no confirmation capability
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod prompt;
pub mod store;
