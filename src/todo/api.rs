//! # API Facade
//!
//! `TodoApi` is the single entry point to the record store. Every UI (the
//! bundled CLI included) goes through it and makes exactly one call per
//! invocation.
//!
//! The facade only dispatches: the logic lives in `commands/*.rs`, and
//! nothing here prints, prompts on its own or exits. Destructive
//! re-initialization asks through the [`Confirm`] capability the caller
//! passes in.
//!
//! `TodoApi<S: LineStore>` is generic over the storage backend:
//! - Production: `TodoApi<FileStore>`
//! - Testing: `TodoApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::index::Records;
use crate::prompt::Confirm;
use crate::store::LineStore;
use std::io::BufRead;

pub struct TodoApi<S: LineStore> {
    store: S,
}

impl<S: LineStore> TodoApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn init<C: Confirm + ?Sized>(&mut self, confirm: &mut C) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store, confirm)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    /// Streams the records without collecting them.
    pub fn records(&self) -> Result<Records<Box<dyn BufRead + '_>>> {
        commands::helpers::indexed_records(&self.store)
    }

    pub fn add(&mut self, text: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, text)
    }

    pub fn remove(&mut self, index: usize) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, index)
    }

    pub fn search(&self, pattern: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, pattern)
    }

    pub fn clean(&mut self) -> Result<commands::CmdResult> {
        commands::clean::run(&mut self.store)
    }

    pub fn path(&self) -> Result<commands::CmdResult> {
        commands::paths::run(&self.store)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
