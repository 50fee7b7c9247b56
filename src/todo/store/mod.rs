//! # Storage Layer
//!
//! The [`LineStore`] trait abstracts the single text file that holds the
//! task list. Commands only ever talk to this trait.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one plain-text file
//!   - One record per line, newline terminated
//!   - Whole-file rewrites go through a temp file and `rename`
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Same byte-level behavior as `FileStore`
//!   - No filesystem needed
//!
//! ## Lifecycle
//!
//! A store is either *uninitialized* (no backing file) or *initialized*
//! (file present, possibly empty). Implementations do not enforce this
//! themselves; the command layer checks [`LineStore::exists`] before every
//! operation other than `init`.
//!
//! ## Storage Format
//!
//! ```text
//! ~/.todo/
//! ├── database        # the records, one per line
//! └── config.json     # optional settings
//! ```
//!
//! Blank lines are tolerated anywhere in `database` and ignored by indexing.

use crate::error::Result;
use std::io::BufRead;

pub mod fs;
pub mod memory;

/// Abstract interface over the line-oriented record file.
pub trait LineStore {
    /// Whether the backing file exists
    fn exists(&self) -> bool;

    /// Create the backing file, or truncate it to empty if present
    fn create(&mut self) -> Result<()>;

    /// Open the raw content for line-by-line reading
    fn reader(&self) -> Result<Box<dyn BufRead + '_>>;

    /// Append one line of text at the end of the file.
    ///
    /// If the current content does not end in a newline one is written
    /// first, so the new text always starts a line of its own.
    fn append_line(&mut self, text: &str) -> Result<()>;

    /// Replace the whole content with `lines`, each newline terminated.
    /// Lines are raw bytes and are written back untouched.
    fn replace(&mut self, lines: &[Vec<u8>]) -> Result<()>;

    /// Delete the backing file
    fn remove(&mut self) -> Result<()>;

    /// Human readable location of the backing file
    fn location(&self) -> String;
}

/// Renders records in the on-disk format.
pub(crate) fn render_lines(lines: &[Vec<u8>]) -> Vec<u8> {
    let mut content = Vec::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        content.extend_from_slice(line);
        content.push(b'\n');
    }
    content
}
