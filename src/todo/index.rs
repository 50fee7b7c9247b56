//! # Record Indexing
//!
//! Records have no stored identity. A record's index is its 1-based position
//! among the **non-empty** lines of the database, counted top to bottom every
//! time the file is read:
//!
//! ```text
//! (blank)           <- skipped, never shown
//! buy milk          -> 1
//! call mom          -> 2
//! (blank)           <- skipped
//! water plants      -> 3
//! ```
//!
//! Indexes are therefore not stable: removing record 2 turns "water plants"
//! into record 2 on the next read. Blank lines may exist physically (files
//! written by older versions start with one) but never count.
//!
//! [`Records`] is lazy, so listing and searching stream the file instead of
//! loading it whole. Removal needs the complete sequence and collects it.

use crate::error::{Result, TodoError};
use crate::model::Record;
use std::io::BufRead;

/// Iterator over the records of a line source, numbered as they are read.
///
/// Lines are split on `\n` as raw bytes, so text in any encoding survives.
pub struct Records<R> {
    reader: R,
    next_index: usize,
}

impl<R: BufRead> Records<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            next_index: 1,
        }
    }

    fn next_line(&mut self) -> Option<Result<Vec<u8>>> {
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => None,
            Ok(_) => {
                if line.last() == Some(&b'\n') {
                    line.pop();
                    if line.last() == Some(&b'\r') {
                        line.pop();
                    }
                }
                Some(Ok(line))
            }
            Err(e) => Some(Err(TodoError::Io(e))),
        }
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.next_line()? {
                Ok(line) if line.is_empty() => continue,
                Ok(line) => {
                    let record = Record::from_raw(self.next_index, line);
                    self.next_index += 1;
                    return Some(Ok(record));
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Indexes a reader into records.
pub fn records<R: BufRead>(reader: R) -> Records<R> {
    Records::new(reader)
}

/// Keeps only the records whose stored bytes contain `pattern` verbatim.
///
/// Matching is case-sensitive and literal. Indexes are left untouched, so a
/// match on the fifth record is still reported as 5.
pub fn matching<'a, I>(records: I, pattern: &'a str) -> impl Iterator<Item = Result<Record>> + 'a
where
    I: Iterator<Item = Result<Record>> + 'a,
{
    records.filter(move |item| match item {
        Ok(record) => record.contains(pattern),
        Err(_) => true,
    })
}
