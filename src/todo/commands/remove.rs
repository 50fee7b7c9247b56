//! Removal by index.
//!
//! The whole record sequence is read, the record at `index` is taken out and
//! the store is rewritten from what remains. Numbering on disk and on screen
//! is the same thing here, so there is no offset between physical and
//! logical lines to keep in sync. Blank lines do not survive a rewrite.
//!
//! An index that names no record (0, or past the end) leaves the store
//! untouched and is not an error.

use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::LineStore;

use super::helpers::all_records;

pub fn run<S: LineStore>(store: &mut S, index: usize) -> Result<CmdResult> {
    let mut records = all_records(store)?;

    let position = match index.checked_sub(1).filter(|&p| p < records.len()) {
        Some(position) => position,
        None => {
            log::warn!(
                "index {} is out of range ({} records), nothing removed",
                index,
                records.len()
            );
            return Ok(CmdResult::default());
        }
    };

    let removed = records.remove(position);
    let remaining: Vec<Vec<u8>> = records.into_iter().map(|r| r.raw).collect();
    store.replace(&remaining)?;
    log::debug!("removed record {} from {}", index, store.location());

    Ok(CmdResult::default().with_affected_records(vec![removed]))
}
