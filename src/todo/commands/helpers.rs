use crate::error::{Result, TodoError};
use crate::index::{records, Records};
use crate::model::Record;
use crate::store::LineStore;
use std::io::BufRead;
use std::path::PathBuf;

pub fn ensure_initialized<S: LineStore>(store: &S) -> Result<()> {
    if store.exists() {
        Ok(())
    } else {
        Err(TodoError::NotInitialized(PathBuf::from(store.location())))
    }
}

/// Lazily indexed records of an initialized store.
pub fn indexed_records<S: LineStore>(store: &S) -> Result<Records<Box<dyn BufRead + '_>>> {
    ensure_initialized(store)?;
    Ok(records(store.reader()?))
}

pub fn all_records<S: LineStore>(store: &S) -> Result<Vec<Record>> {
    indexed_records(store)?.collect()
}
