use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::LineStore;

/// Where the database is (or would be). Works on uninitialized stores too.
pub fn run<S: LineStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_location(store.location()))
}
