use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::LineStore;

use super::helpers::ensure_initialized;

/// Deletes the database. Asking first is the caller's business.
pub fn run<S: LineStore>(store: &mut S) -> Result<CmdResult> {
    ensure_initialized(store)?;
    store.remove()?;
    log::debug!("removed {}", store.location());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Database cleaned!"));
    Ok(result)
}
