use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::LineStore;

use super::helpers::all_records;

pub fn run<S: LineStore>(store: &S) -> Result<CmdResult> {
    let listed = all_records(store)?;
    log::debug!("listed {} records from {}", listed.len(), store.location());
    Ok(CmdResult::default().with_listed_records(listed))
}
