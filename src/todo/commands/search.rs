use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::matching;
use crate::store::LineStore;

use super::helpers::indexed_records;

pub fn run<S: LineStore>(store: &S, pattern: &str) -> Result<CmdResult> {
    let found = matching(indexed_records(store)?, pattern).collect::<Result<Vec<_>>>()?;
    log::debug!("{} records match {:?}", found.len(), pattern);
    Ok(CmdResult::default().with_listed_records(found))
}
