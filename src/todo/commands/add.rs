use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::LineStore;

use super::helpers::ensure_initialized;

/// Appends `text` as the last record.
///
/// The text is written as-is: an embedded newline produces several records
/// on the next read.
pub fn run<S: LineStore>(store: &mut S, text: &str) -> Result<CmdResult> {
    ensure_initialized(store)?;
    store.append_line(text)?;
    log::debug!("appended {} bytes to {}", text.len(), store.location());
    Ok(CmdResult::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::error::TodoError;
    use crate::model::Record;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn appended_text_becomes_next_record() {
        let mut fixture = StoreFixture::new().with_tasks(3);
        let result = run(&mut fixture.store, "water plants").unwrap();
        assert!(result.messages.is_empty());

        let listed = list::run(&fixture.store).unwrap().listed_records;
        assert_eq!(listed.len(), 4);
        assert_eq!(listed[3], Record::new(4, "water plants"));
    }

    #[test]
    fn first_append_creates_no_blank_record() {
        let mut fixture = StoreFixture::new();
        run(&mut fixture.store, "buy milk").unwrap();

        assert_eq!(fixture.store.content(), Some("buy milk\n"));
        let listed = list::run(&fixture.store).unwrap().listed_records;
        assert_eq!(listed, vec![Record::new(1, "buy milk")]);
    }

    #[test]
    fn embedded_newline_splits_into_records() {
        let mut fixture = StoreFixture::new().with_records(&["buy milk"]);
        run(&mut fixture.store, "call mom\nwater plants").unwrap();

        let listed = list::run(&fixture.store).unwrap().listed_records;
        assert_eq!(
            listed,
            vec![
                Record::new(1, "buy milk"),
                Record::new(2, "call mom"),
                Record::new(3, "water plants"),
            ]
        );
    }

    #[test]
    fn empty_text_is_invisible() {
        let mut fixture = StoreFixture::new().with_records(&["buy milk"]);
        run(&mut fixture.store, "").unwrap();
        assert_eq!(list::run(&fixture.store).unwrap().listed_records.len(), 1);
    }

    #[test]
    fn fails_when_not_initialized() {
        let mut fixture = StoreFixture::uninitialized();
        let err = run(&mut fixture.store, "buy milk").unwrap_err();
        assert!(matches!(err, TodoError::NotInitialized(_)));
        assert!(fixture.store.content().is_none());
    }
}
