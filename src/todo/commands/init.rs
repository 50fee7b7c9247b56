use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::prompt::Confirm;
use crate::store::LineStore;

pub const REINIT_QUESTION: &str = "Database already exists, re-initializing the database will delete everything. Do you want to continue?";

pub fn run<S: LineStore, C: Confirm + ?Sized>(store: &mut S, confirm: &mut C) -> Result<CmdResult> {
    let existed = store.exists();
    if existed && !confirm.confirm(REINIT_QUESTION)? {
        log::debug!("re-initialization of {} declined", store.location());
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("Operation cancelled."));
        return Ok(res);
    }

    store.create()?;
    log::debug!("initialized {}", store.location());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(if existed {
        "Database re-initialized!"
    } else {
        "Database initialized!"
    }));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn never_asked(_: &str) -> Result<bool> {
        panic!("confirmation must not be requested for a fresh store")
    }

    fn answer(yes: bool) -> impl FnMut(&str) -> Result<bool> {
        move |_: &str| -> Result<bool> { Ok(yes) }
    }

    #[test]
    fn creates_missing_database_without_asking() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, &mut never_asked).unwrap();

        assert!(store.exists());
        assert_eq!(store.content(), Some(""));
        assert_eq!(result.messages[0].content, "Database initialized!");
    }

    #[test]
    fn asks_exactly_once_before_reinitializing() {
        let mut fixture = StoreFixture::new().with_tasks(2);
        let mut questions = Vec::new();
        let mut confirm = |q: &str| -> Result<bool> {
            questions.push(q.to_string());
            Ok(true)
        };

        let result = run(&mut fixture.store, &mut confirm).unwrap();
        assert_eq!(questions, vec![REINIT_QUESTION.to_string()]);
        assert_eq!(result.messages[0].content, "Database re-initialized!");
        assert_eq!(fixture.store.content(), Some(""));
    }

    #[test]
    fn declined_reinit_keeps_records() {
        let mut fixture = StoreFixture::new().with_records(&["buy milk", "call mom"]);
        let before = fixture.store.content().map(str::to_string);

        let result = run(&mut fixture.store, &mut answer(false)).unwrap();
        assert_eq!(result.messages[0].content, "Operation cancelled.");
        assert_eq!(fixture.store.content().map(str::to_string), before);

        // and again, the guard holds every time
        run(&mut fixture.store, &mut answer(false)).unwrap();
        let listed = list::run(&fixture.store).unwrap();
        assert_eq!(listed.listed_records.len(), 2);
    }
}
