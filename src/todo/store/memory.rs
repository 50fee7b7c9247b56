use super::{render_lines, LineStore};
use crate::error::{Result, TodoError};
use std::io::{self, BufRead, Cursor};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    content: Option<Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `content`, byte for byte
    pub fn with_content(content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// The content as text, `None` when missing or not valid UTF-8
    pub fn content(&self) -> Option<&str> {
        self.bytes().and_then(|b| std::str::from_utf8(b).ok())
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }

    fn missing() -> TodoError {
        TodoError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            "in-memory database does not exist",
        ))
    }
}

impl LineStore for InMemoryStore {
    fn exists(&self) -> bool {
        self.content.is_some()
    }

    fn create(&mut self) -> Result<()> {
        self.content = Some(Vec::new());
        Ok(())
    }

    fn reader(&self) -> Result<Box<dyn BufRead + '_>> {
        let content = self.bytes().ok_or_else(Self::missing)?;
        Ok(Box::new(Cursor::new(content)))
    }

    fn append_line(&mut self, text: &str) -> Result<()> {
        let content = self.content.as_mut().ok_or_else(Self::missing)?;
        if !content.is_empty() && content.last() != Some(&b'\n') {
            content.push(b'\n');
        }
        content.extend_from_slice(text.as_bytes());
        content.push(b'\n');
        Ok(())
    }

    fn replace(&mut self, lines: &[Vec<u8>]) -> Result<()> {
        self.content = Some(render_lines(lines));
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        self.content.take().ok_or_else(Self::missing)?;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_uninitialized() {
        let store = InMemoryStore::new();
        assert!(!store.exists());
        assert!(store.reader().is_err());
    }

    #[test]
    fn append_matches_file_format() {
        let mut store = InMemoryStore::new();
        store.create().unwrap();
        store.append_line("buy milk").unwrap();
        assert_eq!(store.content(), Some("buy milk\n"));
    }

    #[test]
    fn append_repairs_missing_trailing_newline() {
        let mut store = InMemoryStore::with_content("\nbuy milk");
        store.append_line("call mom").unwrap();
        assert_eq!(store.content(), Some("\nbuy milk\ncall mom\n"));
    }

    #[test]
    fn holds_bytes_that_are_not_utf8() {
        let mut store = InMemoryStore::with_content(&b"caf\xe9 run"[..]);
        store.append_line("call mom").unwrap();
        assert_eq!(store.bytes(), Some(&b"caf\xe9 run\ncall mom\n"[..]));
        assert_eq!(store.content(), None);
    }

    #[test]
    fn remove_returns_to_uninitialized() {
        let mut store = InMemoryStore::with_content("buy milk\n");
        store.remove().unwrap();
        assert!(!store.exists());
        assert!(store.remove().is_err());
    }
}
