use std::fmt;

/// A single non-empty line of the database.
///
/// `index` is not stored anywhere: it is the record's position among the
/// non-empty lines at the moment the file was read.
///
/// `raw` holds the line exactly as stored. The file has no declared
/// encoding, so `text` is only a lossy UTF-8 view for display; rewrites and
/// matching use `raw`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub index: usize,
    pub text: String,
    pub raw: Vec<u8>,
}

impl Record {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            index,
            raw: text.clone().into_bytes(),
            text,
        }
    }

    pub fn from_raw(index: usize, raw: Vec<u8>) -> Self {
        Self {
            index,
            text: String::from_utf8_lossy(&raw).into_owned(),
            raw,
        }
    }

    /// Literal, case-sensitive byte substring test. Empty patterns match.
    pub fn contains(&self, pattern: &str) -> bool {
        let needle = pattern.as_bytes();
        needle.is_empty() || self.raw.windows(needle.len()).any(|w| w == needle)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.index, self.text)
    }
}
