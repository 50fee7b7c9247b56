//! Yes/no confirmation as an injected capability.
//!
//! The store asks before destroying data but never touches the terminal
//! itself: callers hand in a [`Confirm`] implementation. The CLI passes a
//! [`StdinPrompt`] (or [`AssumeYes`] with `--yes`), tests pass closures.

use crate::error::{Result, TodoError};
use std::io::{self, BufRead, Write};

pub trait Confirm {
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> Result<bool>,
{
    fn confirm(&mut self, question: &str) -> Result<bool> {
        self(question)
    }
}

/// Always answers yes.
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _question: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Asks on stdout and reads the answer from stdin.
pub struct StdinPrompt {
    pub default_yes: bool,
}

impl StdinPrompt {
    pub fn new(default_yes: bool) -> Self {
        Self { default_yes }
    }

    fn hint(&self) -> &'static str {
        if self.default_yes {
            " [Y/n]: "
        } else {
            " [y/N]: "
        }
    }
}

impl Confirm for StdinPrompt {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        print!("{}{}", question, self.hint());
        io::stdout().flush().map_err(TodoError::Io)?;

        let mut input = String::new();
        io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(TodoError::Io)?;
        Ok(parse_answer(&input, self.default_yes))
    }
}

/// Empty input takes the default, otherwise only the first character counts.
pub fn parse_answer(input: &str, default_yes: bool) -> bool {
    let answer = input.trim_end_matches(['\r', '\n']);
    match answer.chars().next() {
        None => default_yes,
        Some(c) => c.to_ascii_lowercase() == 'y',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_answer_takes_default() {
        assert!(parse_answer("\n", true));
        assert!(!parse_answer("\n", false));
        assert!(parse_answer("", true));
    }

    #[test]
    fn first_character_decides() {
        assert!(parse_answer("y\n", false));
        assert!(parse_answer("Yes please\n", false));
        assert!(!parse_answer("n\n", true));
        assert!(!parse_answer("nope\n", true));
        assert!(!parse_answer(" y\n", true));
    }

    #[test]
    fn closures_are_confirmers() {
        let mut asked = Vec::new();
        let mut confirm = |q: &str| -> Result<bool> {
            asked.push(q.to_string());
            Ok(false)
        };
        assert!(!confirm.confirm("Sure?").unwrap());
        assert_eq!(asked, vec!["Sure?"]);
    }

    #[test]
    fn assume_yes_always_agrees() {
        assert!(AssumeYes.confirm("Sure?").unwrap());
    }
}
