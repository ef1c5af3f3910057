use crate::utils::error::{AnalyzerError, Result};
use std::iter::Peekable;
use std::str::SplitWhitespace;

/// Cursor over the whitespace-separated integer tokens of an input string.
pub struct IntScanner<'a> {
    tokens: Peekable<SplitWhitespace<'a>>,
}

impl<'a> IntScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            tokens: text.split_whitespace().peekable(),
        }
    }

    /// Consumes and returns the next token only if it parses as an integer.
    /// Returns `None` when the stream is exhausted or the next token is not
    /// numeric, leaving the non-numeric token in place.
    pub fn try_next_int(&mut self) -> Option<i64> {
        let parsed = self.tokens.peek().and_then(|token| token.parse().ok())?;
        self.tokens.next();
        Some(parsed)
    }

    /// Consumes the next token and requires it to be an integer.
    pub fn expect_int(&mut self, what: &str) -> Result<i64> {
        match self.tokens.next() {
            Some(token) => token.parse().map_err(|_| AnalyzerError::InsufficientData {
                reason: format!("{} '{}' is not an integer", what, token),
            }),
            None => Err(AnalyzerError::InsufficientData {
                reason: format!("missing {}", what),
            }),
        }
    }
}
