//! Token model tying a `TokenKind` to its source slice.
//!
//! A `Token` borrows its text from the SQL string handed to the tokenizer and
//! records the byte offsets of that slice. Offsets let callers relate tokens
//! back to the raw input; the borrowed text lets renderers emit the token
//! without re-slicing.
use crate::sql::{keyword::Keyword, token_kind::TokenKind};

/// A lexical token with its inclusive start and exclusive end byte offsets.
///
/// Invariants:
/// - `end >= start`
/// - `text == &sql[start..end]` for the original SQL string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl<'a> Token<'a> {
    /// Construct a new token covering `text`, which starts at byte `start`.
    pub const fn new(kind: TokenKind, text: &'a str, start: usize) -> Self {
        Self {
            kind,
            text,
            start,
            end: start + text.len(),
        }
    }

    /// Returns the word text if this token is a bare word.
    pub fn word(&self) -> Option<&'a str> {
        match self.kind {
            TokenKind::Word => Some(self.text),
            _ => None,
        }
    }

    /// The built-in keyword this word spells, if any.
    pub fn keyword(&self) -> Option<Keyword> {
        self.word().and_then(Keyword::from_word)
    }

    /// Returns true if this token spells the given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.keyword() == Some(kw)
    }
}
