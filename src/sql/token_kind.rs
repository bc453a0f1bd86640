//! Token kind definitions for the lenient SQL tokenizer.
//!
//! Each `TokenKind` variant represents a lexical atom discovered during
//! scanning. Unlike a parser front-end the tokenizer keeps whitespace as its
//! own token so the stream stays lossless; anything unrecognized becomes
//! `Other(char)`.
//!
//! Words are not classified here. Whether a word is a keyword or a function
//! name depends on the active `Dialect` and on its neighbours, which the
//! formatter and highlighter decide for themselves.

/// Classification for a token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Run of letters, digits and `_` that is not a plain number.
    Word,
    /// Integer or decimal literal (`42`, `3.14`).
    Number,
    /// Single-quoted string literal including its quotes. `''` inside is an
    /// escaped quote. `terminated` is false when the input ended first.
    Str { terminated: bool },
    /// Double-quoted identifier including its quotes.
    QuotedIdent { terminated: bool },
    /// Comparison or arithmetic operator (`=`, `<>`, `>=`, `*`, ...).
    Operator,
    /// Comma `,`.
    Comma,
    /// Dot `.` (qualified names like `table.column`).
    Dot,
    /// Opening parenthesis `(`.
    ParenOpen,
    /// Closing parenthesis `)`.
    ParenClose,
    /// Statement terminator `;`.
    Semicolon,
    /// Run of whitespace, newlines included.
    Whitespace,
    /// `--` comment up to, not including, the end of the line.
    LineComment,
    /// `/* ... */` comment. Runs to end of input when left open.
    BlockComment { terminated: bool },
    /// Any other single character.
    Other(char),
}

impl TokenKind {
    pub fn is_whitespace(&self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }
}
