use crate::sql::{token::Token, token_kind::TokenKind};
use crate::trace;

/// Lenient, lossless SQL tokenizer producing a flat stream of `Token`s.
///
/// Behavior:
/// - Whitespace runs become a single `Whitespace` token.
/// - Runs of letters, digits and `_` become a `Word`, unless the run is purely
///   ASCII digits, in which case it is a `Number` that may absorb a `.digits`
///   fraction. `t1` and `1abc` are words; `1.5` is one number.
/// - `'...'` is a string literal with `''` as an escaped quote; `"..."` is a
///   quoted identifier. Either runs to end of input when left open.
/// - `-- ...` runs to the end of its line and `/* ... */` to its closer (or
///   end of input); both are comments whose text nothing else inspects.
/// - `!=`, `<>`, `<=` and `>=` are recognised before the single-character
///   operators `= < > + - * / %`.
/// - Everything else is punctuation or `Other(char)`.
///
/// Guarantees:
/// - Never panics and never fails; any UTF-8 input yields tokens.
/// - Concatenating every token's `text` reproduces `sql` exactly.
///
/// Complexity:
/// - O(n) time, O(t) space where `t` is number of tokens.
pub fn tokenize(sql: &str) -> Vec<Token<'_>> {
    let mut out = Vec::new();
    let mut scan = Scanner { sql, pos: 0 };

    while let Some(c) = scan.peek() {
        let start = scan.pos;

        let kind = if c.is_whitespace() {
            scan.eat_while(char::is_whitespace);
            TokenKind::Whitespace
        } else if is_word_char(c) {
            scan.eat_while(is_word_char);
            if is_digits(&sql[start..scan.pos]) {
                scan.fraction();
                TokenKind::Number
            } else {
                TokenKind::Word
            }
        } else if scan.rest().starts_with("--") {
            scan.eat_while(|c| c != '\n');
            TokenKind::LineComment
        } else if scan.rest().starts_with("/*") {
            TokenKind::BlockComment {
                terminated: scan.block_comment(),
            }
        } else if c == '\'' {
            TokenKind::Str {
                terminated: scan.quoted(c),
            }
        } else if c == '"' {
            TokenKind::QuotedIdent {
                terminated: scan.quoted(c),
            }
        } else {
            scan.bump();
            match c {
                ',' => TokenKind::Comma,
                '.' => TokenKind::Dot,
                '(' => TokenKind::ParenOpen,
                ')' => TokenKind::ParenClose,
                ';' => TokenKind::Semicolon,
                '!' if scan.eat('=') => TokenKind::Operator,
                '<' => {
                    if !scan.eat('>') {
                        scan.eat('=');
                    }
                    TokenKind::Operator
                }
                '>' => {
                    scan.eat('=');
                    TokenKind::Operator
                }
                '=' | '+' | '-' | '*' | '/' | '%' => TokenKind::Operator,
                other => TokenKind::Other(other),
            }
        };

        out.push(Token::new(kind, &sql[start..scan.pos], start));
    }

    trace!("tokenized {} bytes into {} tokens", sql.len(), out.len());
    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Char cursor over the input; `pos` is always on a char boundary.
struct Scanner<'a> {
    sql: &'a str,
    pos: usize,
}

impl Scanner<'_> {
    fn rest(&self) -> &str {
        &self.sql[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.bump();
        }
    }

    /// Absorb `.digits` after an integer when the digits end the word.
    fn fraction(&mut self) {
        let Some(after) = self.rest().strip_prefix('.') else {
            return;
        };
        let run = after.find(|c: char| !is_word_char(c)).unwrap_or(after.len());
        if is_digits(&after[..run]) {
            self.pos += 1 + run;
        }
    }

    /// Consume `/* ... */` starting at the opener. Returns false if input
    /// ended before `*/`.
    fn block_comment(&mut self) -> bool {
        self.pos += 2;
        match self.rest().find("*/") {
            Some(close) => {
                self.pos += close + 2;
                true
            }
            None => {
                self.pos = self.sql.len();
                false
            }
        }
    }

    /// Consume a quoted run starting at the opening quote. A doubled quote is
    /// an escape. Returns false if input ended before the closing quote.
    fn quoted(&mut self, quote: char) -> bool {
        self.bump();
        while let Some(c) = self.bump() {
            if c == quote && !self.eat(quote) {
                return true;
            }
        }
        false
    }
}
