//! Canonical multi-line layout for SQL echoed back by the query backend.
//!
//! The formatter walks the token stream once. Clause keywords start a new
//! line, `ON`/`AS` start an indented one, and every comma with something
//! after it breaks the list onto an indented line. Whitespace outside quoted
//! runs collapses to a single space, so running the formatter over its own
//! output is a no-op.
//!
//! Comments are copied verbatim. A `--` comment always ends its line, since
//! joining the next token onto it would comment that token out.
use crate::sql::{Keyword, Token, TokenKind, tokenize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Spaces used for continuation lines.
    pub indent: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Line break inserted ahead of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Break {
    Line,
    Indented,
}

/// Reformat `raw` with the default two-space indent.
///
/// Total: any string produces a string; malformed SQL simply lays out oddly.
pub fn format(raw: &str) -> String {
    format_with(raw, &FormatOptions::default())
}

pub fn format_with(raw: &str, options: &FormatOptions) -> String {
    let tokens = tokenize(raw);
    let mut layout = Layout::new(options.indent, raw.len());

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Whitespace => layout.space(),
            TokenKind::Comma => {
                layout.push(token.text);
                if next_significant(&tokens, i).is_some() {
                    layout.line_break(Break::Indented);
                }
            }
            TokenKind::Word => {
                if let Some(brk) = break_before(&tokens, i) {
                    layout.line_break(brk);
                }
                layout.push(token.text);
            }
            TokenKind::LineComment => {
                layout.push(token.text);
                layout.line_break(Break::Indented);
            }
            _ => layout.push(token.text),
        }
    }

    layout.finish()
}

/// Decide whether the word at `i` opens a clause.
fn break_before(tokens: &[Token<'_>], i: usize) -> Option<Break> {
    let keyword = tokens[i].keyword()?;
    let next = || {
        next_significant(tokens, i).and_then(|j| tokens[j].keyword().map(|kw| (j, kw)))
    };

    match keyword {
        Keyword::Select | Keyword::From | Keyword::Where | Keyword::Having => {
            Some(Break::Line)
        }
        Keyword::Join => {
            let joined = prev_significant(tokens, i)
                .and_then(|j| tokens[j].keyword())
                .is_some_and(|kw| kw.is_join_modifier() || kw == Keyword::Outer);
            (!joined).then_some(Break::Line)
        }
        kw if kw.is_join_modifier() => match next() {
            Some((_, Keyword::Join)) => Some(Break::Line),
            Some((j, Keyword::Outer)) => next_significant(tokens, j)
                .is_some_and(|k| tokens[k].is_keyword(Keyword::Join))
                .then_some(Break::Line),
            _ => None,
        },
        Keyword::Order | Keyword::Group => {
            matches!(next(), Some((_, Keyword::By))).then_some(Break::Line)
        }
        Keyword::On | Keyword::As => Some(Break::Indented),
        _ => None,
    }
}

fn next_significant(tokens: &[Token<'_>], i: usize) -> Option<usize> {
    (i + 1..tokens.len()).find(|&j| !tokens[j].kind.is_whitespace())
}

fn prev_significant(tokens: &[Token<'_>], i: usize) -> Option<usize> {
    (0..i).rev().find(|&j| !tokens[j].kind.is_whitespace())
}

/// Output buffer that defers spaces until the next token so a break never
/// leaves trailing blanks behind.
struct Layout {
    out: String,
    indent: usize,
    pending_space: bool,
    /// Start of the most recent break while nothing has followed it yet.
    open_break: Option<usize>,
}

impl Layout {
    fn new(indent: usize, capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity + capacity / 4),
            indent,
            pending_space: false,
            open_break: None,
        }
    }

    fn space(&mut self) {
        if !self.out.is_empty() && self.open_break.is_none() {
            self.pending_space = true;
        }
    }

    fn push(&mut self, text: &str) {
        if self.pending_space {
            self.out.push(' ');
            self.pending_space = false;
        }
        self.out.push_str(text);
        self.open_break = None;
    }

    fn line_break(&mut self, brk: Break) {
        self.pending_space = false;
        if self.out.is_empty() {
            return;
        }
        // Two breaks in a row collapse into the later one.
        if let Some(at) = self.open_break {
            self.out.truncate(at);
        }
        self.open_break = Some(self.out.len());
        self.out.push('\n');
        if brk == Break::Indented {
            self.out.extend(std::iter::repeat_n(' ', self.indent));
        }
    }

    fn finish(self) -> String {
        self.out.trim().to_owned()
    }
}
