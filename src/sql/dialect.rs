//! Substitutable vocabulary used to classify words and operators for display.
//!
//! The scan logic never consults a fixed word list directly; it asks a
//! `Dialect`. `Dialect::default()` carries the built-in `Keyword` and
//! `Function` vocabularies plus the standard comparison/arithmetic operators.
//! Another SQL flavour can be described by extending or pruning a dialect:
//!
//! ```rust
//! use sqlview::sql::Dialect;
//!
//! let tsql = Dialect::default()
//!     .with_keywords(["NOLOCK"])
//!     .with_functions(["ISNULL"])
//!     .without_keywords(["LIMIT", "OFFSET"]);
//! assert!(tsql.is_keyword("NOLOCK"));
//! assert!(!tsql.is_keyword("LIMIT"));
//! ```
//!
//! Operators are only classified here; the tokenizer decides which character
//! sequences form a single operator token.
use crate::sql::{function::Function, keyword::Keyword};
use std::collections::BTreeSet;

/// Operators painted by the highlighter when set off by whitespace.
pub const OPERATORS: [&str; 12] = [
    "=", "!=", "<>", "<", ">", "<=", ">=", "+", "-", "*", "/", "%",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    keywords: BTreeSet<String>,
    functions: BTreeSet<String>,
    operators: BTreeSet<String>,
}

impl Default for Dialect {
    fn default() -> Self {
        Self::empty()
            .with_keywords(Keyword::ALL.iter().map(|kw| kw.as_str()))
            .with_functions(Function::ALL.iter().map(|f| f.as_str()))
            .with_operators(OPERATORS)
    }
}

fn upper_cased<I>(words: I) -> impl Iterator<Item = String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().to_ascii_uppercase())
}

impl Dialect {
    /// A dialect that recognises nothing; every word renders plain.
    pub fn empty() -> Self {
        Self {
            keywords: BTreeSet::new(),
            functions: BTreeSet::new(),
            operators: BTreeSet::new(),
        }
    }

    pub fn with_keywords<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.keywords.extend(upper_cased(words));
        self
    }

    pub fn without_keywords<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for word in upper_cased(words) {
            self.keywords.remove(&word);
        }
        self
    }

    pub fn with_functions<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.functions.extend(upper_cased(names));
        self
    }

    pub fn without_functions<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for name in upper_cased(names) {
            self.functions.remove(&name);
        }
        self
    }

    pub fn with_operators<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.operators
            .extend(ops.into_iter().map(|op| op.as_ref().to_owned()));
        self
    }

    /// Expects an upper-cased word.
    pub fn is_keyword(&self, upper: &str) -> bool {
        self.keywords.contains(upper)
    }

    /// Expects an upper-cased word.
    pub fn is_function(&self, upper: &str) -> bool {
        self.functions.contains(upper)
    }

    pub fn is_operator(&self, op: &str) -> bool {
        self.operators.contains(op)
    }
}
