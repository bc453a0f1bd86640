//! Lossless, lenient SQL tokenization shared by the formatter and highlighter.
//!
//! Both presentation passes work off the same flat token stream instead of
//! rewriting text with successive pattern substitutions. That keeps every
//! classification decision local to one token and makes the stream lossless:
//! concatenating the text of every token reproduces the input exactly.
//!
//! Modules:
//! - `keyword`    : Upper‑case keyword vocabulary (clause words, predicates, window words).
//! - `function`   : Built‑in function vocabulary (aggregates, string and date helpers).
//! - `token_kind` : Classification of lexical atoms.
//! - `token`      : Token struct pairing a `TokenKind` with its source slice.
//! - `tokenizer`  : Single pass O(n) tokenizer producing a `Vec<Token>` from raw SQL.
//! - `dialect`    : Substitutable vocabulary used when classifying words for display.
//!
//! Example:
//! ```rust
//! use sqlview::sql::prelude::*;
//!
//! let tokens = tokenize("SELECT a, b FROM my_table");
//! assert!(tokens.iter().any(|t| t.is_keyword(Keyword::Select)));
//! assert_eq!(tokens.iter().map(|t| t.text).collect::<String>(), "SELECT a, b FROM my_table");
//! ```
//!
//! NOTE: This is **not** a SQL parser. Malformed input (unterminated quotes,
//! unbalanced parentheses, arbitrary garbage) always tokenizes.

/// Declares a fixed word list as an enum with case-insensitive lookup.
///
/// Each variant carries its canonical upper-case spelling, which doubles as
/// the `Display` form.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
        $vis enum $name {
            $(#[display($text)] $variant),+
        }

        impl $name {
            /// Every entry, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Classify an *upper‑cased* word. Returns `None` for unknown words.
            pub fn from_upper(word: &str) -> Option<Self> {
                match word {
                    $($text => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Case-insensitive classification of a raw word.
            pub fn from_word(word: &str) -> Option<Self> {
                Self::from_upper(&word.to_ascii_uppercase())
            }

            /// Canonical upper-case spelling.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }
    };
}

pub mod dialect;
pub mod function;
pub mod keyword;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use dialect::Dialect;
pub use function::Function;
pub use keyword::Keyword;
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::tokenize;

/// Convenience prelude re‑exporting the most commonly used items.
pub mod prelude {
    pub use super::{Dialect, Function, Keyword, Token, TokenKind, tokenize};
}
