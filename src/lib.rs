//! Presentation pipeline for SQL returned by a natural-language query backend.
//!
//! Raw SQL goes through the formatter (canonical multi-line layout) and then
//! the highlighter (category-annotated markup), both pure and total. The
//! `render` types package the result for a chat message view while keeping
//! the raw query around for copying.
//!
//! ```rust
//! let formatted = sqlview::format("select a,b from t where a = 1");
//! assert_eq!(formatted, "select a,\n  b\nfrom t\nwhere a = 1");
//!
//! let markup = sqlview::highlight("select count(*) from t");
//! assert!(markup.contains(r#"<span class="sql-function">COUNT</span>"#));
//! ```
pub mod sql;
reexport!(error);
reexport!(config);
reexport!(formatter);
reexport!(highlighter);
reexport!(render);
reexport!(testing, test);
pub use sql::{Dialect, Function, Keyword, Token, TokenKind, tokenize};
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
