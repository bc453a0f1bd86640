use crate::*;
use serde::Serialize;

/// Everything the message view needs to show one query.
///
/// `markup` is safe to insert as inner markup of a monospace container.
/// `raw` is kept untouched for the copy action; the formatted or highlighted
/// forms must never be what gets copied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SqlBlock {
    pub raw: String,
    pub formatted: String,
    pub markup: String,
}

impl SqlBlock {
    /// Build with the default dialect, markup template and layout.
    pub fn new(raw: impl Into<String>) -> Self {
        Self::build(
            raw,
            &FormatOptions::default(),
            &Dialect::default(),
            &Markup::default(),
        )
    }

    pub fn build(
        raw: impl Into<String>,
        options: &FormatOptions,
        dialect: &Dialect,
        markup: &Markup,
    ) -> Self {
        let raw = raw.into();
        let formatted = format_with(&raw, options);
        let markup = highlight_with(&formatted, dialect, markup);
        Self {
            raw,
            formatted,
            markup,
        }
    }

    /// Text for the "copy query" control.
    pub fn copy_text(&self) -> &str {
        &self.raw
    }
}
