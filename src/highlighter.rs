//! Category-annotated markup for syntax-coloured SQL.
//!
//! Highlighting is a single scan over the token stream. Every token is
//! assigned exactly one `Category` and rendered on its own, so no pass ever
//! sees another pass's markup:
//!
//! 1. String and number tokens are literals and stay literals.
//! 2. A word in the dialect's function list that is immediately followed by
//!    `(` is a `Function`; otherwise a word in the keyword list is a
//!    `Keyword`. Both render upper-cased.
//! 3. An operator set off by whitespace on both sides is an `Operator`.
//! 4. Everything else is `Plain`, comments included.
//!
//! Blanks next to a painted operator are normalised to one space unless they
//! hold a line break. Text is escaped span by span, so markup injected by the
//! renderer is never escaped and underlying text never escapes its span.
use crate::sql::{Dialect, Token, TokenKind, tokenize};
use itertools::Itertools;
use std::borrow::Cow;

/// Lexical category of a highlighted span. `Display` gives the class suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Category {
    #[display("keyword")]
    Keyword,
    #[display("function")]
    Function,
    #[display("string")]
    StringLiteral,
    #[display("number")]
    NumberLiteral,
    #[display("operator")]
    Operator,
    #[display("plain")]
    Plain,
}

/// A maximal run of text assigned one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span<'a> {
    pub category: Category,
    pub text: Cow<'a, str>,
}

impl<'a> Span<'a> {
    fn borrowed(category: Category, text: &'a str) -> Self {
        Self {
            category,
            text: Cow::Borrowed(text),
        }
    }
}

/// Classify `sql` into an ordered sequence of spans.
///
/// Adjacent `Plain` spans are merged. Concatenating the span texts gives back
/// `sql` with keyword and function names upper-cased and the blanks around
/// operators tidied.
pub fn spans<'a>(sql: &'a str, dialect: &Dialect) -> Vec<Span<'a>> {
    let tokens = tokenize(sql);
    let mut classified = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| classify(&tokens, i, token, dialect))
        .collect::<Vec<_>>();

    for (i, token) in tokens.iter().enumerate() {
        if !token.kind.is_whitespace() || token.text.contains('\n') {
            continue;
        }
        let beside_operator = [i.checked_sub(1), Some(i + 1)]
            .into_iter()
            .flatten()
            .any(|j| classified.get(j).is_some_and(|s| s.category == Category::Operator));
        if beside_operator {
            classified[i].text = Cow::Borrowed(" ");
        }
    }

    classified
        .into_iter()
        .coalesce(|a, b| {
            if a.category == Category::Plain && b.category == Category::Plain {
                Ok(Span {
                    category: Category::Plain,
                    text: Cow::Owned(a.text.into_owned() + &b.text),
                })
            } else {
                Err((a, b))
            }
        })
        .collect()
}

fn classify<'a>(
    tokens: &[Token<'a>],
    i: usize,
    token: &Token<'a>,
    dialect: &Dialect,
) -> Span<'a> {
    match token.kind {
        TokenKind::Str { .. } => Span::borrowed(Category::StringLiteral, token.text),
        TokenKind::Number => Span::borrowed(Category::NumberLiteral, token.text),
        TokenKind::Word => {
            let upper = token.text.to_ascii_uppercase();
            let called = tokens
                .get(i + 1)
                .is_some_and(|next| next.kind == TokenKind::ParenOpen);
            let category = if called && dialect.is_function(&upper) {
                Category::Function
            } else if dialect.is_keyword(&upper) {
                Category::Keyword
            } else {
                return Span::borrowed(Category::Plain, token.text);
            };
            Span {
                category,
                text: Cow::Owned(upper),
            }
        }
        TokenKind::Operator => {
            let spaced = |j: Option<usize>| {
                j.and_then(|j| tokens.get(j))
                    .is_some_and(|t| t.kind.is_whitespace())
            };
            let spaced = spaced(i.checked_sub(1)) && spaced(Some(i + 1));
            if spaced && dialect.is_operator(token.text) {
                Span::borrowed(Category::Operator, token.text)
            } else {
                Span::borrowed(Category::Plain, token.text)
            }
        }
        _ => Span::borrowed(Category::Plain, token.text),
    }
}

/// Escape `& < > " '` for embedding as element content or attribute values.
pub fn escape(text: &str) -> String {
    htmlescape::encode_minimal(text)
}

/// Render template for spans: `<span class="{prefix}{category}">…</span>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    pub class_prefix: String,
}

impl Default for Markup {
    fn default() -> Self {
        Self {
            class_prefix: "sql-".to_owned(),
        }
    }
}

impl Markup {
    pub fn new(class_prefix: impl Into<String>) -> Self {
        Self {
            class_prefix: class_prefix.into(),
        }
    }

    pub fn render_span(&self, span: &Span<'_>, out: &mut String) {
        let text = escape(&span.text);
        if span.category == Category::Plain {
            out.push_str(&text);
            return;
        }
        out.push_str("<span class=\"");
        out.push_str(&escape(&self.class_prefix));
        out.push_str(&span.category.to_string());
        out.push_str("\">");
        out.push_str(&text);
        out.push_str("</span>");
    }

    pub fn render(&self, spans: &[Span<'_>]) -> String {
        let mut out = String::new();
        for span in spans {
            self.render_span(span, &mut out);
        }
        out
    }
}

/// Highlight with the default dialect and `sql-` class prefix.
pub fn highlight(sql: &str) -> String {
    highlight_with(sql, &Dialect::default(), &Markup::default())
}

pub fn highlight_with(sql: &str, dialect: &Dialect, markup: &Markup) -> String {
    markup.render(&spans(sql, dialect))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn categorized(sql: &str) -> Vec<(Category, String)> {
        spans(sql, &Dialect::default())
            .into_iter()
            .filter(|s| s.category != Category::Plain)
            .map(|s| (s.category, s.text.into_owned()))
            .collect()
    }

    /// Drop `<...>` tags; escaped text never contains a raw `<`.
    fn strip_tags(markup: &str) -> String {
        let mut out = String::new();
        let mut in_tag = false;
        for ch in markup.chars() {
            match ch {
                '<' => in_tag = true,
                '>' => in_tag = false,
                _ if !in_tag => out.push(ch),
                _ => {}
            }
        }
        out
    }

    #[test]
    fn empty_input() {
        assert_eq!(highlight(""), "");
        assert!(spans("", &Dialect::default()).is_empty());
    }

    #[test]
    fn case_normalization() {
        assert_eq!(
            highlight("select * from t"),
            "<span class=\"sql-keyword\">SELECT</span> <span class=\"sql-operator\">*</span> \
             <span class=\"sql-keyword\">FROM</span> t"
        );
    }

    #[test]
    fn function_vs_keyword_disambiguation() {
        assert_eq!(
            categorized("SELECT COUNT(*) FROM t"),
            vec![
                (Category::Keyword, "SELECT".into()),
                (Category::Function, "COUNT".into()),
                (Category::Keyword, "FROM".into()),
            ]
        );
        assert_eq!(
            categorized("select rank() over (order by x), rank from t"),
            vec![
                (Category::Keyword, "SELECT".into()),
                (Category::Function, "RANK".into()),
                (Category::Keyword, "OVER".into()),
                (Category::Keyword, "ORDER".into()),
                (Category::Keyword, "BY".into()),
                (Category::Keyword, "RANK".into()),
                (Category::Keyword, "FROM".into()),
            ]
        );
    }

    #[rstest]
    #[case(
        "SELECT x FROM count",
        vec![
            (Category::Keyword, "SELECT"),
            (Category::Keyword, "FROM"),
            (Category::Keyword, "COUNT"),
        ]
    )]
    #[case("SELECT count (x)", vec![(Category::Keyword, "SELECT"), (Category::Keyword, "COUNT")])]
    #[case(
        "SELECT t.sum FROM t",
        vec![(Category::Keyword, "SELECT"), (Category::Keyword, "FROM")]
    )]
    fn uncalled_function_names_fall_back_to_keyword_or_plain(
        #[case] sql: &str,
        #[case] expected: Vec<(Category, &str)>,
    ) {
        let expected = expected
            .into_iter()
            .map(|(c, t)| (c, t.to_owned()))
            .collect::<Vec<_>>();
        assert_eq!(categorized(sql), expected);
    }

    #[test]
    fn bare_count_renders_as_keyword() {
        assert_eq!(
            highlight("SELECT x FROM count"),
            "<span class=\"sql-keyword\">SELECT</span> x \
             <span class=\"sql-keyword\">FROM</span> <span class=\"sql-keyword\">COUNT</span>"
        );
    }

    #[test]
    fn string_literal_safety() {
        let out = highlight("WHERE name = '<script>'");
        let literal = format!("<span class=\"sql-string\">{}</span>", escape("'<script>'"));
        assert_eq!(
            out,
            format!(
                "<span class=\"sql-keyword\">WHERE</span> name \
                 <span class=\"sql-operator\">=</span> {literal}"
            )
        );
        assert!(out.contains("&lt;script&gt;"));
        assert!(!out.contains("<script>"));
    }

    #[test]
    fn doubled_quotes_stay_in_one_literal() {
        assert_eq!(
            categorized("WHERE name = 'O''Brien'"),
            vec![
                (Category::Keyword, "WHERE".into()),
                (Category::Operator, "=".into()),
                (Category::StringLiteral, "'O''Brien'".into()),
            ]
        );
    }

    #[test]
    fn literals_are_never_reclassified() {
        assert_eq!(
            categorized("SELECT 'from 42 count(' , 7"),
            vec![
                (Category::Keyword, "SELECT".into()),
                (Category::StringLiteral, "'from 42 count('".into()),
                (Category::NumberLiteral, "7".into()),
            ]
        );
    }

    #[rstest]
    #[case("LIMIT 10", vec![(Category::Keyword, "LIMIT"), (Category::NumberLiteral, "10")])]
    #[case("x = 3.25", vec![(Category::Operator, "="), (Category::NumberLiteral, "3.25")])]
    #[case("t1", vec![])]
    #[case("col_2", vec![])]
    fn numbers_at_word_boundaries(#[case] sql: &str, #[case] expected: Vec<(Category, &str)>) {
        let expected = expected
            .into_iter()
            .map(|(c, t)| (c, t.to_owned()))
            .collect::<Vec<_>>();
        assert_eq!(categorized(sql), expected);
    }

    #[rstest]
    #[case("a = b", true)]
    #[case("a=b", false)]
    #[case("a <> b", true)]
    #[case("a >= b", true)]
    #[case("a\n!=\tb", true)]
    #[case("COUNT(*)", false)]
    #[case("= b", false)]
    fn operators_need_surrounding_whitespace(#[case] sql: &str, #[case] painted: bool) {
        let found = categorized(sql)
            .iter()
            .any(|(c, _)| *c == Category::Operator);
        assert_eq!(found, painted);
    }

    #[rstest]
    #[case("a  =\tb", "a <span class=\"sql-operator\">=</span> b")]
    #[case("a\n!=\tb", "a\n<span class=\"sql-operator\">!=</span> b")]
    #[case("a >=\n  b", "a <span class=\"sql-operator\">&gt;=</span>\n  b")]
    #[case("a=\tb", "a=\tb")]
    fn blanks_around_operators_become_single_spaces(#[case] sql: &str, #[case] expected: &str) {
        assert_eq!(highlight(sql), expected);
    }

    #[test]
    fn operators_are_escaped_inside_spans() {
        assert_eq!(
            highlight("a < b"),
            "a <span class=\"sql-operator\">&lt;</span> b"
        );
    }

    #[rstest]
    #[case("select a, b from t where x = 'y' and z <> 3.5")]
    #[case("SELECT \"Weird <col>\" FROM t WHERE note = 'it''s & more' OR n >= 10")]
    #[case("garbage ' unterminated & < >")]
    #[case("SELECT COUNT(*), AVG(price) FROM items GROUP BY cat")]
    fn content_is_preserved(#[case] sql: &str) {
        let squash = |s: &str| {
            s.chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_uppercase()
        };
        assert_eq!(squash(&strip_tags(&highlight(sql))), squash(&escape(sql)));
    }

    #[rstest]
    #[case("x &amp; y", "x &amp;amp; y")]
    #[case("a &lt; b", "a &amp;lt; b")]
    fn entities_in_input_are_escaped_once(#[case] sql: &str, #[case] expected: &str) {
        let out = highlight(sql);
        assert_eq!(out, expected);
        assert!(!out.contains("&amp;amp;amp;"));
    }

    #[test]
    fn own_markup_fed_back_is_escaped_not_rewrapped() {
        let once = highlight("SELECT a");
        assert_eq!(once, "<span class=\"sql-keyword\">SELECT</span> a");

        let open = "<span class=\"sql-keyword\">";
        let expected = format!(
            "{}{open}SELECT</span>{} a",
            escape(open),
            escape("</span>")
        );
        assert_eq!(highlight(&once), expected);
    }

    #[test]
    fn plain_runs_are_merged() {
        let spans = spans("a.b, c", &Dialect::default());
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].category, Category::Plain);
        assert_eq!(spans[0].text, "a.b, c");
    }

    #[test]
    fn keywords_inside_strings_are_not_painted() {
        let out = highlight("SELECT 'FROM'");
        assert_eq!(out.matches("sql-keyword").count(), 1);
    }

    #[rstest]
    #[case("SELECT a -- FROM t = 1", "-- FROM t = 1")]
    #[case("SELECT /* count(x) */ a", "/* count(x) */")]
    fn comments_stay_plain(#[case] sql: &str, #[case] comment: &str) {
        assert_eq!(categorized(sql), vec![(Category::Keyword, "SELECT".to_owned())]);
        assert!(highlight(sql).contains(comment));
    }

    #[test]
    fn substituted_dialect_and_markup() {
        let dialect = Dialect::empty().with_keywords(["match"]).with_functions(["id"]);
        let out = highlight_with("match (n) return id(n)", &dialect, &Markup::new("hl-"));
        assert_eq!(
            out,
            "<span class=\"hl-keyword\">MATCH</span> (n) return \
             <span class=\"hl-function\">ID</span>(n)"
        );
    }

    #[test]
    fn escape_covers_markup_characters() {
        let out = escape(r#"<a href="x">'&'</a>"#);
        for ch in ['<', '>', '"', '\''] {
            assert!(!out.contains(ch), "{ch} left unescaped in {out}");
        }
        assert!(out.starts_with("&lt;a href=&quot;x&quot;&gt;"));
        assert_eq!(out.matches("&amp;").count(), 1);
        assert_eq!(escape("plain text"), "plain text");
    }
}
