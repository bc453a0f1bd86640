//! SQL keyword vocabulary.
//!
//! Covers the words the highlighter paints as keywords plus the join
//! modifiers the formatter needs to keep `LEFT JOIN` and friends on one line.
//! `COUNT` and the window-function names also appear in the function
//! vocabulary; they render as functions only in call position.
//! Lookups are case-insensitive through `from_word`; `as_str` and `Display`
//! give the upper-case spelling used for rendering.

vocabulary! {
    pub enum Keyword {
        Select => "SELECT",
        From => "FROM",
        Where => "WHERE",
        Join => "JOIN",
        Inner => "INNER",
        Left => "LEFT",
        Right => "RIGHT",
        Full => "FULL",
        Outer => "OUTER",
        Cross => "CROSS",
        On => "ON",
        Order => "ORDER",
        By => "BY",
        Group => "GROUP",
        Having => "HAVING",
        As => "AS",
        And => "AND",
        Or => "OR",
        Not => "NOT",
        In => "IN",
        Exists => "EXISTS",
        Like => "LIKE",
        Between => "BETWEEN",
        Is => "IS",
        Null => "NULL",
        Count => "COUNT",
        Distinct => "DISTINCT",
        Top => "TOP",
        Limit => "LIMIT",
        Offset => "OFFSET",
        Union => "UNION",
        All => "ALL",
        Case => "CASE",
        When => "WHEN",
        Then => "THEN",
        Else => "ELSE",
        End => "END",
        With => "WITH",
        Recursive => "RECURSIVE",
        Over => "OVER",
        Partition => "PARTITION",
        RowNumber => "ROW_NUMBER",
        Rank => "RANK",
        DenseRank => "DENSE_RANK",
        Asc => "ASC",
        Desc => "DESC",
    }
}

impl Keyword {
    /// Words that may precede `JOIN` (optionally through `OUTER`).
    pub const JOIN_MODIFIERS: [Self; 5] = [
        Keyword::Inner,
        Keyword::Left,
        Keyword::Right,
        Keyword::Full,
        Keyword::Cross,
    ];

    /// True for `INNER`, `LEFT`, `RIGHT`, `FULL` and `CROSS`.
    pub fn is_join_modifier(self) -> bool {
        Self::JOIN_MODIFIERS.contains(&self)
    }
}
