//! Built-in function names recognised in call position.

vocabulary! {
    pub enum Function {
        Count => "COUNT",
        Sum => "SUM",
        Avg => "AVG",
        Min => "MIN",
        Max => "MAX",
        Round => "ROUND",
        Upper => "UPPER",
        Lower => "LOWER",
        Substring => "SUBSTRING",
        Concat => "CONCAT",
        Coalesce => "COALESCE",
        Cast => "CAST",
        Convert => "CONVERT",
        DatePart => "DATEPART",
        DateDiff => "DATEDIFF",
        GetDate => "GETDATE",
        Now => "NOW",
        Extract => "EXTRACT",
        DateTrunc => "DATE_TRUNC",
        RowNumber => "ROW_NUMBER",
        Rank => "RANK",
        DenseRank => "DENSE_RANK",
    }
}
