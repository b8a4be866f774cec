use std::fmt;

/// Predicate operators.
///
/// These are the operator entries a compiled WHERE clause can contain.
/// Comparison operators pop two operands; `IsNull` and `Not` pop one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operator {
    // Comparison
    /// Equal (`=`)
    Eq,
    /// Not equal (`<>` or `!=`)
    NotEq,
    /// Less than (`<`)
    Lt,
    /// Less than or equal (`<=`)
    LtEq,
    /// Greater than (`>`)
    Gt,
    /// Greater than or equal (`>=`)
    GtEq,

    /// Pattern match (`LIKE`), right operand is a compiled pattern
    Like,

    /// Null test (`IS NULL`); `IS NOT NULL` is this followed by `Not`
    IsNull,

    // Logical
    /// Logical negation (`NOT`)
    Not,
    /// Logical AND (`AND`), binds tighter than OR
    And,
    /// Logical OR (`OR`)
    Or,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Eq => "=",
            Operator::NotEq => "<>",
            Operator::Lt => "<",
            Operator::LtEq => "<=",
            Operator::Gt => ">",
            Operator::GtEq => ">=",
            Operator::Like => "LIKE",
            Operator::IsNull => "IS NULL",
            Operator::Not => "NOT",
            Operator::And => "AND",
            Operator::Or => "OR",
        };
        write!(f, "{}", symbol)
    }
}
