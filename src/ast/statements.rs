use std::fmt;

use crate::ast::Stack;

/// A possibly table-qualified column reference.
///
/// # Examples
/// ```text
/// name
/// funcs.receiver
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRef {
    /// The part before the dot, if any.
    pub table: Option<String>,
    /// The column name.
    pub column: String,
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table {
            Some(table) => write!(f, "{}.{}", table, self.column),
            None => write!(f, "{}", self.column),
        }
    }
}

/// One projection entry in a SELECT list.
///
/// A field is either the `*` wildcard or a column reference; the two are
/// mutually exclusive. A qualified wildcard (`t.*`) is not part of the
/// grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// The `*` wildcard, selecting every column.
    WildCard,

    /// A bare or table-qualified column.
    ///
    /// # Examples
    /// ```text
    /// name
    /// f.name
    /// "quoted column"
    /// ```
    Column(ColumnRef),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::WildCard => write!(f, "*"),
            Field::Column(col) => write!(f, "{}", col),
        }
    }
}

/// The ordered projection list. Order is preserved end to end.
pub type Fields = Vec<Field>;

/// A parsed SELECT query.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStmt {
    /// The table to select from.
    pub table: String,

    /// Projection fields, in input order. Never empty on success.
    pub fields: Fields,

    /// Compiled WHERE predicate, if the query has one.
    pub where_clause: Option<Stack>,
}

/// A single query statement.
///
/// SELECT is the only statement the language has today; the enum leaves
/// room for INSERT/UPDATE/DELETE without breaking consumers of `Query`.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A SELECT query.
    Select(SelectStmt),
}
