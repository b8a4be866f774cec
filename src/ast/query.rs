use crate::ast::Statement;

/// A complete parsed query.
///
/// Holds exactly one statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub statement: Statement,
}
