//! Validate queries and dump their compiled form

use super::CliError;
use crate::{output, parser};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The query to validate
    pub query: String,
    /// Dump the parsed statement instead of just validating
    pub dump_ast: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// The parsed statement as JSON
    Ast(serde_json::Value),
}

/// Parse a query end to end, requiring the whole input to be consumed.
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let query = parser::parse(&options.query)?;

    if options.dump_ast {
        Ok(CheckResult::Ast(output::query_to_json(&query)))
    } else {
        Ok(CheckResult::SyntaxValid)
    }
}

/// Dump the raw token stream for a query string.
///
/// Lexical faults show up as error entries; this never fails.
pub fn execute_tokens(query: &str) -> serde_json::Value {
    output::tokens_to_json(query)
}
