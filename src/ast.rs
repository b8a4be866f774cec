//! # Query Abstract Syntax Tree
//!
//! This module defines the structured form a query string is compiled
//! into, from raw lexical tokens up to the `Query` root handed to an
//! executor.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[statements]** - Statement variants, SELECT, projection fields
//! - **[operators]** - Predicate operators (comparison, LIKE, logical)
//! - **[predicate]** - The compiled WHERE form (postfix stack)
//! - **[query]** - The query root
//!
//! ## The Query Language
//!
//! ```text
//! SELECT fieldlist FROM table [WHERE expr]
//! fieldlist := field (',' field)*
//! field     := '*' | name | name '.' name
//! name      := identifier | "double-quoted string"
//! table     := identifier | "double-quoted string"
//! ```
//!
//! Keywords are case-insensitive; identifiers keep their case. Single
//! quotes delimit string values, double quotes delimit names that are not
//! plain identifiers (`SELECT a FROM "my table"`).
//!
//! ## The WHERE Clause
//!
//! The predicate grammar supports comparisons (`=`, `<>`, `!=`, `<`,
//! `<=`, `>`, `>=`), `LIKE` with `%`/`_` patterns, `IS [NOT] NULL`, and
//! `NOT`/`AND`/`OR` with the usual precedence, plus parenthesized
//! grouping. A WHERE clause compiles to a postfix [`Stack`] so a later
//! single-pass evaluator can apply it without re-parsing.
//!
//! ### Examples
//!
//! ```text
//! SELECT * FROM users
//! SELECT name, f.receiver FROM funcs WHERE exported = TRUE
//! SELECT a, b.c FROM "my table" WHERE x = 1 AND y = 2
//! SELECT name FROM types WHERE doc LIKE '%deprecated%' OR doc IS NULL
//! ```
pub mod operators;
pub mod predicate;
pub mod query;
pub mod statements;
pub mod tokens;

pub use operators::Operator;
pub use predicate::{LikePattern, Operand, Stack, StackItem};
pub use query::Query;
pub use statements::{ColumnRef, Field, Fields, SelectStmt, Statement};
pub use tokens::{Token, TokenKind};
