pub mod ast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod predicate;
pub mod typedef;

pub use ast::{
    ColumnRef, Field, Fields, LikePattern, Operand, Operator, Query, SelectStmt, Stack, StackItem,
    Statement, Token, TokenKind,
};
pub use lexer::Lexer;
pub use parser::{Parser, SyntaxError, parse};
pub use typedef::{
    ChanDir, Definition, File, Package, SourceContext, TypeExpr, resolve_type,
};
