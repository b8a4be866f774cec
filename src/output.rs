//! JSON dumps of compiled queries and token streams.
//!
//! The AST types carry no serde derives; this module converts them by
//! hand into `serde_json::Value` trees for the CLI. Output is
//! deterministic: fields appear in projection order and stack entries in
//! evaluation order.

use serde_json::{Value, json};

use crate::{
    ast::{Query, SelectStmt, Statement, TokenKind},
    lexer::Lexer,
};

/// Renders a parsed query as a JSON tree.
///
/// ```text
/// SELECT a, b.c FROM t WHERE x = 1
/// ```
/// becomes
/// ```text
/// {"statement":"select","table":"t","fields":["a","b.c"],"where":["x","1","="]}
/// ```
pub fn query_to_json(query: &Query) -> Value {
    match &query.statement {
        Statement::Select(stmt) => select_to_json(stmt),
    }
}

fn select_to_json(stmt: &SelectStmt) -> Value {
    let fields: Vec<Value> = stmt
        .fields
        .iter()
        .map(|field| Value::String(field.to_string()))
        .collect();

    let where_clause = match &stmt.where_clause {
        Some(stack) => Value::Array(
            stack
                .items()
                .iter()
                .map(|item| Value::String(item.to_string()))
                .collect(),
        ),
        None => Value::Null,
    };

    json!({
        "statement": "select",
        "table": stmt.table,
        "fields": fields,
        "where": where_clause,
    })
}

/// Scans `input` to the end and renders every token, whitespace
/// included. Error tokens carry their message; scanning continues past
/// them.
pub fn tokens_to_json(input: &str) -> Value {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.scan();
        if token.kind == TokenKind::Eof {
            break;
        }
        let mut entry = json!({
            "kind": kind_name(&token.kind),
            "raw": token.raw,
            "pos": token.pos,
        });
        if let TokenKind::Error(msg) = &token.kind {
            entry["message"] = Value::String(msg.clone());
        }
        tokens.push(entry);
    }

    Value::Array(tokens)
}

fn kind_name(kind: &TokenKind) -> &'static str {
    match kind {
        TokenKind::Eof => "eof",
        TokenKind::Error(_) => "error",
        TokenKind::WhiteSpace => "whitespace",
        TokenKind::WildCard => "wildcard",
        TokenKind::Alpha => "identifier",
        TokenKind::Literal1 => "string",
        TokenKind::Literal2 => "quoted_name",
        TokenKind::Number => "number",
        TokenKind::Dot => "dot",
        TokenKind::Comma => "comma",
        TokenKind::LParen => "lparen",
        TokenKind::RParen => "rparen",
        TokenKind::Select => "select",
        TokenKind::From => "from",
        TokenKind::Where => "where",
        TokenKind::And => "and",
        TokenKind::Or => "or",
        TokenKind::Not => "not",
        TokenKind::Like => "like",
        TokenKind::Is => "is",
        TokenKind::Null => "null",
        TokenKind::True => "true",
        TokenKind::False => "false",
        TokenKind::Equal => "eq",
        TokenKind::NotEqual => "neq",
        TokenKind::LessThan => "lt",
        TokenKind::LessEq => "lte",
        TokenKind::GreaterThan => "gt",
        TokenKind::GreaterEq => "gte",
    }
}
