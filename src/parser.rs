use std::fmt;

use crate::{
    ast::{ColumnRef, Field, Fields, Query, SelectStmt, Statement, Token, TokenKind},
    lexer::Lexer,
    predicate,
};

/// A syntax error, terminal for the parse that produced it.
///
/// Covers both grammatical violations and lexical faults: an `Error`-kind
/// token scanned anywhere in the grammar surfaces here with the lexer's
/// message. The partially built statement must be discarded by the caller.
#[derive(Debug, Clone)]
pub struct SyntaxError {
    /// The token that violated the grammar.
    pub token: Token,
    /// What the parser was looking for instead.
    pub expected: String,
}

impl SyntaxError {
    pub(crate) fn new(token: Token, expected: impl Into<String>) -> Self {
        SyntaxError {
            token,
            expected: expected.into(),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token.kind {
            TokenKind::Eof => {
                write!(f, "unexpected end of input, expected {}", self.expected)
            }
            TokenKind::Error(msg) => write!(
                f,
                "{} `{}` at offset {}",
                msg, self.token.raw, self.token.pos
            ),
            _ => write!(
                f,
                "unexpected token `{}` at offset {}, expected {}",
                self.token.raw, self.token.pos, self.expected
            ),
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Parses `input` as one complete query.
///
/// Unlike [`Parser::parse_query`], this also requires that nothing but
/// whitespace follows the statement.
pub fn parse(input: &str) -> Result<Query, SyntaxError> {
    let mut parser = Parser::new(Lexer::new(input));
    let query = parser.parse_query()?;
    parser.finish()?;
    Ok(query)
}

/// Statement parser over a token stream.
///
/// One parser instance serves one query; the single-token pushback state
/// lives in the lexer and must not be shared across parses.
pub struct Parser {
    lexer: Lexer,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Parser { lexer }
    }

    /// Parses one statement.
    ///
    /// The first significant token selects the statement kind; SELECT is
    /// the only kind today. Tokens after the statement are left
    /// unconsumed — callers that need the whole input consumed follow up
    /// with [`finish`](Parser::finish).
    pub fn parse_query(&mut self) -> Result<Query, SyntaxError> {
        let start = self.lexer.scan_ignore_whitespace();
        match start.kind {
            TokenKind::Select => {
                let stmt = self.parse_select()?;
                Ok(Query {
                    statement: Statement::Select(stmt),
                })
            }
            _ => Err(SyntaxError::new(start, "a SELECT statement")),
        }
    }

    /// Requires the remaining input to be nothing but whitespace.
    pub fn finish(&mut self) -> Result<(), SyntaxError> {
        let token = self.lexer.scan_ignore_whitespace();
        if token.kind != TokenKind::Eof {
            return Err(SyntaxError::new(token, "end of input"));
        }
        Ok(())
    }

    fn parse_select(&mut self) -> Result<SelectStmt, SyntaxError> {
        let fields = self.parse_fields()?;

        let token = self.lexer.scan_ignore_whitespace();
        if token.kind != TokenKind::From {
            return Err(SyntaxError::new(token, "FROM or a comma"));
        }

        let token = self.lexer.scan_ignore_whitespace();
        let table = match token.kind {
            TokenKind::Alpha | TokenKind::Literal2 => token.text(),
            _ => return Err(SyntaxError::new(token, "a table name")),
        };

        let ahead = self.lexer.scan_ignore_whitespace();
        let where_clause = if ahead.kind == TokenKind::Where {
            self.lexer.reject();
            Some(predicate::compile(&mut self.lexer)?)
        } else {
            self.lexer.reject();
            None
        };

        Ok(SelectStmt {
            table,
            fields,
            where_clause,
        })
    }

    fn parse_fields(&mut self) -> Result<Fields, SyntaxError> {
        let mut fields = Fields::new();
        loop {
            fields.push(self.parse_field()?);

            let comma = self.lexer.scan_ignore_whitespace();
            if comma.kind != TokenKind::Comma {
                self.lexer.reject();
                break;
            }
        }
        Ok(fields)
    }

    fn parse_field(&mut self) -> Result<Field, SyntaxError> {
        let token = self.lexer.scan_ignore_whitespace();
        match token.kind {
            TokenKind::WildCard => Ok(Field::WildCard),
            TokenKind::Alpha | TokenKind::Literal2 => {
                Ok(Field::Column(scan_column_ref(&mut self.lexer, token)?))
            }
            _ => Err(SyntaxError::new(token, "a field name or `*`")),
        }
    }
}

/// Completes a column reference whose first name token was already
/// scanned.
///
/// Looks ahead exactly one token with no whitespace skipping: whitespace
/// between the name and a dot breaks the qualified form on purpose. A
/// non-dot lookahead is pushed back and the reference stays bare.
pub(crate) fn scan_column_ref(lexer: &mut Lexer, first: Token) -> Result<ColumnRef, SyntaxError> {
    let ahead = lexer.scan();
    if ahead.kind != TokenKind::Dot {
        lexer.reject();
        return Ok(ColumnRef {
            table: None,
            column: first.text(),
        });
    }

    let column = lexer.scan();
    match column.kind {
        TokenKind::Alpha | TokenKind::Literal2 => Ok(ColumnRef {
            table: Some(first.text()),
            column: column.text(),
        }),
        _ => Err(SyntaxError::new(column, "a column name after `.`")),
    }
}
