//! WHERE-clause compiler.
//!
//! Compiles the boolean expression after WHERE into a postfix
//! [`Stack`](crate::ast::Stack) by recursive descent, emitting entries as
//! it goes: each precedence level compiles its operands first and then
//! appends the operator, so the output needs no further precedence
//! resolution.
//!
//! Grammar, low precedence to high:
//!
//! ```text
//! expr       := and_expr (OR and_expr)*
//! and_expr   := not_expr (AND not_expr)*
//! not_expr   := NOT not_expr | comparison
//! comparison := operand ( ('=' | '<>' | '!=' | '<' | '<=' | '>' | '>=') operand
//!                       | LIKE pattern
//!                       | IS [NOT] NULL )?
//! operand    := '(' expr ')' | column | literal
//! ```
//!
//! A lone operand with no trailing operator is a valid boolean operand
//! (`WHERE exported`). `IS NOT NULL` compiles as `IsNull` followed by
//! `Not`.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::{
    ast::{LikePattern, Operand, Operator, Stack, StackItem, TokenKind},
    lexer::Lexer,
    parser::{SyntaxError, scan_column_ref},
};

/// Compiles a WHERE clause, starting at the WHERE keyword itself.
///
/// Consumes tokens up to the end of the expression; whatever follows is
/// left in the stream for the caller.
pub fn compile(lexer: &mut Lexer) -> Result<Stack, SyntaxError> {
    let keyword = lexer.scan_ignore_whitespace();
    if keyword.kind != TokenKind::Where {
        return Err(SyntaxError::new(keyword, "the WHERE keyword"));
    }

    let mut stack = Stack::default();
    compile_or(lexer, &mut stack)?;
    Ok(stack)
}

fn compile_or(lexer: &mut Lexer, stack: &mut Stack) -> Result<(), SyntaxError> {
    compile_and(lexer, stack)?;
    loop {
        let token = lexer.scan_ignore_whitespace();
        if token.kind != TokenKind::Or {
            lexer.reject();
            return Ok(());
        }
        compile_and(lexer, stack)?;
        stack.push(StackItem::Operator(Operator::Or));
    }
}

fn compile_and(lexer: &mut Lexer, stack: &mut Stack) -> Result<(), SyntaxError> {
    compile_not(lexer, stack)?;
    loop {
        let token = lexer.scan_ignore_whitespace();
        if token.kind != TokenKind::And {
            lexer.reject();
            return Ok(());
        }
        compile_not(lexer, stack)?;
        stack.push(StackItem::Operator(Operator::And));
    }
}

fn compile_not(lexer: &mut Lexer, stack: &mut Stack) -> Result<(), SyntaxError> {
    let token = lexer.scan_ignore_whitespace();
    if token.kind == TokenKind::Not {
        compile_not(lexer, stack)?;
        stack.push(StackItem::Operator(Operator::Not));
        return Ok(());
    }
    lexer.reject();
    compile_comparison(lexer, stack)
}

fn compile_comparison(lexer: &mut Lexer, stack: &mut Stack) -> Result<(), SyntaxError> {
    compile_operand(lexer, stack)?;

    let token = lexer.scan_ignore_whitespace();
    let op = match token.kind {
        TokenKind::Equal => Operator::Eq,
        TokenKind::NotEqual => Operator::NotEq,
        TokenKind::LessThan => Operator::Lt,
        TokenKind::LessEq => Operator::LtEq,
        TokenKind::GreaterThan => Operator::Gt,
        TokenKind::GreaterEq => Operator::GtEq,
        TokenKind::Like => {
            let pattern = lexer.scan_ignore_whitespace();
            if pattern.kind != TokenKind::Literal1 {
                return Err(SyntaxError::new(pattern, "a quoted pattern after LIKE"));
            }
            let compiled = LikePattern::compile(&pattern.text())
                .map_err(|_| SyntaxError::new(pattern, "a valid LIKE pattern"))?;
            stack.push(StackItem::Operand(Operand::Pattern(compiled)));
            stack.push(StackItem::Operator(Operator::Like));
            return Ok(());
        }
        TokenKind::Is => return compile_null_test(lexer, stack),
        _ => {
            // A bare operand is its own boolean value.
            lexer.reject();
            return Ok(());
        }
    };

    compile_operand(lexer, stack)?;
    stack.push(StackItem::Operator(op));
    Ok(())
}

fn compile_null_test(lexer: &mut Lexer, stack: &mut Stack) -> Result<(), SyntaxError> {
    let token = lexer.scan_ignore_whitespace();
    match token.kind {
        TokenKind::Null => {
            stack.push(StackItem::Operator(Operator::IsNull));
            Ok(())
        }
        TokenKind::Not => {
            let null = lexer.scan_ignore_whitespace();
            if null.kind != TokenKind::Null {
                return Err(SyntaxError::new(null, "NULL after IS NOT"));
            }
            stack.push(StackItem::Operator(Operator::IsNull));
            stack.push(StackItem::Operator(Operator::Not));
            Ok(())
        }
        _ => Err(SyntaxError::new(token, "NULL or NOT NULL after IS")),
    }
}

fn compile_operand(lexer: &mut Lexer, stack: &mut Stack) -> Result<(), SyntaxError> {
    let token = lexer.scan_ignore_whitespace();
    match token.kind {
        TokenKind::LParen => {
            compile_or(lexer, stack)?;
            let close = lexer.scan_ignore_whitespace();
            if close.kind != TokenKind::RParen {
                return Err(SyntaxError::new(close, "a closing parenthesis"));
            }
            Ok(())
        }
        TokenKind::Alpha | TokenKind::Literal2 => {
            let column = scan_column_ref(lexer, token)?;
            stack.push(StackItem::Operand(Operand::Column(column)));
            Ok(())
        }
        TokenKind::Literal1 => {
            stack.push(StackItem::Operand(Operand::Text(token.text())));
            Ok(())
        }
        TokenKind::Number => {
            let number = Decimal::from_str(&token.raw)
                .map_err(|_| SyntaxError::new(token.clone(), "a numeric literal"))?;
            stack.push(StackItem::Operand(Operand::Number(number)));
            Ok(())
        }
        TokenKind::True => {
            stack.push(StackItem::Operand(Operand::Bool(true)));
            Ok(())
        }
        TokenKind::False => {
            stack.push(StackItem::Operand(Operand::Bool(false)));
            Ok(())
        }
        TokenKind::Null => {
            stack.push(StackItem::Operand(Operand::Null));
            Ok(())
        }
        _ => Err(SyntaxError::new(token, "an operand")),
    }
}
