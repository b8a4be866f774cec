use std::fmt;

use regex::Regex;
use rust_decimal::Decimal;

use crate::ast::{ColumnRef, Operator};

/// A LIKE pattern, compiled to an anchored regular expression.
///
/// `%` matches any run of characters, `_` matches exactly one; everything
/// else is literal. Compilation happens at parse time so evaluation never
/// re-parses the pattern.
#[derive(Debug, Clone)]
pub struct LikePattern {
    raw: String,
    regex: Regex,
}

impl LikePattern {
    pub(crate) fn compile(pattern: &str) -> Result<Self, regex::Error> {
        let mut expr = String::with_capacity(pattern.len() + 2);
        expr.push('^');
        for ch in pattern.chars() {
            match ch {
                '%' => expr.push_str(".*"),
                '_' => expr.push('.'),
                c => expr.push_str(&regex::escape(&c.to_string())),
            }
        }
        expr.push('$');
        Ok(LikePattern {
            raw: pattern.to_string(),
            regex: Regex::new(&expr)?,
        })
    }

    /// The pattern as written in the query.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether `text` matches the whole pattern.
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

// Two patterns are the same pattern iff they were written the same way;
// the compiled regex is derived from the raw text.
impl PartialEq for LikePattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

/// A value entry in a compiled predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A bare or qualified column reference, resolved per record at
    /// evaluation time.
    Column(ColumnRef),

    /// A single-quoted string literal, unescaped.
    Text(String),

    /// A numeric literal, kept in exact decimal form.
    Number(Decimal),

    /// TRUE or FALSE.
    Bool(bool),

    /// The NULL literal.
    Null,

    /// A compiled LIKE pattern.
    Pattern(LikePattern),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Column(col) => write!(f, "{}", col),
            Operand::Text(s) => write!(f, "'{}'", s.replace('\'', "\\'")),
            Operand::Number(n) => write!(f, "{}", n),
            Operand::Bool(true) => write!(f, "TRUE"),
            Operand::Bool(false) => write!(f, "FALSE"),
            Operand::Null => write!(f, "NULL"),
            Operand::Pattern(p) => write!(f, "'{}'", p.raw().replace('\'', "\\'")),
        }
    }
}

/// One entry of a compiled predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum StackItem {
    Operand(Operand),
    Operator(Operator),
}

impl fmt::Display for StackItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackItem::Operand(op) => write!(f, "{}", op),
            StackItem::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// A compiled WHERE predicate in postfix order.
///
/// The sequence is evaluation-ready: a single left-to-right pass with a
/// value stack applies it to a candidate record, no re-parsing and no
/// precedence left to resolve. The parser treats it as opaque.
///
/// # Example
/// ```text
/// WHERE x = 1 AND y = 2   =>   x 1 = y 2 = AND
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stack {
    items: Vec<StackItem>,
}

impl Stack {
    pub(crate) fn push(&mut self, item: StackItem) {
        self.items.push(item);
    }

    /// The entries in evaluation order.
    pub fn items(&self) -> &[StackItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}
