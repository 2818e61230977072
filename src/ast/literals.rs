use crate::ast::Expr;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Factor {
    Ident(String),
    /// Decimal digits exactly as written, leading zeros included.
    NumberLiteral(String),
    Parenthesized(Box<Expr>),
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Factor::Ident(name) => f.write_str(name),
            Factor::NumberLiteral(digits) => f.write_str(digits),
            Factor::Parenthesized(expr) => write!(f, "({})", expr),
        }
    }
}
