use crate::ast::{Condition, Expr};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `ident := expression`
    Assign { name: String, expr: Expr },
    /// `call ident`
    Call { name: String },
    /// `? ident`
    Read { name: String },
    /// `! expression`
    Write { expr: Expr },
    /// `begin statement { ; statement } end`
    Compound { statements: Vec<Statement> },
    If { cond: Condition, then: Box<Statement> },
    While { cond: Condition, body: Box<Statement> },
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assign { name, expr } => write!(f, "{} := {}", name, expr),
            Statement::Call { name } => write!(f, "call {}", name),
            Statement::Read { name } => write!(f, "? {}", name),
            Statement::Write { expr } => write!(f, "! {}", expr),
            Statement::Compound { statements } => {
                f.write_str("begin ")?;
                for (i, stmt) in statements.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{}", stmt)?;
                }
                f.write_str(" end")
            }
            Statement::If { cond, then } => write!(f, "if {} then {}", cond, then),
            Statement::While { cond, body } => write!(f, "while {} do {}", cond, body),
        }
    }
}
