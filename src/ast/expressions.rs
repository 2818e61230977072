use crate::ast::Factor;
use crate::frontend::token::TokenKind;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulOp {
    Mul,
    Div,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    Equal,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl RelOp {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Equals => Some(RelOp::Equal),
            TokenKind::LessThan => Some(RelOp::Less),
            TokenKind::LessEqual => Some(RelOp::LessEqual),
            TokenKind::GreaterThan => Some(RelOp::Greater),
            TokenKind::GreaterEqual => Some(RelOp::GreaterEqual),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RelOp::Equal => "=",
            RelOp::Less => "<",
            RelOp::LessEqual => "<=",
            RelOp::Greater => ">",
            RelOp::GreaterEqual => ">=",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Odd { expr: Expr },
    Compare { left: Expr, op: RelOp, right: Expr },
}

/// Sum of signed terms. A leading sign applies to the first term only;
/// every later term takes the operator that precedes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    pub terms: Vec<(Sign, Term)>,
}

impl Expr {
    pub fn new(terms: Vec<(Sign, Term)>) -> Self {
        Self { terms }
    }

    /// Expression made of one positive single-factor term.
    pub fn single(factor: Factor) -> Self {
        Self::new(vec![(Sign::Positive, Term::single(factor))])
    }
}

/// Product of factors. The first factor is implicitly multiplied in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub first: Factor,
    pub rest: Vec<(MulOp, Factor)>,
}

impl Term {
    pub fn new(first: Factor, rest: Vec<(MulOp, Factor)>) -> Self {
        Self { first, rest }
    }

    pub fn single(factor: Factor) -> Self {
        Self::new(factor, Vec::new())
    }

    pub fn factors(&self) -> impl Iterator<Item = &Factor> {
        std::iter::once(&self.first).chain(self.rest.iter().map(|(_, factor)| factor))
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Odd { expr } => write!(f, "odd {}", expr),
            Condition::Compare { left, op, right } => write!(f, "{} {} {}", left, op, right),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (sign, term)) in self.terms.iter().enumerate() {
            match (i, sign) {
                (0, Sign::Positive) => {}
                (0, Sign::Negative) => f.write_str("-")?,
                (_, Sign::Positive) => f.write_str(" + ")?,
                (_, Sign::Negative) => f.write_str(" - ")?,
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        for (op, factor) in &self.rest {
            match op {
                MulOp::Mul => write!(f, " * {}", factor)?,
                MulOp::Div => write!(f, " / {}", factor)?,
            }
        }
        Ok(())
    }
}
