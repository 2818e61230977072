use crate::ast::Block;
use std::fmt;

/// Root of a parsed source file: the main block followed by `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub block: Block,
}

impl Program {
    pub fn new(block: Block) -> Self {
        Self { block }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.", self.block)
    }
}
