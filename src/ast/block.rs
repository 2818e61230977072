use crate::ast::Statement;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// `(name, digits)` pairs in declaration order.
    pub constants: Vec<(String, String)>,
    pub variables: Vec<String>,
    /// Nested procedures; each owns its own block.
    pub procedures: Vec<(String, Block)>,
    pub body: Statement,
}

impl Block {
    pub fn new(
        constants: Vec<(String, String)>,
        variables: Vec<String>,
        procedures: Vec<(String, Block)>,
        body: Statement,
    ) -> Self {
        Self {
            constants,
            variables,
            procedures,
            body,
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.constants.is_empty() {
            f.write_str("const ")?;
            for (i, (name, value)) in self.constants.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{} = {}", name, value)?;
            }
            f.write_str("; ")?;
        }
        if !self.variables.is_empty() {
            write!(f, "var {}; ", self.variables.join(", "))?;
        }
        for (name, block) in &self.procedures {
            write!(f, "procedure {}; {}; ", name, block)?;
        }
        write!(f, "{}", self.body)
    }
}
