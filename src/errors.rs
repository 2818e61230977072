use std::io;
use thiserror::Error;

use crate::frontend::token::{Position, Token};

/// The only error the scanner and parser raise. Parsing stops at the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} at {}{}", .message, .position, found_suffix(.token))]
pub struct SyntaxError {
    pub message: String,
    /// Offending token, if the failure happened on one. Lexical errors and
    /// unexpected end of input carry none.
    pub token: Option<Token>,
    pub position: Position,
}

fn found_suffix(token: &Option<Token>) -> String {
    match token {
        Some(token) => format!(", found '{}'", token.text),
        None => String::new(),
    }
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            token: None,
            position,
        }
    }

    pub fn at_token(message: impl Into<String>, token: &Token) -> Self {
        Self {
            message: message.into(),
            token: Some(token.clone()),
            position: token.position,
        }
    }

    /// Create an "expected ..." error for the given token, or for end of input.
    pub fn expected(what: impl AsRef<str>, found: Option<&Token>, eof: Position) -> Self {
        let message = format!("expected {}", what.as_ref());
        match found {
            Some(token) => Self::at_token(message, token),
            None => Self::new(format!("{} before end of input", message), eof),
        }
    }

    /// Render the error together with the source line it points at.
    pub fn render(&self, source: &str) -> String {
        let mut out = format!("error: {}\n", self);
        if let Some(line) = source.lines().nth(self.position.line.saturating_sub(1)) {
            let gutter = self.position.line.to_string();
            let pad = " ".repeat(gutter.len());
            // Tabs are copied so the caret lines up however the terminal expands them.
            let caret_pad: String = line
                .chars()
                .take(self.position.column.saturating_sub(1))
                .map(|ch| if ch == '\t' { '\t' } else { ' ' })
                .collect();
            let width = self
                .token
                .as_ref()
                .map(|token| token.text.chars().count().max(1))
                .unwrap_or(1);
            out.push_str(&format!("{} |\n", pad));
            out.push_str(&format!("{} | {}\n", gutter, line));
            out.push_str(&format!("{} | {}{}\n", pad, caret_pad, "^".repeat(width)));
        }
        out
    }
}

pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Errors surfaced by the input collaborators and the command line driver.
#[derive(Debug, Error)]
pub enum Pl0Error {
    #[error("File read error: {0}")]
    FileReadError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

pub type Pl0Result<T> = Result<T, Pl0Error>;
