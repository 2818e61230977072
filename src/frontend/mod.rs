pub mod lexer;
pub mod parser;
pub mod token;

pub use lexer::{tokenize, Lexer};
pub use parser::{parse, Parser};
pub use token::{Keyword, Position, Token, TokenKind};
