use crate::config::scanner::lookup_reserved;
use crate::errors::{SyntaxError, SyntaxResult};
use crate::frontend::token::{Position, Token, TokenKind};
use std::{iter::Peekable, str::Chars};

pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    position: Position,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            chars: source.chars().peekable(),
            position: Position::default(),
        }
    }

    pub fn scan(mut self) -> SyntaxResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            if self.chars.peek().is_none() {
                break;
            }
            tokens.push(self.scan_token()?);
        }
        Ok(tokens)
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.position.offset += 1;
        if ch == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    fn scan_token(&mut self) -> SyntaxResult<Token> {
        let start = self.position;
        match self.chars.peek() {
            Some(&ch) if ch.is_ascii_digit() => Ok(self.scan_number(start)),
            Some(&ch) if ch.is_alphabetic() => Ok(self.scan_identifier(start)),
            Some(&':') => self.scan_assignment(start),
            Some(&'<') => Ok(self.scan_less_than(start)),
            Some(&'>') => Ok(self.scan_greater_than(start)),
            Some(&ch) => self.scan_single_char_token(ch, start),
            None => Err(SyntaxError::new("unexpected end of input", start)),
        }
    }

    fn take_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if !accept(ch) {
                break;
            }
            text.push(ch);
            self.bump();
        }
        text
    }

    fn scan_identifier(&mut self, start: Position) -> Token {
        // Same digit class as `scan_number`, so `a٣` and `٣` are both rejected at the `٣`.
        let identifier = self.take_while(|ch| ch.is_alphabetic() || ch.is_ascii_digit());
        let kind = match lookup_reserved(&identifier) {
            Some(keyword) => TokenKind::Reserved(keyword),
            None => TokenKind::Identifier,
        };
        Token::new(kind, identifier, start)
    }

    // Digits stay text; converting them is up to whoever consumes the AST.
    fn scan_number(&mut self, start: Position) -> Token {
        let digits = self.take_while(|ch| ch.is_ascii_digit());
        Token::new(TokenKind::Number, digits, start)
    }

    fn scan_assignment(&mut self, start: Position) -> SyntaxResult<Token> {
        self.bump(); // Consume ':'
        match self.chars.peek() {
            Some(&'=') => {
                self.bump(); // Consume '='
                Ok(Token::new(TokenKind::Assignment, ":=", start))
            }
            _ => Err(SyntaxError::new("expected '=' after ':'", self.position)),
        }
    }

    fn scan_less_than(&mut self, start: Position) -> Token {
        self.bump(); // Consume '<'
        if self.chars.peek() == Some(&'=') {
            self.bump(); // Consume '='
            Token::new(TokenKind::LessEqual, "<=", start)
        } else {
            Token::new(TokenKind::LessThan, "<", start)
        }
    }

    fn scan_greater_than(&mut self, start: Position) -> Token {
        self.bump(); // Consume '>'
        if self.chars.peek() == Some(&'=') {
            self.bump(); // Consume '='
            Token::new(TokenKind::GreaterEqual, ">=", start)
        } else {
            Token::new(TokenKind::GreaterThan, ">", start)
        }
    }

    fn scan_single_char_token(&mut self, ch: char, start: Position) -> SyntaxResult<Token> {
        let kind = match ch {
            '=' => TokenKind::Equals,
            ',' => TokenKind::Comma,
            '?' => TokenKind::QuestionMark,
            '!' => TokenKind::Bang,
            ';' => TokenKind::Semicolon,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Mult,
            '/' => TokenKind::Div,
            // Braces group like parentheses here; they are not comment delimiters.
            '{' | '(' => TokenKind::ParenOpen,
            '}' | ')' => TokenKind::ParenClose,
            '.' => TokenKind::FullStop,
            _ => {
                return Err(SyntaxError::new(
                    format!("unrecognized character '{}'", ch.escape_debug()),
                    start,
                ))
            }
        };
        self.bump(); // Consume the character
        Ok(Token::new(kind, ch.to_string(), start))
    }
}

/// Split `source` into tokens, failing on the first malformed `:=` or
/// unrecognized character.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> SyntaxResult<Vec<Token>> {
    let tokens = Lexer::new(source).scan()?;
    tracing::debug!(token_count = tokens.len(), "scanned source");
    Ok(tokens)
}
