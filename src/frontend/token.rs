use std::fmt;

/// Reserved words of the language. Matched case-insensitively by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    End,
    Const,
    Var,
    Procedure,
    Begin,
    If,
    While,
    Then,
    Do,
    Call,
    Odd,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::End => "end",
            Keyword::Const => "const",
            Keyword::Var => "var",
            Keyword::Procedure => "procedure",
            Keyword::Begin => "begin",
            Keyword::If => "if",
            Keyword::While => "while",
            Keyword::Then => "then",
            Keyword::Do => "do",
            Keyword::Call => "call",
            Keyword::Odd => "odd",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    Comma,
    Semicolon,
    Bang,
    QuestionMark,
    FullStop,
    Equals,
    Assignment,
    Mult,
    Div,
    Plus,
    Minus,
    LessThan,
    LessEqual,
    GreaterThan,
    GreaterEqual,
    ParenOpen,
    ParenClose,
    Reserved(Keyword),
}

impl TokenKind {
    /// Human readable description used in "expected ..." diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Identifier => "identifier".to_string(),
            TokenKind::Number => "number".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Semicolon => "';'".to_string(),
            TokenKind::Bang => "'!'".to_string(),
            TokenKind::QuestionMark => "'?'".to_string(),
            TokenKind::FullStop => "'.'".to_string(),
            TokenKind::Equals => "'='".to_string(),
            TokenKind::Assignment => "':='".to_string(),
            TokenKind::Mult => "'*'".to_string(),
            TokenKind::Div => "'/'".to_string(),
            TokenKind::Plus => "'+'".to_string(),
            TokenKind::Minus => "'-'".to_string(),
            TokenKind::LessThan => "'<'".to_string(),
            TokenKind::LessEqual => "'<='".to_string(),
            TokenKind::GreaterThan => "'>'".to_string(),
            TokenKind::GreaterEqual => "'>='".to_string(),
            TokenKind::ParenOpen => "'('".to_string(),
            TokenKind::ParenClose => "')'".to_string(),
            TokenKind::Reserved(keyword) => format!("'{}'", keyword),
        }
    }
}

/// Location of a token or character in the source text.
///
/// `offset` is a zero-based character index, `line` and `column` start at one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self { offset, line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { offset: 0, line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Matched source text. Reserved words keep their original case.
    pub text: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Position of the first character after this token.
    pub fn end_position(&self) -> Position {
        let len = self.text.chars().count();
        Position::new(self.position.offset + len, self.position.line, self.position.column + len)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind, self.text)
    }
}
