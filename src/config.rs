// Scanner constants
pub mod scanner {
    use crate::frontend::token::Keyword;
    use lazy_static::lazy_static;
    use std::collections::HashMap;

    lazy_static! {
        pub static ref RESERVED_WORDS: HashMap<&'static str, Keyword> = [
            Keyword::End,
            Keyword::Const,
            Keyword::Var,
            Keyword::Procedure,
            Keyword::Begin,
            Keyword::If,
            Keyword::While,
            Keyword::Then,
            Keyword::Do,
            Keyword::Call,
            Keyword::Odd,
        ]
        .iter()
        .map(|keyword| (keyword.as_str(), *keyword))
        .collect();
    }

    /// Look up an identifier in the reserved word table, ignoring case.
    pub fn lookup_reserved(identifier: &str) -> Option<Keyword> {
        RESERVED_WORDS.get(identifier.to_lowercase().as_str()).copied()
    }
}

// Parser limits
pub mod parser {
    /// Maximum nesting of statements, procedure blocks and parenthesized
    /// factors before the parser gives up. Each level costs a handful of
    /// stack frames, so 128 stays well inside a 2 MiB thread stack.
    pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;
}

// Command line defaults
pub mod cli {
    pub const SOURCE_EXTENSION: &str = "pl0";
    pub const DEFAULT_LOG_FILTER: &str = "warn";
    pub const VERBOSE_LOG_FILTER: &str = "debug";
}
