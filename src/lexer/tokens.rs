use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

pub const KEYWORDS: [&str; 12] = [
    "start", "finish", "loop", "condition", "declare", "output", "input", "function", "return",
    "break", "continue", "else",
];

pub const BOOLEANS: [&str; 2] = ["true", "false"];

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> =
        KEYWORDS.iter().chain(BOOLEANS.iter()).copied().collect();
}

/// Closed set of token classifications.
///
/// `Comment` and `Whitespace` are recognized by the pattern table but never
/// returned from the scanner.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum TokenKind {
    Comment,
    Operator,
    Keyword,
    BooleanLiteral,
    Identifier,
    FloatLiteral,
    IntegerLiteral,
    StringLiteral,
    CharLiteral,
    Punctuator,
    Whitespace,
    Unknown,
    EndOfInput,
}

impl TokenKind {
    /// True for kinds that are consumed without producing a token.
    pub fn is_skipped(&self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::Whitespace)
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::BooleanLiteral
                | TokenKind::FloatLiteral
                | TokenKind::IntegerLiteral
                | TokenKind::StringLiteral
                | TokenKind::CharLiteral
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
    pub column: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<{}, {:?}, Line: {}, Col: {}>",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// False for the tokens a consumer normally filters out.
    pub fn is_significant(&self) -> bool {
        !self.is_one_of_many(&[TokenKind::Unknown, TokenKind::EndOfInput])
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    pub fn is_reserved(&self) -> bool {
        self.is_one_of_many(&[TokenKind::Keyword, TokenKind::BooleanLiteral])
            && RESERVED_LOOKUP.contains(self.lexeme.as_str())
    }
}
