use std::fmt::Display;

use crate::Position;

/// Text carried by every end-of-line token. Literal matchers list it among
/// their spellings to consume line ends.
pub const EOL: &str = "\n";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    EOL,
    Number,
    String,
    /// Names, keywords and operators alike; the grammar tells them apart.
    Identifier,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// Only set for `TokenKind::Number`.
    pub number: Option<i64>,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "EOF"),
            TokenKind::EOL => write!(f, "\\n"),
            _ => write!(f, "{}", self.text),
        }
    }
}

impl Token {
    pub fn get_line(&self) -> u32 {
        self.position.0
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }

    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }

    pub fn is_string(&self) -> bool {
        self.kind == TokenKind::String
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    /// True for tokens a literal spelling can match: identifiers, operators
    /// and the end-of-line marker.
    pub fn is_literal_candidate(&self) -> bool {
        matches!(self.kind, TokenKind::Identifier | TokenKind::EOL)
    }
}
