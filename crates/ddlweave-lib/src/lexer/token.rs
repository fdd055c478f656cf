//! Tokens produced by the SQL lexer.

use std::borrow::Cow;
use std::fmt;

/// 1-based line and column (columns count characters, not bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const START: Position = Position { line: 1, column: 1 };

    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Byte range in the source plus the position of its first character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub position: Position,
}

impl Span {
    pub fn new(start: usize, end: usize, position: Position) -> Self {
        Self {
            start,
            end,
            position,
        }
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Bare run of letters, digits and underscores. Keyword or identifier is
    /// decided by the parser, not here.
    Word(String),
    Punctuation(char),
    Integer(i64),
    /// Unescaped content of a `'...'` literal.
    StringLiteral(String),
    Identifier { text: String, delimited: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Semantic text of the token: the word, the identifier without delimiters, the
    /// string without quotes, the integer in decimal.
    pub fn text(&self) -> Cow<'_, str> {
        match &self.kind {
            TokenKind::Word(text) | TokenKind::StringLiteral(text) => Cow::Borrowed(text),
            TokenKind::Identifier { text, .. } => Cow::Borrowed(text),
            TokenKind::Punctuation(c) => Cow::Owned(c.to_string()),
            TokenKind::Integer(value) => Cow::Owned(value.to_string()),
        }
    }

    pub fn as_word(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Word(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self.kind {
            TokenKind::Integer(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_punctuation(&self, c: char) -> bool {
        self.kind == TokenKind::Punctuation(c)
    }

    /// Short human-readable form for diagnostics.
    pub fn describe(&self) -> String {
        match &self.kind {
            TokenKind::Word(text) => format!("'{text}'"),
            TokenKind::Punctuation(c) => format!("'{c}'"),
            TokenKind::Integer(value) => format!("integer {value}"),
            TokenKind::StringLiteral(text) => format!("string '{text}'"),
            TokenKind::Identifier { text, .. } => format!("identifier \"{text}\""),
        }
    }
}
