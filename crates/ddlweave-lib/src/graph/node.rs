use std::fmt;

use crate::lexer::{Token, TokenKind};

use super::ReservedWords;

/// Index into `Graph::nodes`.
pub type NodeId = u32;

/// What a node accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Matches nothing itself. Entered by looking through to its successors.
    Idle,
    /// Accepts only the end of the token stream.
    End,
    /// Bare word, case-insensitive.
    ExactWord(String),
    ExactPunctuation(char),
    /// Any of the listed words, case-insensitive.
    MultiWord(Vec<String>),
    /// Non-reserved bare word or delimited identifier.
    Identifier,
    Integer,
    String,
}

impl NodeKind {
    /// Whether matching this node consumes a token.
    pub fn consumes(&self) -> bool {
        !matches!(self, NodeKind::Idle | NodeKind::End)
    }

    /// Token test for consuming kinds. `Idle` and `End` never match a token.
    pub fn matches(&self, token: &Token, reserved: &ReservedWords) -> bool {
        match (self, &token.kind) {
            (NodeKind::ExactWord(word), TokenKind::Word(text)) => word.eq_ignore_ascii_case(text),
            (NodeKind::ExactPunctuation(c), TokenKind::Punctuation(p)) => c == p,
            (NodeKind::MultiWord(words), TokenKind::Word(text)) => {
                words.iter().any(|w| w.eq_ignore_ascii_case(text))
            }
            (NodeKind::Identifier, TokenKind::Word(text)) => !reserved.contains(text),
            (NodeKind::Identifier, TokenKind::Identifier { text, delimited }) => {
                *delimited || !reserved.contains(text)
            }
            (NodeKind::Integer, TokenKind::Integer(_)) => true,
            (NodeKind::String, TokenKind::StringLiteral(_)) => true,
            _ => false,
        }
    }

    /// Human-readable descriptions of acceptable input, for syntax errors.
    pub fn expected(&self) -> Vec<String> {
        match self {
            NodeKind::Idle => Vec::new(),
            NodeKind::End => vec!["end of input".to_string()],
            NodeKind::ExactWord(word) => vec![format!("'{word}'")],
            NodeKind::ExactPunctuation(c) => vec![format!("'{c}'")],
            NodeKind::MultiWord(words) => words.iter().map(|w| format!("'{w}'")).collect(),
            NodeKind::Identifier => vec!["identifier".to_string()],
            NodeKind::Integer => vec!["integer".to_string()],
            NodeKind::String => vec!["string".to_string()],
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Idle => write!(f, "ε"),
            NodeKind::End => write!(f, "END"),
            NodeKind::ExactWord(word) => write!(f, "{word}"),
            NodeKind::ExactPunctuation(c) => write!(f, "'{c}'"),
            NodeKind::MultiWord(words) => write!(f, "{}", words.join("|")),
            NodeKind::Identifier => write!(f, "(identifier)"),
            NodeKind::Integer => write!(f, "(integer)"),
            NodeKind::String => write!(f, "(string)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<H> {
    pub name: Option<String>,
    pub kind: NodeKind,
    /// Semantic action fired right after the node is matched or entered.
    pub hook: Option<H>,
    pub(crate) successors: Vec<NodeId>,
}

impl<H> Node<H> {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            name: None,
            kind,
            hook: None,
            successors: Vec::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn successors(&self) -> &[NodeId] {
        &self.successors
    }
}
