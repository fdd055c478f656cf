//! Abstract grammar tree produced by [`compile`](super::compile).

use std::fmt;
use std::ops::Range;

/// What a mold asks the vertex factory to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoldKind {
    Idle,
    End,
    Identifier,
    Integer,
    String,
    /// One of several words. Empty on a by-name reference to a defined `MULTI-WORD`.
    MultiWord(Vec<String>),
    /// Keyword or punctuation, exactly as written in the grammar.
    Literal(String),
}

impl MoldKind {
    pub fn head(&self) -> &str {
        match self {
            MoldKind::Idle => "IDLE",
            MoldKind::End => "END",
            MoldKind::Identifier => "IDENTIFIER",
            MoldKind::Integer => "INTEGER",
            MoldKind::String => "STRING",
            MoldKind::MultiWord(_) => "MULTI-WORD",
            MoldKind::Literal(text) => text,
        }
    }
}

impl fmt::Display for MoldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoldKind::Literal(text) => write!(f, "{text:?}"),
            MoldKind::MultiWord(values) if !values.is_empty() => {
                write!(f, "MULTI-WORD {values:?}")
            }
            other => f.write_str(other.head()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarVertexMold {
    pub kind: MoldKind,
    pub name: Option<String>,
    /// Successors, in declaration order.
    pub children: Vec<GrammarVertexMold>,
    /// Byte range of the whole form in the grammar text.
    pub span: Range<usize>,
}

impl GrammarVertexMold {
    pub fn new(kind: MoldKind, span: Range<usize>) -> Self {
        Self {
            kind,
            name: None,
            children: Vec::new(),
            span,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_children(mut self, children: Vec<GrammarVertexMold>) -> Self {
        self.children = children;
        self
    }

    /// Number of molds in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }

    /// Pre-order traversal.
    pub fn walk(&self, visit: &mut impl FnMut(&GrammarVertexMold)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}
