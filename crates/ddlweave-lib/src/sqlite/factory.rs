use crate::grammar::GrammarVertexMold;
use crate::graph::{GraphConstructionError, NodeKind, VertexFactory};
use crate::lexer::LexerConfig;

/// Maps grammar literals to SQLite matchers: structural punctuation and bare
/// keywords. Anything else in a literal position is a grammar defect.
#[derive(Debug, Clone)]
pub struct SqliteVertexFactory {
    punctuation: Vec<char>,
}

impl Default for SqliteVertexFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl SqliteVertexFactory {
    pub fn new() -> Self {
        Self {
            punctuation: LexerConfig::sqlite().get_punctuation().to_vec(),
        }
    }
}

impl VertexFactory for SqliteVertexFactory {
    fn create_literal(
        &self,
        text: &str,
        mold: &GrammarVertexMold,
    ) -> Result<NodeKind, GraphConstructionError> {
        let mut chars = text.chars();
        let first = chars.next();
        if let Some(c) = first
            && chars.as_str().is_empty()
            && self.punctuation.contains(&c)
        {
            return Ok(NodeKind::ExactPunctuation(c));
        }

        let is_word = first.is_some_and(|c| c.is_ascii_alphabetic())
            && text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if is_word {
            return Ok(NodeKind::ExactWord(text.to_string()));
        }

        Err(GraphConstructionError::UnknownVertexKind {
            kind: format!("{text:?}"),
            span: mold.span.clone(),
        })
    }
}
