use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphConstructionError {
    /// The vertex factory has no node kind for this mold.
    #[error("no node kind for grammar vertex {kind}")]
    UnknownVertexKind { kind: String, span: Range<usize> },

    /// Two molds share a name but describe different nodes.
    #[error("node `{name}` is declared as {first} and as {second}")]
    IncompatibleName {
        name: String,
        first: String,
        second: String,
        span: Range<usize>,
    },
}

impl GraphConstructionError {
    pub fn span(&self) -> Range<usize> {
        match self {
            GraphConstructionError::UnknownVertexKind { span, .. }
            | GraphConstructionError::IncompatibleName { span, .. } => span.clone(),
        }
    }
}
