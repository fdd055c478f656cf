use std::ops::Range;

/// Malformed grammar text. Spans are byte ranges in the grammar source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarCompileError {
    #[error("unexpected {found} in grammar")]
    UnexpectedToken { found: String, span: Range<usize> },

    #[error("grammar ends in the middle of a form")]
    UnexpectedEnd { span: Range<usize> },

    #[error("unbalanced parenthesis in grammar")]
    UnbalancedParen { span: Range<usize> },

    #[error("unknown node head `{head}`")]
    UnknownHead { head: String, span: Range<usize> },

    #[error("`:values` is only allowed on MULTI-WORD, not on {head}")]
    MisplacedValues { head: String, span: Range<usize> },

    #[error("MULTI-WORD needs at least one value where it is first defined")]
    EmptyAlternatives { span: Range<usize> },

    #[error("grammar must contain exactly one top-level form")]
    TrailingForm { span: Range<usize> },

    #[error("grammar is empty")]
    EmptyGrammar,

    #[error("invalid string literal in grammar")]
    InvalidString { span: Range<usize> },
}

impl GrammarCompileError {
    pub fn span(&self) -> Option<Range<usize>> {
        match self {
            GrammarCompileError::UnexpectedToken { span, .. }
            | GrammarCompileError::UnexpectedEnd { span }
            | GrammarCompileError::UnbalancedParen { span }
            | GrammarCompileError::UnknownHead { span, .. }
            | GrammarCompileError::MisplacedValues { span, .. }
            | GrammarCompileError::EmptyAlternatives { span }
            | GrammarCompileError::TrailingForm { span }
            | GrammarCompileError::InvalidString { span } => Some(span.clone()),
            GrammarCompileError::EmptyGrammar => None,
        }
    }
}
