//! Errors raised while tokenizing DDL text.

use super::token::Span;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// No producer could consume the input at this position.
    #[error("unexpected character {ch:?} at {}", span.position)]
    UnexpectedCharacter { ch: char, span: Span },

    #[error("unterminated string literal starting at {}", span.position)]
    UnterminatedString { span: Span },

    #[error("unterminated delimited identifier starting at {}", span.position)]
    UnterminatedIdentifier { span: Span },

    #[error("empty delimited identifier at {}", span.position)]
    EmptyIdentifier { span: Span },

    #[error("unterminated block comment starting at {}", span.position)]
    UnterminatedComment { span: Span },

    #[error("integer {text} at {} does not fit in 64 bits", span.position)]
    IntegerOverflow { text: String, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::UnterminatedIdentifier { span }
            | LexError::EmptyIdentifier { span }
            | LexError::UnterminatedComment { span }
            | LexError::IntegerOverflow { span, .. } => *span,
        }
    }
}
