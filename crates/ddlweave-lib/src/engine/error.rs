//! Errors raised while wiring hooks and walking a statement.

use crate::lexer::Span;

/// Token stream does not fit the grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("unexpected {found} at {}, expected {}", span.position, one_of(expected))]
    UnexpectedToken {
        found: String,
        span: Span,
        expected: Vec<String>,
    },

    #[error("unexpected end of input, expected {}", one_of(expected))]
    UnexpectedEnd { expected: Vec<String> },

    /// The grammar accepts the token but the dialect cannot use its value.
    #[error("invalid {found} at {}: {reason}", span.position)]
    InvalidValue {
        found: String,
        span: Span,
        reason: &'static str,
    },

    #[error("table `{table}` declares more than one primary key")]
    ConflictingPrimaryKey { table: String, span: Option<Span> },
}

impl SyntaxError {
    pub fn expected(&self) -> &[String] {
        match self {
            SyntaxError::UnexpectedToken { expected, .. }
            | SyntaxError::UnexpectedEnd { expected } => expected,
            SyntaxError::InvalidValue { .. } | SyntaxError::ConflictingPrimaryKey { .. } => &[],
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            SyntaxError::UnexpectedToken { span, .. } | SyntaxError::InvalidValue { span, .. } => {
                Some(*span)
            }
            SyntaxError::ConflictingPrimaryKey { span, .. } => *span,
            SyntaxError::UnexpectedEnd { .. } => None,
        }
    }
}

/// `a`, `a or b`, `a, b or c`.
fn one_of(items: &[String]) -> String {
    match items {
        [] => "nothing".to_string(),
        [single] => single.clone(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}

/// A hook found the accumulator in a state it cannot work with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccumulatorError {
    #[error("no clause has been started")]
    NoClause,

    #[error("current clause is {found}, expected {expected}")]
    WrongClause {
        expected: &'static str,
        found: &'static str,
    },

    #[error("current table has no columns")]
    NoColumn,

    #[error("current table has no primary key")]
    NoPrimaryKey,

    #[error("current table has no foreign keys")]
    NoForeignKey,

    #[error("current index has no columns")]
    NoIndexColumn,

    #[error("hook needs a token but the input has ended")]
    MissingToken,

    #[error("hook cannot use {found}")]
    UnexpectedToken { found: String },

    #[error("unknown sort direction `{0}`")]
    UnknownSortDirection(String),
}

impl From<ddlweave_core::UnknownSortDirection> for AccumulatorError {
    fn from(err: ddlweave_core::UnknownSortDirection) -> Self {
        AccumulatorError::UnknownSortDirection(err.0)
    }
}

/// Why a hook failed: the accumulator was in the wrong state, or the statement
/// carries something the dialect rejects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HookError {
    #[error(transparent)]
    Accumulator(#[from] AccumulatorError),

    #[error(transparent)]
    Rejected(#[from] SyntaxError),
}

/// Hooks could not be attached to the graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionWiringError {
    #[error("no node named `{name}`")]
    MissingNode { name: String },

    #[error("{count} nodes are named `{name}`")]
    AmbiguousNode { name: String, count: usize },

    #[error("node `{name}` already has a hook")]
    DuplicateHook { name: String },
}
