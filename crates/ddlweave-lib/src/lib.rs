//! ddlweave: grammar-driven reconstruction of schema objects from DDL text.
//!
//! A dialect is a grammar script compiled into a matcher graph, a vertex factory
//! that decides what the grammar's literals mean, and a set of typed hooks that
//! build [`Clause`](ddlweave_core::Clause)s while the graph is walked.
//!
//! # Example
//!
//! ```
//! let clauses = ddlweave_lib::sqlite::parse(
//!     "CREATE TABLE [Person]([Id] integer NOT NULL PRIMARY KEY, [Name] text)",
//! )
//! .unwrap();
//!
//! let person = clauses[0].as_table().unwrap();
//! assert_eq!(person.primary_key.as_ref().unwrap().columns, ["Id"]);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod engine;
pub mod explorer;
pub mod grammar;
pub mod graph;
pub mod lexer;
pub mod script;
pub mod split;
pub mod sqlite;

pub use diagnostics::ErrorPrinter;
pub use engine::{DdlParser, FuelLimits, ParsingResult};
pub use explorer::{Catalog, MemoryCatalog, SchemaExplorer};
pub use script::ScriptBuilder;
pub use split::{split_statement_ranges, split_statements};

use engine::{AccumulatorError, ActionWiringError, HookError, SyntaxError};
use grammar::GrammarCompileError;
use graph::GraphConstructionError;
use lexer::{LexError, Span};
use script::ScriptError;

/// Everything that can go wrong between grammar text and finished clauses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Grammar(#[from] GrammarCompileError),

    #[error(transparent)]
    Graph(#[from] GraphConstructionError),

    #[error(transparent)]
    Wiring(#[from] ActionWiringError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Accumulator(#[from] AccumulatorError),

    /// More than one edge accepted the same token.
    #[error("ambiguous transition on {found}: {}", nodes.join(", "))]
    AmbiguousTransition {
        found: String,
        nodes: Vec<String>,
        span: Option<Span>,
    },

    /// Too many transitions for one statement.
    #[error("execution limit of {0} steps exceeded")]
    ExecFuelExhausted(u32),

    #[error(transparent)]
    Script(#[from] ScriptError),
}

impl From<HookError> for Error {
    fn from(err: HookError) -> Self {
        match err {
            HookError::Accumulator(err) => Error::Accumulator(err),
            HookError::Rejected(err) => Error::Syntax(err),
        }
    }
}

impl Error {
    /// Whether the failure belongs to the statement rather than to the dialect.
    /// Callers going through many statements may log these and move on.
    pub fn is_statement_error(&self) -> bool {
        matches!(self, Error::Lex(_) | Error::Syntax(_))
    }

    /// Where in the statement text the error points, if anywhere.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Lex(err) => Some(err.span()),
            Error::Syntax(err) => err.span(),
            Error::AmbiguousTransition { span, .. } => *span,
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
