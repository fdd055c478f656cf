use crate::Error;

use super::catalog::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExplorerError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("table `{name}` does not exist")]
    TableNotFound { name: String },

    #[error("cannot parse `{name}`: {source}")]
    Parse { name: String, source: Error },

    #[error("statement of `{name}` does not define a single {expected} ({found} clauses)")]
    UnexpectedClauses {
        name: String,
        expected: &'static str,
        found: usize,
    },
}

impl ExplorerError {
    /// Whether the failure is confined to one stored statement.
    pub fn is_statement_error(&self) -> bool {
        match self {
            ExplorerError::Parse { source, .. } => source.is_statement_error(),
            _ => false,
        }
    }
}
