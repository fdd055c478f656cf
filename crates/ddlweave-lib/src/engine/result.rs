use ddlweave_core::{
    Clause, ColumnDefinition, ForeignKeyDefinition, IndexColumn, IndexDefinition,
    PrimaryKeyDefinition, TableDefinition,
};

use super::error::AccumulatorError;

/// Clauses produced so far plus a counter of committed transitions.
///
/// One result may be shared across sequential parse calls; clauses accumulate in
/// call order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsingResult {
    clauses: Vec<Clause>,
    version: u64,
}

impl ParsingResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn into_clauses(self) -> Vec<Clause> {
        self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Monotonic; never rolled back, even when a statement fails.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn add_clause(&mut self, clause: impl Into<Clause>) {
        self.clauses.push(clause.into());
    }

    pub fn last_clause(&self) -> Option<&Clause> {
        self.clauses.last()
    }

    pub fn current_table(&mut self) -> Result<&mut TableDefinition, AccumulatorError> {
        match self.clauses.last_mut() {
            Some(Clause::Table(table)) => Ok(table),
            Some(other) => Err(AccumulatorError::WrongClause {
                expected: "table",
                found: other.kind_name(),
            }),
            None => Err(AccumulatorError::NoClause),
        }
    }

    pub fn current_column(&mut self) -> Result<&mut ColumnDefinition, AccumulatorError> {
        self.current_table()?
            .columns
            .last_mut()
            .ok_or(AccumulatorError::NoColumn)
    }

    pub fn current_primary_key(&mut self) -> Result<&mut PrimaryKeyDefinition, AccumulatorError> {
        self.current_table()?
            .primary_key
            .as_mut()
            .ok_or(AccumulatorError::NoPrimaryKey)
    }

    pub fn current_foreign_key(&mut self) -> Result<&mut ForeignKeyDefinition, AccumulatorError> {
        self.current_table()?
            .foreign_keys
            .last_mut()
            .ok_or(AccumulatorError::NoForeignKey)
    }

    pub fn current_index(&mut self) -> Result<&mut IndexDefinition, AccumulatorError> {
        match self.clauses.last_mut() {
            Some(Clause::Index(index)) => Ok(index),
            Some(other) => Err(AccumulatorError::WrongClause {
                expected: "index",
                found: other.kind_name(),
            }),
            None => Err(AccumulatorError::NoClause),
        }
    }

    pub fn current_index_column(&mut self) -> Result<&mut IndexColumn, AccumulatorError> {
        self.current_index()?
            .columns
            .last_mut()
            .ok_or(AccumulatorError::NoIndexColumn)
    }

    pub(crate) fn bump_version(&mut self) {
        self.version += 1;
    }

    /// Drop clauses added after `len`.
    pub(crate) fn rollback(&mut self, len: usize) {
        self.clauses.truncate(len);
    }
}
