#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Schema model for ddlweave.
//!
//! These are the structured results of DDL reconstruction: a [`Clause`] is either a
//! table or an index definition. The parser builds them incrementally, the script
//! builder turns them back into DDL text, and the CLI serializes them to JSON.
//!
//! Every type carries `PartialEq`, so two definitions parsed from equivalent DDL
//! compare equal structurally.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod lib_tests;

/// Scratch key/value bag attached to tables and columns.
///
/// Holds transient parse state (e.g. a constraint name waiting for the clause that
/// follows it). Insertion-ordered so dumps are stable.
pub type Properties = IndexMap<String, String>;

// ============================================================================
// Clauses
// ============================================================================

/// One top-level result of parsing a DDL statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "clause", rename_all = "snake_case")]
pub enum Clause {
    Table(TableDefinition),
    Index(IndexDefinition),
}

impl Clause {
    /// Short name of the clause kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Clause::Table(_) => "table",
            Clause::Index(_) => "index",
        }
    }

    pub fn as_table(&self) -> Option<&TableDefinition> {
        match self {
            Clause::Table(table) => Some(table),
            Clause::Index(_) => None,
        }
    }

    pub fn as_index(&self) -> Option<&IndexDefinition> {
        match self {
            Clause::Index(index) => Some(index),
            Clause::Table(_) => None,
        }
    }

    pub fn into_table(self) -> Option<TableDefinition> {
        match self {
            Clause::Table(table) => Some(table),
            Clause::Index(_) => None,
        }
    }

    pub fn into_index(self) -> Option<IndexDefinition> {
        match self {
            Clause::Index(index) => Some(index),
            Clause::Table(_) => None,
        }
    }
}

impl From<TableDefinition> for Clause {
    fn from(table: TableDefinition) -> Self {
        Clause::Table(table)
    }
}

impl From<IndexDefinition> for Clause {
    fn from(index: IndexDefinition) -> Self {
        Clause::Index(index)
    }
}

// ============================================================================
// Tables
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<ColumnDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<PrimaryKeyDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub foreign_keys: Vec<ForeignKeyDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indexes: Vec<IndexDefinition>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: Properties,
}

impl TableDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Names of the tables this one references through foreign keys, in declaration
    /// order, without duplicates.
    pub fn referenced_tables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for fk in &self.foreign_keys {
            if !names.contains(&fk.referenced_table_name.as_str()) {
                names.push(&fk.referenced_table_name);
            }
        }
        names
    }
}

/// Column type: `name`, `name(size)` or `name(precision, scale)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
}

impl TypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn sized(name: impl Into<String>, size: u32) -> Self {
        Self {
            size: Some(size),
            ..Self::new(name)
        }
    }

    pub fn decimal(name: impl Into<String>, precision: u32, scale: u32) -> Self {
        Self {
            precision: Some(precision),
            scale: Some(scale),
            ..Self::new(name)
        }
    }
}

impl fmt::Display for TypeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        match (self.size, self.precision, self.scale) {
            (Some(size), _, _) => write!(f, "({size})"),
            (None, Some(precision), Some(scale)) => write!(f, "({precision}, {scale})"),
            (None, Some(precision), None) => write!(f, "({precision})"),
            _ => Ok(()),
        }
    }
}

/// Auto-increment settings. Kept as text, the way the engine reports them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDefinition {
    pub seed: String,
    pub increment: String,
}

impl IdentityDefinition {
    pub fn new(seed: impl Into<String>, increment: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            increment: increment.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDefinition,
    pub is_nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<IdentityDefinition>,
    /// Default value as literal SQL text (`'Anon'`, `0`, `NULL`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: Properties,
}

impl ColumnDefinition {
    /// Columns are nullable unless declared `NOT NULL`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: TypeDefinition::default(),
            is_nullable: true,
            identity: None,
            default: None,
            properties: Properties::new(),
        }
    }

    pub fn with_type(mut self, ty: TypeDefinition) -> Self {
        self.ty = ty;
        self
    }

    pub fn nullable(mut self, value: bool) -> Self {
        self.is_nullable = value;
        self
    }

    pub fn with_default(mut self, literal: impl Into<String>) -> Self {
        self.default = Some(literal.into());
        self
    }

    pub fn with_identity(mut self, identity: IdentityDefinition) -> Self {
        self.identity = Some(identity);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryKeyDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub columns: Vec<String>,
}

impl PrimaryKeyDefinition {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            columns: Vec::new(),
        }
    }
}

/// Local columns pair positionally with referenced columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKeyDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub column_names: Vec<String>,
    pub referenced_table_name: String,
    pub referenced_column_names: Vec<String>,
}

impl ForeignKeyDefinition {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }
}

// ============================================================================
// Indexes
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDefinition {
    pub name: String,
    pub table_name: String,
    pub is_unique: bool,
    pub columns: Vec<IndexColumn>,
}

impl IndexDefinition {
    pub fn new(is_unique: bool) -> Self {
        Self {
            is_unique,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexColumn {
    pub name: String,
    pub direction: SortDirection,
}

impl IndexColumn {
    pub fn new(name: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            name: name.into(),
            direction,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// SQL keyword for this direction.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort direction '{0}'")]
pub struct UnknownSortDirection(pub String);

impl FromStr for SortDirection {
    type Err = UnknownSortDirection;

    /// Case-insensitive `ASC` / `DESC`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortDirection::Ascending)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortDirection::Descending)
        } else {
            Err(UnknownSortDirection(s.to_string()))
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}
