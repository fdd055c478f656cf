use ddlweave_core::Clause;

use crate::Error;
use crate::split::split_statements;
use crate::sqlite;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Table,
    Index,
}

/// One stored schema object, the way `sqlite_master` lists it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub kind: ObjectKind,
    pub name: String,
    /// Owning table; the table itself for table entries.
    pub table_name: String,
    pub sql: String,
}

impl CatalogEntry {
    pub fn table(name: impl Into<String>, sql: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            kind: ObjectKind::Table,
            table_name: name.clone(),
            name,
            sql: sql.into(),
        }
    }

    pub fn index(
        name: impl Into<String>,
        table_name: impl Into<String>,
        sql: impl Into<String>,
    ) -> Self {
        Self {
            kind: ObjectKind::Index,
            name: name.into(),
            table_name: table_name.into(),
            sql: sql.into(),
        }
    }

    /// Objects the engine keeps for itself (`sqlite_sequence`, auto indexes).
    pub fn is_internal(&self) -> bool {
        self.name.starts_with("sqlite_")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("catalog read failed: {message}")]
pub struct CatalogError {
    pub message: String,
}

impl CatalogError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Source of stored schema objects.
pub trait Catalog {
    fn entries(&self) -> Result<Vec<CatalogEntry>, CatalogError>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn entries(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        (**self).entries()
    }
}

/// Catalog held in memory, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCatalog {
    entries: Vec<CatalogEntry>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// One entry per statement of `script`, named after the object it creates.
    pub fn from_script(script: &str) -> Result<Self, Error> {
        let parser = sqlite::parser()?;
        let mut catalog = Self::new();
        for statement in split_statements(script) {
            for clause in parser.parse(statement)? {
                let entry = match clause {
                    Clause::Table(table) => CatalogEntry::table(table.name, statement),
                    Clause::Index(index) => {
                        CatalogEntry::index(index.name, index.table_name, statement)
                    }
                };
                catalog.push(entry);
            }
        }
        Ok(catalog)
    }

    pub fn push(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }

    pub fn add_table(&mut self, name: impl Into<String>, sql: impl Into<String>) {
        self.push(CatalogEntry::table(name, sql));
    }

    pub fn add_index(
        &mut self,
        name: impl Into<String>,
        table_name: impl Into<String>,
        sql: impl Into<String>,
    ) {
        self.push(CatalogEntry::index(name, table_name, sql));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<CatalogEntry> for MemoryCatalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Catalog for MemoryCatalog {
    fn entries(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        Ok(self.entries.clone())
    }
}
