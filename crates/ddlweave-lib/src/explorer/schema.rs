use ddlweave_core::{Clause, IndexDefinition, TableDefinition};
use tracing::instrument;

use crate::Error;
use crate::sqlite::{self, SqliteParser};

use super::catalog::{Catalog, CatalogEntry, ObjectKind};
use super::error::ExplorerError;
use super::order::arrange_tables;

/// Tables and indexes read back from the DDL a catalog stores for them.
pub struct SchemaExplorer<'p, C> {
    catalog: C,
    parser: &'p SqliteParser,
}

impl<C: Catalog> SchemaExplorer<'static, C> {
    /// Explorer over the shared SQLite parser.
    pub fn new(catalog: C) -> Result<Self, Error> {
        Ok(Self::with_parser(catalog, sqlite::parser()?))
    }
}

impl<'p, C: Catalog> SchemaExplorer<'p, C> {
    pub fn with_parser(catalog: C, parser: &'p SqliteParser) -> Self {
        Self { catalog, parser }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Names of all user tables, sorted.
    pub fn table_names(&self) -> Result<Vec<String>, ExplorerError> {
        Ok(self
            .entries(ObjectKind::Table)?
            .into_iter()
            .map(|e| e.name)
            .collect())
    }

    pub fn table_exists(&self, name: &str) -> Result<bool, ExplorerError> {
        Ok(self
            .entries(ObjectKind::Table)?
            .iter()
            .any(|e| e.name == name))
    }

    pub fn get_table(
        &self,
        name: &str,
        include_indexes: bool,
    ) -> Result<TableDefinition, ExplorerError> {
        let entry = self
            .entries(ObjectKind::Table)?
            .into_iter()
            .find(|e| e.name == name)
            .ok_or_else(|| ExplorerError::TableNotFound {
                name: name.to_string(),
            })?;

        let mut table = self.parse_table(&entry)?;
        if include_indexes {
            table.indexes = self.indexes_of(name)?;
        }
        Ok(table)
    }

    /// Indexes of `table_name`, sorted by index name.
    pub fn get_table_indexes(&self, table_name: &str) -> Result<Vec<IndexDefinition>, ExplorerError> {
        if !self.table_exists(table_name)? {
            return Err(ExplorerError::TableNotFound {
                name: table_name.to_string(),
            });
        }
        self.indexes_of(table_name)
    }

    /// All user tables, sorted by name or, with `independent_first`, by foreign-key
    /// dependency.
    #[instrument(name = "explorer::get_tables", level = "debug", skip(self))]
    pub fn get_tables(
        &self,
        include_indexes: bool,
        independent_first: Option<bool>,
    ) -> Result<Vec<TableDefinition>, ExplorerError> {
        let mut tables = Vec::new();
        for entry in self.entries(ObjectKind::Table)? {
            let mut table = self.parse_table(&entry)?;
            if include_indexes {
                table.indexes = self.indexes_of(&entry.name)?;
            }
            tables.push(table);
        }
        tracing::debug!(tables = tables.len(), "tables loaded");

        Ok(match independent_first {
            Some(independent_first) => arrange_tables(tables, independent_first),
            None => tables,
        })
    }

    /// Like [`get_tables`](Self::get_tables) without ordering, but statements the
    /// parser rejects are skipped and returned next to the tables that did parse.
    #[instrument(name = "explorer::get_tables_lenient", level = "debug", skip(self))]
    pub fn get_tables_lenient(
        &self,
        include_indexes: bool,
    ) -> Result<(Vec<TableDefinition>, Vec<ExplorerError>), ExplorerError> {
        let mut tables = Vec::new();
        let mut skipped = Vec::new();

        for entry in self.entries(ObjectKind::Table)? {
            let mut table = match self.parse_table(&entry) {
                Ok(table) => table,
                Err(err) if err.is_statement_error() => {
                    tracing::warn!(table = %entry.name, error = %err, "skipping table");
                    skipped.push(err);
                    continue;
                }
                Err(err) => return Err(err),
            };

            if include_indexes {
                for index_entry in self.index_entries(&entry.name)? {
                    match self.parse_index(&index_entry) {
                        Ok(index) => table.indexes.push(index),
                        Err(err) if err.is_statement_error() => {
                            tracing::warn!(index = %index_entry.name, error = %err, "skipping index");
                            skipped.push(err);
                        }
                        Err(err) => return Err(err),
                    }
                }
            }
            tables.push(table);
        }

        Ok((tables, skipped))
    }

    /// User entries of one kind, sorted by name.
    fn entries(&self, kind: ObjectKind) -> Result<Vec<CatalogEntry>, ExplorerError> {
        let mut entries: Vec<CatalogEntry> = self
            .catalog
            .entries()?
            .into_iter()
            .filter(|e| e.kind == kind && !e.is_internal())
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn index_entries(&self, table_name: &str) -> Result<Vec<CatalogEntry>, ExplorerError> {
        let mut entries = self.entries(ObjectKind::Index)?;
        entries.retain(|e| e.table_name == table_name);
        Ok(entries)
    }

    fn indexes_of(&self, table_name: &str) -> Result<Vec<IndexDefinition>, ExplorerError> {
        self.index_entries(table_name)?
            .iter()
            .map(|entry| self.parse_index(entry))
            .collect()
    }

    fn parse_table(&self, entry: &CatalogEntry) -> Result<TableDefinition, ExplorerError> {
        match self.parse_single(entry)? {
            Clause::Table(table) => Ok(table),
            Clause::Index(_) => Err(ExplorerError::UnexpectedClauses {
                name: entry.name.clone(),
                expected: "table",
                found: 1,
            }),
        }
    }

    fn parse_index(&self, entry: &CatalogEntry) -> Result<IndexDefinition, ExplorerError> {
        match self.parse_single(entry)? {
            Clause::Index(index) => Ok(index),
            Clause::Table(_) => Err(ExplorerError::UnexpectedClauses {
                name: entry.name.clone(),
                expected: "index",
                found: 1,
            }),
        }
    }

    fn parse_single(&self, entry: &CatalogEntry) -> Result<Clause, ExplorerError> {
        let mut clauses = self
            .parser
            .parse(&entry.sql)
            .map_err(|source| ExplorerError::Parse {
                name: entry.name.clone(),
                source,
            })?;

        if clauses.len() != 1 {
            let expected = match entry.kind {
                ObjectKind::Table => "table",
                ObjectKind::Index => "index",
            };
            return Err(ExplorerError::UnexpectedClauses {
                name: entry.name.clone(),
                expected,
                found: clauses.len(),
            });
        }
        Ok(clauses.remove(0))
    }
}
