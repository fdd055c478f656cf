//! DDL text generation from the schema model.
//!
//! The output is laid out one column or constraint per line and is accepted by the
//! SQLite parser, which turns it back into an equal model:
//!
//! ```text
//! CREATE TABLE [t](
//!     [id] integer NOT NULL PRIMARY KEY AUTOINCREMENT,
//!     [name] text NULL DEFAULT 'x',
//!     CONSTRAINT [FK_t_u] FOREIGN KEY([u_id]) REFERENCES [u]([id]))
//! ```

mod error;


use ddlweave_core::{
    ColumnDefinition, ForeignKeyDefinition, IndexDefinition, PrimaryKeyDefinition,
    TableDefinition,
};

pub use error::ScriptError;

use crate::lexer::IdentifierDelimiter;

const INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptBuilder {
    delimiter: IdentifierDelimiter,
}

impl Default for ScriptBuilder {
    fn default() -> Self {
        Self::sqlite()
    }
}

impl ScriptBuilder {
    pub fn new(delimiter: IdentifierDelimiter) -> Self {
        Self { delimiter }
    }

    /// Bracket-quoted identifiers.
    pub fn sqlite() -> Self {
        Self::new(IdentifierDelimiter::Brackets)
    }

    pub fn delimiter(&self) -> IdentifierDelimiter {
        self.delimiter
    }

    /// Quote `name` with the configured delimiter. Brackets cannot escape `]`, so
    /// such names fall back to double quotes.
    pub fn quote(&self, name: &str) -> String {
        let delimiter = if self.delimiter.escapes_by_doubling() || !name.contains(']') {
            self.delimiter
        } else {
            IdentifierDelimiter::DoubleQuotes
        };

        let (open, close) = (delimiter.open(), delimiter.close());
        let body = if delimiter.escapes_by_doubling() {
            name.replace(close, &format!("{close}{close}"))
        } else {
            name.to_string()
        };
        format!("{open}{body}{close}")
    }

    /// Type names stay bare unless the parser would not read them back as one
    /// identifier.
    fn type_name(&self, name: &str) -> String {
        let mut chars = name.chars();
        let plain = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        let reserved = crate::sqlite::parser().map_or(true, |p| p.reserved_words().contains(name));

        if plain && !reserved {
            name.to_string()
        } else {
            self.quote(name)
        }
    }

    pub fn build_create_table(
        &self,
        table: &TableDefinition,
        include_constraints: bool,
    ) -> Result<String, ScriptError> {
        if table.columns.is_empty() {
            return Err(ScriptError::EmptyColumnList {
                owner: table.name.clone(),
                what: "table",
            });
        }

        let identity = self.identity_column(table)?;

        let mut lines = Vec::with_capacity(table.columns.len() + table.foreign_keys.len() + 1);
        for column in &table.columns {
            let inline_key = identity.is_some_and(|name| name == column.name);
            lines.push(self.column(table, column, inline_key)?);
        }

        if include_constraints {
            if let Some(key) = &table.primary_key
                && identity.is_none()
            {
                lines.push(self.primary_key(table, key)?);
            }
            for fk in &table.foreign_keys {
                lines.push(self.foreign_key(table, fk)?);
            }
        }

        let body = lines
            .iter()
            .map(|line| format!("{INDENT}{line}"))
            .collect::<Vec<_>>()
            .join(",\n");
        Ok(format!("CREATE TABLE {}(\n{body})", self.quote(&table.name)))
    }

    pub fn build_create_index(&self, index: &IndexDefinition) -> Result<String, ScriptError> {
        if index.columns.is_empty() {
            return Err(ScriptError::EmptyColumnList {
                owner: index.name.clone(),
                what: "index",
            });
        }

        let columns = index
            .columns
            .iter()
            .map(|c| format!("{} {}", self.quote(&c.name), c.direction))
            .collect::<Vec<_>>()
            .join(", ");
        let unique = if index.is_unique { "UNIQUE " } else { "" };

        Ok(format!(
            "CREATE {unique}INDEX {} ON {}({columns})",
            self.quote(&index.name),
            self.quote(&index.table_name)
        ))
    }

    /// The table with its constraints, followed by one statement per index.
    pub fn build_table_with_indexes(
        &self,
        table: &TableDefinition,
    ) -> Result<Vec<String>, ScriptError> {
        let mut statements = vec![self.build_create_table(table, true)?];
        for index in &table.indexes {
            statements.push(self.build_create_index(index)?);
        }
        Ok(statements)
    }

    /// SQLite only allows `AUTOINCREMENT` on an inline single-column primary key.
    fn identity_column<'t>(&self, table: &'t TableDefinition) -> Result<Option<&'t str>, ScriptError> {
        let Some(column) = table.columns.iter().find(|c| c.identity.is_some()) else {
            return Ok(None);
        };

        match &table.primary_key {
            Some(key) if key.columns.len() == 1 && key.columns[0] == column.name => {
                Ok(Some(column.name.as_str()))
            }
            _ => Err(ScriptError::IdentityWithoutPrimaryKey {
                table: table.name.clone(),
                column: column.name.clone(),
            }),
        }
    }

    fn column(
        &self,
        table: &TableDefinition,
        column: &ColumnDefinition,
        inline_key: bool,
    ) -> Result<String, ScriptError> {
        if column.ty.name.is_empty() {
            return Err(ScriptError::MissingTypeName {
                table: table.name.clone(),
                column: column.name.clone(),
            });
        }

        let mut ty = column.ty.clone();
        ty.name = self.type_name(&ty.name);
        let mut line = format!("{} {ty}", self.quote(&column.name));
        line.push_str(if column.is_nullable { " NULL" } else { " NOT NULL" });
        if inline_key {
            line.push_str(" PRIMARY KEY AUTOINCREMENT");
        }
        if let Some(default) = &column.default {
            line.push_str(" DEFAULT ");
            line.push_str(default);
        }
        Ok(line)
    }

    fn primary_key(
        &self,
        table: &TableDefinition,
        key: &PrimaryKeyDefinition,
    ) -> Result<String, ScriptError> {
        if key.columns.is_empty() {
            return Err(ScriptError::EmptyColumnList {
                owner: table.name.clone(),
                what: "primary key",
            });
        }

        Ok(format!(
            "{}PRIMARY KEY({})",
            self.constraint_prefix(key.name.as_deref()),
            self.column_list(&key.columns)
        ))
    }

    fn foreign_key(
        &self,
        table: &TableDefinition,
        fk: &ForeignKeyDefinition,
    ) -> Result<String, ScriptError> {
        if fk.column_names.is_empty() {
            return Err(ScriptError::EmptyColumnList {
                owner: table.name.clone(),
                what: "foreign key",
            });
        }
        if fk.column_names.len() != fk.referenced_column_names.len() {
            return Err(ScriptError::ForeignKeyColumnMismatch {
                table: table.name.clone(),
                name: fk.name.clone(),
                local: fk.column_names.len(),
                referenced: fk.referenced_column_names.len(),
            });
        }

        Ok(format!(
            "{}FOREIGN KEY({}) REFERENCES {}({})",
            self.constraint_prefix(fk.name.as_deref()),
            self.column_list(&fk.column_names),
            self.quote(&fk.referenced_table_name),
            self.column_list(&fk.referenced_column_names)
        ))
    }

    fn constraint_prefix(&self, name: Option<&str>) -> String {
        name.map_or_else(String::new, |name| {
            format!("CONSTRAINT {} ", self.quote(name))
        })
    }

    fn column_list(&self, names: &[String]) -> String {
        names
            .iter()
            .map(|name| self.quote(name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
