/// A schema object that cannot be written back as DDL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("foreign key {} of table `{table}` has {local} local and {referenced} referenced columns", display_name(name))]
    ForeignKeyColumnMismatch {
        table: String,
        name: Option<String>,
        local: usize,
        referenced: usize,
    },

    #[error("{what} of `{owner}` has no columns")]
    EmptyColumnList { owner: String, what: &'static str },

    #[error("identity column `{column}` of table `{table}` must be the table's only primary key column")]
    IdentityWithoutPrimaryKey { table: String, column: String },

    #[error("column `{column}` of table `{table}` has no type")]
    MissingTypeName { table: String, column: String },
}

fn display_name(name: &Option<String>) -> String {
    match name {
        Some(name) => format!("`{name}`"),
        None => "(unnamed)".to_string(),
    }
}
