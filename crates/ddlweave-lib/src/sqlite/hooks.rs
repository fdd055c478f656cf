use crate::engine::Hook;

/// Semantic actions of the SQLite grammar. Each is bound to the grammar node of the
/// same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqliteHook {
    DoCreateTable,
    TableName,
    ColumnName,
    TypeName,
    TypeSize,
    TypeScale,
    Null,
    NotNull,
    InlinePrimaryKey,
    Autoincrement,
    DefaultNull,
    DefaultInteger,
    DefaultString,
    DefaultKeyword,
    ConstraintName,
    DoPrimaryKey,
    PkColumnName,
    DoForeignKey,
    FkColumnName,
    FkReferencedTableName,
    FkReferencedColumnName,
    TableEnd,
    DoCreateUniqueIndex,
    DoCreateIndex,
    IndexName,
    IndexTableName,
    IndexColumnName,
    IndexColumnAscOrDesc,
}

impl Hook for SqliteHook {
    const ALL: &'static [Self] = &[
        SqliteHook::DoCreateTable,
        SqliteHook::TableName,
        SqliteHook::ColumnName,
        SqliteHook::TypeName,
        SqliteHook::TypeSize,
        SqliteHook::TypeScale,
        SqliteHook::Null,
        SqliteHook::NotNull,
        SqliteHook::InlinePrimaryKey,
        SqliteHook::Autoincrement,
        SqliteHook::DefaultNull,
        SqliteHook::DefaultInteger,
        SqliteHook::DefaultString,
        SqliteHook::DefaultKeyword,
        SqliteHook::ConstraintName,
        SqliteHook::DoPrimaryKey,
        SqliteHook::PkColumnName,
        SqliteHook::DoForeignKey,
        SqliteHook::FkColumnName,
        SqliteHook::FkReferencedTableName,
        SqliteHook::FkReferencedColumnName,
        SqliteHook::TableEnd,
        SqliteHook::DoCreateUniqueIndex,
        SqliteHook::DoCreateIndex,
        SqliteHook::IndexName,
        SqliteHook::IndexTableName,
        SqliteHook::IndexColumnName,
        SqliteHook::IndexColumnAscOrDesc,
    ];

    fn node_name(self) -> &'static str {
        match self {
            SqliteHook::DoCreateTable => "do-create-table",
            SqliteHook::TableName => "table-name",
            SqliteHook::ColumnName => "column-name",
            SqliteHook::TypeName => "type-name",
            SqliteHook::TypeSize => "type-size",
            SqliteHook::TypeScale => "type-scale",
            SqliteHook::Null => "null",
            SqliteHook::NotNull => "not-null",
            SqliteHook::InlinePrimaryKey => "inline-primary-key",
            SqliteHook::Autoincrement => "autoincrement",
            SqliteHook::DefaultNull => "default-null",
            SqliteHook::DefaultInteger => "default-integer",
            SqliteHook::DefaultString => "default-string",
            SqliteHook::DefaultKeyword => "default-keyword",
            SqliteHook::ConstraintName => "constraint-name",
            SqliteHook::DoPrimaryKey => "do-primary-key",
            SqliteHook::PkColumnName => "pk-column-name",
            SqliteHook::DoForeignKey => "do-foreign-key",
            SqliteHook::FkColumnName => "fk-column-name",
            SqliteHook::FkReferencedTableName => "fk-referenced-table-name",
            SqliteHook::FkReferencedColumnName => "fk-referenced-column-name",
            SqliteHook::TableEnd => "table-end",
            SqliteHook::DoCreateUniqueIndex => "do-create-unique-index",
            SqliteHook::DoCreateIndex => "do-create-index",
            SqliteHook::IndexName => "index-name",
            SqliteHook::IndexTableName => "index-table-name",
            SqliteHook::IndexColumnName => "index-column-name",
            SqliteHook::IndexColumnAscOrDesc => "index-column-asc-or-desc",
        }
    }
}
