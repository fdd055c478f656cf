use ddlweave_core::{
    ColumnDefinition, ForeignKeyDefinition, IdentityDefinition, IndexColumn, IndexDefinition,
    PrimaryKeyDefinition, SortDirection, TableDefinition, TypeDefinition,
};

use crate::engine::{AccumulatorError, HookError, ParsingContext, Semantics, SyntaxError};
use crate::lexer::Token;

use super::hooks::SqliteHook;

/// Column property marking `PRIMARY KEY` written inline. Resolved at `table-end`.
pub(crate) const INLINE_PRIMARY_KEY: &str = "#inline-primary-key";

/// Table property holding a `CONSTRAINT name` until the constraint it names starts.
pub(crate) const LAST_CONSTRAINT_NAME: &str = "#last-constraint-name";

/// Builds tables and indexes from SQLite `CREATE` statements.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteSemantics;

impl Semantics for SqliteSemantics {
    type Hook = SqliteHook;

    fn apply(
        &self,
        hook: SqliteHook,
        ctx: &mut ParsingContext<'_, '_>,
    ) -> Result<(), HookError> {
        match hook {
            SqliteHook::DoCreateTable => {
                ctx.result_mut().add_clause(TableDefinition::default());
            }
            SqliteHook::TableName => {
                let name = text(ctx)?;
                ctx.result_mut().current_table()?.name = name;
            }
            SqliteHook::ColumnName => {
                let name = text(ctx)?;
                ctx.result_mut()
                    .current_table()?
                    .columns
                    .push(ColumnDefinition::new(name));
            }
            SqliteHook::TypeName => {
                let name = text(ctx)?;
                ctx.result_mut().current_column()?.ty = TypeDefinition::new(name);
            }
            SqliteHook::TypeSize => {
                let size = type_argument(ctx.require_token()?)?;
                ctx.result_mut().current_column()?.ty.size = Some(size);
            }
            SqliteHook::TypeScale => {
                let scale = type_argument(ctx.require_token()?)?;
                let ty = &mut ctx.result_mut().current_column()?.ty;
                ty.precision = ty.size.take();
                ty.scale = Some(scale);
            }
            SqliteHook::Null => ctx.result_mut().current_column()?.is_nullable = true,
            SqliteHook::NotNull => ctx.result_mut().current_column()?.is_nullable = false,
            SqliteHook::InlinePrimaryKey => {
                ctx.result_mut()
                    .current_column()?
                    .properties
                    .insert(INLINE_PRIMARY_KEY.to_string(), String::new());
            }
            SqliteHook::Autoincrement => {
                ctx.result_mut().current_column()?.identity =
                    Some(IdentityDefinition::new("1", "1"));
            }
            SqliteHook::DefaultNull => set_default(ctx, "NULL".to_string())?,
            SqliteHook::DefaultInteger => {
                let value = text(ctx)?;
                set_default(ctx, value)?;
            }
            SqliteHook::DefaultString => {
                let value = quote_string(&text(ctx)?);
                set_default(ctx, value)?;
            }
            SqliteHook::DefaultKeyword => {
                let value = text(ctx)?.to_ascii_uppercase();
                set_default(ctx, value)?;
            }
            SqliteHook::ConstraintName => {
                let name = text(ctx)?;
                ctx.result_mut()
                    .current_table()?
                    .properties
                    .insert(LAST_CONSTRAINT_NAME.to_string(), name);
            }
            SqliteHook::DoPrimaryKey => {
                let span = ctx.token().map(|token| token.span);
                let table = ctx.result_mut().current_table()?;
                if table.primary_key.is_some() {
                    return Err(SyntaxError::ConflictingPrimaryKey {
                        table: table.name.clone(),
                        span,
                    }
                    .into());
                }
                let name = table.properties.shift_remove(LAST_CONSTRAINT_NAME);
                table.primary_key = Some(PrimaryKeyDefinition::new(name));
            }
            SqliteHook::PkColumnName => {
                let name = text(ctx)?;
                ctx.result_mut().current_primary_key()?.columns.push(name);
            }
            SqliteHook::DoForeignKey => {
                let table = ctx.result_mut().current_table()?;
                let name = table.properties.shift_remove(LAST_CONSTRAINT_NAME);
                table.foreign_keys.push(ForeignKeyDefinition::new(name));
            }
            SqliteHook::FkColumnName => {
                let name = text(ctx)?;
                ctx.result_mut().current_foreign_key()?.column_names.push(name);
            }
            SqliteHook::FkReferencedTableName => {
                let name = text(ctx)?;
                ctx.result_mut().current_foreign_key()?.referenced_table_name = name;
            }
            SqliteHook::FkReferencedColumnName => {
                let name = text(ctx)?;
                ctx.result_mut()
                    .current_foreign_key()?
                    .referenced_column_names
                    .push(name);
            }
            SqliteHook::TableEnd => resolve_inline_primary_key(ctx.result_mut().current_table()?)?,
            SqliteHook::DoCreateUniqueIndex => {
                ctx.result_mut().add_clause(IndexDefinition::new(true));
            }
            SqliteHook::DoCreateIndex => {
                ctx.result_mut().add_clause(IndexDefinition::new(false));
            }
            SqliteHook::IndexName => {
                let name = text(ctx)?;
                ctx.result_mut().current_index()?.name = name;
            }
            SqliteHook::IndexTableName => {
                let name = text(ctx)?;
                ctx.result_mut().current_index()?.table_name = name;
            }
            SqliteHook::IndexColumnName => {
                let name = text(ctx)?;
                ctx.result_mut()
                    .current_index()?
                    .columns
                    .push(IndexColumn::new(name, SortDirection::Ascending));
            }
            SqliteHook::IndexColumnAscOrDesc => {
                let direction: SortDirection = text(ctx)?.parse().map_err(AccumulatorError::from)?;
                ctx.result_mut().current_index_column()?.direction = direction;
            }
        }
        Ok(())
    }
}

fn text(ctx: &ParsingContext<'_, '_>) -> Result<String, AccumulatorError> {
    Ok(ctx.require_token()?.text().into_owned())
}

fn set_default(ctx: &mut ParsingContext<'_, '_>, value: String) -> Result<(), AccumulatorError> {
    ctx.result_mut().current_column()?.default = Some(value);
    Ok(())
}

fn type_argument(token: &Token) -> Result<u32, SyntaxError> {
    token
        .as_integer()
        .and_then(|value| u32::try_from(value).ok())
        .ok_or_else(|| SyntaxError::InvalidValue {
            found: token.describe(),
            span: token.span,
            reason: "type arguments must be non-negative integers",
        })
}

/// `it's` → `'it''s'`
pub(crate) fn quote_string(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Turn the inline `PRIMARY KEY` marker into the table's key and drop the marker.
fn resolve_inline_primary_key(table: &mut TableDefinition) -> Result<(), SyntaxError> {
    let marked: Vec<String> = table
        .columns
        .iter_mut()
        .filter_map(|column| {
            column.properties.shift_remove(INLINE_PRIMARY_KEY)?;
            Some(column.name.clone())
        })
        .collect();

    match marked.len() {
        0 => Ok(()),
        1 if table.primary_key.is_none() => {
            let mut key = PrimaryKeyDefinition::new(None);
            key.columns = marked;
            table.primary_key = Some(key);
            Ok(())
        }
        _ => Err(SyntaxError::ConflictingPrimaryKey {
            table: table.name.clone(),
            span: None,
        }),
    }
}
