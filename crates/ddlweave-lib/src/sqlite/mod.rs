//! SQLite dialect: bundled grammar, vertex factory and semantic actions.
//!
//! The parser is built once per process on first use:
//!
//! ```
//! let clauses = ddlweave_lib::sqlite::parse("CREATE TABLE t(id integer)").unwrap();
//! assert_eq!(clauses[0].as_table().unwrap().name, "t");
//! ```

mod factory;
mod hooks;
mod semantics;


use std::sync::OnceLock;

use ddlweave_core::Clause;

pub use factory::SqliteVertexFactory;
pub use hooks::SqliteHook;
pub use semantics::SqliteSemantics;

use crate::Error;
use crate::engine::DdlParser;
use crate::lexer::Lexer;

/// Grammar source for `CREATE TABLE` and `CREATE INDEX`.
pub const GRAMMAR: &str = include_str!("grammar.lisp");

pub type SqliteParser = DdlParser<SqliteSemantics>;

static PARSER: OnceLock<Result<SqliteParser, Error>> = OnceLock::new();

/// Shared SQLite parser. A construction failure is kept and returned on every call.
pub fn parser() -> Result<&'static SqliteParser, Error> {
    PARSER.get_or_init(build_parser).as_ref().map_err(Clone::clone)
}

/// Build a fresh SQLite parser, independent of the shared one.
pub fn build_parser() -> Result<SqliteParser, Error> {
    let parser = DdlParser::from_grammar(
        GRAMMAR,
        &SqliteVertexFactory::new(),
        Lexer::sqlite(),
        SqliteSemantics,
    )?;
    tracing::debug!(
        nodes = parser.graph().len(),
        reserved = parser.reserved_words().len(),
        "sqlite parser built"
    );
    Ok(parser)
}

/// Parse one SQLite DDL statement.
pub fn parse(sql: &str) -> Result<Vec<Clause>, Error> {
    parser()?.parse(sql)
}
