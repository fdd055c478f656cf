//! Schema introspection over stored DDL.
//!
//! Engines such as SQLite keep only the original `CREATE` text of each object.
//! The explorer reads those rows from a [`Catalog`], runs them through the SQLite
//! parser and hands back structured tables and indexes.

mod catalog;
mod error;
mod order;
mod schema;

#[cfg(test)]
mod explorer_tests;

pub use catalog::{Catalog, CatalogEntry, CatalogError, MemoryCatalog, ObjectKind};
pub use error::ExplorerError;
pub use order::arrange_tables;
pub use schema::SchemaExplorer;
