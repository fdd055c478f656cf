//! Matcher graph built from a compiled grammar.
//!
//! # Architecture
//!
//! ```text
//! grammar text → compile → GrammarVertexMold → build (VertexFactory) → Graph
//!                                                              ├→ ReservedWords
//!                                                              └→ wire (hooks)
//! ```
//!
//! Molds sharing a name collapse into a single node, so a tree-shaped grammar
//! yields a graph with loops (column lists, attribute lists) and shared tails.

mod build;
mod dump;
mod error;
mod keywords;
mod node;

#[cfg(test)]
mod build_tests;
#[cfg(test)]
mod keywords_tests;

pub use build::{Graph, VertexFactory, build};
pub use dump::GraphPrinter;
pub use error::GraphConstructionError;
pub use keywords::ReservedWords;
pub use node::{Node, NodeId, NodeKind};
