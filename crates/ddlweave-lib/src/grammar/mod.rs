//! Declarative grammar language.
//!
//! A grammar is a single S-expression tree. Each form names a node kind, an optional
//! node name and the forms that may follow it:
//!
//! ```text
//! (IDLE root
//!   ("CREATE" create
//!     ("TABLE" do-create-table (IDENTIFIER table-name ...))))
//! ```
//!
//! Names matter: two forms with the same name become one graph node, which is how
//! the tree expresses loops and shared tails. See [`crate::graph::build`].

mod compile;
mod error;
mod mold;
mod token;


pub use compile::compile;
pub use error::GrammarCompileError;
pub use mold::{GrammarVertexMold, MoldKind};
pub use token::GrammarToken;
