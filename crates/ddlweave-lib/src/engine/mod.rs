//! Parsing engine: hook wiring, the graph walker and the accumulator hooks write to.

mod actions;
mod context;
mod error;
mod result;
mod walker;


pub use actions::{Hook, Semantics, wire, wire_named};
pub use context::ParsingContext;
pub use error::{AccumulatorError, ActionWiringError, HookError, SyntaxError};
pub use result::ParsingResult;
pub use walker::{DdlParser, FuelLimits, NoHook, NoSemantics};
