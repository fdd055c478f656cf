//! Typed semantic actions and their binding to graph nodes.

use std::fmt::Debug;

use crate::graph::Graph;

use super::context::ParsingContext;
use super::error::{ActionWiringError, HookError};

/// A dialect's closed set of semantic actions, each bound to the graph node of the
/// same name.
pub trait Hook: Copy + Eq + Debug + Send + Sync + 'static {
    const ALL: &'static [Self];

    fn node_name(self) -> &'static str;
}

/// Callbacks for every hook of a dialect.
pub trait Semantics {
    type Hook: Hook;

    fn apply(
        &self,
        hook: Self::Hook,
        ctx: &mut ParsingContext<'_, '_>,
    ) -> Result<(), HookError>;
}

/// Attach every hook of `H` to the node named by [`Hook::node_name`].
pub fn wire<H: Hook>(graph: &mut Graph<H>) -> Result<(), ActionWiringError> {
    wire_named(graph, H::ALL.iter().map(|&hook| (hook.node_name(), hook)))
}

/// Attach hooks from an explicit name table.
pub fn wire_named<'n, H>(
    graph: &mut Graph<H>,
    table: impl IntoIterator<Item = (&'n str, H)>,
) -> Result<(), ActionWiringError> {
    let mut wired = 0usize;
    for (name, hook) in table {
        let ids: Vec<_> = graph.nodes_named(name).collect();
        let id = match ids.as_slice() {
            [id] => *id,
            [] => {
                return Err(ActionWiringError::MissingNode {
                    name: name.to_string(),
                });
            }
            _ => {
                return Err(ActionWiringError::AmbiguousNode {
                    name: name.to_string(),
                    count: ids.len(),
                });
            }
        };

        let node = graph.node_mut(id);
        if node.hook.is_some() {
            return Err(ActionWiringError::DuplicateHook {
                name: name.to_string(),
            });
        }
        node.hook = Some(hook);
        wired += 1;
    }

    tracing::trace!(hooks = wired, "hooks wired");
    Ok(())
}
