//! Text dump of a graph for snapshot tests and the CLI.

use std::collections::HashSet;
use std::fmt::{self, Debug, Write};

use super::{Graph, NodeId};

/// Printer for [`Graph`].
///
/// One line per node: `N3: (identifier) @table-name +TableName → N4, N9`.
pub struct GraphPrinter<'a, H> {
    graph: &'a Graph<H>,
    only_reachable: bool,
    show_hooks: bool,
}

impl<'a, H: Debug> GraphPrinter<'a, H> {
    pub fn new(graph: &'a Graph<H>) -> Self {
        Self {
            graph,
            only_reachable: false,
            show_hooks: true,
        }
    }

    /// Skip nodes the root cannot reach.
    pub fn only_reachable(mut self, value: bool) -> Self {
        self.only_reachable = value;
        self
    }

    pub fn show_hooks(mut self, value: bool) -> Self {
        self.show_hooks = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String) -> fmt::Result {
        let reachable: Option<HashSet<NodeId>> = self
            .only_reachable
            .then(|| self.graph.reachable().into_iter().collect());

        for (id, node) in self.graph.iter() {
            if reachable.as_ref().is_some_and(|r| !r.contains(&id)) {
                continue;
            }

            let root = if id == self.graph.root() { "*" } else { "" };
            write!(w, "N{id}{root}: {}", node.kind)?;
            if let Some(name) = &node.name {
                write!(w, " @{name}")?;
            }
            if self.show_hooks
                && let Some(hook) = &node.hook
            {
                write!(w, " +{hook:?}")?;
            }

            let successors = node.successors();
            if successors.is_empty() {
                write!(w, " → ∅")?;
            } else {
                let list: Vec<_> = successors.iter().map(|s| format!("N{s}")).collect();
                write!(w, " → {}", list.join(", "))?;
            }
            writeln!(w)?;
        }
        Ok(())
    }
}
