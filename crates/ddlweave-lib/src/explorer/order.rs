//! Ordering tables by foreign-key dependency.

use ddlweave_core::TableDefinition;
use indexmap::{IndexMap, IndexSet};

/// Order `tables` so that every table comes after the tables it references
/// (`independent_first`), or before them (`!independent_first`).
///
/// References to tables outside the list and to the table itself are ignored.
/// A reference cycle is broken at its table that comes first in the input.
pub fn arrange_tables(tables: Vec<TableDefinition>, independent_first: bool) -> Vec<TableDefinition> {
    let mut order = dependency_order(&tables);
    if !independent_first {
        order.reverse();
    }

    let mut slots: Vec<Option<TableDefinition>> = tables.into_iter().map(Some).collect();
    order.into_iter().filter_map(|i| slots[i].take()).collect()
}

/// Input positions in dependency order, independent tables first.
///
/// Tables are keyed by position so that two tables sharing a name both survive.
fn dependency_order(tables: &[TableDefinition]) -> Vec<usize> {
    let mut by_name: IndexMap<&str, Vec<usize>> = IndexMap::with_capacity(tables.len());
    for (i, table) in tables.iter().enumerate() {
        by_name.entry(table.name.as_str()).or_default().push(i);
    }

    let dependencies: Vec<IndexSet<usize>> = tables
        .iter()
        .map(|t| {
            t.referenced_tables()
                .into_iter()
                .filter(|&r| r != t.name)
                .filter_map(|r| by_name.get(r))
                .flatten()
                .copied()
                .collect()
        })
        .collect();

    let mut placed: IndexSet<usize> = IndexSet::with_capacity(tables.len());
    while placed.len() < tables.len() {
        let ready = (0..tables.len())
            .find(|i| !placed.contains(i) && dependencies[*i].iter().all(|d| placed.contains(d)));
        let next = match ready {
            Some(i) => i,
            None => {
                // Cycle: break it at the first table still waiting.
                let Some(i) = (0..tables.len()).find(|i| !placed.contains(i)) else {
                    break;
                };
                tracing::debug!(table = tables[i].name.as_str(), "reference cycle");
                i
            }
        };
        placed.insert(next);
    }

    placed.into_iter().collect()
}
