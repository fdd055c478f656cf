use std::collections::BTreeSet;

use super::{Graph, NodeKind};

/// Words that can never be a bare identifier: every literal keyword the grammar
/// can reach, lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedWords {
    words: BTreeSet<String>,
}

impl ReservedWords {
    pub fn resolve<H>(graph: &Graph<H>) -> Self {
        let mut words = BTreeSet::new();
        for id in graph.reachable() {
            match &graph.node(id).kind {
                NodeKind::ExactWord(word) => {
                    words.insert(word.to_ascii_lowercase());
                }
                NodeKind::MultiWord(alternatives) => {
                    words.extend(alternatives.iter().map(|w| w.to_ascii_lowercase()));
                }
                _ => {}
            }
        }
        tracing::trace!(count = words.len(), "reserved words resolved");
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_lowercase())
    }

    /// Sorted, lower-cased.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for ReservedWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }
}
