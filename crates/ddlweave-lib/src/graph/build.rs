//! Arena graph and its construction from a mold tree.
//!
//! Nodes live in a flat vector addressed by `NodeId`, so the cycles introduced by
//! shared names are plain index edges.

use std::collections::VecDeque;

use indexmap::IndexMap;
use tracing::instrument;

use crate::grammar::{GrammarVertexMold, MoldKind};

use super::error::GraphConstructionError;
use super::node::{Node, NodeId, NodeKind};

type Result<T> = std::result::Result<T, GraphConstructionError>;

/// Matcher graph with a designated root. `H` is the hook type attached by wiring.
#[derive(Debug, Clone)]
pub struct Graph<H> {
    nodes: Vec<Node<H>>,
    root: NodeId,
}

impl<H> Default for Graph<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Graph<H> {
    /// Empty graph. The first node added becomes the root.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: 0,
        }
    }

    pub fn add_node(&mut self, node: Node<H>) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(node);
        id
    }

    /// Add an edge. Repeated edges are ignored; declaration order is kept.
    pub fn connect(&mut self, from: NodeId, to: NodeId) {
        let successors = &mut self.nodes[from as usize].successors;
        if !successors.contains(&to) {
            successors.push(to);
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn set_root(&mut self, root: NodeId) {
        self.root = root;
    }

    pub fn node(&self, id: NodeId) -> &Node<H> {
        &self.nodes[id as usize]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<H> {
        &mut self.nodes[id as usize]
    }

    pub fn successors(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id as usize].successors
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<H>)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as NodeId, n))
    }

    /// All nodes carrying `name`. Built graphs have at most one per name.
    pub fn nodes_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = NodeId> + 'a {
        self.iter()
            .filter(move |(_, node)| node.name.as_deref() == Some(name))
            .map(|(id, _)| id)
    }

    /// Nodes reachable from the root, breadth-first.
    pub fn reachable(&self) -> Vec<NodeId> {
        if self.nodes.is_empty() {
            return Vec::new();
        }

        let mut seen = vec![false; self.nodes.len()];
        let mut order = Vec::new();
        let mut queue = VecDeque::from([self.root]);
        seen[self.root as usize] = true;

        while let Some(id) = queue.pop_front() {
            order.push(id);
            for &next in self.successors(id) {
                if !seen[next as usize] {
                    seen[next as usize] = true;
                    queue.push_back(next);
                }
            }
        }
        order
    }
}

/// Dialect hook turning molds into node kinds.
pub trait VertexFactory {
    fn create(&self, mold: &GrammarVertexMold) -> Result<NodeKind> {
        match &mold.kind {
            MoldKind::Idle => Ok(NodeKind::Idle),
            MoldKind::End => Ok(NodeKind::End),
            MoldKind::Identifier => Ok(NodeKind::Identifier),
            MoldKind::Integer => Ok(NodeKind::Integer),
            MoldKind::String => Ok(NodeKind::String),
            MoldKind::MultiWord(words) => Ok(NodeKind::MultiWord(words.clone())),
            MoldKind::Literal(text) => self.create_literal(text, mold),
        }
    }

    /// Keyword or punctuation literal. The only part every dialect must decide.
    fn create_literal(&self, text: &str, mold: &GrammarVertexMold) -> Result<NodeKind>;
}

/// Build the graph for `root`, merging same-named molds into one node.
#[instrument(name = "graph::build", level = "trace", skip_all)]
pub fn build<H>(root: &GrammarVertexMold, factory: &impl VertexFactory) -> Result<Graph<H>> {
    let mut builder = Builder {
        graph: Graph::new(),
        named: IndexMap::new(),
        factory,
    };
    let root_id = builder.visit(root)?;
    builder.graph.set_root(root_id);

    tracing::debug!(
        nodes = builder.graph.len(),
        named = builder.named.len(),
        "graph built"
    );
    Ok(builder.graph)
}

struct Builder<'m, 'f, H, F> {
    graph: Graph<H>,
    named: IndexMap<&'m str, (NodeId, &'m GrammarVertexMold)>,
    factory: &'f F,
}

impl<'m, H, F: VertexFactory> Builder<'m, '_, H, F> {
    fn visit(&mut self, mold: &'m GrammarVertexMold) -> Result<NodeId> {
        let id = match mold.name.as_deref() {
            Some(name) => match self.named.get(name) {
                Some(&(id, first)) => {
                    check_compatible(name, first, mold)?;
                    id
                }
                None => {
                    let id = self.materialize(mold)?;
                    self.named.insert(name, (id, mold));
                    id
                }
            },
            None => self.materialize(mold)?,
        };

        for child in &mold.children {
            let child_id = self.visit(child)?;
            self.graph.connect(id, child_id);
        }
        Ok(id)
    }

    fn materialize(&mut self, mold: &GrammarVertexMold) -> Result<NodeId> {
        let kind = self.factory.create(mold)?;
        let mut node = Node::new(kind);
        node.name = mold.name.clone();
        Ok(self.graph.add_node(node))
    }
}

fn check_compatible(name: &str, first: &GrammarVertexMold, next: &GrammarVertexMold) -> Result<()> {
    let compatible = match (&first.kind, &next.kind) {
        (MoldKind::Literal(a), MoldKind::Literal(b)) => a.eq_ignore_ascii_case(b),
        (MoldKind::MultiWord(a), MoldKind::MultiWord(b)) => b.is_empty() || a == b,
        (a, b) => std::mem::discriminant(a) == std::mem::discriminant(b),
    };
    if compatible {
        return Ok(());
    }
    Err(GraphConstructionError::IncompatibleName {
        name: name.to_string(),
        first: first.kind.to_string(),
        second: next.kind.to_string(),
        span: next.span.clone(),
    })
}
