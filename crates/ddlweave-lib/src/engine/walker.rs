//! Graph walker driving tokens through a wired grammar graph.

use std::collections::HashSet;

use ddlweave_core::Clause;
use tracing::instrument;

use crate::Error;
use crate::grammar::compile;
use crate::graph::{Graph, GraphPrinter, NodeId, NodeKind, ReservedWords, VertexFactory, build};
use crate::lexer::{Lexer, Token};

use super::actions::{Hook, Semantics, wire};
use super::context::ParsingContext;
use super::error::{HookError, SyntaxError};
use super::result::ParsingResult;

/// Per-statement step budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FuelLimits {
    /// Maximum transitions per statement (default: 1,000,000).
    pub(crate) exec_fuel: u32,
}

impl Default for FuelLimits {
    fn default() -> Self {
        Self {
            exec_fuel: 1_000_000,
        }
    }
}

impl FuelLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = fuel;
        self
    }

    pub fn get_exec_fuel(&self) -> u32 {
        self.exec_fuel
    }
}

/// Reusable, immutable parser for one dialect.
///
/// Starting from the root, each step picks the single outgoing edge that accepts the
/// lookahead token. Idle nodes accept whatever one of their successors accepts and
/// consume nothing; `End` accepts only an exhausted stream.
#[derive(Debug)]
pub struct DdlParser<S: Semantics> {
    lexer: Lexer,
    graph: Graph<S::Hook>,
    reserved: ReservedWords,
    semantics: S,
    limits: FuelLimits,
}

impl<S: Semantics> DdlParser<S> {
    /// Wrap an already wired graph. Reserved words are derived from it.
    pub fn new(lexer: Lexer, graph: Graph<S::Hook>, semantics: S) -> Self {
        let reserved = ReservedWords::resolve(&graph);
        Self {
            lexer,
            graph,
            reserved,
            semantics,
            limits: FuelLimits::default(),
        }
    }

    /// Compile, build and wire `grammar` in one go.
    pub fn from_grammar(
        grammar: &str,
        factory: &impl VertexFactory,
        lexer: Lexer,
        semantics: S,
    ) -> Result<Self, Error> {
        let mold = compile(grammar)?;
        let mut graph = build(&mold, factory)?;
        wire(&mut graph)?;
        Ok(Self::new(lexer, graph, semantics))
    }

    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.limits = self.limits.exec_fuel(fuel);
        self
    }

    pub fn lexer(&self) -> &Lexer {
        &self.lexer
    }

    pub fn graph(&self) -> &Graph<S::Hook> {
        &self.graph
    }

    pub fn reserved_words(&self) -> &ReservedWords {
        &self.reserved
    }

    pub fn semantics(&self) -> &S {
        &self.semantics
    }

    pub fn dump_graph(&self) -> String {
        GraphPrinter::new(&self.graph).dump()
    }

    pub fn tokenize(&self, sql: &str) -> Result<Vec<Token>, Error> {
        Ok(self.lexer.tokenize(sql)?)
    }

    /// Parse one statement into a fresh result.
    pub fn parse(&self, sql: &str) -> Result<Vec<Clause>, Error> {
        let mut result = ParsingResult::new();
        self.parse_into(sql, &mut result)?;
        Ok(result.into_clauses())
    }

    /// Parse one statement, appending its clauses to `result`.
    pub fn parse_into(&self, sql: &str, result: &mut ParsingResult) -> Result<(), Error> {
        let tokens = self.lexer.tokenize(sql)?;
        self.parse_tokens(&tokens, result)
    }

    /// Walk one statement. On failure the clauses this call started are removed
    /// again, so `result` only ever holds complete clauses.
    #[instrument(name = "parser::parse_tokens", level = "debug", skip_all, fields(tokens = tokens.len()))]
    pub fn parse_tokens(&self, tokens: &[Token], result: &mut ParsingResult) -> Result<(), Error> {
        let watermark = result.len();
        tracing::debug!(clauses = watermark, version = result.version(), "statement start");

        match self.walk(tokens, result) {
            Ok(()) => {
                tracing::debug!(
                    clauses = result.len(),
                    version = result.version(),
                    "statement finished"
                );
                Ok(())
            }
            Err(err) => {
                result.rollback(watermark);
                tracing::debug!(error = %err, "statement rolled back");
                Err(err)
            }
        }
    }

    fn walk(&self, tokens: &[Token], result: &mut ParsingResult) -> Result<(), Error> {
        let root = [self.graph.root()];
        let mut fuel = self.limits.exec_fuel;
        let mut position = 0;
        let mut current: Option<NodeId> = None;

        loop {
            if fuel == 0 {
                return Err(Error::ExecFuelExhausted(self.limits.exec_fuel));
            }
            fuel -= 1;

            let lookahead = tokens.get(position);
            let candidates = match current {
                Some(id) => self.graph.successors(id),
                None => &root[..],
            };
            let next = self.select(candidates, lookahead)?;
            let node = self.graph.node(next);

            if node.kind.consumes() {
                position += 1;
            }
            result.bump_version();
            tracing::trace!(
                node = next,
                name = node.name.as_deref().unwrap_or(""),
                kind = %node.kind,
                "transition"
            );

            if let Some(hook) = node.hook {
                let mut ctx = ParsingContext::new(tokens, position, lookahead, result);
                self.semantics.apply(hook, &mut ctx)?;
            }

            if node.kind == NodeKind::End {
                return Ok(());
            }
            current = Some(next);
        }
    }

    fn select(&self, candidates: &[NodeId], lookahead: Option<&Token>) -> Result<NodeId, Error> {
        let accepting: Vec<NodeId> = candidates
            .iter()
            .copied()
            .filter(|&id| self.accepts(id, lookahead, &mut HashSet::new()))
            .collect();

        match accepting.as_slice() {
            [single] => Ok(*single),
            [] => Err(self.syntax_error(candidates, lookahead).into()),
            _ => Err(Error::AmbiguousTransition {
                found: describe(lookahead),
                nodes: accepting.iter().map(|&id| self.label(id)).collect(),
                span: lookahead.map(|t| t.span),
            }),
        }
    }

    fn accepts(&self, id: NodeId, lookahead: Option<&Token>, visited: &mut HashSet<NodeId>) -> bool {
        let node = self.graph.node(id);
        match node.kind {
            NodeKind::Idle => {
                if !visited.insert(id) {
                    return false;
                }
                node.successors()
                    .iter()
                    .any(|&next| self.accepts(next, lookahead, visited))
            }
            NodeKind::End => lookahead.is_none(),
            _ => lookahead.is_some_and(|token| node.kind.matches(token, &self.reserved)),
        }
    }

    fn syntax_error(&self, candidates: &[NodeId], lookahead: Option<&Token>) -> SyntaxError {
        let mut expected = Vec::new();
        let mut visited = HashSet::new();
        for &id in candidates {
            self.collect_expected(id, &mut visited, &mut expected);
        }

        match lookahead {
            Some(token) => SyntaxError::UnexpectedToken {
                found: token.describe(),
                span: token.span,
                expected,
            },
            None => SyntaxError::UnexpectedEnd { expected },
        }
    }

    fn collect_expected(&self, id: NodeId, visited: &mut HashSet<NodeId>, out: &mut Vec<String>) {
        if !visited.insert(id) {
            return;
        }
        let node = self.graph.node(id);
        if node.kind == NodeKind::Idle {
            for &next in node.successors() {
                self.collect_expected(next, visited, out);
            }
            return;
        }
        for description in node.kind.expected() {
            if !out.contains(&description) {
                out.push(description);
            }
        }
    }

    fn label(&self, id: NodeId) -> String {
        let node = self.graph.node(id);
        match &node.name {
            Some(name) => format!("N{id} @{name}"),
            None => format!("N{id} {}", node.kind),
        }
    }
}

fn describe(token: Option<&Token>) -> String {
    token.map_or_else(|| "end of input".to_string(), Token::describe)
}

/// Semantics with no hooks. Useful for recognising statements without building
/// anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSemantics;

/// The empty hook set of [`NoSemantics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoHook {}

impl Hook for NoHook {
    const ALL: &'static [Self] = &[];

    fn node_name(self) -> &'static str {
        match self {}
    }
}

impl Semantics for NoSemantics {
    type Hook = NoHook;

    fn apply(
        &self,
        hook: NoHook,
        _ctx: &mut ParsingContext<'_, '_>,
    ) -> Result<(), HookError> {
        match hook {}
    }
}
