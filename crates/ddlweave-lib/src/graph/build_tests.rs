use indoc::indoc;

use super::*;
use crate::grammar::{GrammarVertexMold, compile};

struct WordFactory;

impl VertexFactory for WordFactory {
    fn create_literal(
        &self,
        text: &str,
        mold: &GrammarVertexMold,
    ) -> Result<NodeKind, GraphConstructionError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if "(),".contains(c) => Ok(NodeKind::ExactPunctuation(c)),
            _ if text.chars().all(|c| c.is_ascii_alphabetic()) => {
                Ok(NodeKind::ExactWord(text.to_string()))
            }
            _ => Err(GraphConstructionError::UnknownVertexKind {
                kind: format!("{text:?}"),
                span: mold.span.clone(),
            }),
        }
    }
}

#[derive(Debug)]
enum TestHook {
    Stop,
}

fn try_build(source: &str) -> Result<Graph<()>, GraphConstructionError> {
    build(&compile(source).unwrap(), &WordFactory)
}

fn dump(source: &str) -> String {
    GraphPrinter::new(&try_build(source).unwrap()).dump()
}

#[test]
fn shared_name_closes_loop() {
    let input = indoc! {r#"
        (IDLE root
          ("CREATE"
            (IDENTIFIER name
              ("("
                (IDENTIFIER col
                  ("," (IDENTIFIER col))
                  (")" (END end)))))))
    "#};

    insta::assert_snapshot!(dump(input), @r"
    N0*: ε @root → N1
    N1: CREATE → N2
    N2: (identifier) @name → N3
    N3: '(' → N4
    N4: (identifier) @col → N5, N6
    N5: ',' → N4
    N6: ')' → N7
    N7: END @end → ∅
    ");
}

#[test]
fn repeated_edges_are_merged() {
    insta::assert_snapshot!(dump(r#"(IDLE ("A" x) ("a" x))"#), @r"
    N0*: ε → N1
    N1: A @x → ∅
    ");
}

#[test]
fn unnamed_molds_are_fresh() {
    insta::assert_snapshot!(dump(r#"(IDLE ("A") ("A"))"#), @r"
    N0*: ε → N1, N2
    N1: A → ∅
    N2: A → ∅
    ");
}

#[test]
fn reference_adds_edges_to_defined_node() {
    let input = indoc! {r#"
        (IDLE
          (MULTI-WORD dir :values ("ASC" "DESC"))
          ("," (MULTI-WORD dir (END))))
    "#};

    insta::assert_snapshot!(dump(input), @r"
    N0*: ε → N1, N2
    N1: ASC|DESC @dir → N3
    N2: ',' → N1
    N3: END → ∅
    ");
}

#[test]
fn incompatible_kinds() {
    assert_eq!(
        try_build(r#"(IDLE ("A" x) (IDENTIFIER x))"#).unwrap_err(),
        GraphConstructionError::IncompatibleName {
            name: "x".to_string(),
            first: r#""A""#.to_string(),
            second: "IDENTIFIER".to_string(),
            span: 14..28,
        }
    );
}

#[test]
fn incompatible_literals_and_alternatives() {
    assert!(matches!(
        try_build(r#"(IDLE ("A" x) ("B" x))"#),
        Err(GraphConstructionError::IncompatibleName { .. })
    ));

    let err = try_build(r#"(IDLE (MULTI-WORD d :values ("ASC")) (MULTI-WORD d :values ("DESC")))"#)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"node `d` is declared as MULTI-WORD ["ASC"] and as MULTI-WORD ["DESC"]"#
    );
}

#[test]
fn unknown_vertex_kind() {
    assert_eq!(
        try_build(r#"(IDLE ("<>"))"#).unwrap_err(),
        GraphConstructionError::UnknownVertexKind {
            kind: r#""<>""#.to_string(),
            span: 6..12,
        }
    );
}

#[test]
fn hand_built_graph() {
    let mut graph: Graph<TestHook> = Graph::new();
    let a = graph.add_node(Node::new(NodeKind::Idle).named("a"));
    let b = graph.add_node(Node::new(NodeKind::End).named("b"));
    let c = graph.add_node(Node::new(NodeKind::Integer).named("b"));
    graph.connect(a, b);
    graph.connect(a, b);
    graph.node_mut(b).hook = Some(TestHook::Stop);

    assert_eq!(graph.successors(a), &[b]);
    assert_eq!(graph.reachable(), vec![a, b]);
    assert_eq!(graph.nodes_named("b").collect::<Vec<_>>(), vec![b, c]);
    assert_eq!(graph.nodes_named("zzz").count(), 0);

    insta::assert_snapshot!(GraphPrinter::new(&graph).only_reachable(true).dump(), @r"
    N0*: ε @a → N1
    N1: END @b +Stop → ∅
    ");
    insta::assert_snapshot!(GraphPrinter::new(&graph).show_hooks(false).dump(), @r"
    N0*: ε @a → N1
    N1: END @b → ∅
    N2: (integer) @b → ∅
    ");
}
