use super::*;

#[test]
fn collects_reachable_words_lower_cased() {
    let mut graph: Graph<()> = Graph::new();
    let root = graph.add_node(Node::new(NodeKind::Idle));
    let create = graph.add_node(Node::new(NodeKind::ExactWord("CREATE".to_string())));
    let dir = graph.add_node(Node::new(NodeKind::MultiWord(vec![
        "Asc".to_string(),
        "desc".to_string(),
    ])));
    let paren = graph.add_node(Node::new(NodeKind::ExactPunctuation('(')));
    let name = graph.add_node(Node::new(NodeKind::Identifier));
    graph.add_node(Node::new(NodeKind::ExactWord("ORPHAN".to_string())));

    graph.connect(root, create);
    graph.connect(create, paren);
    graph.connect(paren, name);
    graph.connect(name, dir);
    graph.connect(dir, name);

    let reserved = ReservedWords::resolve(&graph);
    assert_eq!(reserved.iter().collect::<Vec<_>>(), ["asc", "create", "desc"]);
    assert_eq!(reserved.len(), 3);
}

#[test]
fn contains_ignores_case() {
    let reserved: ReservedWords = ["Table", "KEY"].into_iter().collect();
    assert!(reserved.contains("table"));
    assert!(reserved.contains("TABLE"));
    assert!(reserved.contains("kEy"));
    assert!(!reserved.contains("person"));
    assert!(!reserved.is_empty());
    assert!(ReservedWords::default().is_empty());
}
