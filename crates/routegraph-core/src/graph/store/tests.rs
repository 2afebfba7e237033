use super::*;

fn graph_with(nodes: &[&str]) -> Graph {
    let mut g = Graph::new();
    for id in nodes {
        g.add_node(id).unwrap();
    }
    g
}

#[test]
fn test_add_node_rejects_duplicates() {
    let mut g = graph_with(&["A"]);
    let err = g.add_node(" A ").unwrap_err();
    assert!(matches!(err, RouteError::DuplicateNode { id } if id == "A"));
}

#[test]
fn test_get_node_missing() {
    let g = Graph::new();
    assert!(matches!(
        g.get_node("A"),
        Err(RouteError::NodeNotFound { .. })
    ));
}

#[test]
fn test_add_edge_inserts_mirror() {
    let mut g = graph_with(&["A", "B"]);
    let edge = g.add_edge("A", "B", 5).unwrap();
    assert_eq!(edge.id, 0);

    let shortest = g.get_shortest_edge("A", "B").unwrap();
    assert!(shortest.weight <= 5);
    let mirror = g.get_shortest_edge("B", "A").unwrap();
    assert_eq!(mirror, edge.reversed());
}

#[test]
fn test_add_edge_rejects_self_edge() {
    let mut g = graph_with(&["A"]);
    assert!(matches!(
        g.add_edge("A", "A", 1),
        Err(RouteError::SelfEdge { .. })
    ));
}

#[test]
fn test_add_edge_requires_both_nodes() {
    let mut g = graph_with(&["A"]);
    assert!(matches!(
        g.add_edge("A", "B", 1),
        Err(RouteError::NodeNotFound { id }) if id == "B"
    ));
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn test_parallel_edges_get_distinct_ids() {
    let mut g = graph_with(&["A", "B", "C"]);
    assert_eq!(g.add_edge("A", "B", 3).unwrap().id, 0);
    assert_eq!(g.add_edge("B", "A", 1).unwrap().id, 1);
    assert_eq!(g.add_edge("A", "B", 2).unwrap().id, 2);
    // Ids are per node pair
    assert_eq!(g.add_edge("A", "C", 2).unwrap().id, 0);

    let shortest = g.get_shortest_edge("A", "B").unwrap();
    assert_eq!((shortest.id, shortest.weight), (1, 1));
    assert_eq!(g.degree("A"), 4);
    assert_eq!(g.degree("B"), 3);
    assert_eq!(g.edge_count(), 4);
}

#[test]
fn test_freed_id_is_reused() {
    let mut g = graph_with(&["A", "B"]);
    g.add_edge("A", "B", 1).unwrap();
    g.add_edge("A", "B", 2).unwrap();
    g.remove_edge_with_weight("B", "A", 1).unwrap();
    assert_eq!(g.add_edge("A", "B", 9).unwrap().id, 0);
}

#[test]
fn test_get_edges_from_sorted_by_weight_then_insertion() {
    let mut g = graph_with(&["A", "B", "C", "D"]);
    g.add_edge("A", "D", 2).unwrap();
    g.add_edge("A", "B", 1).unwrap();
    g.add_edge("C", "A", 2).unwrap();

    let order: Vec<(String, u64)> = g
        .get_edges_from("A")
        .into_iter()
        .map(|e| (e.to.id().to_string(), e.weight))
        .collect();
    assert_eq!(
        order,
        vec![
            ("B".to_string(), 1),
            ("D".to_string(), 2),
            ("C".to_string(), 2)
        ]
    );
    assert!(g.get_edges_from("A").iter().all(|e| e.from.id() == "A"));
}

#[test]
fn test_get_edges_from_unknown_node_is_empty() {
    let g = Graph::new();
    assert!(g.get_edges_from("A").is_empty());
    assert_eq!(g.degree("A"), 0);
}

#[test]
fn test_get_shortest_edge_missing() {
    let g = graph_with(&["A", "B"]);
    assert!(g.get_shortest_edge("A", "B").is_none());
}

#[test]
fn test_remove_node_cascades() {
    let mut g = graph_with(&["A", "B", "C"]);
    g.add_edge("A", "B", 1).unwrap();
    g.add_edge("B", "C", 1).unwrap();
    g.add_edge("C", "B", 4).unwrap();

    let removed = g.remove_node("B").unwrap();
    assert_eq!(removed.id(), "B");
    assert!(!g.contains_node("B"));
    assert_eq!(g.edge_count(), 0);
    for edge in g.get_all_edges() {
        assert_ne!(edge.from.id(), "B");
        assert_ne!(edge.to.id(), "B");
    }
    assert_eq!(g.degree("A"), 0);
    assert_eq!(g.degree("C"), 0);
}

#[test]
fn test_remove_node_without_edges() {
    let mut g = graph_with(&["A"]);
    assert!(g.remove_node("A").is_some());
    assert!(g.remove_node("A").is_none());
    assert!(g.is_empty());
}

#[test]
fn test_remove_edges_between() {
    let mut g = graph_with(&["A", "B", "C"]);
    g.add_edge("A", "B", 1).unwrap();
    g.add_edge("A", "B", 2).unwrap();
    g.add_edge("A", "C", 3).unwrap();

    g.remove_edges_between("B", "A");
    assert!(g.get_edges_between("A", "B").is_empty());
    assert!(g.get_edges_between("B", "A").is_empty());
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn test_remove_edge_with_weight_removes_single_pair() {
    let mut g = graph_with(&["A", "B"]);
    g.add_edge("A", "B", 1).unwrap();
    g.add_edge("A", "B", 1).unwrap();

    let removed = g.remove_edge_with_weight("A", "B", 1).unwrap();
    assert_eq!(removed.id, 0);
    assert_eq!(g.get_edges_between("A", "B").len(), 1);
    assert_eq!(g.get_edges_between("B", "A").len(), 1);
    assert!(g.remove_edge_with_weight("A", "B", 7).is_none());
}

#[test]
fn test_odd_and_dead_end_nodes() {
    let mut g = graph_with(&["A", "B", "C", "D"]);
    g.add_edge("A", "B", 1).unwrap();
    g.add_edge("B", "C", 1).unwrap();
    g.add_edge("B", "D", 1).unwrap();

    let odd: Vec<String> = g
        .get_all_odd_nodes()
        .iter()
        .map(|n| n.id().to_string())
        .collect();
    assert_eq!(odd, vec!["A", "B", "C", "D"]);

    let dead_ends: Vec<String> = g
        .get_all_dead_end_nodes()
        .iter()
        .map(|n| n.id().to_string())
        .collect();
    assert_eq!(dead_ends, vec!["A", "C", "D"]);
}

#[test]
fn test_get_all_nodes_sorted() {
    let g = graph_with(&["c", "A", "b"]);
    let ids: Vec<String> = g
        .get_all_nodes()
        .iter()
        .map(|n| n.id().to_string())
        .collect();
    assert_eq!(ids, vec!["A", "b", "c"]);
}

#[test]
fn test_clone_is_independent() {
    let mut g = graph_with(&["A", "B"]);
    g.add_edge("A", "B", 1).unwrap();

    let mut copy = g.clone();
    copy.add_edge("A", "B", 1).unwrap();
    copy.remove_node("A");

    assert_eq!(g.edge_count(), 1);
    assert!(g.contains_node("A"));
}

#[test]
fn test_display() {
    let mut g = graph_with(&["A", "B", "C"]);
    g.add_edge("A", "B", 1).unwrap();
    g.add_edge("A", "B", 3).unwrap();
    assert_eq!(g.to_string(), "A: B[0](1) B[1](3)\nB: A[0](1) A[1](3)\nC:\n");
}
