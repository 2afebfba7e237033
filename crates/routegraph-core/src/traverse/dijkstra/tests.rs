use super::*;

fn build(edges: &[(&str, &str, u64)]) -> Graph {
    let mut g = Graph::new();
    for (a, b, w) in edges {
        for id in [a, b] {
            if !g.contains_node(id) {
                g.add_node(id).unwrap();
            }
        }
        g.add_edge(a, b, *w).unwrap();
    }
    g
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        accumulated_cost: 1,
        node_id: "A".to_string(),
    };
    let entry2 = HeapEntry {
        accumulated_cost: 2,
        node_id: "B".to_string(),
    };
    let entry3 = HeapEntry {
        accumulated_cost: 1,
        node_id: "C".to_string(),
    };

    assert_eq!(entry1.cmp(&entry2), std::cmp::Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), std::cmp::Ordering::Greater);
    // Equal costs fall back to node id
    assert_eq!(entry1.cmp(&entry3), std::cmp::Ordering::Less);
}

#[test]
fn test_dijkstra_prefers_lighter_detour() {
    let g = build(&[("A", "B", 5), ("B", "C", 3), ("A", "C", 10)]);
    let s = dijkstra(&g, "A", "C").unwrap();
    assert_eq!(s.ids(), vec!["A", "B", "C"]);
    assert_eq!(s.distance(), 8);
}

#[test]
fn test_dijkstra_uses_cheapest_parallel_edge() {
    let g = build(&[("A", "B", 9), ("A", "B", 2), ("B", "C", 1)]);
    let s = dijkstra(&g, "A", "C").unwrap();
    assert_eq!(s.ids(), vec!["A", "B", "C"]);
    assert_eq!(s.distance(), 3);
}

#[test]
fn test_dijkstra_same_node() {
    let g = build(&[("A", "B", 1)]);
    let s = dijkstra(&g, "B", "B").unwrap();
    assert_eq!(s.ids(), vec!["B"]);
    assert_eq!(s.distance(), 0);
}

#[test]
fn test_dijkstra_zero_weight_edges() {
    let g = build(&[("A", "B", 0), ("B", "C", 0), ("A", "C", 1)]);
    let s = dijkstra(&g, "A", "C").unwrap();
    assert_eq!(s.distance(), 0);
    assert_eq!(s.ids(), vec!["A", "B", "C"]);
}

#[test]
fn test_dijkstra_unreachable() {
    let mut g = build(&[("A", "B", 1)]);
    g.add_node("C").unwrap();
    assert!(matches!(
        dijkstra(&g, "A", "C"),
        Err(RouteError::Unreachable { .. })
    ));
    assert_eq!(distance_between(&g, "A", "C").unwrap(), None);
}

#[test]
fn test_dijkstra_unknown_node() {
    let g = build(&[("A", "B", 1)]);
    assert!(matches!(
        dijkstra(&g, "Q", "A"),
        Err(RouteError::NodeNotFound { .. })
    ));
}

#[test]
fn test_dijkstra_triangle_inequality() {
    let g = build(&[
        ("A", "B", 4),
        ("B", "C", 2),
        ("A", "C", 7),
        ("C", "D", 1),
        ("B", "D", 6),
    ]);
    let ids = ["A", "B", "C", "D"];
    for x in ids {
        for y in ids {
            let direct = distance_between(&g, x, y).unwrap().unwrap();
            for via in ids {
                let first = distance_between(&g, x, via).unwrap().unwrap();
                let second = distance_between(&g, via, y).unwrap().unwrap();
                assert!(direct <= first + second, "{x}->{y} via {via}");
            }
        }
    }
}

#[test]
fn test_dijkstra_is_repeatable() {
    let g = build(&[("A", "B", 2), ("B", "C", 2), ("A", "C", 4)]);
    let first = dijkstra(&g, "A", "C").unwrap();
    let second = dijkstra(&g, "A", "C").unwrap();
    assert_eq!(first, second);
    assert_eq!(first.distance(), 4);
}

#[test]
fn test_dijkstra_path_distance_matches_edges() {
    let g = build(&[("A", "B", 3), ("B", "C", 4), ("C", "D", 5), ("A", "D", 20)]);
    let s = dijkstra(&g, "A", "D").unwrap();
    let summed: u64 = s
        .nodes()
        .windows(2)
        .map(|w| g.get_shortest_edge(w[0].id(), w[1].id()).unwrap().weight)
        .sum();
    assert_eq!(summed, s.distance());
    assert_eq!(s.distance(), 12);
}
