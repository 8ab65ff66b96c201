//! Tests for the graph container.

use crate::error::Error;

use super::store::Graph;
use super::types::Edge;

fn build_test_graph() -> Graph<i32, &'static str> {
    let mut g = Graph::new();
    for v in [1, 4, 8] {
        g.insert_node(v);
    }
    g.insert_edge(&1, &4, "a").unwrap();
    g.insert_edge(&1, &4, "b").unwrap();
    g.insert_edge(&1, &4, "c").unwrap();
    g.insert_edge(&4, &8, "d").unwrap();
    g
}

#[test]
fn test_from_nodes_collapses_duplicates() {
    let g: Graph<i32, &str> = Graph::from_nodes([1, 5, 7, 1, 4, 8]);
    assert_eq!(g.node_count(), 5);
    assert!(g.is_node(&1));
    assert!(!g.is_node(&12));
    assert_eq!(g.nodes(), vec![1, 4, 5, 7, 8]);
}

#[test]
fn test_insert_node_reports_presence() {
    let mut g: Graph<i32, i32> = Graph::new();
    assert!(g.insert_node(3));
    assert!(!g.insert_node(3));
    assert_eq!(g.node_count(), 1);
}

#[test]
fn test_empty_graph() {
    let g: Graph<i32, i32> = Graph::new();
    assert!(g.is_empty());
    assert_eq!(g.node_count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert!(g.nodes().is_empty());
}

#[test]
fn test_with_capacity_starts_empty() {
    let g: Graph<i32, i32> = Graph::with_capacity(64);
    assert!(g.is_empty());
}

#[test]
fn test_insert_edge_rejects_duplicates() {
    let mut g = build_test_graph();
    assert!(!g.insert_edge(&1, &4, "a").unwrap());
    assert!(g.insert_edge(&8, &1, "z").unwrap());
    assert_eq!(g.edge_count(), 5);
}

#[test]
fn test_insert_edge_requires_endpoints() {
    let mut g: Graph<i32, &str> = Graph::from_nodes([1]);
    let err = g.insert_edge(&1, &2, "x").unwrap_err();
    assert!(matches!(err, Error::EndpointMissing { op: "insert_edge", .. }));
    // The failed call must not have mutated anything.
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn test_parallel_edges_with_distinct_weights() {
    let g = build_test_graph();
    assert_eq!(g.weights(&1, &4).unwrap(), vec!["a", "b", "c"]);
    assert_eq!(g.edge_count(), 4);
}

#[test]
fn test_is_connected() {
    let g = build_test_graph();
    assert!(g.is_connected(&1, &4).unwrap());
    assert!(!g.is_connected(&4, &1).unwrap());
    let err = g.is_connected(&1, &99).unwrap_err();
    assert!(matches!(err, Error::EndpointMissing { op: "is_connected", .. }));
}

#[test]
fn test_weights_empty_between_unconnected_nodes() {
    let g = build_test_graph();
    assert_eq!(g.weights(&8, &1).unwrap(), Vec::<&str>::new());
}

#[test]
fn test_connections_deduplicates_parallel_edges() {
    let mut g = build_test_graph();
    assert_eq!(g.connections(&1).unwrap(), vec![4]);
    g.insert_edge(&1, &8, "e").unwrap();
    assert_eq!(g.connections(&1).unwrap(), vec![4, 8]);
    assert_eq!(g.connections(&8).unwrap(), Vec::<i32>::new());

    let err = g.connections(&99).unwrap_err();
    assert!(matches!(err, Error::NodeMissing { op: "connections", .. }));
}

#[test]
fn test_replace_node_missing_old_errors() {
    let mut g = build_test_graph();
    let err = g.replace_node(&99, 100).unwrap_err();
    assert!(matches!(err, Error::NodeMissing { op: "replace_node", .. }));
}

#[test]
fn test_replace_node_existing_new_is_a_no_op() {
    let mut g = build_test_graph();
    assert!(!g.replace_node(&1, 4).unwrap());
    assert_eq!(g.nodes(), vec![1, 4, 8]);
    assert_eq!(g.weights(&1, &4).unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn test_replace_node_rewrites_value_in_place() {
    let mut g: Graph<i32, &str> = Graph::from_nodes([1, 2, 3]);
    g.insert_edge(&3, &1, "x").unwrap();
    g.insert_edge(&2, &1, "y").unwrap();
    g.insert_edge(&1, &1, "s").unwrap();

    assert!(g.replace_node(&1, 9).unwrap());
    assert!(!g.is_node(&1));
    assert!(g.is_node(&9));
    assert_eq!(g.nodes(), vec![2, 3, 9]);

    // Every edge observes the new value without having been rewritten.
    assert_eq!(g.connections(&3).unwrap(), vec![9]);
    assert_eq!(g.weights(&2, &9).unwrap(), vec!["y"]);
    assert_eq!(g.weights(&9, &9).unwrap(), vec!["s"]);
    assert_eq!(g.edge_count(), 3);
}

#[test]
fn test_replace_node_repositions_edge_sets() {
    let mut g: Graph<i32, &str> = Graph::from_nodes([1, 5, 9]);
    g.insert_edge(&5, &1, "x").unwrap();
    g.insert_edge(&5, &9, "y").unwrap();

    // 1 -> 20 moves that destination past 9 inside 5's edge set.
    assert!(g.replace_node(&1, 20).unwrap());
    assert_eq!(g.connections(&5).unwrap(), vec![9, 20]);

    let edges: Vec<_> = g.iter().collect();
    assert_eq!(edges, vec![Edge::new(5, 9, "y"), Edge::new(5, 20, "x")]);
}

#[test]
fn test_merge_replace_node_unions_and_redirects() {
    let mut g: Graph<&str, i32> = Graph::from_nodes(["A", "B", "C", "D"]);
    g.insert_edge(&"A", &"C", 1).unwrap();
    g.insert_edge(&"A", &"A", 1).unwrap();
    g.insert_edge(&"B", &"B", 1).unwrap();
    g.insert_edge(&"D", &"A", 2).unwrap();

    g.merge_replace_node(&"A", &"B").unwrap();

    assert!(!g.is_node(&"A"));
    assert!(g.is_connected(&"B", &"C").unwrap());
    assert!(g.is_connected(&"B", &"B").unwrap());
    assert!(g.is_connected(&"D", &"B").unwrap());
    assert_eq!(g.weights(&"B", &"C").unwrap(), vec![1]);
}

#[test]
fn test_merge_replace_node_deduplicates_collisions() {
    let mut g: Graph<&str, i32> = Graph::from_nodes(["A", "B", "D"]);
    g.insert_edge(&"D", &"A", 1).unwrap();
    g.insert_edge(&"D", &"B", 1).unwrap();

    g.merge_replace_node(&"A", &"B").unwrap();

    // The redirected D->A collides with the existing D->B and collapses.
    assert_eq!(g.weights(&"D", &"B").unwrap(), vec![1]);
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn test_merge_replace_node_requires_both_nodes() {
    let mut g: Graph<&str, i32> = Graph::from_nodes(["A"]);
    let err = g.merge_replace_node(&"A", &"Z").unwrap_err();
    assert!(matches!(
        err,
        Error::EndpointMissing { op: "merge_replace_node", .. }
    ));
}

#[test]
fn test_merge_replace_node_into_itself_is_a_no_op() {
    let mut g: Graph<&str, i32> = Graph::from_nodes(["A", "B"]);
    g.insert_edge(&"A", &"B", 3).unwrap();
    g.merge_replace_node(&"A", &"A").unwrap();
    assert!(g.is_node(&"A"));
    assert_eq!(g.weights(&"A", &"B").unwrap(), vec![3]);
}

#[test]
fn test_remove_node_cascades_incoming_and_outgoing() {
    let mut g = build_test_graph();
    g.insert_edge(&8, &4, "e").unwrap();

    assert!(g.remove_node(&4));
    assert!(!g.is_node(&4));
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.connections(&1).unwrap(), Vec::<i32>::new());
    assert_eq!(g.connections(&8).unwrap(), Vec::<i32>::new());
}

#[test]
fn test_remove_node_missing_returns_false() {
    let mut g = build_test_graph();
    assert!(!g.remove_node(&99));
    assert_eq!(g.node_count(), 3);
}

#[test]
fn test_remove_edge() {
    let mut g = build_test_graph();
    assert!(g.remove_edge(&1, &4, &"b").unwrap());
    assert!(!g.remove_edge(&1, &4, &"b").unwrap());
    assert_eq!(g.weights(&1, &4).unwrap(), vec!["a", "c"]);
    assert_eq!(g.edge_count(), 3);

    let err = g.remove_edge(&1, &99, &"a").unwrap_err();
    assert!(matches!(err, Error::EndpointMissing { op: "remove_edge", .. }));
}

#[test]
fn test_remove_edge_at_returns_cursor_to_next() {
    let mut g = build_test_graph();
    let cur = g.remove_edge_at(&Edge::new(1, 4, "b"));
    assert_eq!(cur.edge(), Some(Edge::new(1, 4, "c")));
    drop(cur);
    assert_eq!(g.weights(&1, &4).unwrap(), vec!["a", "c"]);
}

#[test]
fn test_remove_edge_at_last_edge_lands_on_end() {
    let mut g = build_test_graph();
    let cur = g.remove_edge_at(&Edge::new(4, 8, "d"));
    assert!(cur.is_end());
}

#[test]
fn test_remove_edge_span() {
    let mut g = build_test_graph();
    let stop = Edge::new(4, 8, "d");
    let cur = g.remove_edge_span(&Edge::new(1, 4, "a"), Some(&stop));
    assert_eq!(cur.edge(), Some(stop));
    drop(cur);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.weights(&1, &4).unwrap(), Vec::<&str>::new());
}

#[test]
fn test_remove_edge_span_to_end() {
    let mut g = build_test_graph();
    let cur = g.remove_edge_span(&Edge::new(1, 4, "b"), None);
    assert!(cur.is_end());
    drop(cur);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.weights(&1, &4).unwrap(), vec!["a"]);
}

#[test]
fn test_clear() {
    let mut g = build_test_graph();
    g.clear();
    assert!(g.is_empty());
    assert_eq!(g.node_count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert!(g.insert_node(1));
}

#[test]
fn test_clone_is_independent() {
    let g = build_test_graph();
    let mut h = g.clone();

    h.insert_node(99);
    h.insert_edge(&8, &99, "q").unwrap();
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 4);
    assert!(!g.is_node(&99));

    // Replacing a value in the copy must not leak through shared storage.
    h.replace_node(&1, 50).unwrap();
    assert!(g.is_node(&1));
    assert_eq!(g.weights(&1, &4).unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn test_find_present_and_absent() {
    let g = build_test_graph();
    let hit = g.find(&1, &4, &"b");
    assert_eq!(hit.edge(), Some(Edge::new(1, 4, "b")));

    assert!(g.find(&1, &4, &"z").is_end());
    assert!(g.find(&99, &4, &"a").is_end());
    assert!(g.find(&1, &99, &"a").is_end());
}

#[test]
fn test_display_rendering() {
    let g = build_test_graph();
    let expected = "1(\n\t4 | a\n\t4 | b\n\t4 | c\n)\n4(\n\t8 | d\n)\n8(\n)\n";
    assert_eq!(g.to_string(), expected);
}

#[test]
fn test_take_leaves_an_empty_graph() {
    let mut g = build_test_graph();
    let taken = std::mem::take(&mut g);
    assert_eq!(taken.node_count(), 3);
    assert_eq!(taken.edge_count(), 4);
    assert!(g.is_empty());
    assert_eq!(g.edge_count(), 0);
}
