use neuronet::{
    QueryError, SparseGraph,
    traversal::{nodes_within_depth, shortest_path, traverse},
};

fn build_graph(edges: &[(u64, u64)]) -> SparseGraph {
    SparseGraph::from_edges(edges.iter().copied()).expect("graph")
}

#[test]
fn test_shortest_path_single_chain() {
    let graph = build_graph(&[(1, 2), (2, 3), (3, 4), (4, 5)]);
    assert_eq!(shortest_path(&graph, 1, 5), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_shortest_path_prefers_fewer_hops() {
    let graph = build_graph(&[(1, 2), (2, 3), (3, 4), (1, 4)]);
    assert_eq!(shortest_path(&graph, 1, 4), vec![1, 4]);
}

#[test]
fn test_shortest_path_tie_goes_to_first_stored_neighbor() {
    let graph = build_graph(&[(1, 3), (1, 2), (2, 4), (3, 4)]);
    assert_eq!(shortest_path(&graph, 1, 4), vec![1, 3, 4]);
    let swapped = build_graph(&[(1, 2), (1, 3), (2, 4), (3, 4)]);
    assert_eq!(shortest_path(&swapped, 1, 4), vec![1, 2, 4]);
}

#[test]
fn test_shortest_path_respects_direction() {
    let graph = build_graph(&[(1, 2), (3, 2)]);
    assert!(shortest_path(&graph, 1, 3).is_empty());
    assert!(shortest_path(&graph, 2, 1).is_empty());
}

#[test]
fn test_shortest_path_to_self() {
    let graph = build_graph(&[(1, 2)]);
    assert_eq!(shortest_path(&graph, 2, 2), vec![2]);
    assert!(shortest_path(&graph, 9, 9).is_empty());
}

#[test]
fn test_shortest_path_through_cycle() {
    let graph = build_graph(&[(1, 2), (2, 3), (3, 1), (3, 4)]);
    assert_eq!(shortest_path(&graph, 2, 1), vec![2, 3, 1]);
    assert_eq!(shortest_path(&graph, 1, 4), vec![1, 2, 3, 4]);
}

#[test]
fn test_traverse_single_component_preorder() {
    let graph = build_graph(&[(1, 2), (1, 5), (2, 3), (2, 4), (5, 6)]);
    assert_eq!(traverse(&graph, 1), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_traverse_only_reachable_nodes() {
    let graph = build_graph(&[(1, 2), (2, 3), (6, 7), (7, 1)]);
    assert_eq!(traverse(&graph, 1), vec![1, 2, 3]);
    assert_eq!(traverse(&graph, 6), vec![6, 7, 1, 2, 3]);
}

#[test]
fn test_traverse_visits_each_node_once_with_cycles() {
    let graph = build_graph(&[(1, 2), (2, 1), (2, 3), (3, 1), (1, 1), (1, 2)]);
    assert_eq!(traverse(&graph, 1), vec![1, 2, 3]);
}

#[test]
fn test_traverse_deep_chain_uses_no_recursion() {
    let edges: Vec<(u64, u64)> = (0..200_000u64).map(|i| (i, i + 1)).collect();
    let graph = build_graph(&edges);
    let order = traverse(&graph, 0);
    assert_eq!(order.len(), 200_001);
    assert_eq!(order.last(), Some(&200_000));
}

#[test]
fn test_traverse_leaf_returns_itself() {
    let graph = build_graph(&[(1, 2)]);
    assert_eq!(traverse(&graph, 2), vec![2]);
}

#[test]
fn test_within_depth_levels() {
    let graph = build_graph(&[(1, 2), (2, 3), (3, 4)]);
    assert_eq!(nodes_within_depth(&graph, 1, 0).unwrap(), vec![1]);
    assert_eq!(nodes_within_depth(&graph, 1, 1).unwrap(), vec![1, 2]);
    assert_eq!(nodes_within_depth(&graph, 1, 2).unwrap(), vec![1, 2, 3]);
    assert_eq!(nodes_within_depth(&graph, 1, 100).unwrap(), vec![1, 2, 3, 4]);
}

#[test]
fn test_within_depth_discovery_order() {
    let graph = build_graph(&[(1, 3), (1, 2), (3, 5), (2, 4), (2, 5)]);
    assert_eq!(nodes_within_depth(&graph, 1, 2).unwrap(), vec![1, 3, 2, 5, 4]);
}

#[test]
fn test_within_depth_huge_depth_is_unbounded() {
    let graph = build_graph(&[(1, 2), (2, 3)]);
    assert_eq!(nodes_within_depth(&graph, 1, i64::MAX).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_within_depth_rejects_negative_even_for_unknown_center() {
    let graph = build_graph(&[(1, 2)]);
    assert!(matches!(
        nodes_within_depth(&graph, 99, -5),
        Err(QueryError::InvalidArgument(_))
    ));
}

#[test]
fn test_queries_on_empty_graph() {
    let graph = SparseGraph::empty();
    assert!(shortest_path(&graph, 0, 0).is_empty());
    assert!(traverse(&graph, 0).is_empty());
    assert!(nodes_within_depth(&graph, 0, 1).unwrap().is_empty());
}
