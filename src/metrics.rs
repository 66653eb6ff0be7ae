use std::cmp::Ordering;

use serde::Serialize;

use crate::{
    errors::QueryError,
    graph::{NodeId, SparseGraph},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CriticalNode {
    pub node: NodeId,
    pub degree: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub estimated_memory_bytes: u64,
    pub critical: Option<CriticalNode>,
}

/// Node with the highest out-degree; ties go to the smallest id.
pub fn most_critical_node(graph: &SparseGraph) -> Result<NodeId, QueryError> {
    critical_node(graph).map(|c| c.node)
}

pub fn critical_node(graph: &SparseGraph) -> Result<CriticalNode, QueryError> {
    let mut best: Option<CriticalNode> = None;
    for (idx, &node) in graph.node_ids().iter().enumerate() {
        let degree = graph.degree_at(idx as u32);
        let better = match best {
            None => true,
            Some(current) => {
                degree > current.degree || (degree == current.degree && node < current.node)
            }
        };
        if better {
            best = Some(CriticalNode { node, degree });
        }
    }
    best.ok_or(QueryError::EmptyGraph)
}

/// The `top_n` nodes by out-degree, descending, ties by ascending id.
pub fn nodes_by_degree(graph: &SparseGraph, top_n: usize) -> Vec<(NodeId, usize)> {
    let mut degrees: Vec<(NodeId, usize)> = graph
        .node_ids()
        .iter()
        .enumerate()
        .map(|(idx, &node)| (node, graph.degree_at(idx as u32)))
        .collect();
    if top_n == 0 {
        return Vec::new();
    }
    if top_n < degrees.len() {
        degrees.select_nth_unstable_by(top_n - 1, by_degree_desc);
        degrees.truncate(top_n);
    }
    degrees.sort_unstable_by(by_degree_desc);
    degrees
}

fn by_degree_desc(a: &(NodeId, usize), b: &(NodeId, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

pub fn stats(graph: &SparseGraph) -> GraphStats {
    GraphStats {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        estimated_memory_bytes: graph.estimated_memory_bytes(),
        critical: critical_node(graph).ok(),
    }
}
