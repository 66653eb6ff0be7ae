//! Read-only traversals over a [`SparseGraph`].
//!
//! All functions work on dense indices with flat `Vec` bookkeeping sized to
//! the node count, follow neighbors in stored order, and answer an unknown
//! start node with an empty result.

use std::{collections::VecDeque, time::Instant};

use tracing::debug;

use crate::{
    errors::QueryError,
    graph::{NodeId, SparseGraph},
};

const UNSEEN: u32 = u32::MAX;

/// Unweighted BFS path from `start` to `end`, both inclusive.
///
/// The first node to discover a vertex becomes its parent, so among
/// equal-length paths the one through earlier-stored neighbors wins.
/// Empty when either id is unknown or `end` is unreachable.
pub fn shortest_path(graph: &SparseGraph, start: NodeId, end: NodeId) -> Vec<NodeId> {
    let (Some(src), Some(dst)) = (graph.index_of(start), graph.index_of(end)) else {
        return Vec::new();
    };
    if src == dst {
        return vec![start];
    }
    let started = Instant::now();
    let mut parent = vec![UNSEEN; graph.node_count()];
    let mut queue = VecDeque::new();
    parent[src as usize] = src;
    queue.push_back(src);
    let mut found = false;
    'search: while let Some(node) = queue.pop_front() {
        for &next in graph.targets_of(node) {
            if parent[next as usize] != UNSEEN {
                continue;
            }
            parent[next as usize] = node;
            if next == dst {
                found = true;
                break 'search;
            }
            queue.push_back(next);
        }
    }
    let path = if found {
        reconstruct(graph, &parent, src, dst)
    } else {
        Vec::new()
    };
    debug!(
        kind = "shortest_path",
        start,
        end,
        len = path.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "traversal finished"
    );
    path
}

fn reconstruct(graph: &SparseGraph, parent: &[u32], src: u32, dst: u32) -> Vec<NodeId> {
    let mut path = vec![graph.id_at(dst)];
    let mut current = dst;
    while current != src {
        current = parent[current as usize];
        path.push(graph.id_at(current));
    }
    path.reverse();
    path
}

/// DFS preorder of everything reachable from `start`.
///
/// Uses an explicit stack. Neighbors are pushed in reverse so they are
/// visited in stored order.
pub fn traverse(graph: &SparseGraph, start: NodeId) -> Vec<NodeId> {
    let Some(root) = graph.index_of(start) else {
        return Vec::new();
    };
    let started = Instant::now();
    let mut visited = vec![false; graph.node_count()];
    let mut order = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if visited[node as usize] {
            continue;
        }
        visited[node as usize] = true;
        order.push(graph.id_at(node));
        for &next in graph.targets_of(node).iter().rev() {
            if !visited[next as usize] {
                stack.push(next);
            }
        }
    }
    debug!(
        kind = "dfs",
        start,
        len = order.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "traversal finished"
    );
    order
}

/// Nodes at most `max_depth` hops from `center`, in BFS discovery order,
/// starting with `center` itself.
pub fn nodes_within_depth(
    graph: &SparseGraph,
    center: NodeId,
    max_depth: i64,
) -> Result<Vec<NodeId>, QueryError> {
    if max_depth < 0 {
        return Err(QueryError::invalid_argument(format!(
            "max_depth must be non-negative, got {max_depth}"
        )));
    }
    let Some(root) = graph.index_of(center) else {
        return Ok(Vec::new());
    };
    let limit = u32::try_from(max_depth).unwrap_or(u32::MAX);
    let started = Instant::now();
    let mut visited = vec![false; graph.node_count()];
    let mut queue = VecDeque::new();
    let mut result = vec![center];
    visited[root as usize] = true;
    queue.push_back((root, 0u32));
    while let Some((node, depth)) = queue.pop_front() {
        if depth >= limit {
            continue;
        }
        for &next in graph.targets_of(node) {
            if !visited[next as usize] {
                visited[next as usize] = true;
                result.push(graph.id_at(next));
                queue.push_back((next, depth + 1));
            }
        }
    }
    debug!(
        kind = "bfs_depth",
        start = center,
        max_depth,
        len = result.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "traversal finished"
    );
    Ok(result)
}
