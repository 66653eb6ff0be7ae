//! Deterministic synthetic edge lists for benches, tests and the `generate`
//! command.

use std::io::{self, Write};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{errors::QueryError, graph::NodeId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphShape {
    Line,
    Star,
    RandomErdosRenyi { edges: usize },
    ScaleFree { m: usize },
}

impl GraphShape {
    /// Parses a CLI shape name. `edges` defaults to `5 * nodes` for `random`.
    pub fn from_name(
        name: &str,
        nodes: usize,
        edges: Option<usize>,
        m: usize,
    ) -> Result<Self, QueryError> {
        match name {
            "line" => Ok(GraphShape::Line),
            "star" => Ok(GraphShape::Star),
            "random" | "er" => Ok(GraphShape::RandomErdosRenyi {
                edges: edges.unwrap_or_else(|| nodes.saturating_mul(5)),
            }),
            "scalefree" | "sf" => Ok(GraphShape::ScaleFree { m }),
            other => Err(QueryError::invalid_argument(format!(
                "unknown shape {other}"
            ))),
        }
    }
}

/// Edges in generation order. Node ids are `0..node_count`.
pub fn generate_edges(
    shape: &GraphShape,
    node_count: usize,
    seed: u64,
) -> Result<Vec<(NodeId, NodeId)>, QueryError> {
    if node_count < 2 {
        return Err(QueryError::invalid_argument("node_count must exceed 1"));
    }
    match *shape {
        GraphShape::Line => Ok(line_edges(node_count)),
        GraphShape::Star => Ok(star_edges(node_count)),
        GraphShape::RandomErdosRenyi { edges } => random_edges(node_count, edges, seed),
        GraphShape::ScaleFree { m } => scale_free_edges(node_count, m, seed),
    }
}

/// Writes the edge list format with `#` header lines.
pub fn write_edge_list<W: Write>(
    mut out: W,
    title: &str,
    node_count: usize,
    edges: &[(NodeId, NodeId)],
) -> io::Result<()> {
    writeln!(out, "# {title}")?;
    writeln!(out, "# Nodes: {node_count} Edges: {}", edges.len())?;
    writeln!(out, "# FromNodeId\tToNodeId")?;
    for (from, to) in edges {
        writeln!(out, "{from}\t{to}")?;
    }
    out.flush()
}

fn line_edges(count: usize) -> Vec<(NodeId, NodeId)> {
    (0..count as NodeId - 1).map(|idx| (idx, idx + 1)).collect()
}

fn star_edges(count: usize) -> Vec<(NodeId, NodeId)> {
    (1..count as NodeId).map(|leaf| (0, leaf)).collect()
}

// Uniform sample of `edge_count` distinct pairs `(i, j)` with `i < j`,
// skipping ahead geometrically through the row-major pair index space.
fn random_edges(
    node_count: usize,
    edge_count: usize,
    seed: u64,
) -> Result<Vec<(NodeId, NodeId)>, QueryError> {
    let total_pairs = pair_count(node_count);
    if edge_count as u128 > total_pairs {
        return Err(QueryError::invalid_argument(
            "edge_count exceeds possible pairs",
        ));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(edge_count);
    let n = node_count as u64;
    let mut row = 0u64;
    let mut row_start = 0u64;
    let mut idx = 0u64;
    let mut remaining_edges = edge_count as u64;
    while remaining_edges > 0 && idx < total_pairs as u64 {
        let remaining_pairs = total_pairs as u64 - idx;
        let p = remaining_edges as f64 / remaining_pairs as f64;
        idx += sample_geometric(&mut rng, p);
        if idx >= total_pairs as u64 {
            break;
        }
        while idx >= row_start + (n - row - 1) {
            row_start += n - row - 1;
            row += 1;
        }
        edges.push((row, row + 1 + (idx - row_start)));
        idx += 1;
        remaining_edges -= 1;
    }
    Ok(edges)
}

// Preferential attachment via endpoint sampling: picking a uniform entry of
// `endpoints` selects a node with probability proportional to its degree.
// Edges point from the existing node to the newcomer, so hubs accumulate
// out-degree.
fn scale_free_edges(
    node_count: usize,
    m: usize,
    seed: u64,
) -> Result<Vec<(NodeId, NodeId)>, QueryError> {
    if m == 0 {
        return Err(QueryError::invalid_argument("m must be positive"));
    }
    if node_count <= m + 1 {
        return Err(QueryError::invalid_argument("node_count must exceed m + 1"));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let seed_nodes = m + 1;
    let mut edges = Vec::with_capacity(node_count * m);
    let mut endpoints: Vec<NodeId> = Vec::with_capacity(node_count * m * 2);
    for u in 0..seed_nodes as NodeId {
        for v in (u + 1)..seed_nodes as NodeId {
            edges.push((u, v));
            endpoints.push(u);
            endpoints.push(v);
        }
    }
    let mut targets = Vec::with_capacity(m);
    for new_node in seed_nodes as NodeId..node_count as NodeId {
        targets.clear();
        while targets.len() < m {
            let pick = endpoints[rng.gen_range(0..endpoints.len())];
            if !targets.contains(&pick) {
                targets.push(pick);
            }
        }
        targets.sort_unstable();
        for &target in &targets {
            edges.push((target, new_node));
            endpoints.push(target);
            endpoints.push(new_node);
        }
    }
    Ok(edges)
}

fn pair_count(nodes: usize) -> u128 {
    let n = nodes as u128;
    n * (n - 1) / 2
}

fn sample_geometric(rng: &mut StdRng, p: f64) -> u64 {
    if p >= 1.0 {
        return 0;
    }
    let u = rng.r#gen::<f64>().max(f64::MIN_POSITIVE);
    ((u.ln() / (1.0 - p).ln()).floor().max(0.0)) as u64
}
