//! Compressed sparse row storage for a directed, unweighted graph.
//!
//! External ids are interned to dense `u32` indices in first-seen order. The
//! out-neighbors of every node live in one flat `targets` buffer and
//! `offsets[i]..offsets[i + 1]` delimits the slice belonging to dense index
//! `i`. Within a slice, neighbors keep the order in which their edges were
//! added.

use std::mem::size_of;

use ahash::{AHashMap, AHashSet};

use crate::errors::LoadError;

/// External node identifier as it appears in an edge list.
pub type NodeId = u64;

/// Bytes attributed to one entry of the id → index map (`u64` key plus `u32`
/// value, padded to the key alignment).
pub const INDEX_ENTRY_BYTES: u64 = 16;

/// `ids` slot + `offsets` slot + index map entry.
pub const PER_NODE_BYTES: u64 =
    (size_of::<NodeId>() + size_of::<u32>()) as u64 + INDEX_ENTRY_BYTES;

/// One `targets` slot.
pub const PER_EDGE_BYTES: u64 = size_of::<u32>() as u64;

/// The trailing sentinel in `offsets`.
pub const BASE_BYTES: u64 = size_of::<u32>() as u64;

const MAX_INDEX: u64 = u32::MAX as u64;

/// Immutable CSR graph produced by [`GraphBuilder::build`].
#[derive(Debug, Clone)]
pub struct SparseGraph {
    ids: Vec<NodeId>,
    index: AHashMap<NodeId, u32>,
    offsets: Vec<u32>,
    targets: Vec<u32>,
}

impl Default for SparseGraph {
    fn default() -> Self {
        Self::empty()
    }
}

impl SparseGraph {
    pub fn empty() -> Self {
        Self {
            ids: Vec::new(),
            index: AHashMap::new(),
            offsets: vec![0],
            targets: Vec::new(),
        }
    }

    /// Builds a graph from `(from, to)` pairs with default options
    /// (parallel edges and self-loops kept).
    pub fn from_edges<I>(edges: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut builder = GraphBuilder::new();
        for (from, to) in edges {
            builder.add_edge(from, to)?;
        }
        Ok(builder.build())
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.index.contains_key(&node)
    }

    /// Registered ids in first-seen order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.ids
    }

    /// Out-neighbors in insertion order; empty for an unknown node.
    pub fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.neighbors_iter(node).collect()
    }

    pub fn neighbors_iter(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let slice: &[u32] = match self.index_of(node) {
            Some(idx) => self.targets_of(idx),
            None => &[],
        };
        slice.iter().map(move |&t| self.ids[t as usize])
    }

    /// Out-degree; 0 for an unknown node.
    pub fn degree(&self, node: NodeId) -> usize {
        self.index_of(node).map_or(0, |idx| self.degree_at(idx))
    }

    /// `BASE_BYTES + PER_NODE_BYTES * nodes + PER_EDGE_BYTES * edges`.
    ///
    /// Hash table slack and `Vec` spare capacity are not counted, so the
    /// value depends only on the two counts.
    pub fn estimated_memory_bytes(&self) -> u64 {
        BASE_BYTES
            + PER_NODE_BYTES * self.node_count() as u64
            + PER_EDGE_BYTES * self.edge_count() as u64
    }

    pub(crate) fn index_of(&self, node: NodeId) -> Option<u32> {
        self.index.get(&node).copied()
    }

    pub(crate) fn id_at(&self, idx: u32) -> NodeId {
        self.ids[idx as usize]
    }

    pub(crate) fn targets_of(&self, idx: u32) -> &[u32] {
        let start = self.offsets[idx as usize] as usize;
        let end = self.offsets[idx as usize + 1] as usize;
        &self.targets[start..end]
    }

    pub(crate) fn degree_at(&self, idx: u32) -> usize {
        (self.offsets[idx as usize + 1] - self.offsets[idx as usize]) as usize
    }
}

/// What happened to an edge handed to [`GraphBuilder::add_edge`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeOutcome {
    Added,
    Duplicate,
    SelfLoopSkipped,
}

/// Accumulates edges in arrival order, then packs them into a [`SparseGraph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    ids: Vec<NodeId>,
    index: AHashMap<NodeId, u32>,
    edges: Vec<(u32, u32)>,
    seen: Option<AHashSet<(u32, u32)>>,
    skip_self_loops: bool,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_edge_capacity(edges: usize) -> Self {
        Self {
            edges: Vec::with_capacity(edges),
            ..Self::default()
        }
    }

    /// Keep only the first occurrence of each `(from, to)` pair.
    pub fn dedup_edges(mut self, enabled: bool) -> Self {
        self.seen = enabled.then(AHashSet::new);
        self
    }

    /// Drop `(v, v)` edges. The id itself is still registered.
    pub fn skip_self_loops(mut self, enabled: bool) -> Self {
        self.skip_self_loops = enabled;
        self
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<EdgeOutcome, LoadError> {
        let src = self.intern(from)?;
        let dst = self.intern(to)?;
        if src == dst && self.skip_self_loops {
            return Ok(EdgeOutcome::SelfLoopSkipped);
        }
        if let Some(seen) = self.seen.as_mut() {
            if !seen.insert((src, dst)) {
                return Ok(EdgeOutcome::Duplicate);
            }
        }
        if self.edges.len() as u64 >= MAX_INDEX {
            return Err(LoadError::Capacity {
                what: "edges",
                limit: MAX_INDEX,
            });
        }
        self.edges.push((src, dst));
        Ok(EdgeOutcome::Added)
    }

    /// Stable counting sort by source: each node's slice keeps arrival order.
    pub fn build(self) -> SparseGraph {
        let n = self.ids.len();
        let mut offsets = vec![0u32; n + 1];
        for &(src, _) in &self.edges {
            offsets[src as usize + 1] += 1;
        }
        for i in 0..n {
            offsets[i + 1] += offsets[i];
        }
        let mut cursor = offsets[..n].to_vec();
        let mut targets = vec![0u32; self.edges.len()];
        for (src, dst) in self.edges {
            let slot = &mut cursor[src as usize];
            targets[*slot as usize] = dst;
            *slot += 1;
        }
        let mut index = self.index;
        index.shrink_to_fit();
        let mut ids = self.ids;
        ids.shrink_to_fit();
        SparseGraph {
            ids,
            index,
            offsets,
            targets,
        }
    }

    fn intern(&mut self, node: NodeId) -> Result<u32, LoadError> {
        if let Some(&idx) = self.index.get(&node) {
            return Ok(idx);
        }
        if self.ids.len() as u64 >= MAX_INDEX {
            return Err(LoadError::Capacity {
                what: "nodes",
                limit: MAX_INDEX,
            });
        }
        let idx = self.ids.len() as u32;
        self.ids.push(node);
        self.index.insert(node, idx);
        Ok(idx)
    }
}
