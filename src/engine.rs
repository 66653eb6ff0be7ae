//! Caller-owned query handle.
//!
//! A [`GraphEngine`] owns at most one loaded graph. `load` needs `&mut self`
//! and every query takes `&self`, so the borrow checker enforces a single
//! writer. A shared `&GraphEngine` can be read from many threads once loading
//! is done.

use std::{io::BufRead, path::Path};

use crate::{
    config::LoadOptions,
    errors::{LoadError, QueryError},
    graph::{NodeId, SparseGraph},
    loader::{self, LoadReport},
    metrics::{self, CriticalNode, GraphStats},
    traversal,
};

#[derive(Debug, Default)]
pub struct GraphEngine {
    graph: SparseGraph,
    options: LoadOptions,
    report: Option<LoadReport>,
}

impl GraphEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LoadOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Wraps an already built graph; no load report is attached.
    pub fn from_graph(graph: SparseGraph) -> Self {
        Self {
            graph,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: LoadOptions) {
        self.options = options;
    }

    /// Replaces the current graph with one built from `path`.
    ///
    /// On error the previously loaded graph stays in place.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        let (graph, report) = loader::load_edge_list(path, &self.options)?;
        self.install(graph, report);
        Ok(())
    }

    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> Result<(), LoadError> {
        let (graph, report) = loader::parse_edge_list(reader, &self.options)?;
        self.install(graph, report);
        Ok(())
    }

    fn install(&mut self, graph: SparseGraph, report: LoadReport) {
        self.graph = graph;
        self.report = Some(report);
    }

    pub fn last_report(&self) -> Option<&LoadReport> {
        self.report.as_ref()
    }

    pub fn graph(&self) -> &SparseGraph {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn neighbors(&self, node: NodeId) -> Vec<NodeId> {
        self.graph.neighbors(node)
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.graph.degree(node)
    }

    pub fn estimated_memory_bytes(&self) -> u64 {
        self.graph.estimated_memory_bytes()
    }

    pub fn most_critical_node(&self) -> Result<NodeId, QueryError> {
        metrics::most_critical_node(&self.graph)
    }

    pub fn critical_node(&self) -> Result<CriticalNode, QueryError> {
        metrics::critical_node(&self.graph)
    }

    pub fn nodes_by_degree(&self, top_n: usize) -> Vec<(NodeId, usize)> {
        metrics::nodes_by_degree(&self.graph, top_n)
    }

    pub fn stats(&self) -> GraphStats {
        metrics::stats(&self.graph)
    }

    pub fn shortest_path(&self, start: NodeId, end: NodeId) -> Vec<NodeId> {
        traversal::shortest_path(&self.graph, start, end)
    }

    pub fn traverse(&self, start: NodeId) -> Vec<NodeId> {
        traversal::traverse(&self.graph, start)
    }

    pub fn nodes_within_depth(
        &self,
        center: NodeId,
        max_depth: i64,
    ) -> Result<Vec<NodeId>, QueryError> {
        traversal::nodes_within_depth(&self.graph, center, max_depth)
    }
}
