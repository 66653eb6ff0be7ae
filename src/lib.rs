//! Sparse directed-graph engine for large edge-list datasets.
//!
//! Load an edge list once into a compact CSR store, then query it:
//!
//! ```no_run
//! use neuronet::GraphEngine;
//!
//! let mut engine = GraphEngine::new();
//! engine.load("data/web-Google.txt")?;
//! let path = engine.shortest_path(0, 9);
//! let hub = engine.critical_node()?;
//! println!("{path:?} hub={} degree={}", hub.node, hub.degree);
//! # Ok::<(), neuronet::NeuronetError>(())
//! ```
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.

pub mod bench_utils;
pub mod config;
pub mod engine;
pub mod errors;
pub mod graph;
pub mod loader;
pub mod metrics;
pub mod traversal;

pub use crate::config::{CommandLineConfig, LoadOptions};
pub use crate::engine::GraphEngine;
pub use crate::errors::{LoadError, NeuronetError, QueryError};
pub use crate::graph::{GraphBuilder, NodeId, SparseGraph};
pub use crate::loader::{LoadReport, MalformedLine, MalformedReason};
pub use crate::metrics::{CriticalNode, GraphStats};
