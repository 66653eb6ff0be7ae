use std::time::Duration;

use criterion::{Criterion, criterion_group, criterion_main};
use neuronet::{
    SparseGraph,
    bench_utils::{GraphShape, generate_edges},
    metrics::{most_critical_node, nodes_by_degree},
    traversal::{nodes_within_depth, shortest_path, traverse},
};

const LINE_SEED: u64 = 0xDD21;
const ER_SEED: u64 = 0xEE45;
const SF_SEED: u64 = 0xFF89;
const SAMPLE_SIZE: usize = 20;
const WARM_UP: Duration = Duration::from_millis(300);
const MEASURE: Duration = Duration::from_millis(500);

struct PreparedGraph {
    graph: SparseGraph,
    hub: u64,
    last: u64,
    label: &'static str,
}

fn bench_scale() -> usize {
    #[cfg(feature = "bench-ci")]
    {
        10_000
    }
    #[cfg(not(feature = "bench-ci"))]
    {
        200_000
    }
}

fn prepared_graphs() -> Vec<PreparedGraph> {
    let nodes = bench_scale();
    vec![
        prepare(GraphShape::Line, nodes, LINE_SEED, "line"),
        prepare(
            GraphShape::RandomErdosRenyi {
                edges: nodes.saturating_mul(5),
            },
            nodes,
            ER_SEED,
            "er",
        ),
        prepare(GraphShape::ScaleFree { m: 5 }, nodes, SF_SEED, "scalefree"),
    ]
}

fn prepare(shape: GraphShape, nodes: usize, seed: u64, label: &'static str) -> PreparedGraph {
    let edges = generate_edges(&shape, nodes, seed).expect("edges");
    let graph = SparseGraph::from_edges(edges).expect("graph");
    let hub = most_critical_node(&graph).expect("hub");
    PreparedGraph {
        graph,
        hub,
        last: nodes as u64 - 1,
        label,
    }
}

fn bench_neighbors(c: &mut Criterion) {
    let graphs = prepared_graphs();
    let mut group = c.benchmark_group("neighbors");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for prepared in &graphs {
        group.bench_function(prepared.label, |b| {
            b.iter(|| prepared.graph.neighbors(prepared.hub));
        });
    }
    group.finish();
}

fn bench_bfs_depth(c: &mut Criterion) {
    let graphs = prepared_graphs();
    let mut group = c.benchmark_group("bfs_depth_3");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for prepared in &graphs {
        group.bench_function(prepared.label, |b| {
            b.iter(|| nodes_within_depth(&prepared.graph, prepared.hub, 3).expect("bfs"));
        });
    }
    group.finish();
}

fn bench_shortest_paths(c: &mut Criterion) {
    let graphs = prepared_graphs();
    let mut group = c.benchmark_group("shortest_path");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for prepared in &graphs {
        let start = if prepared.label == "line" { 0 } else { prepared.hub };
        group.bench_function(prepared.label, |b| {
            b.iter(|| shortest_path(&prepared.graph, start, prepared.last));
        });
    }
    group.finish();
}

fn bench_dfs(c: &mut Criterion) {
    let graphs = prepared_graphs();
    let mut group = c.benchmark_group("dfs");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for prepared in &graphs {
        group.bench_function(prepared.label, |b| {
            b.iter(|| traverse(&prepared.graph, 0));
        });
    }
    group.finish();
}

fn bench_degree_scan(c: &mut Criterion) {
    let graphs = prepared_graphs();
    let mut group = c.benchmark_group("degree_scan");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP);
    group.measurement_time(MEASURE);
    for prepared in &graphs {
        group.bench_function(prepared.label, |b| {
            b.iter(|| nodes_by_degree(&prepared.graph, 10));
        });
    }
    group.finish();
}

criterion_group!(
    name = traversal_benches;
    config = Criterion::default();
    targets = bench_neighbors, bench_bfs_depth, bench_shortest_paths, bench_dfs, bench_degree_scan
);
criterion_main!(traversal_benches);
