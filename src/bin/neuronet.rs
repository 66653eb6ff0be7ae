use std::{env, fs::File, io::BufWriter, process};

use neuronet::{
    CommandLineConfig, GraphEngine, NeuronetError, NodeId, QueryError,
    bench_utils::{GraphShape, generate_edges, write_edge_list},
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };
    setup_logging(config.verbose, config.quiet);

    if config.command == "generate" {
        if let Err(err) = run_generate(&config) {
            eprintln!("command failed: {err}");
            process::exit(1);
        }
        return;
    }

    let Some(file) = config.file.as_deref() else {
        eprintln!("error: --file is required for {}", config.command);
        process::exit(2);
    };
    let mut engine = GraphEngine::with_options(config.load.clone());
    if let Err(err) = engine.load(file) {
        eprintln!("{err}");
        process::exit(1);
    }
    match run_command(&engine, &config) {
        Ok(()) => {}
        Err(CommandError::Usage(msg)) => {
            eprintln!("error: {msg}");
            process::exit(2);
        }
        Err(CommandError::Failed(err)) => {
            eprintln!("command failed: {err}");
            process::exit(1);
        }
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

enum CommandError {
    Usage(String),
    Failed(NeuronetError),
}

impl From<QueryError> for CommandError {
    fn from(err: QueryError) -> Self {
        CommandError::Failed(err.into())
    }
}

fn required(value: Option<NodeId>, flag: &str) -> Result<NodeId, CommandError> {
    value.ok_or_else(|| CommandError::Usage(format!("{flag} is required")))
}

fn run_command(engine: &GraphEngine, config: &CommandLineConfig) -> Result<(), CommandError> {
    match config.command.as_str() {
        "stats" => {
            let stats = engine.stats();
            if config.json {
                println!("{}", json!(stats));
            } else {
                println!("nodes={}", stats.node_count);
                println!("edges={}", stats.edge_count);
                println!(
                    "memory_bytes={} ({:.2} MiB)",
                    stats.estimated_memory_bytes,
                    stats.estimated_memory_bytes as f64 / (1024.0 * 1024.0)
                );
                if let Some(critical) = stats.critical {
                    println!("critical={} degree={}", critical.node, critical.degree);
                }
                if let Some(report) = engine.last_report() {
                    println!("malformed_lines={}", report.malformed_count);
                }
            }
        }
        "neighbors" => {
            let node = required(config.node, "--node")?;
            print_ids(&engine.neighbors(node), config.json, "\n");
        }
        "degree" => {
            let node = required(config.node, "--node")?;
            let degree = engine.degree(node);
            if config.json {
                println!("{}", json!({ "node": node, "degree": degree }));
            } else {
                println!("{degree}");
            }
        }
        "critical" => {
            let critical = engine.critical_node()?;
            if config.json {
                println!("{}", json!(critical));
            } else {
                println!("{} degree={}", critical.node, critical.degree);
            }
        }
        "top" => {
            let ranked = engine.nodes_by_degree(config.top);
            if config.json {
                let rows: Vec<_> = ranked
                    .iter()
                    .map(|(node, degree)| json!({ "node": node, "degree": degree }))
                    .collect();
                println!("{}", json!(rows));
            } else {
                for (node, degree) in ranked {
                    println!("{node}\t{degree}");
                }
            }
        }
        "path" => {
            let start = required(config.start, "--start")?;
            let end = required(config.end, "--end")?;
            let path = engine.shortest_path(start, end);
            if path.is_empty() && !config.json {
                println!("no path from {start} to {end}");
            } else {
                print_ids(&path, config.json, " -> ");
            }
        }
        "dfs" => {
            let start = required(config.start.or(config.node), "--start")?;
            print_ids(&engine.traverse(start), config.json, "\n");
        }
        "within" => {
            let center = required(config.node.or(config.start), "--node")?;
            let depth = config
                .depth
                .ok_or_else(|| CommandError::Usage("--depth is required".to_string()))?;
            print_ids(&engine.nodes_within_depth(center, depth)?, config.json, "\n");
        }
        other => {
            return Err(CommandError::Usage(format!("unknown command {other}")));
        }
    }
    Ok(())
}

fn print_ids(ids: &[NodeId], as_json: bool, separator: &str) {
    if as_json {
        println!("{}", json!(ids));
        return;
    }
    let text: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    if !text.is_empty() {
        println!("{}", text.join(separator));
    }
}

fn run_generate(config: &CommandLineConfig) -> Result<(), NeuronetError> {
    let output = config
        .output
        .as_deref()
        .ok_or_else(|| QueryError::invalid_argument("--output is required for generate"))?;
    let shape = GraphShape::from_name(&config.shape, config.nodes, config.edges, config.m)?;
    let edges = generate_edges(&shape, config.nodes, config.seed)?;
    let file = File::create(output)?;
    write_edge_list(
        BufWriter::new(file),
        &format!("Synthetic {} dataset (seed {})", config.shape, config.seed),
        config.nodes,
        &edges,
    )?;
    tracing::info!(path = output, nodes = config.nodes, edges = edges.len(), "dataset written");
    Ok(())
}
