//! Line-oriented edge-list parsing.
//!
//! Each data line holds two whitespace-separated non-negative integers,
//! `from` and `to`. Blank lines and lines whose first non-blank character is
//! the comment prefix are skipped. Anything else that does not parse is
//! recorded as a [`MalformedLine`] and the load carries on.

use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    time::Instant,
};

use serde::Serialize;
use tracing::{info, warn};

use crate::{
    config::LoadOptions,
    errors::LoadError,
    graph::{EdgeOutcome, GraphBuilder, NodeId, SparseGraph},
};

const READER_ORIGIN: &str = "<reader>";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum MalformedReason {
    WrongTokenCount(usize),
    InvalidInteger(String),
    InvalidUtf8,
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedReason::WrongTokenCount(n) => write!(f, "expected 2 fields, found {n}"),
            MalformedReason::InvalidInteger(token) => {
                write!(f, "not a non-negative integer: {token:?}")
            }
            MalformedReason::InvalidUtf8 => f.write_str("line is not valid UTF-8"),
        }
    }
}

/// A skipped input line. `line_number` is 1-based.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MalformedLine {
    pub line_number: usize,
    pub content: String,
    pub reason: MalformedReason,
}

/// Summary of one completed load.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LoadReport {
    pub source: PathBuf,
    pub lines_read: usize,
    pub comment_lines: usize,
    pub edges_accepted: usize,
    pub duplicates_dropped: usize,
    pub self_loops_skipped: usize,
    pub malformed_count: usize,
    pub malformed: Vec<MalformedLine>,
    pub node_count: usize,
    pub edge_count: usize,
    pub elapsed_ms: f64,
}

#[derive(Debug, PartialEq, Eq)]
enum LineKind {
    Blank,
    Comment,
    Edge(NodeId, NodeId),
    Malformed(MalformedReason),
}

fn classify_line(line: &str, comment_prefix: char) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.starts_with(comment_prefix) {
        return LineKind::Comment;
    }
    let mut tokens = trimmed.split_whitespace();
    let (Some(from), Some(to), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return LineKind::Malformed(MalformedReason::WrongTokenCount(
            trimmed.split_whitespace().count(),
        ));
    };
    match (parse_id(from), parse_id(to)) {
        (Ok(from), Ok(to)) => LineKind::Edge(from, to),
        (Err(bad), _) | (_, Err(bad)) => {
            LineKind::Malformed(MalformedReason::InvalidInteger(bad.to_string()))
        }
    }
}

fn parse_id(token: &str) -> Result<NodeId, &str> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(token);
    }
    token.parse().map_err(|_| token)
}

/// Opens `path` and builds a graph from it.
pub fn load_edge_list<P: AsRef<Path>>(
    path: P,
    options: &LoadOptions,
) -> Result<(SparseGraph, LoadReport), LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::unreadable(path, e))?;
    info!(path = %path.display(), "loading edge list");
    read_edges(BufReader::new(file), options, path)
}

/// Builds a graph from any buffered reader, e.g. an in-memory buffer.
pub fn parse_edge_list<R: BufRead>(
    reader: R,
    options: &LoadOptions,
) -> Result<(SparseGraph, LoadReport), LoadError> {
    read_edges(reader, options, Path::new(READER_ORIGIN))
}

fn read_edges<R: BufRead>(
    mut reader: R,
    options: &LoadOptions,
    origin: &Path,
) -> Result<(SparseGraph, LoadReport), LoadError> {
    let started = Instant::now();
    let mut builder = match options.reserve_edges {
        Some(capacity) => GraphBuilder::with_edge_capacity(capacity),
        None => GraphBuilder::new(),
    }
    .dedup_edges(options.dedup_edges)
    .skip_self_loops(!options.allow_self_loops);

    let mut report = LoadReport {
        source: origin.to_path_buf(),
        ..LoadReport::default()
    };
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| LoadError::unreadable(origin, e))?;
        if read == 0 {
            break;
        }
        report.lines_read += 1;
        let (kind, content) = match std::str::from_utf8(&buf) {
            Ok(line) => (classify_line(line, options.comment_prefix), line),
            Err(_) => (LineKind::Malformed(MalformedReason::InvalidUtf8), ""),
        };
        match kind {
            LineKind::Blank => {}
            LineKind::Comment => report.comment_lines += 1,
            LineKind::Edge(from, to) => match builder.add_edge(from, to)? {
                EdgeOutcome::Added => report.edges_accepted += 1,
                EdgeOutcome::Duplicate => report.duplicates_dropped += 1,
                EdgeOutcome::SelfLoopSkipped => report.self_loops_skipped += 1,
            },
            LineKind::Malformed(reason) => {
                let content = if content.is_empty() {
                    String::from_utf8_lossy(&buf).trim_end().to_string()
                } else {
                    content.trim_end().to_string()
                };
                let line_number = report.lines_read;
                record_malformed(&mut report, options, line_number, content, reason);
            }
        }
    }

    if report.malformed_count > options.max_logged_warnings {
        warn!(
            path = %origin.display(),
            suppressed = report.malformed_count - options.max_logged_warnings,
            total = report.malformed_count,
            "further malformed lines skipped"
        );
    }

    if report.edges_accepted == 0 && !options.allow_empty {
        return Err(LoadError::empty(origin));
    }

    let graph = builder.build();
    report.node_count = graph.node_count();
    report.edge_count = graph.edge_count();
    report.elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    info!(
        path = %origin.display(),
        nodes = report.node_count,
        edges = report.edge_count,
        malformed = report.malformed_count,
        memory_mib = graph.estimated_memory_bytes() as f64 / (1024.0 * 1024.0),
        elapsed_ms = report.elapsed_ms,
        "edge list loaded"
    );
    Ok((graph, report))
}

fn record_malformed(
    report: &mut LoadReport,
    options: &LoadOptions,
    line_number: usize,
    content: String,
    reason: MalformedReason,
) {
    report.malformed_count += 1;
    if report.malformed_count <= options.max_logged_warnings {
        warn!(line = line_number, reason = %reason, "skipping malformed line");
    }
    if report.malformed.len() < options.max_recorded_warnings {
        report.malformed.push(MalformedLine {
            line_number,
            content,
            reason,
        });
    }
}
