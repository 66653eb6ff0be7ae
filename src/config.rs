//! Load options and command-line configuration.
//!
//! [`LoadOptions`] controls how an edge list is turned into a graph. The
//! defaults keep every well-formed edge exactly as it appears in the file.
//! [`CommandLineConfig`] is the flag set of the `neuronet` binary.

use std::env;

/// Options applied by the edge-list loader.
///
/// # Default Configuration
///
/// ```rust
/// use neuronet::LoadOptions;
/// let options = LoadOptions::default();
/// assert!(!options.dedup_edges);
/// assert!(options.allow_self_loops);
/// assert_eq!(options.comment_prefix, '#');
/// assert!(!options.allow_empty);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    /// Drop repeated `(from, to)` pairs, keeping the first occurrence.
    ///
    /// **Default:** `false`. Parallel edges each count toward the edge count
    /// and the source's out-degree.
    pub dedup_edges: bool,

    /// Keep `(v, v)` edges.
    ///
    /// **Default:** `true`. When `false`, self-loops are skipped and counted
    /// in the load report; the id is still registered as a node.
    pub allow_self_loops: bool,

    /// First non-blank character that marks a comment or header line.
    ///
    /// **Default:** `'#'`
    pub comment_prefix: char,

    /// Accept a file that yields no edges.
    ///
    /// **Default:** `false`, which makes such a load fail with
    /// [`LoadError::Empty`](crate::LoadError::Empty). When `true` the load
    /// succeeds and installs an empty graph.
    pub allow_empty: bool,

    /// Capacity hint for the number of edges.
    ///
    /// **Default:** `None`
    pub reserve_edges: Option<usize>,

    /// Individual `warn!` lines emitted for malformed input before switching
    /// to a single summary line.
    ///
    /// **Default:** `20`
    pub max_logged_warnings: usize,

    /// Malformed lines kept in the [`LoadReport`](crate::LoadReport). The
    /// total count is always exact.
    ///
    /// **Default:** `1000`
    pub max_recorded_warnings: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            dedup_edges: false,
            allow_self_loops: true,
            comment_prefix: '#',
            allow_empty: false,
            reserve_edges: None,
            max_logged_warnings: 20,
            max_recorded_warnings: 1000,
        }
    }
}

impl LoadOptions {
    pub const ENV_DEDUP: &'static str = "NEURONET_DEDUP";
    pub const ENV_ALLOW_SELF_LOOPS: &'static str = "NEURONET_ALLOW_SELF_LOOPS";
    pub const ENV_ALLOW_EMPTY: &'static str = "NEURONET_ALLOW_EMPTY";

    /// Defaults with overrides from `NEURONET_DEDUP`,
    /// `NEURONET_ALLOW_SELF_LOOPS` and `NEURONET_ALLOW_EMPTY`.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Applies recognised environment overrides; unparseable values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(v) = env_flag(Self::ENV_DEDUP) {
            self.dedup_edges = v;
        }
        if let Some(v) = env_flag(Self::ENV_ALLOW_SELF_LOOPS) {
            self.allow_self_loops = v;
        }
        if let Some(v) = env_flag(Self::ENV_ALLOW_EMPTY) {
            self.allow_empty = v;
        }
        self
    }

    pub fn dedup(mut self, enabled: bool) -> Self {
        self.dedup_edges = enabled;
        self
    }

    pub fn self_loops(mut self, allowed: bool) -> Self {
        self.allow_self_loops = allowed;
        self
    }

    pub fn empty_ok(mut self, allowed: bool) -> Self {
        self.allow_empty = allowed;
        self
    }

    pub fn comment(mut self, prefix: char) -> Self {
        self.comment_prefix = prefix;
        self
    }
}

fn env_flag(key: &str) -> Option<bool> {
    env::var(key).ok().and_then(|raw| parse_flag(&raw))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub command: String,
    pub file: Option<String>,
    pub node: Option<u64>,
    pub start: Option<u64>,
    pub end: Option<u64>,
    pub depth: Option<i64>,
    pub top: usize,
    pub json: bool,
    pub verbose: bool,
    pub quiet: bool,
    pub load: LoadOptions,
    pub shape: String,
    pub nodes: usize,
    pub edges: Option<usize>,
    pub m: usize,
    pub seed: u64,
    pub output: Option<String>,
}

impl Default for CommandLineConfig {
    fn default() -> Self {
        Self {
            command: String::from("stats"),
            file: None,
            node: None,
            start: None,
            end: None,
            depth: None,
            top: 10,
            json: false,
            verbose: false,
            quiet: false,
            load: LoadOptions::from_env(),
            shape: String::from("scalefree"),
            nodes: 1000,
            edges: None,
            m: 3,
            seed: 42,
            output: None,
        }
    }
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut cfg = Self::default();
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--file" | "-f" => cfg.file = Some(value(&mut iter, "--file")?.to_string()),
                "--command" => cfg.command = value(&mut iter, "--command")?.to_string(),
                "--node" => cfg.node = Some(number(&mut iter, "--node")?),
                "--start" => cfg.start = Some(number(&mut iter, "--start")?),
                "--end" => cfg.end = Some(number(&mut iter, "--end")?),
                "--depth" => cfg.depth = Some(number(&mut iter, "--depth")?),
                "--top" => cfg.top = number(&mut iter, "--top")?,
                "--shape" => cfg.shape = value(&mut iter, "--shape")?.to_string(),
                "--nodes" => cfg.nodes = number(&mut iter, "--nodes")?,
                "--edges" => cfg.edges = Some(number(&mut iter, "--edges")?),
                "--m" => cfg.m = number(&mut iter, "--m")?,
                "--seed" => cfg.seed = number(&mut iter, "--seed")?,
                "--output" | "-o" => cfg.output = Some(value(&mut iter, "--output")?.to_string()),
                "--dedup" => cfg.load.dedup_edges = true,
                "--no-self-loops" => cfg.load.allow_self_loops = false,
                "--allow-empty" => cfg.load.allow_empty = true,
                "--json" => cfg.json = true,
                "--verbose" | "-v" => cfg.verbose = true,
                "--quiet" | "-q" => cfg.quiet = true,
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                _ => cfg.command = arg.to_string(),
            }
        }
        Ok(cfg)
    }

    pub fn help() -> &'static str {
        "Usage: neuronet [COMMAND] --file PATH [options]\n\
         \n\
         Commands:\n\
         \x20 stats                      node/edge counts, memory estimate, critical node\n\
         \x20 neighbors --node N         out-neighbors of N in file order\n\
         \x20 degree --node N            out-degree of N\n\
         \x20 critical                   node with the highest out-degree\n\
         \x20 top [--top K]              K nodes with the highest out-degree\n\
         \x20 path --start S --end E     shortest directed path\n\
         \x20 dfs --start S              depth-first preorder from S\n\
         \x20 within --node C --depth D  nodes within D hops of C\n\
         \x20 generate --output PATH     write a synthetic edge list\n\
         \x20          [--shape line|star|random|scalefree] [--nodes N] [--edges M] [--m K] [--seed S]\n\
         \n\
         Options:\n\
         \x20 --dedup          drop repeated edges\n\
         \x20 --no-self-loops  drop (v, v) edges\n\
         \x20 --allow-empty    accept files with no edges\n\
         \x20 --json           print JSON\n\
         \x20 -v, --verbose    debug logging\n\
         \x20 -q, --quiet      errors only\n"
    }
}

fn value<'a, 'b>(
    iter: &mut impl Iterator<Item = &'b &'a str>,
    flag: &str,
) -> Result<&'a str, String>
where
    'a: 'b,
{
    iter.next()
        .copied()
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn number<'a, 'b, T: std::str::FromStr>(
    iter: &mut impl Iterator<Item = &'b &'a str>,
    flag: &str,
) -> Result<T, String>
where
    'a: 'b,
{
    let raw = value(iter, flag)?;
    raw.parse()
        .map_err(|_| format!("{flag} expects a number, got {raw}"))
}
