use assert_cmd::Command;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/test_graph.txt");

fn neuronet() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_neuronet"));
    cmd.arg("--quiet");
    cmd
}

fn stdout_of(args: &[&str]) -> String {
    let output = neuronet().args(args).assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("utf8 stdout")
}

#[test]
fn test_cli_exits_with_success_on_help() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_neuronet"));
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn test_cli_stats_command() {
    let out = stdout_of(&["stats", "--file", FIXTURE]);
    assert!(out.contains("nodes=10"));
    assert!(out.contains("edges=11"));
    assert!(out.contains("critical=0 degree=2"));
}

#[test]
fn test_cli_stats_json() {
    let out = stdout_of(&["stats", "--file", FIXTURE, "--json"]);
    let value: serde_json::Value = serde_json::from_str(out.trim()).expect("json");
    assert_eq!(value["node_count"], 10);
    assert_eq!(value["estimated_memory_bytes"], 328);
}

#[test]
fn test_cli_path_command() {
    let out = stdout_of(&["path", "--file", FIXTURE, "--start", "0", "--end", "9"]);
    assert_eq!(out.trim(), "0 -> 1 -> 3 -> 4 -> 6 -> 8 -> 9");
}

#[test]
fn test_cli_path_unreachable() {
    let out = stdout_of(&["path", "--file", FIXTURE, "--start", "9", "--end", "0"]);
    assert_eq!(out.trim(), "no path from 9 to 0");
}

#[test]
fn test_cli_neighbors_json() {
    let out = stdout_of(&["neighbors", "--file", FIXTURE, "--node", "0", "--json"]);
    assert_eq!(out.trim(), "[1,2]");
}

#[test]
fn test_cli_within_command() {
    let out = stdout_of(&["within", "--file", FIXTURE, "--node", "0", "--depth", "1"]);
    assert_eq!(out.trim(), "0\n1\n2");
}

#[test]
fn test_cli_negative_depth_fails() {
    neuronet()
        .args(["within", "--file", FIXTURE, "--node", "0", "--depth", "-2"])
        .assert()
        .code(1);
}

#[test]
fn test_cli_missing_file_fails() {
    neuronet()
        .args(["stats", "--file", "/no/such/graph.txt"])
        .assert()
        .code(1);
}

#[test]
fn test_cli_requires_file() {
    neuronet().arg("stats").assert().code(2);
}

#[test]
fn test_cli_unknown_flag_is_usage_error() {
    neuronet().args(["--frobnicate"]).assert().code(2);
}

#[test]
fn test_cli_generate_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("line.txt");
    let path_str = path.to_str().unwrap();
    neuronet()
        .args(["generate", "--shape", "line", "--nodes", "50", "--output", path_str])
        .assert()
        .success();
    let out = stdout_of(&["dfs", "--file", path_str, "--start", "0", "--json"]);
    let order: Vec<u64> = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(order, (0..50).collect::<Vec<u64>>());
}
