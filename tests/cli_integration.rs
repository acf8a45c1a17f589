//! Runs the binary end to end.

use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_grid-monitor"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("grid-monitor process should run")
}

#[test]
fn text_run_prints_ten_reports() {
    let output = run(&["--pause-ms", "0", "--seed", "42"]);
    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("stdout should be valid UTF-8");
    assert!(stdout.starts_with("Added solar node: SOLAR1\n"));
    assert!(stdout.contains("Added consumer node: CONSUMER2\n"));
    assert!(stdout.contains("Starting grid monitoring (will run for 10 iterations)..."));
    assert_eq!(stdout.matches("Grid Stability: ").count(), 10);
    assert_eq!(stdout.matches("CONSUMER1: ").count(), 10);
    assert!(stdout.contains("Iteration 10 - Timestamp: "));
    assert!(stdout.trim_end().ends_with("Monitoring complete!"));
}

#[test]
fn json_run_prints_ten_lines() {
    let output = run(&["--pause-ms", "0", "--format", "json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 10);
    for (i, line) in lines.iter().enumerate() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["iteration"], i + 1);
        let status = value["status"].as_str().unwrap();
        assert!(status == "Stable" || status == "Unstable");
    }
}

#[test]
fn same_seed_same_output_values() {
    let strip_timestamps = |out: Vec<u8>| -> Vec<String> {
        String::from_utf8(out)
            .unwrap()
            .lines()
            .filter(|l| !l.starts_with("Iteration "))
            .map(str::to_string)
            .collect()
    };
    let a = strip_timestamps(run(&["--pause-ms", "0", "--seed", "5"]).stdout);
    let b = strip_timestamps(run(&["--pause-ms", "0", "--seed", "5"]).stdout);
    assert_eq!(a, b);
}

#[test]
fn run_writes_no_files() {
    let path = std::env::temp_dir().join("grid_monitor_cli_reports.csv");
    let _ = std::fs::remove_file(&path);
    let output = run(&[
        "--pause-ms",
        "0",
        "--telemetry-out",
        path.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!path.exists());
}

#[test]
fn config_file_is_applied() {
    let path = std::env::temp_dir().join("grid_monitor_cli_config.toml");
    std::fs::write(&path, "[run]\npause_ms = 0\n\n[output]\nformat = \"json\"\n").unwrap();
    let output = run(&["--config", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 10);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn bad_arguments_exit_with_error() {
    assert_eq!(run(&["--bogus"]).status.code(), Some(1));
    assert_eq!(run(&["--seed", "abc"]).status.code(), Some(1));
    assert_eq!(run(&["--format", "xml", "--pause-ms", "0"]).status.code(), Some(1));
    assert_eq!(run(&["--config", "/nonexistent/grid.toml"]).status.code(), Some(1));
}
