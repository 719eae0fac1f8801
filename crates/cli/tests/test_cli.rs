//! End-to-end tests for the fib-bench binary

use std::io::Write;
use std::process::{Command, Output};

fn fib_bench(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fib-bench"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run fib-bench")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_no_arguments() {
    let output = fib_bench(&[]);
    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2, "unexpected output: {:?}", out);
    assert_eq!(lines[0], "Found answer: 12586269025");

    let elapsed = lines[1]
        .strip_prefix("Elapsed: ")
        .expect("second line should start with 'Elapsed: '");
    assert!(
        elapsed.parse::<u64>().is_ok(),
        "elapsed should be a non-negative integer, got {:?}",
        elapsed
    );
}

#[test]
fn test_no_arguments_is_quiet_on_stderr() {
    let output = fib_bench(&[]);
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_index_flag() {
    let output = fib_bench(&["-n", "10"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Found answer: 55\n"));
}

#[test]
fn test_bench_format() {
    let output = fib_bench(&["--index", "30", "--format", "bench"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("BENCH:fibonacci:fib-fast-30:832040:"), "{}", out);
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn test_json_format() {
    let output = fib_bench(&["--format", "json"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("\"answer\":12586269025"), "{}", out);
    assert!(out.contains("\"name\":\"fib-fast-50\""), "{}", out);
}

#[test]
fn test_expect_mismatch_fails() {
    let output = fib_bench(&["-n", "10", "--expect", "56"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Found answer: 55\n"));
    assert!(stderr(&output).contains("ERROR: expected 56, got 55"));
}

#[test]
fn test_expect_match_succeeds() {
    let output = fib_bench(&["--expect", "12586269025"]);
    assert!(output.status.success());
}

#[test]
fn test_overflowing_index_fails() {
    let output = fib_bench(&["-n", "93"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("overflows"));
}

#[test]
fn test_negative_index_fails() {
    let output = fib_bench(&["-n", "-1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("non-negative"));
}

#[test]
fn test_zero_repeat_fails() {
    let output = fib_bench(&["--repeat", "0"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_unknown_format_is_usage_error() {
    let output = fib_bench(&["--format", "yaml"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown report format"));
}

#[test]
fn test_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[bench]\nn = 20\nrepeat = 1000\nformat = \"bench\"\nexpect = 6765"
    )
    .unwrap();

    let path = file.path().to_str().unwrap();
    let output = fib_bench(&["--config", path]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).starts_with("BENCH:fibonacci:fib-fast-20-x1000:6765:"));
}

#[test]
fn test_flags_override_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[bench]\nn = 20\nformat = \"bench\"").unwrap();

    let path = file.path().to_str().unwrap();
    let output = fib_bench(&["--config", path, "-n", "10", "-f", "plain"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Found answer: 55\n"));
}

#[test]
fn test_bad_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[bench]\nthreads = 4").unwrap();

    let path = file.path().to_str().unwrap();
    let output = fib_bench(&["--config", path]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid config"));
}

#[test]
fn test_version() {
    let output = fib_bench(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("fib-bench "));
}
