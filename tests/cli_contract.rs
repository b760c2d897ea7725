//! End-to-end checks of the `squaregen` binary: exit codes and output.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_squaregen"))
        .args(args)
        .output()
        .expect("failed to launch squaregen")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

/// Report lines without the timing lines, which differ between runs.
fn stable_lines(out: &Output) -> Vec<String> {
    stdout(out)
        .lines()
        .filter(|l| !l.starts_with("elapsed:") && !l.starts_with("throughput:"))
        .map(str::to_owned)
        .collect()
}

#[test]
fn too_few_arguments_prints_usage() {
    let out = run(&["0"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("GENERATOR options:"));
}

#[test]
fn selector_out_of_range_prints_usage() {
    for selector in ["4", "-1"] {
        let out = run(&[selector, "10", "1"]);
        assert_eq!(out.status.code(), Some(1), "selector {}", selector);
        assert!(stdout(&out).starts_with("USAGE: "));
    }
}

#[test]
fn arity_mismatch_prints_usage() {
    let cases: [&[&str]; 3] = [
        &["0", "10", "1"],
        &["1", "10", "1", "2"],
        &["2", "10", "1", "2", "3", "4"],
    ];
    for args in cases {
        let out = run(args);
        assert_eq!(out.status.code(), Some(1), "args {:?}", args);
        assert!(stdout(&out).contains("OPTIONS are specific seeds"));
    }
}

#[test]
fn usage_errors_state_their_reason() {
    let out = run(&["0", "10", "1"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).starts_with("USAGE: "));
    assert!(stderr(&out).contains("expects 2 seed(s), 1 given"));

    let out = run(&["0", "4", "1", "2", "2"]);
    assert!(stderr(&out).contains("expects 2 seed(s), 3 given"));

    let out = run(&["7", "10", "1"]);
    assert!(stderr(&out).contains("Generator 7 is outside the valid range"));

    let out = run(&["1", "ten", "4"]);
    assert!(stderr(&out).contains("'ten' is not a valid number"));

    let out = run(&["1", "10", "4", "--bogus"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("--bogus"));
}

#[test]
fn report_includes_throughput() {
    let out = run(&["1", "100000", "7"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("123 iterations before repeat\n"));
    assert!(text.contains("100000 of 100000 iterations completed, 122 distinct values\n"));
    let line = text
        .lines()
        .find(|l| l.starts_with("throughput: "))
        .expect("missing throughput line");
    assert!(line.ends_with(" values/s") || line == "throughput: n/a");
}

#[test]
fn shuffle_zero_seed_collapses() {
    let out = run(&["1", "1000", "0"]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    assert!(text.contains("collapsed to zero at iteration 1\n"));
    assert!(text.contains("1 of 1000 iterations completed"));
    assert!(text.contains("elapsed: "));
}

#[test]
fn selector_three_behaves_like_two() {
    let two = run(&["2", "1000", "1", "1", "1", "1", "7"]);
    let three = run(&["3", "1000", "1", "1", "1", "1", "7"]);
    assert_eq!(two.status.code(), Some(0));
    assert_eq!(stable_lines(&two), stable_lines(&three));
    assert!(stdout(&two).contains("4 iterations before repeat\n"));
}

#[test]
fn zero_modulus_fails_without_usage() {
    let out = run(&["2", "10", "1", "1", "1", "1", "0"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!stdout(&out).contains("USAGE"));
    assert!(stderr(&out).contains("Modulus must be greater than zero"));
}

#[test]
fn identical_arguments_give_identical_reports() {
    let args = ["0", "5000", "123456", "654321"];
    let first = run(&args);
    let second = run(&args);
    assert_eq!(first.status.code(), Some(0));
    assert_eq!(stable_lines(&first), stable_lines(&second));
}

#[test]
fn help_prints_usage_and_succeeds() {
    let out = run(&["--help"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("0 - middle multiply square"));
}

#[test]
fn samples_file_and_stats() {
    let path = std::env::temp_dir().join(format!("squaregen-samples-{}.txt", std::process::id()));
    let path_str = path.to_string_lossy().into_owned();
    let out = run(&[
        "2", "4", "1", "1", "1", "1", "7", "--stats", "--samples", &path_str,
    ]);
    assert_eq!(out.status.code(), Some(0));
    assert!(stdout(&out).contains("mean: 3.2500"));
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "3\n6\n1\n3\n");
    let _ = std::fs::remove_file(&path);
}
