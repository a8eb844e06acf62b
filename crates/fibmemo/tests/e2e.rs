//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

const FAREWELL: &str = "Thank you! Have a great day!";
const NOT_A_NUMBER: &str = "Please only enter a number.";

fn fibmemo() -> Command {
    let mut cmd = Command::cargo_bin("fibmemo").expect("binary not found");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG").env_remove("FIBMEMO_ALGO");
    cmd
}

#[test]
fn help_flag() {
    fibmemo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"));
}

#[test]
fn version_flag() {
    fibmemo()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fibmemo"));
}

#[test]
fn interactive_known_values() {
    fibmemo()
        .write_stdin("6\n7\n8\n50\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("8\n"))
        .stdout(predicate::str::contains("13\n"))
        .stdout(predicate::str::contains("21\n"))
        .stdout(predicate::str::contains("12586269025\n"))
        .stdout(predicate::str::ends_with(format!("{FAREWELL}\n")));
}

#[test]
fn interactive_prompt_is_shown() {
    fibmemo()
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Please enter a value or enter 'Quit' to exit the application: ",
        ));
}

#[test]
fn quit_is_case_insensitive() {
    for word in ["Quit", "QUIT", "qUIt"] {
        fibmemo()
            .write_stdin(format!("{word}\n6\n"))
            .assert()
            .success()
            .stdout(predicate::str::contains(FAREWELL))
            .stdout(predicate::str::contains("8\n").not());
    }
}

#[test]
fn non_numeric_input_continues() {
    fibmemo()
        .write_stdin("abc\n7\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(NOT_A_NUMBER))
        .stdout(predicate::str::contains("13\n"));
}

#[test]
fn invalid_index_is_reported_and_loop_continues() {
    fibmemo()
        .write_stdin("0\n-3\n5\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: n must be at least 1, got 0"))
        .stdout(predicate::str::contains("Error: n must be at least 1, got -3"))
        .stdout(predicate::str::contains("5\n"));
}

#[test]
fn overflow_is_reported() {
    fibmemo()
        .write_stdin("93\n92\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: F(93) overflows"))
        .stdout(predicate::str::contains("7540113804746346429\n"));
}

#[test]
fn end_of_input_exits_cleanly() {
    fibmemo()
        .write_stdin("10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("55\n"))
        .stdout(predicate::str::contains(FAREWELL).not());
}

#[test]
fn naive_algorithm() {
    fibmemo()
        .args(["--algo", "naive"])
        .write_stdin("20\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("6765\n"));
}

#[test]
fn algorithm_from_environment() {
    fibmemo()
        .env("FIBMEMO_ALGO", "naive")
        .args(["-n", "10", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Naive]"));
}

#[test]
fn invalid_algo() {
    fibmemo()
        .args(["--algo", "matrix"])
        .write_stdin("quit\n")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown algorithm: matrix"));
}

#[test]
fn one_shot_mode() {
    fibmemo()
        .args(["-n", "6,7", "-n", "50"])
        .assert()
        .success()
        .stdout("8\n13\n12586269025\n");
}

#[test]
fn one_shot_failure_exit_code() {
    fibmemo()
        .args(["-n", "10", "-n", "0"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("55\n"))
        .stdout(predicate::str::contains("Error: n must be at least 1, got 0"));
}

#[test]
fn details_mode() {
    fibmemo()
        .args(["-d"])
        .write_stdin("10\n5\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Memoized]"))
        .stdout(predicate::str::contains("cache: 8 entries (1 hits, 1 misses)"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    fibmemo()
        .args(["-v", "-n", "12"])
        .assert()
        .success()
        .stdout("144\n")
        .stderr(predicate::str::contains("starting"));
}

#[test]
fn completion_bash() {
    fibmemo()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibmemo"));
}
