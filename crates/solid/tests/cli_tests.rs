//! Exit status and stream contract of the `solid` binary

use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn solid(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_solid"))
        .args(args)
        .env("SOLID_LOG", "off")
        .output()
        .expect("failed to run solid")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_violation_exits_with_error() {
    let output = solid(&["all"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        "solid error: Unsupported operation: Penguins cannot fly\n"
    );
    assert!(stdout(&output).contains("Liskov Substitution Principle (LSP) Example"));
}

#[test]
fn test_keep_going_exits_cleanly_with_summary() {
    let output = solid(&["all", "--keep-going"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stderr(&output),
        "lsp: Unsupported operation: Penguins cannot fly\n\
         isp: Unsupported operation: Faxing not supported\n\
         2 of 6 demonstrations stopped at a violation\n"
    );
}

#[test]
fn test_run_accepts_full_names_in_any_case() {
    let output = solid(&["run", "--skip-violations", "LSP", "dependency inversion principle"]);
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(text.starts_with("Liskov Substitution Principle (LSP) Example\n"));
    assert!(text.contains("Dependency Inversion Principle (DIP) Example\n"));
    assert_eq!(stderr(&output), "");
}

#[test]
fn test_unknown_principle_is_rejected() {
    let output = solid(&["run", "xyz"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Unknown principle: xyz"));
}
