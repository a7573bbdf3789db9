use std::process::{Command, Output};

fn printscript(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_printscript")).args(args)
                                                   .output()
                                                   .unwrap_or_else(|e| panic!("Failed to run printscript: {e}"))
}

#[test]
fn validate_reports_the_statement_count() {
    let output = printscript(&["--validate", "let x: number = 1; println(x);"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(),
               "Valid PrintScript 1.1: 2 statement(s).");
}

#[test]
fn successful_run_prints_program_output() {
    let output = printscript(&["let x: number = 2 * 3; println(x);"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "6");
}

#[test]
fn failed_run_exits_with_status_one() {
    let output = printscript(&["println(1);\nb = ;"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1");
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error at 2:1:"));
}
