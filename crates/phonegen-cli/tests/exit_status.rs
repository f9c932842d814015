use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn phonegen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_phonegen"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("spawn phonegen")
}

fn temp_out_dir(label: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("phonegen_cli_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}

fn stderr_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stderr)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[test]
fn invalid_configuration_prints_a_single_error_line() {
    let dir = temp_out_dir("invalid");
    let out = dir.join("numbers.csv");
    let output = phonegen(&["-t", "3", "-c", "1", "-l", "415", "-o", out.to_str().expect("utf8 path")]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let lines = stderr_lines(&output);
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].starts_with("Error: invalid configuration"), "{lines:?}");
    assert!(lines[0].contains("got -1"), "{lines:?}");
    assert!(!out.exists());
}

#[test]
fn write_failure_names_the_destination_once() {
    let dir = temp_out_dir("unwritable");
    let blocker = dir.join("blocker");
    fs::write(&blocker, "not a directory").expect("create blocker file");
    let out = blocker.join("numbers.csv");
    let out_arg = out.to_str().expect("utf8 path");

    let output = phonegen(&["-t", "8", "-c", "1", "-o", out_arg]);

    assert_eq!(output.status.code(), Some(1));
    let lines = stderr_lines(&output);
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].starts_with("Error: failed to write"), "{lines:?}");
    assert!(lines[0].contains(out_arg), "{lines:?}");
}

#[test]
fn unwritable_report_leaves_output_untouched() {
    let dir = temp_out_dir("report");
    let out = dir.join("numbers.csv");
    fs::write(&out, "Phone Number\n+1000\n").expect("seed previous output");
    let blocker = dir.join("blocker");
    fs::write(&blocker, "not a directory").expect("create blocker file");
    let report = blocker.join("report.json");

    let output = phonegen(&[
        "-t",
        "8",
        "-c",
        "1",
        "-o",
        out.to_str().expect("utf8 path"),
        "--report",
        report.to_str().expect("utf8 path"),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr_lines(&output).len(), 1);
    assert_eq!(
        fs::read_to_string(&out).expect("read output"),
        "Phone Number\n+1000\n"
    );
}

#[test]
fn success_prints_summary_and_keeps_stderr_quiet() {
    let dir = temp_out_dir("success");
    let out = dir.join("numbers.csv");
    let out_arg = out.to_str().expect("utf8 path");

    let output = phonegen(&["-t", "11", "-c", "+1", "-l", "415", "-n", "3", "--seed", "1", "-o", out_arg]);

    assert!(output.status.success());
    assert!(stderr_lines(&output).is_empty());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("Success: generated 3 phone numbers and saved to '{out_arg}'.")
    );
    assert_eq!(fs::read_to_string(&out).expect("read output").lines().count(), 4);
}
