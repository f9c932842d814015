use std::fs;
use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use phonegen_core::{GenerationRequest, validate_request};
use phonegen_generate::output::csv::{HEADER, read_phone_numbers_csv, write_phone_numbers_csv};
use phonegen_generate::{ErrorKind, GenerateOptions, GenerationEngine, GenerationError};

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("phonegen_generate_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}

fn engine_for(output: PathBuf, report: Option<PathBuf>) -> GenerationEngine {
    GenerationEngine::new(GenerateOptions { output, report })
}

#[test]
fn written_numbers_read_back_in_order() {
    let dir = temp_out_dir("roundtrip");
    let output = dir.join("phone_numbers.csv");
    let config = validate_request(
        &GenerationRequest::new(11, "+1")
            .with_local_code("415")
            .with_count(25),
    )
    .expect("valid request");

    let engine = engine_for(output.clone(), None);
    let result = engine
        .run(config, &mut ChaCha20Rng::seed_from_u64(1))
        .expect("run generation");

    let read_back = read_phone_numbers_csv(&output).expect("read csv");
    let expected: Vec<String> = result.numbers.iter().map(|n| n.to_string()).collect();
    assert_eq!(read_back, expected);

    let contents = fs::read_to_string(&output).expect("read raw csv");
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some(HEADER));
    assert_eq!(lines.count(), 25);
    assert_eq!(result.report.bytes_written, contents.len() as u64);
}

#[test]
fn overwrites_existing_output() {
    let dir = temp_out_dir("overwrite");
    let output = dir.join("numbers.csv");
    fs::write(&output, "stale contents\nthat should disappear\n").expect("seed stale file");

    let numbers = phonegen_generate::generate_numbers(
        &GenerationRequest::new(6, "1").with_count(2),
        &mut ChaCha20Rng::seed_from_u64(2),
    )
    .expect("generate numbers");
    write_phone_numbers_csv(&output, &numbers).expect("write csv");

    let read_back = read_phone_numbers_csv(&output).expect("read csv");
    assert_eq!(read_back.len(), 2);
    assert!(!fs::read_to_string(&output).expect("read").contains("stale"));
}

#[test]
fn empty_batch_writes_header_only() {
    let dir = temp_out_dir("empty");
    let output = dir.join("nested").join("empty.csv");

    write_phone_numbers_csv(&output, &[]).expect("write csv");

    assert_eq!(fs::read_to_string(&output).expect("read"), format!("{HEADER}\n"));
    assert!(read_phone_numbers_csv(&output).expect("read csv").is_empty());
}

#[test]
fn unwritable_destination_is_io_failure_without_partial_file() {
    let dir = temp_out_dir("unwritable");
    let blocker = dir.join("blocker");
    fs::write(&blocker, "not a directory").expect("create blocker file");
    let output = blocker.join("numbers.csv");

    let config =
        validate_request(&GenerationRequest::new(8, "1").with_count(3)).expect("valid request");
    let err = engine_for(output.clone(), None)
        .run(config, &mut ChaCha20Rng::seed_from_u64(3))
        .expect_err("write must fail");

    assert_eq!(err.kind(), ErrorKind::IoFailure);
    assert!(matches!(err, GenerationError::Write { .. }), "{err:?}");
    assert!(
        err.to_string().contains(&output.display().to_string()),
        "message should name the destination: {err}"
    );
    assert!(!output.exists());
    let leftovers: Vec<_> = fs::read_dir(&dir).expect("list dir").collect();
    assert_eq!(leftovers.len(), 1, "only the blocker file should remain");
}

#[test]
fn report_is_written_when_requested() {
    let dir = temp_out_dir("report");
    let output = dir.join("numbers.csv");
    let report_path = dir.join("report.json");
    let config =
        validate_request(&GenerationRequest::new(4, "1").with_count(1_000)).expect("valid");

    let result = engine_for(output.clone(), Some(report_path.clone()))
        .run(config, &mut ChaCha20Rng::seed_from_u64(4))
        .expect("run generation");

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).expect("read report"))
            .expect("parse report");
    assert_eq!(report["requested"], 1_000);
    assert_eq!(report["generated"], 1_000);
    assert_eq!(report["max_unique"], 1_000);
    assert_eq!(report["unique"], true);
    assert_eq!(report["collisions"], result.report.collisions);
    assert!(result.report.collisions > 0);
}

#[test]
fn unwritable_report_keeps_previous_output() {
    let dir = temp_out_dir("report_unwritable");
    let output = dir.join("numbers.csv");
    let previous = "Phone Number\n+1000\n+1001\n";
    fs::write(&output, previous).expect("seed previous output");
    let blocker = dir.join("blocker");
    fs::write(&blocker, "not a directory").expect("create blocker file");
    let report_path = blocker.join("report.json");

    let config =
        validate_request(&GenerationRequest::new(8, "1").with_count(10)).expect("valid request");
    let err = engine_for(output.clone(), Some(report_path.clone()))
        .run(config, &mut ChaCha20Rng::seed_from_u64(5))
        .expect_err("report write must fail");

    assert_eq!(err.kind(), ErrorKind::IoFailure);
    assert!(err.to_string().contains(&report_path.display().to_string()), "{err}");
    assert_eq!(fs::read_to_string(&output).expect("read output"), previous);
    let mut names: Vec<_> = fs::read_dir(&dir)
        .expect("list dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, ["blocker", "numbers.csv"], "no temporary files may remain");
}

#[test]
fn foreign_header_is_rejected() {
    let dir = temp_out_dir("header");
    let path = dir.join("other.csv");
    fs::write(&path, "Number\n+123\n").expect("write foreign csv");

    let err = read_phone_numbers_csv(&path).expect_err("header mismatch");
    assert!(matches!(err, GenerationError::UnexpectedHeader { .. }));
}
