use std::fs;
use std::path::Path;
use tempfile::tempdir;
use treebench::chart::{ChartOptions, SeriesSelection};
use treebench::cli::{Command, OutputMode, run_to_writer};
use treebench::errors::BenchError;
use treebench::import::conventional_files;
use treebench::types::Operation;

use super::super::_support::{write_conventional, write_file};

fn run_capture(cmd: Command, mode: OutputMode) -> Result<String, Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    run_to_writer(cmd, mode, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn check_reports_every_structure() {
    let dir = tempdir().unwrap();
    write_conventional(dir.path(), 6);
    let text = run_capture(
        Command::Check { samples: 6, files: conventional_files(dir.path()) },
        OutputMode::Human,
    )
    .unwrap();
    assert!(text.contains("redblack: 6 samples"));
    assert!(text.contains("ok: 5 structures, 6 samples"));

    let plain = run_capture(
        Command::Check { samples: 6, files: conventional_files(dir.path()) },
        OutputMode::Plain,
    )
    .unwrap();
    assert_eq!(plain.lines().count(), 5);
    assert!(plain.lines().any(|l| l == "treap 6"));
}

#[test]
fn check_json_is_the_dataset() {
    let dir = tempdir().unwrap();
    write_conventional(dir.path(), 2);
    let text = run_capture(
        Command::Check { samples: 2, files: conventional_files(dir.path()) },
        OutputMode::Json,
    )
    .unwrap();
    let v: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
    assert_eq!(v["samples"], 2);
    assert_eq!(v["structures"]["treap"]["insert"], serde_json::json!([0, 1]));
    assert_eq!(v["structures"]["naive"]["find"], serde_json::json!([420, 421]));
}

#[test]
fn plot_writes_csv_artifact() {
    let dir = tempdir().unwrap();
    write_conventional(dir.path(), 3);
    let output = dir.path().join("cmp.csv");
    let text = run_capture(
        Command::Plot {
            samples: 3,
            files: conventional_files(dir.path()),
            selection: SeriesSelection {
                operations: vec![Operation::Insert],
                structures: Some(vec!["treap".into(), "avl".into(), "redblack".into(), "naive".into()]),
            },
            output: output.clone(),
            chart: ChartOptions::default(),
        },
        OutputMode::Json,
    )
    .unwrap();
    let v: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
    assert_eq!(v["series"], 4);
    let table = fs::read_to_string(&output).unwrap();
    assert!(table.starts_with("index,treap insert,avl insert,redblack insert,naive insert\n"));
}

#[test]
fn bad_input_aborts_before_any_artifact() {
    let dir = tempdir().unwrap();
    write_conventional(dir.path(), 3);
    write_file(dir.path(), "splay_data.txt", "1 2 3\n4 5 6\n7 8\n");
    let output = dir.path().join("img.png");
    let err = run_capture(
        Command::Plot {
            samples: 3,
            files: conventional_files(dir.path()),
            selection: SeriesSelection::default(),
            output: output.clone(),
            chart: ChartOptions::default(),
        },
        OutputMode::Human,
    )
    .unwrap_err();
    let err = err.downcast::<BenchError>().unwrap();
    assert!(matches!(*err, BenchError::LengthMismatch { operation: Operation::Find, .. }));
    assert!(!Path::new(&output).exists());
}

#[test]
fn unknown_structure_in_selection() {
    let dir = tempdir().unwrap();
    write_conventional(dir.path(), 1);
    let err = run_capture(
        Command::Plot {
            samples: 1,
            files: conventional_files(dir.path()),
            selection: SeriesSelection { operations: vec![Operation::Find], structures: Some(vec!["btree".into()]) },
            output: dir.path().join("img.csv"),
            chart: ChartOptions::default(),
        },
        OutputMode::Plain,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Structure not in dataset: btree");
}
