use std::fs;
use tempfile::tempdir;

#[test]
fn configure_logging_creates_log_file_in_dir() {
    let dir = tempdir().unwrap();
    let base = dir.path().join("logs");
    treebench::logger::configure_logging(Some(&base), Some("debug"), Some(2)).unwrap();
    log::info!("hello from treebench tests");
    assert!(base.join("treebench.log").exists());
    assert!(fs::metadata(&base).unwrap().is_dir());
}

#[test]
fn init_path_accepts_log4rs_yaml() {
    let dir = tempdir().unwrap();
    let cfg = dir.path().join("log4rs.yaml");
    fs::write(
        &cfg,
        "appenders:\n  stderr:\n    kind: console\n    target: stderr\nroot:\n  level: warn\n  appenders:\n    - stderr\n",
    )
    .unwrap();
    treebench::logger::init_path(&cfg).unwrap();
    // a second call leaves the installed logger alone
    treebench::logger::init_path(&cfg).unwrap();
}

#[test]
fn init_path_rejects_missing_or_broken_file() {
    let dir = tempdir().unwrap();
    assert!(treebench::logger::init_path(&dir.path().join("absent.yaml")).is_err());
    let bad = dir.path().join("bad.yaml");
    fs::write(&bad, "appenders: [unclosed\n").unwrap();
    assert!(treebench::logger::init_path(&bad).is_err());
}
