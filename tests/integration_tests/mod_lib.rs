use treebench::{BenchError, load_dataset, load_sample_count, load_series_set};

use super::_support::write_file;

#[test]
fn crate_root_reexports_cover_the_loader() {
    let dir = tempfile::tempdir().unwrap();
    let p = write_file(dir.path(), "t.txt", "1\n2\n3\n");
    let n = load_sample_count(&b"1\n"[..]).unwrap();
    let s = load_series_set(&p, n).unwrap();
    assert_eq!(s.find(), &[3]);
    let ds = load_dataset([("treap", &p)], n).unwrap();
    assert_eq!(ds.len(), 1);
    assert!(matches!(load_series_set(&p, 2), Err(BenchError::LengthMismatch { .. })));
}

#[test]
fn init_is_repeatable() {
    treebench::init().unwrap();
    treebench::init().unwrap();
    log::info!("logger ready");
}
