use std::path::PathBuf;
use tempfile::tempdir;
use treebench::config::{RunConfig, load_config};
use treebench::import::load_dataset;
use treebench::types::Operation;

use super::super::_support::{write_file, write_ramp};

#[test]
fn config_file_drives_a_load() {
    let dir = tempdir().unwrap();
    write_ramp(dir.path(), "t.txt", 3, 0);
    write_ramp(dir.path(), "s.txt", 3, 5);
    let cfg_text = format!(
        "samples = 3\ndata_dir = {:?}\noperations = [\"find\"]\n\n[structures]\ntreap = \"t.txt\"\nsplay = \"s.txt\"\n",
        dir.path().display().to_string()
    );
    let cfg_path = write_file(dir.path(), "treebench.toml", &cfg_text);
    let cfg = load_config(Some(&cfg_path)).unwrap();
    let n = cfg.sample_count().unwrap().unwrap();
    let ds = load_dataset(&cfg.structure_files(), n).unwrap();
    assert_eq!(ds.names().collect::<Vec<_>>(), vec!["splay", "treap"]);
    assert_eq!(cfg.selection().unwrap().operations, vec![Operation::Find]);
}

#[test]
fn cli_values_override_the_file() {
    let file = RunConfig::from_toml_str("samples = 3\noutput = \"a.svg\"\n").unwrap();
    let cli = RunConfig { output: Some(PathBuf::from("b.csv")), ..RunConfig::default() };
    let merged = file.merged_with(cli);
    assert_eq!(merged.output_path(), PathBuf::from("b.csv"));
    assert_eq!(merged.sample_count().unwrap(), Some(3));
}
