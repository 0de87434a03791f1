use std::fs;
use std::path::{Path, PathBuf};

/// Write `body` to `dir/name` and return the path.
pub fn write_file(dir: &Path, name: &str, body: &str) -> PathBuf {
    let p = dir.join(name);
    fs::write(&p, body).unwrap();
    p
}

/// A valid benchmark file for `samples` sizes: insert = base+i, delete = base+10+i, find = base+20+i.
pub fn write_ramp(dir: &Path, name: &str, samples: usize, base: i64) -> PathBuf {
    let line = |off: i64| {
        (0..samples)
            .map(|i| (base + off + i as i64).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };
    write_file(dir, name, &format!("{}\n{}\n{}\n", line(0), line(10), line(20)))
}

/// The five conventional files in `dir`, all valid for `samples`.
pub fn write_conventional(dir: &Path, samples: usize) {
    for (i, (_, file)) in treebench::KNOWN_STRUCTURES.iter().enumerate() {
        write_ramp(dir, file, samples, (i as i64) * 100);
    }
}
