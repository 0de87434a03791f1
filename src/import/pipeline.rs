use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::errors::BenchError;
use crate::types::{Dataset, KNOWN_STRUCTURES, SeriesSet};

use super::series::parse_series_set;

/// Load the three series of one structure from `path`.
///
/// The file is closed before this returns, on success or failure.
///
/// # Errors
/// `ResourceNotFound` if the file cannot be opened or read, otherwise the parse
/// errors of [`parse_series_set`].
pub fn load_series_set<P: AsRef<Path>>(path: P, samples: usize) -> Result<SeriesSet, BenchError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| BenchError::ResourceNotFound { path: path.to_path_buf(), source: e })?;
    parse_series_set(BufReader::new(file), samples, path)
}

/// Load every structure's file into one aligned dataset.
///
/// Stops at the first failing file; no partial dataset is returned. A name
/// that appears twice keeps the later path.
///
/// # Errors
/// The first error from [`load_series_set`].
pub fn load_dataset<I, K, P>(files: I, samples: usize) -> Result<Dataset, BenchError>
where
    I: IntoIterator<Item = (K, P)>,
    K: Into<String>,
    P: AsRef<Path>,
{
    let mut structures = BTreeMap::new();
    for (name, path) in files {
        let name = name.into();
        let path = path.as_ref();
        log::info!("load: structure={}, path={}", name, path.display());
        let set = match load_series_set(path, samples) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("load failed for {name}: {e}");
                return Err(e);
            }
        };
        if structures.insert(name.clone(), set).is_some() {
            log::warn!("structure {name} listed twice; using {}", path.display());
        }
    }
    log::info!("loaded {} structures, {} samples each", structures.len(), samples);
    Ok(Dataset::assemble(samples, structures))
}

/// The stock file layout: `<dir>/treap_data.txt`, `<dir>/rb_data.txt`, ...
#[must_use]
pub fn conventional_files(dir: &Path) -> BTreeMap<String, PathBuf> {
    KNOWN_STRUCTURES
        .iter()
        .map(|(name, file)| ((*name).to_string(), dir.join(file)))
        .collect()
}
