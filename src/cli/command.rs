use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::chart::{ChartOptions, SeriesSelection};

pub enum Command {
    /// Load every file and report what was found; nothing is written.
    Check {
        samples: usize,
        files: BTreeMap<String, PathBuf>,
    },
    /// Load every file and render the selected series to `output`.
    Plot {
        samples: usize,
        files: BTreeMap<String, PathBuf>,
        selection: SeriesSelection,
        output: PathBuf,
        chart: ChartOptions,
    },
}
