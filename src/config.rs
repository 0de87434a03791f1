//! Run configuration loaded from TOML.
//!
//! Precedence: CLI flags > config file > defaults. The file is the explicit
//! `--config` path, else `./treebench.toml` when it exists.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::chart::{ChartOptions, SeriesSelection};
use crate::errors::BenchError;
use crate::import::conventional_files;
use crate::types::Operation;

pub const DEFAULT_CONFIG_FILE: &str = "treebench.toml";
pub const DEFAULT_OUTPUT: &str = "img.png";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ChartSection {
    pub title: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Signed so a negative count reaches `InvalidSampleCount` instead of a TOML type error.
    pub samples: Option<i64>,
    pub data_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub operations: Option<Vec<String>>,
    pub only: Option<Vec<String>>,
    pub structures: Option<BTreeMap<String, PathBuf>>,
    pub chart: ChartSection,
}

impl RunConfig {
    /// # Errors
    /// `Config` if the text is not valid TOML for this schema.
    pub fn from_toml_str(s: &str) -> Result<Self, BenchError> {
        toml::from_str(s).map_err(|e| BenchError::Config(e.to_string()))
    }

    /// # Errors
    /// `Config` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, BenchError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| BenchError::Config(format!("{}: {e}", path.display())))?;
        let cfg: RunConfig = toml::from_str(&text)
            .map_err(|e| BenchError::Config(format!("{}: {e}", path.display())))?;
        log::info!("config: loaded {}", path.display());
        Ok(cfg)
    }

    /// Layer `over` on top of `self`: any field set in `over` wins.
    #[must_use]
    pub fn merged_with(self, over: RunConfig) -> RunConfig {
        RunConfig {
            samples: over.samples.or(self.samples),
            data_dir: over.data_dir.or(self.data_dir),
            output: over.output.or(self.output),
            operations: over.operations.or(self.operations),
            only: over.only.or(self.only),
            structures: over.structures.or(self.structures),
            chart: ChartSection {
                title: over.chart.title.or(self.chart.title),
                width: over.chart.width.or(self.chart.width),
                height: over.chart.height.or(self.chart.height),
            },
        }
    }

    /// The configured sample count, if any.
    ///
    /// # Errors
    /// `InvalidSampleCount` for a negative value.
    pub fn sample_count(&self) -> Result<Option<usize>, BenchError> {
        self.samples
            .map(|n| usize::try_from(n).map_err(|_| BenchError::InvalidSampleCount(n.to_string())))
            .transpose()
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        self.data_dir.as_deref().unwrap_or_else(|| Path::new("."))
    }

    /// Structure name to file path. Relative paths resolve against `data_dir`;
    /// without a `[structures]` table the conventional file names are used.
    #[must_use]
    pub fn structure_files(&self) -> BTreeMap<String, PathBuf> {
        let dir = self.data_dir();
        match &self.structures {
            Some(map) => map.iter().map(|(k, p)| (k.clone(), dir.join(p))).collect(),
            None => conventional_files(dir),
        }
    }

    /// # Errors
    /// `UnknownOperation` for a name other than insert, delete or find.
    pub fn operations(&self) -> Result<Vec<Operation>, BenchError> {
        match &self.operations {
            Some(list) => list.iter().map(|s| s.parse()).collect(),
            None => Ok(SeriesSelection::default().operations),
        }
    }

    /// # Errors
    /// See [`RunConfig::operations`].
    pub fn selection(&self) -> Result<SeriesSelection, BenchError> {
        Ok(SeriesSelection { operations: self.operations()?, structures: self.only.clone() })
    }

    #[must_use]
    pub fn chart_options(&self) -> ChartOptions {
        let mut opts = ChartOptions::default();
        if let Some(t) = &self.chart.title {
            opts.title.clone_from(t);
        }
        if let Some(w) = self.chart.width {
            opts.width = w;
        }
        if let Some(h) = self.chart.height {
            opts.height = h;
        }
        opts
    }

    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}

/// Find and load the config file. An explicit path must exist; the default
/// `./treebench.toml` is optional.
///
/// # Errors
/// `Config` if an explicit path is missing or any file fails to parse.
pub fn load_config(explicit: Option<&Path>) -> Result<RunConfig, BenchError> {
    if let Some(p) = explicit {
        if !p.exists() {
            return Err(BenchError::Config(format!("config file not found: {}", p.display())));
        }
        return RunConfig::load(p);
    }
    let local = Path::new(DEFAULT_CONFIG_FILE);
    if local.exists() {
        return RunConfig::load(local);
    }
    Ok(RunConfig::default())
}
