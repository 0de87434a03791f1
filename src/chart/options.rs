use std::path::Path;

use crate::errors::BenchError;
use crate::types::Operation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Png,
    Svg,
    Csv,
}

impl ChartFormat {
    /// Pick the format from the destination's extension.
    ///
    /// # Errors
    /// `Render` for a missing or unsupported extension.
    pub fn from_path(path: &Path) -> Result<Self, BenchError> {
        match path.extension().and_then(|s| s.to_str()).map(str::to_lowercase).as_deref() {
            Some("png") => Ok(ChartFormat::Png),
            Some("svg") => Ok(ChartFormat::Svg),
            Some("csv") => Ok(ChartFormat::Csv),
            _ => Err(BenchError::Render(format!(
                "unsupported chart output {} (expected .png, .svg or .csv)",
                path.display()
            ))),
        }
    }

    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            ChartFormat::Png => "png",
            ChartFormat::Svg => "svg",
            ChartFormat::Csv => "csv",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub x_desc: String,
    pub y_desc: String,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: "Ordered containers: average time per operation".to_string(),
            width: 1024,
            height: 768,
            x_desc: "sample index".to_string(),
            y_desc: "elapsed (ms)".to_string(),
        }
    }
}

/// Which series go on the chart.
#[derive(Debug, Clone)]
pub struct SeriesSelection {
    pub operations: Vec<Operation>,
    /// `None` selects every structure in the dataset.
    pub structures: Option<Vec<String>>,
}

impl Default for SeriesSelection {
    fn default() -> Self {
        Self { operations: vec![Operation::Insert], structures: None }
    }
}

#[derive(Debug, Default)]
pub struct ChartReport {
    pub series: usize,
    pub samples: usize,
}
