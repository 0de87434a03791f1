//! Benchmark file ingestion: sample count, per-structure series, aligned dataset.
mod count;
mod pipeline;
mod series;

pub use count::{load_sample_count, parse_sample_count};
pub use pipeline::{conventional_files, load_dataset, load_series_set};
pub use series::parse_series_set;
