//! Load ordered-container benchmark results into an index-aligned dataset and
//! chart them side by side.
//!
//! Each benchmarked structure (treap, splay, AVL, red-black, naive BST) writes
//! one file of three lines: insert, delete and find timings, one value per
//! input size. [`load_dataset`] parses all of them against a shared sample
//! count so that index `i` means the same input size everywhere.
pub mod chart;
pub mod cli;
pub mod config;
pub mod errors;
pub mod import;
pub mod logger;
pub mod types;
pub mod utils;


pub use errors::BenchError;
pub use import::{load_dataset, load_sample_count, load_series_set};
pub use types::{Dataset, KNOWN_STRUCTURES, Operation, SeriesSet};

/// Initializes logging at info level on stderr.
///
/// Call once before any other operation; later calls leave the first logger in place.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    logger::configure_logging(None, None, None)?;
    Ok(())
}
