use crate::types::Operation;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Invalid sample count: {0:?}")]
    InvalidSampleCount(String),

    #[error("Resource not found: {}: {source}", path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed {operation} line in {}: bad token {token:?}", path.display())]
    MalformedLine { path: PathBuf, operation: Operation, token: String },

    #[error(
        "Length mismatch in {} ({operation}): expected {expected} values, found {actual}",
        path.display()
    )]
    LengthMismatch { path: PathBuf, operation: Operation, expected: usize, actual: usize },

    #[error("Structure not in dataset: {0}")]
    UnknownStructure(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("No series selected for the chart")]
    EmptySelection,

    #[error("Config error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
