//! Utility modules: numeric conversions for plotting.
pub mod num;
