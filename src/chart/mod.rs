mod data;
mod options;
mod pipeline;
mod sinks;

pub use data::{ChartData, NamedSeries};
pub use options::{ChartFormat, ChartOptions, ChartReport, SeriesSelection};
pub use pipeline::{render_file, render_with};
pub use sinks::{BitmapRenderer, ChartRenderer, CsvRenderer, SvgRenderer};
