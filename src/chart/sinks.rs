use std::io;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::errors::BenchError;
use crate::utils::num::{i64_to_f64, padded_range, usize_to_f64};

use super::data::ChartData;
use super::options::ChartOptions;

/// Draws chart data into a file. Implementations write `dest` directly; the
/// pipeline hands them a temp path and moves it into place afterwards.
pub trait ChartRenderer {
    fn render(&self, data: &ChartData<'_>, opts: &ChartOptions, dest: &Path) -> Result<(), BenchError>;
}

const TITLE_FONT_SIZE: u32 = 28;
const LABEL_FONT_SIZE: u32 = 16;

const COLORS: &[RGBColor] = &[
    RGBColor(66, 133, 244),
    RGBColor(219, 68, 55),
    RGBColor(244, 180, 0),
    RGBColor(15, 157, 88),
    RGBColor(171, 71, 188),
    RGBColor(0, 172, 193),
    RGBColor(255, 112, 67),
    RGBColor(96, 125, 139),
];

fn render_err<E: std::fmt::Display>(e: E) -> BenchError {
    BenchError::Render(e.to_string())
}

fn draw_lines<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    data: &ChartData<'_>,
    opts: &ChartOptions,
) -> Result<(), BenchError> {
    root.fill(&WHITE).map_err(render_err)?;
    let x_max = usize_to_f64(data.samples().saturating_sub(1).max(1));
    let (y_lo, y_hi) = data.value_bounds().map_or((0.0, 1.0), |(lo, hi)| padded_range(lo, hi));

    let mut chart = ChartBuilder::on(root)
        .caption(&opts.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(0f64..x_max, y_lo..y_hi)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(opts.x_desc.as_str())
        .y_desc(opts.y_desc.as_str())
        .label_style(("sans-serif", LABEL_FONT_SIZE))
        .draw()
        .map_err(render_err)?;

    for (i, s) in data.series().iter().enumerate() {
        let color = COLORS[i % COLORS.len()];
        let points = s.values.iter().enumerate().map(|(x, &y)| (usize_to_f64(x), i64_to_f64(y)));
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(render_err)?
            .label(s.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", LABEL_FONT_SIZE))
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Raster output; the image encoding follows `dest`'s extension.
pub struct BitmapRenderer;

impl ChartRenderer for BitmapRenderer {
    fn render(&self, data: &ChartData<'_>, opts: &ChartOptions, dest: &Path) -> Result<(), BenchError> {
        let root = BitMapBackend::new(dest, (opts.width, opts.height)).into_drawing_area();
        draw_lines(&root, data, opts)
    }
}

pub struct SvgRenderer;

impl ChartRenderer for SvgRenderer {
    fn render(&self, data: &ChartData<'_>, opts: &ChartOptions, dest: &Path) -> Result<(), BenchError> {
        let root = SVGBackend::new(dest, (opts.width, opts.height)).into_drawing_area();
        draw_lines(&root, data, opts)
    }
}

/// The aligned table behind the chart: `index` then one column per series.
pub struct CsvRenderer {
    pub delimiter: u8,
}

impl Default for CsvRenderer {
    fn default() -> Self { Self { delimiter: b',' } }
}

impl ChartRenderer for CsvRenderer {
    fn render(&self, data: &ChartData<'_>, _opts: &ChartOptions, dest: &Path) -> Result<(), BenchError> {
        let csv_err = |e: csv::Error| BenchError::Io(io::Error::other(e.to_string()));
        let mut w = csv::WriterBuilder::new().delimiter(self.delimiter).from_path(dest).map_err(csv_err)?;
        let mut header = vec!["index".to_string()];
        header.extend(data.series().iter().map(|s| s.label.clone()));
        w.write_record(&header).map_err(csv_err)?;
        for i in data.x() {
            let mut row = Vec::with_capacity(header.len());
            row.push(i.to_string());
            row.extend(data.series().iter().map(|s| s.values[i].to_string()));
            w.write_record(&row).map_err(csv_err)?;
        }
        w.flush()?;
        Ok(())
    }
}
