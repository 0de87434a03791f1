use std::path::Path;

use crate::errors::BenchError;

use super::data::ChartData;
use super::options::{ChartFormat, ChartOptions, ChartReport};
use super::sinks::{BitmapRenderer, ChartRenderer, CsvRenderer, SvgRenderer};

/// Render to `path`, picking the renderer from its extension.
///
/// # Errors
/// `Render` for an unsupported extension or a backend failure, `Io` if the
/// destination cannot be written.
pub fn render_file(
    data: &ChartData<'_>,
    path: impl AsRef<Path>,
    opts: &ChartOptions,
) -> Result<ChartReport, BenchError> {
    let dest = path.as_ref();
    let format = ChartFormat::from_path(dest)?;
    let renderer: Box<dyn ChartRenderer> = match format {
        ChartFormat::Png => Box::new(BitmapRenderer),
        ChartFormat::Svg => Box::new(SvgRenderer),
        ChartFormat::Csv => Box::new(CsvRenderer::default()),
    };
    render_with(renderer.as_ref(), format, data, dest, opts)
}

/// Render with an explicit renderer, atomically: the artifact is drawn into a
/// temp file beside `dest` and only moved into place once complete.
///
/// # Errors
/// Whatever the renderer reports, or `Io` if the temp file cannot be created or persisted.
pub fn render_with(
    renderer: &dyn ChartRenderer,
    format: ChartFormat,
    data: &ChartData<'_>,
    dest: &Path,
    opts: &ChartOptions,
) -> Result<ChartReport, BenchError> {
    log::info!("chart: series={}, path={}", data.series().len(), dest.display());
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.exists() {
        std::fs::create_dir_all(parent)?;
    }
    // same directory so the final rename does not cross filesystems;
    // the suffix keeps the extension the bitmap encoder keys on
    let tmp = tempfile::Builder::new()
        .prefix(".treebench-")
        .suffix(&format!(".{}", format.extension()))
        .tempfile_in(parent)?;
    renderer.render(data, opts, tmp.path())?;
    tmp.persist(dest).map_err(|e| BenchError::Io(e.error))?;
    Ok(ChartReport { series: data.series().len(), samples: data.samples() })
}
