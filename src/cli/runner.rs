use std::io::Write;

use crate::chart::{ChartData, render_file};
use crate::import::load_dataset;

use super::command::Command;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputMode {
    Human,
    Plain,
    Json,
}

pub fn run(cmd: Command) -> Result<(), Box<dyn std::error::Error>> {
    run_with_format(cmd, OutputMode::Human)
}

pub fn run_with_format(cmd: Command, mode: OutputMode) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_to_writer(cmd, mode, &mut out)
}

/// Execute `cmd`, writing its report to `out`. Nothing is rendered unless the
/// whole dataset loads.
pub fn run_to_writer(
    cmd: Command,
    mode: OutputMode,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Command::Check { samples, files } => {
            let dataset = load_dataset(&files, samples)?;
            match mode {
                OutputMode::Json => writeln!(out, "{}", serde_json::to_string(&dataset)?)?,
                OutputMode::Plain => {
                    for (name, set) in dataset.iter() {
                        writeln!(out, "{name} {}", set.len())?;
                    }
                }
                OutputMode::Human => {
                    for (name, set) in dataset.iter() {
                        writeln!(out, "{name}: {} samples (insert, delete, find)", set.len())?;
                    }
                    writeln!(out, "ok: {} structures, {} samples", dataset.len(), dataset.samples())?;
                }
            }
            Ok(())
        }
        Command::Plot { samples, files, selection, output, chart } => {
            let dataset = load_dataset(&files, samples)?;
            let data = ChartData::from_dataset(&dataset, &selection)?;
            let report = render_file(&data, &output, &chart)?;
            match mode {
                OutputMode::Json => {
                    let json = serde_json::json!({
                        "action": "plot",
                        "path": output.display().to_string(),
                        "series": report.series,
                        "samples": report.samples,
                    });
                    writeln!(out, "{json}")?;
                }
                OutputMode::Plain => writeln!(out, "{}", output.display())?,
                OutputMode::Human => writeln!(
                    out,
                    "wrote {} ({} series, {} samples)",
                    output.display(),
                    report.series,
                    report.samples
                )?,
            }
            Ok(())
        }
    }
}
