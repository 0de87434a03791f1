use std::path::PathBuf;

use super::runner::OutputMode;

/// `name=path` as given to `--structure`.
///
/// # Errors
/// Returns a message when the `=` is missing or either side is empty.
pub fn parse_structure_arg(s: &str) -> Result<(String, PathBuf), String> {
    let (name, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=path, got {s:?}"))?;
    let name = name.trim();
    if name.is_empty() || path.trim().is_empty() {
        return Err(format!("expected name=path, got {s:?}"));
    }
    Ok((name.to_string(), PathBuf::from(path.trim())))
}

pub fn parse_output_mode(s: &Option<String>) -> OutputMode {
    match s.as_ref().map(|x| x.to_lowercase()).as_deref() {
        Some("json") => OutputMode::Json,
        Some("plain") => OutputMode::Plain,
        _ => OutputMode::Human,
    }
}
