use std::path::{Path, PathBuf};

use crate::export::FileNameError;
use crate::ical::ExportFormat;

/// Characters replaced with `_` in generated file names.
const INVALID_CHARS: &str = "!?/\\()*&%$#@[]{}=+<>,.|:;";

fn delimit(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            ' ' => '-',
            c if INVALID_CHARS.contains(c) => '_',
            c => c,
        })
        .collect()
}

fn is_legal_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// `<satellite>-<orbit>`, used when saving one pass.
pub fn default_single_stem(satellite: &str, orbit: u32) -> String {
    delimit(&format!("{}-{}", satellite, orbit))
}

/// `<satellite>-passes`, used when saving a pass list.
pub fn default_multi_stem(satellite: &str) -> String {
    delimit(&format!("{}-passes", satellite))
}

/// Drops characters that are not allowed in a user supplied file name.
pub fn sanitize_stem(stem: &str) -> Result<String, FileNameError> {
    let cleaned: String = stem.chars().filter(|c| is_legal_char(*c)).collect();
    if cleaned.is_empty() {
        return Err(FileNameError::Empty);
    }
    if cleaned.len() != stem.len() {
        log::warn!("Removed illegal characters from file name {:?}", stem);
    }
    Ok(cleaned)
}

pub fn destination(dir: &Path, stem: &str, format: ExportFormat) -> PathBuf {
    dir.join(format!("{}.{}", stem, format.extension()))
}
