use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::export::SinkError;

/// Storage backend receiving the encoded calendar.
pub trait FileSink {
    /// Writes `content` to `path`, returning the number of bytes written.
    fn write(&self, path: &Path, content: &str) -> Result<usize, SinkError>;
}

/// Writes to the local filesystem, truncating existing files.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSink;

impl FileSink for FsSink {
    fn write(&self, path: &Path, content: &str) -> Result<usize, SinkError> {
        let mut file = File::create(path).map_err(|source| SinkError::CreateFailed {
            path: path.to_path_buf(),
            source,
        })?;

        file.write_all(content.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|source| SinkError::WriteFailed {
                path: path.to_path_buf(),
                source,
            })?;

        log::debug!("Written {} bytes to {}", content.len(), path.display());
        Ok(content.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_reports_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ics");

        let written = FsSink.write(&path, "BEGIN:VCALENDAR\n°").unwrap();
        assert_eq!(written, "BEGIN:VCALENDAR\n°".len());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "BEGIN:VCALENDAR\n°");
    }

    #[test]
    fn truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.ics");
        std::fs::write(&path, "a much longer previous content").unwrap();

        FsSink.write(&path, "short").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn missing_directory_is_create_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.ics");

        let err = FsSink.write(&path, "x").unwrap_err();
        assert!(matches!(err, SinkError::CreateFailed { .. }));
        assert!(err.to_string().starts_with("Could not create file"));
    }
}
