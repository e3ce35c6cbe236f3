use std::path::{Path, PathBuf};

use crate::export::{ExportError, FileSink, FsSink};
use crate::ical::{encode_multiple, encode_single, ExportFormat};
use crate::pass::{Observer, PassRecord, TimeZoneMode};

/// Result of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub bytes_written: usize,
    pub events: usize,
}

/// Encodes passes and hands the calendar to a sink, once per call.
pub struct Exporter<S: FileSink = FsSink> {
    sink: S,
}

impl Default for Exporter<FsSink> {
    fn default() -> Self {
        Self::new(FsSink)
    }
}

impl<S: FileSink> Exporter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn export_single(
        &self,
        pass: &PassRecord,
        observer: &Observer,
        tz_mode: TimeZoneMode,
        satellite_label: &str,
        format: ExportFormat,
        destination: &Path,
    ) -> Result<ExportOutcome, ExportError> {
        let content = match format {
            ExportFormat::Ics => encode_single(pass, observer, tz_mode, satellite_label),
        };
        self.write(destination, content, 1)
    }

    pub fn export_multiple(
        &self,
        passes: &[PassRecord],
        observer: &Observer,
        tz_mode: TimeZoneMode,
        satellite_label: &str,
        format: ExportFormat,
        destination: &Path,
    ) -> Result<ExportOutcome, ExportError> {
        let content = match format {
            ExportFormat::Ics => encode_multiple(passes, observer, tz_mode, satellite_label),
        };
        self.write(destination, content, passes.len())
    }

    fn write(
        &self,
        destination: &Path,
        content: String,
        events: usize,
    ) -> Result<ExportOutcome, ExportError> {
        match self.sink.write(destination, &content) {
            Ok(bytes_written) => {
                log::info!(
                    "Saved {} pass(es) to {} ({} bytes)",
                    events,
                    destination.display(),
                    bytes_written
                );
                Ok(ExportOutcome {
                    path: destination.to_path_buf(),
                    bytes_written,
                    events,
                })
            }
            Err(error) => {
                log::error!("{}", error);
                Err(ExportError { error, content })
            }
        }
    }
}
