mod error;
mod exporter;
mod file_name;
mod sink;

pub use error::{ExportError, FileNameError, SinkError};
pub use exporter::{ExportOutcome, Exporter};
pub use file_name::{default_multi_stem, default_single_stem, destination, sanitize_stem};
pub use sink::{FileSink, FsSink};
