mod encoder;
mod error;
mod format;

pub use encoder::{encode_multiple, encode_single};
pub use error::IcalError;
pub use format::ExportFormat;
