mod observer;
mod time;
mod types;

pub use observer::Observer;
pub use time::{days_to_seconds, format_julian, utc_to_julian};
pub use types::{PassRecord, TimeZoneMode};
