use serde::{Deserialize, Serialize};

/// A predicted satellite pass, with AOS/LOS given as Julian dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassRecord {
    pub satellite_name: String,
    pub orbit_number: u32,
    pub aos: f64,
    pub los: f64,
    pub max_elevation_deg: f64,
    pub aos_azimuth_deg: f64,
    pub los_azimuth_deg: f64,
}

impl PassRecord {
    /// Pass length in whole seconds, floored. Negative when `los < aos`.
    pub fn duration_seconds(&self) -> i64 {
        super::days_to_seconds(self.los - self.aos).floor() as i64
    }

    pub fn is_degenerate(&self) -> bool {
        self.los <= self.aos
    }
}

/// How date-time values are rendered in the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TimeZoneMode {
    /// Floating local wall-clock time, no zone tag.
    Local,
    #[default]
    Utc,
}

impl TimeZoneMode {
    pub fn from_use_local_time(use_local_time: bool) -> Self {
        if use_local_time {
            TimeZoneMode::Local
        } else {
            TimeZoneMode::Utc
        }
    }

    /// Text placed between the property name and its value.
    pub fn tz_part(&self) -> &'static str {
        match self {
            TimeZoneMode::Local => ":",
            TimeZoneMode::Utc => ";TZID=UTC:",
        }
    }
}
