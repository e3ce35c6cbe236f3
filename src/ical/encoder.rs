//! iCalendar text for predicted passes.
//!
//! Output uses LF line endings and is not folded at 75 octets. Date-time
//! values are either floating local time (`DTSTART:...`) or tagged with
//! `;TZID=UTC:`.

use std::fmt::{self, Write};

use crate::pass::{format_julian, Observer, PassRecord, TimeZoneMode};

const DATE_TIME_PATTERN: &str = "%Y%m%dT%H%M%S";
const UID_HOUR_PATTERN: &str = "%Y%m%d%H";

const CALENDAR_HEADER: &str = "BEGIN:VCALENDAR\nVERSION:2.0\nCALSCALE:GREGORIAN\n";
const CALENDAR_FOOTER: &str = "END:VCALENDAR\n";

/// Rough size of one rendered VEVENT, used to presize the buffer.
const EVENT_SIZE_HINT: usize = 256;

/// Elapsed pass time split into clock fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassDuration {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl PassDuration {
    pub fn of(pass: &PassRecord) -> Self {
        let total = pass.duration_seconds();
        Self {
            hours: total.div_euclid(3600),
            minutes: total.div_euclid(60).rem_euclid(60),
            seconds: total.rem_euclid(60),
        }
    }
}

/// Only minutes and seconds are shown; hours are dropped.
impl fmt::Display for PassDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

pub fn encode_single(
    pass: &PassRecord,
    observer: &Observer,
    tz_mode: TimeZoneMode,
    satellite_label: &str,
) -> String {
    encode_multiple(std::slice::from_ref(pass), observer, tz_mode, satellite_label)
}

/// One VEVENT per pass, in the order given.
pub fn encode_multiple(
    passes: &[PassRecord],
    observer: &Observer,
    tz_mode: TimeZoneMode,
    satellite_label: &str,
) -> String {
    let mut out = String::with_capacity(
        CALENDAR_HEADER.len() + CALENDAR_FOOTER.len() + passes.len() * EVENT_SIZE_HINT,
    );

    out.push_str(CALENDAR_HEADER);
    for pass in passes {
        // fmt::Write for String is infallible
        let _ = write_event(&mut out, pass, observer, tz_mode, satellite_label);
    }
    out.push_str(CALENDAR_FOOTER);

    out
}

fn write_event(
    out: &mut String,
    pass: &PassRecord,
    observer: &Observer,
    tz_mode: TimeZoneMode,
    label: &str,
) -> fmt::Result {
    if pass.is_degenerate() {
        log::warn!(
            "{} orbit {}: LOS ({}) is not after AOS ({})",
            label,
            pass.orbit_number,
            pass.los,
            pass.aos
        );
    }

    let duration = PassDuration::of(pass);
    if duration.hours > 0 {
        log::debug!(
            "{} orbit {} lasts {} h, only minutes and seconds are shown",
            label,
            pass.orbit_number,
            duration.hours
        );
    }

    let tz = tz_mode.tz_part();

    out.push_str("BEGIN:VEVENT\n");
    writeln!(
        out,
        "DTSTART{}{}",
        tz,
        format_julian(pass.aos, tz_mode, DATE_TIME_PATTERN)
    )?;
    writeln!(
        out,
        "DTEND{}{}",
        tz,
        format_julian(pass.los, tz_mode, DATE_TIME_PATTERN)
    )?;
    writeln!(out, "SUMMARY:{} [{:.0}°]", label, pass.max_elevation_deg)?;

    // <label><orbit><YYYYMMDDHH>@<lat><lon>
    writeln!(
        out,
        "UID:{}{}{}@{:.6}{:.6}",
        label,
        pass.orbit_number,
        format_julian(pass.aos, tz_mode, UID_HOUR_PATTERN),
        observer.latitude_deg,
        observer.longitude_deg
    )?;

    // Escaped newlines, not line breaks.
    writeln!(
        out,
        "DESCRIPTION:Duration: {}\\nAOS Azimuth:  {:6.2}\\nLOS Azimuth:  {:6.2}\\n",
        duration,
        pass.aos_azimuth_deg,
        pass.los_azimuth_deg
    )?;
    out.push_str("END:VEVENT\n");

    Ok(())
}
