use std::str::FromStr;

use crate::ical::IcalError;

/// Output formats understood by the exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum ExportFormat {
    #[strum(serialize = "ics")]
    Ics,
}

impl ExportFormat {
    /// Resolves a user supplied selector, logging unrecognised ones.
    ///
    /// This is the only place an export is rejected for its format, so it
    /// runs before any text is rendered.
    pub fn from_selector(selector: &str) -> Result<Self, IcalError> {
        selector.parse::<Self>().map_err(|e| {
            log::error!("{}", e);
            e
        })
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Ics => "ics",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = IcalError;

    /// Accepts the format name or its legacy numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ics" | "ical" | "icalendar" | "1" => Ok(ExportFormat::Ics),
            _ => Err(IcalError::InvalidFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_selectors() {
        assert_eq!("ics".parse::<ExportFormat>(), Ok(ExportFormat::Ics));
        assert_eq!(" ICS ".parse::<ExportFormat>(), Ok(ExportFormat::Ics));
        assert_eq!("1".parse::<ExportFormat>(), Ok(ExportFormat::Ics));
        assert_eq!(ExportFormat::Ics.to_string(), "ics");
        assert_eq!(ExportFormat::Ics.extension(), "ics");
    }

    #[test]
    fn selector_resolution_matches_parsing() {
        assert_eq!(ExportFormat::from_selector("iCalendar"), Ok(ExportFormat::Ics));
        assert_eq!(
            ExportFormat::from_selector("txt"),
            Err(IcalError::InvalidFormat("txt".into()))
        );
    }

    #[test]
    fn rejects_unknown_selectors() {
        assert_eq!(
            "csv".parse::<ExportFormat>(),
            Err(IcalError::InvalidFormat("csv".into()))
        );
        assert!("2".parse::<ExportFormat>().is_err());
        assert!("".parse::<ExportFormat>().is_err());
    }
}
