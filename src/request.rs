//! Export request files: a satellite, an observer and its predicted passes.
//!
//! ```yaml
//! satellite: NOAA 19
//! observer: "55.7, 12.5"
//! passes:
//!   - orbit_number: 12345
//!     aos: 2460000.75
//!     los: "2023-02-25T06:11:15Z"
//!     max_elevation_deg: 45.6
//!     aos_azimuth_deg: 123.4
//!     los_azimuth_deg: 7.5
//! ```

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::pass::{utc_to_julian, Observer, PassRecord};

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid observer: {0}")]
    Observer(String),
    #[error("pass {0}: {1}")]
    Pass(usize, String),
}

/// Julian date number or RFC3339 UTC timestamp.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TimeValue {
    JulianDate(f64),
    Utc(DateTime<Utc>),
}

impl TimeValue {
    fn julian(&self) -> f64 {
        match self {
            TimeValue::JulianDate(jd) => *jd,
            TimeValue::Utc(dt) => utc_to_julian(*dt),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ObserverValue {
    Coordinates(String),
    Fields(Observer),
}

#[derive(Debug, Clone, Deserialize)]
struct RawPass {
    #[serde(default)]
    satellite_name: Option<String>,
    orbit_number: u32,
    aos: TimeValue,
    los: TimeValue,
    max_elevation_deg: f64,
    aos_azimuth_deg: f64,
    los_azimuth_deg: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct RawRequest {
    satellite: String,
    observer: ObserverValue,
    #[serde(default)]
    passes: Vec<RawPass>,
}

/// A validated set of passes ready for encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub satellite: String,
    pub observer: Observer,
    pub passes: Vec<PassRecord>,
}

impl ExportRequest {
    /// Reads a request, as JSON for `.json` files and YAML otherwise.
    pub fn from_file(path: &Path) -> Result<Self, RequestError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, RequestError> {
        let raw: RawRequest = serde_yaml::from_str(yaml)?;
        Self::from_raw(raw)
    }

    pub fn from_json_str(json: &str) -> Result<Self, RequestError> {
        let raw: RawRequest = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawRequest) -> Result<Self, RequestError> {
        let observer = match raw.observer {
            ObserverValue::Coordinates(c) => Observer::from_coordinates(&c)
                .ok_or_else(|| RequestError::Observer(format!("cannot parse {:?}", c)))?,
            ObserverValue::Fields(o) => o,
        };

        let passes = raw
            .passes
            .into_iter()
            .map(|p| PassRecord {
                satellite_name: p.satellite_name.unwrap_or_else(|| raw.satellite.clone()),
                orbit_number: p.orbit_number,
                aos: p.aos.julian(),
                los: p.los.julian(),
                max_elevation_deg: p.max_elevation_deg,
                aos_azimuth_deg: p.aos_azimuth_deg,
                los_azimuth_deg: p.los_azimuth_deg,
            })
            .collect();

        let request = ExportRequest {
            satellite: raw.satellite,
            observer,
            passes,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        if !self.observer.in_range() {
            return Err(RequestError::Observer(format!(
                "latitude {} / longitude {} out of range",
                self.observer.latitude_deg, self.observer.longitude_deg
            )));
        }

        for (i, pass) in self.passes.iter().enumerate() {
            let err = |msg: String| RequestError::Pass(i + 1, msg);

            if !pass.aos.is_finite() || !pass.los.is_finite() {
                return Err(err("AOS and LOS must be finite".into()));
            }
            if pass.is_degenerate() {
                return Err(err(format!(
                    "LOS ({}) must be after AOS ({})",
                    pass.los, pass.aos
                )));
            }
            if !(0.0..=90.0).contains(&pass.max_elevation_deg) {
                return Err(err(format!(
                    "max elevation {} not in [0, 90]",
                    pass.max_elevation_deg
                )));
            }
            for (name, az) in [("AOS", pass.aos_azimuth_deg), ("LOS", pass.los_azimuth_deg)] {
                if !(0.0..360.0).contains(&az) {
                    return Err(err(format!("{} azimuth {} not in [0, 360)", name, az)));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ical::encode_single;
    use crate::pass::TimeZoneMode;

    const YAML: &str = r#"
satellite: NOAA 19
observer: "55.7, 12.5"
passes:
  - orbit_number: 12345
    aos: 2460000.75
    los: "2023-02-25T06:11:15Z"
    max_elevation_deg: 45.6
    aos_azimuth_deg: 123.4
    los_azimuth_deg: 7.5
  - satellite_name: NOAA-19
    orbit_number: 12346
    aos: "2023-02-25T18:00:00Z"
    los: 2460001.25390625
    max_elevation_deg: 12.0
    aos_azimuth_deg: 300.0
    los_azimuth_deg: 250.25
"#;

    #[test]
    fn parses_yaml_request() {
        let req = ExportRequest::from_yaml_str(YAML).unwrap();
        assert_eq!(req.satellite, "NOAA 19");
        assert_eq!(req.observer, Observer::new(55.7, 12.5));
        assert_eq!(req.passes.len(), 2);

        let first = &req.passes[0];
        assert_eq!(first.satellite_name, "NOAA 19");
        assert_eq!(first.aos, 2460000.75);
        assert_eq!(first.los, 2460000.7578125);

        let second = &req.passes[1];
        assert_eq!(second.satellite_name, "NOAA-19");
        assert_eq!(second.aos, 2460001.25);
    }

    #[test]
    fn parses_json_request_with_observer_fields() {
        let json = r#"{
            "satellite": "ISS",
            "observer": {"name": "home", "latitude_deg": -33.25, "longitude_deg": -70.5},
            "passes": []
        }"#;
        let req = ExportRequest::from_json_str(json).unwrap();
        assert_eq!(req.observer.name.as_deref(), Some("home"));
        assert_eq!(req.observer.latitude_deg, -33.25);
        assert!(req.passes.is_empty());
    }

    #[test]
    fn reads_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("passes.yaml");
        std::fs::write(&path, YAML).unwrap();
        assert_eq!(ExportRequest::from_file(&path).unwrap().passes.len(), 2);

        let path = dir.path().join("passes.json");
        std::fs::write(&path, YAML).unwrap();
        assert!(matches!(
            ExportRequest::from_file(&path),
            Err(RequestError::Json(_))
        ));
    }

    fn single_pass_yaml(aos: &str, los: &str) -> String {
        format!(
            "satellite: NOAA 19\nobserver: \"55.7, 12.5\"\npasses:\n  - orbit_number: 1\n    aos: \"{}\"\n    los: \"{}\"\n    max_elevation_deg: 30.0\n    aos_azimuth_deg: 10.0\n    los_azimuth_deg: 200.0\n",
            aos, los
        )
    }

    #[test]
    fn rfc3339_times_render_to_the_second() {
        let yaml = single_pass_yaml("2023-02-25T06:00:01Z", "2023-02-25T06:01:01Z");
        let req = ExportRequest::from_yaml_str(&yaml).unwrap();
        let ics = encode_single(&req.passes[0], &req.observer, TimeZoneMode::Utc, "NOAA 19");

        assert!(ics.contains("DTSTART;TZID=UTC:20230225T060001\n"));
        assert!(ics.contains("DTEND;TZID=UTC:20230225T060101\n"));
        assert!(ics.contains("UID:NOAA 1912023022506@"));
        assert!(ics.contains("DESCRIPTION:Duration: 01:00\\n"));
    }

    #[test]
    fn every_second_of_an_hour_keeps_its_timestamp() {
        for s in 0..3600 {
            let aos = format!("2023-02-25T06:{:02}:{:02}Z", s / 60, s % 60);
            let yaml = single_pass_yaml(&aos, "2023-02-25T07:30:00Z");
            let req = ExportRequest::from_yaml_str(&yaml).unwrap();
            let ics = encode_single(&req.passes[0], &req.observer, TimeZoneMode::Utc, "X");

            let expected = format!("DTSTART;TZID=UTC:20230225T06{:02}{:02}\n", s / 60, s % 60);
            assert!(ics.contains(&expected), "{} rendered as {}", aos, ics);

            let left = 5400 - s;
            let duration = format!("Duration: {:02}:{:02}\\n", (left / 60) % 60, left % 60);
            assert!(ics.contains(&duration), "{} rendered as {}", aos, ics);
        }
    }

    #[test]
    fn rejects_bad_observer() {
        let yaml = "satellite: X\nobserver: \"north\"\n";
        assert!(matches!(
            ExportRequest::from_yaml_str(yaml),
            Err(RequestError::Observer(_))
        ));

        let yaml = "satellite: X\nobserver: \"95.0, 10.0\"\n";
        assert!(matches!(
            ExportRequest::from_yaml_str(yaml),
            Err(RequestError::Observer(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_passes() {
        let base = ExportRequest::from_yaml_str(YAML).unwrap();

        let mut req = base.clone();
        req.passes[1].los = req.passes[1].aos;
        assert!(matches!(req.validate(), Err(RequestError::Pass(2, _))));

        let mut req = base.clone();
        req.passes[0].max_elevation_deg = 91.0;
        assert!(matches!(req.validate(), Err(RequestError::Pass(1, _))));

        let mut req = base;
        req.passes[0].los_azimuth_deg = 360.0;
        assert!(matches!(req.validate(), Err(RequestError::Pass(1, _))));
    }
}
