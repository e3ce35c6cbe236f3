use serde::{Deserialize, Serialize};

/// Ground location the passes were predicted for.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Observer {
    #[serde(default)]
    pub name: Option<String>,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl Observer {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            name: None,
            latitude_deg,
            longitude_deg,
        }
    }

    /// Parses `"lat, lon"` as written in station configs.
    pub fn from_coordinates(coordinates: &str) -> Option<Self> {
        let parts: Vec<_> = coordinates.split(',').map(|s| s.trim()).collect();
        if parts.len() != 2 {
            return None;
        }
        let lat = parts[0].parse().ok()?;
        let lon = parts[1].parse().ok()?;
        Some(Self::new(lat, lon))
    }

    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude_deg)
            && (-180.0..=180.0).contains(&self.longitude_deg)
    }
}
