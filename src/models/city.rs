//! City record data structures.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair taken from a single coordinate annotation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A city assembled from one index-table row and its detail page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityRecord {
    /// Display name, from the first link in the name column
    pub name: String,

    /// Region label, canonical when canonicalization matched
    pub region: String,

    /// Geocoordinates, `None` when the detail page gave none
    pub coordinates: Option<Coordinates>,
}

impl CityRecord {
    /// Latitude, or `0.0` when unresolved.
    pub fn latitude(&self) -> f64 {
        self.coordinates.map_or(0.0, |c| c.latitude)
    }

    /// Longitude, or `0.0` when unresolved.
    pub fn longitude(&self) -> f64 {
        self.coordinates.map_or(0.0, |c| c.longitude)
    }

    pub fn has_coordinates(&self) -> bool {
        self.coordinates.is_some()
    }

    /// Render as a `name,region,latitude,longitude` line (no trailing newline).
    ///
    /// Fields are neither quoted nor escaped.
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{:.6},{:.6}",
            self.name,
            self.region,
            self.latitude(),
            self.longitude()
        )
    }
}

/// Flat JSON shape of a record, with `null` coordinates when unresolved.
#[derive(Debug, Serialize)]
pub struct CityRecordOutput<'a> {
    pub name: &'a str,
    pub region: &'a str,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl<'a> From<&'a CityRecord> for CityRecordOutput<'a> {
    fn from(record: &'a CityRecord) -> Self {
        Self {
            name: &record.name,
            region: &record.region,
            latitude: record.coordinates.map(|c| c.latitude),
            longitude: record.coordinates.map(|c| c.longitude),
        }
    }
}
