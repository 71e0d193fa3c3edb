// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use crate::GeoPoint;

/// Error returned when a `"lat,lon"` string can't be parsed into a [GeoPoint].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseGeoPointError {
    #[error("expected \"lat,lon\", got no comma")]
    MissingSeparator,

    #[error("expected \"lat,lon\", got more than one comma")]
    TooManyComponents,

    #[error("invalid latitude: {0}")]
    InvalidLatitude(#[source] ParseFloatError),

    #[error("invalid longitude: {0}")]
    InvalidLongitude(#[source] ParseFloatError),
}

/// Parses `"lat,lon"` (in degrees). Whitespace around either component is ignored.
/// Coordinates are not range-checked.
impl FromStr for GeoPoint {
    type Err = ParseGeoPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s.split_once(',').ok_or(ParseGeoPointError::MissingSeparator)?;
        if lon.contains(',') {
            return Err(ParseGeoPointError::TooManyComponents);
        }

        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(ParseGeoPointError::InvalidLatitude)?;
        let lon = lon
            .trim()
            .parse::<f64>()
            .map_err(ParseGeoPointError::InvalidLongitude)?;

        Ok(GeoPoint { lat, lon })
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}
