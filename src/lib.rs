// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Great-circle distances between lat-lon positions on a spherical Earth.
//!
//! Distances are computed with the
//! [spherical law of cosines](https://en.wikipedia.org/wiki/Spherical_law_of_cosines),
//! first as a central angle on a unit sphere ([distance_on_sphere]), and then
//! scaled by a fixed Earth radius ([distance_on_earth]). Ellipsoidal models
//! are not supported.
//!
//! # Example
//!
//! ```
//! let moscow: greatcircle::GeoPoint = "55.7558,37.6173".parse().unwrap();
//! let saint_petersburg = greatcircle::GeoPoint::new(59.9343, 30.3351);
//!
//! let meters = moscow.distance_on_earth(&saint_petersburg);
//! assert!((meters - 635_000.0).abs() < 5_000.0);
//! ```

pub mod c;
mod distance;
mod point;

pub use distance::{
    distance_on_earth, distance_on_sphere, earth_radius_meters, EARTH_RADIUS_METERS,
};
pub use point::ParseGeoPointError;

/// Represents a position on Earth, with latitude and longitude in degrees.
///
/// No validation happens on construction, and out-of-range values are
/// still accepted by the distance functions (trigonometric functions are periodic).
/// Use [GeoPoint::is_in_range] to check for basic sanity.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const ZERO: Self = Self { lat: 0.0, lon: 0.0 };

    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns true if both coordinates are finite, the latitude is within `[-90, 90]`
    /// and the longitude is within `[-180, 180]`.
    pub fn is_in_range(&self) -> bool {
        // NaN and infinities fail the range checks
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Central angle between two points on a unit sphere, in radians.
    /// See [distance_on_sphere].
    pub fn distance_on_sphere(&self, other: &GeoPoint) -> f64 {
        distance_on_sphere(self.lat, self.lon, other.lat, other.lon)
    }

    /// Great-circle distance between two points, in meters.
    /// See [distance_on_earth].
    pub fn distance_on_earth(&self, other: &GeoPoint) -> f64 {
        distance_on_earth(self.lat, self.lon, other.lat, other.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range() {
        assert!(GeoPoint::ZERO.is_in_range());
        assert!(GeoPoint::new(90.0, -180.0).is_in_range());
        assert!(GeoPoint::new(-90.0, 180.0).is_in_range());
        assert!(!GeoPoint::new(90.5, 0.0).is_in_range());
        assert!(!GeoPoint::new(0.0, -180.5).is_in_range());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_in_range());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_in_range());
    }

    #[test]
    fn methods_match_functions() {
        let a = GeoPoint::new(52.2297, 21.0122);
        let b = GeoPoint::new(50.0647, 19.945);

        assert_eq!(
            a.distance_on_sphere(&b),
            distance_on_sphere(a.lat, a.lon, b.lat, b.lon)
        );
        assert_eq!(
            a.distance_on_earth(&b),
            distance_on_earth(a.lat, a.lon, b.lat, b.lon)
        );
    }
}
