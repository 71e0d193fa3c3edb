// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

/// Radius of the spherical Earth approximation, in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_378_000.0;

/// Returns [EARTH_RADIUS_METERS].
#[inline]
pub const fn earth_radius_meters() -> f64 {
    EARTH_RADIUS_METERS
}

/// Calculates the central angle between two lat-lon positions (in degrees)
/// on a unit sphere using the
/// [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
/// Returns the result in radians, in the range `[0, π]`.
///
/// Coordinates are not validated. NaN or infinite inputs result in NaN.
pub fn distance_on_sphere(lat1_deg: f64, lon1_deg: f64, lat2_deg: f64, lon2_deg: f64) -> f64 {
    let lat1 = lat1_deg.to_radians();
    let lon1 = lon1_deg.to_radians();
    let lat2 = lat2_deg.to_radians();
    let lon2 = lon2_deg.to_radians();

    let sin_dlat_half = ((lat2 - lat1) * 0.5).sin();
    let sin_dlon_half = ((lon2 - lon1) * 0.5).sin();

    let h = sin_dlat_half * sin_dlat_half + lat1.cos() * lat2.cos() * sin_dlon_half * sin_dlon_half;

    // Rounding may push h just above 1 for antipodal points,
    // outside of the domain of asin.
    2.0 * h.clamp(0.0, 1.0).sqrt().asin()
}

/// Calculates the great-circle distance between two lat-lon positions (in degrees)
/// on Earth, approximated as a sphere with [EARTH_RADIUS_METERS].
/// Returns the result in meters.
#[inline]
pub fn distance_on_earth(lat1_deg: f64, lon1_deg: f64, lat2_deg: f64, lon2_deg: f64) -> f64 {
    earth_radius_meters() * distance_on_sphere(lat1_deg, lon1_deg, lat2_deg, lon2_deg)
}
