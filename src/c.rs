// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use super::*;

#[unsafe(no_mangle)]
pub extern "C" fn greatcircle_earth_radius_meters() -> f64 {
    earth_radius_meters()
}

#[unsafe(no_mangle)]
pub extern "C" fn greatcircle_distance_on_sphere(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
) -> f64 {
    distance_on_sphere(lat1, lon1, lat2, lon2)
}

#[unsafe(no_mangle)]
pub extern "C" fn greatcircle_distance_on_earth(
    lat1: f64,
    lon1: f64,
    lat2: f64,
    lon2: f64,
) -> f64 {
    distance_on_earth(lat1, lon1, lat2, lon2)
}

#[unsafe(no_mangle)]
pub extern "C" fn greatcircle_point_distance_on_earth(a: GeoPoint, b: GeoPoint) -> f64 {
    a.distance_on_earth(&b)
}

/// Returns NaN if either pointer is null.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn greatcircle_point_distance_on_sphere(
    a: *const GeoPoint,
    b: *const GeoPoint,
) -> f64 {
    match (a.as_ref(), b.as_ref()) {
        (Some(a), Some(b)) => a.distance_on_sphere(b),
        _ => {
            log::warn!("greatcircle_point_distance_on_sphere: got a null pointer");
            f64::NAN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr::null;

    #[test]
    fn matches_rust_functions() {
        assert_eq!(greatcircle_earth_radius_meters(), EARTH_RADIUS_METERS);
        assert_eq!(
            greatcircle_distance_on_sphere(55.7558, 37.6173, 59.9343, 30.3351),
            distance_on_sphere(55.7558, 37.6173, 59.9343, 30.3351),
        );
        assert_eq!(
            greatcircle_distance_on_earth(55.7558, 37.6173, 59.9343, 30.3351),
            distance_on_earth(55.7558, 37.6173, 59.9343, 30.3351),
        );
    }

    #[test]
    fn points() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 180.0);

        assert_eq!(
            greatcircle_point_distance_on_earth(a, b),
            distance_on_earth(0.0, 0.0, 0.0, 180.0),
        );
        assert_eq!(
            unsafe { greatcircle_point_distance_on_sphere(&a, &b) },
            std::f64::consts::PI,
        );
    }

    #[test]
    fn null_pointers() {
        let a = GeoPoint::ZERO;
        unsafe {
            assert!(greatcircle_point_distance_on_sphere(null(), &a).is_nan());
            assert!(greatcircle_point_distance_on_sphere(&a, null()).is_nan());
            assert!(greatcircle_point_distance_on_sphere(null(), null()).is_nan());
        }
    }
}
