//! WGS 84 coordinates and routes.

use valida_core::{check, codes, validator, ValidationResult, ValueValidator};

/// Mean Earth radius (IUGG), kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Two segment endpoints closer than this (degrees) are the same point.
pub const JOIN_TOLERANCE_DEG: f64 = 1e-9;

/// `(latitude, longitude)` in decimal degrees.
pub type LatLon = (f64, f64);

/// A route leg from one point to the next.
pub type Segment = (LatLon, LatLon);

fn bounded(field: &str, axis: &'static str, limit: f64) -> ValueValidator<f64> {
    let field = field.to_string();
    check(move |value: &f64| {
        if value.is_finite() && (-limit..=limit).contains(value) {
            ValidationResult::success()
        } else {
            ValidationResult::failure(
                format!("{field} {axis} must be between -{limit} and {limit} degrees."),
                field.as_str(),
                codes::OUT_OF_RANGE,
            )
        }
    })
}

pub fn validate_latitude(field: &str) -> ValueValidator<f64> {
    bounded(field, "latitude", 90.0)
}

pub fn validate_longitude(field: &str) -> ValueValidator<f64> {
    bounded(field, "longitude", 180.0)
}

fn same_point(a: LatLon, b: LatLon) -> bool {
    (a.0 - b.0).abs() <= JOIN_TOLERANCE_DEG && (a.1 - b.1).abs() <= JOIN_TOLERANCE_DEG
}

pub fn validate_not_empty(field: &str) -> ValueValidator<[Segment]> {
    let field = field.to_string();
    check(move |segments: &[Segment]| {
        if segments.is_empty() {
            ValidationResult::failure(
                format!("{field} must contain at least one segment."),
                field.as_str(),
                codes::EMPTY_ROUTE,
            )
        } else {
            ValidationResult::success()
        }
    })
}

/// Each segment must start where the previous one ended. Reports every gap.
pub fn validate_contiguous(field: &str) -> ValueValidator<[Segment]> {
    let field = field.to_string();
    validator(move |segments: &[Segment]| {
        if segments.len() < 2 {
            return None;
        }
        let mut result = ValidationResult::success();
        for (i, pair) in segments.windows(2).enumerate() {
            if !same_point(pair[0].1, pair[1].0) {
                result.add_error(
                    format!("{field} segment {} does not start where segment {i} ends.", i + 1),
                    field.as_str(),
                    codes::NON_CONTIGUOUS_SEGMENTS,
                );
            }
        }
        Some(result)
    })
}

/// Great-circle distance in kilometres.
pub fn haversine_km(a: LatLon, b: LatLon) -> f64 {
    let (lat1, lon1) = (a.0.to_radians(), a.1.to_radians());
    let (lat2, lon2) = (b.0.to_radians(), b.1.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use valida_core::run_validators;

    #[test]
    fn coordinate_bounds() {
        assert!(validate_latitude("Lat")(&90.0).unwrap().is_valid());
        assert_eq!(validate_latitude("Lat")(&90.5).unwrap().codes(), vec!["OutOfRange"]);
        assert!(!validate_latitude("Lat")(&f64::NAN).unwrap().is_valid());
        assert!(validate_longitude("Lon")(&-180.0).unwrap().is_valid());
        assert!(!validate_longitude("Lon")(&f64::INFINITY).unwrap().is_valid());
    }

    #[test]
    fn contiguity() {
        let a = (51.5, -0.12);
        let b = (48.85, 2.35);
        let c = (52.52, 13.40);
        let chain = [validate_not_empty("Route"), validate_contiguous("Route")];
        assert!(run_validators(&[(a, b), (b, c)][..], &chain).is_valid());
        let r = run_validators(&[(a, b), (c, a), (b, c)][..], &chain);
        assert_eq!(r.codes(), vec!["NonContiguousSegments", "NonContiguousSegments"]);
        assert_eq!(run_validators(&[][..], &chain).codes(), vec!["EmptyRoute"]);
    }

    #[test]
    fn haversine_london_paris() {
        let d = haversine_km((51.5074, -0.1278), (48.8566, 2.3522));
        assert!((d - 343.5).abs() < 1.0, "{d}");
        assert_eq!(haversine_km((10.0, 10.0), (10.0, 10.0)), 0.0);
    }
}
