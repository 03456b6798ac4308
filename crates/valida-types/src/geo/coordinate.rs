use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, TryCreate, ValidaError, ValidatedValue,
    ValidatedValueObject, ValidationResult,
};
use valida_rules::geo::{self, LatLon};

/// Decimal degrees north (positive) or south of the equator, `-90..=90`.
#[derive(Debug, Clone, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Latitude {
    inner: ValidatedValue<f64>,
}

impl Latitude {
    pub fn try_create(value: f64, property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or("Latitude");
        let validators = vec![geo::validate_latitude(field)];
        let result = run_validators(&value, &validators);
        resolve("Latitude", result, || Self {
            inner: ValidatedValue::new(value, validators),
        })
    }

    pub fn create(value: f64) -> Result<Self, ValidaError> {
        into_created(Self::try_create(value, None))
    }

    pub fn degrees(&self) -> f64 {
        *self.inner.value()
    }
}

/// Decimal degrees east (positive) or west of Greenwich, `-180..=180`.
#[derive(Debug, Clone, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Longitude {
    inner: ValidatedValue<f64>,
}

impl Longitude {
    pub fn try_create(value: f64, property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or("Longitude");
        let validators = vec![geo::validate_longitude(field)];
        let result = run_validators(&value, &validators);
        resolve("Longitude", result, || Self {
            inner: ValidatedValue::new(value, validators),
        })
    }

    pub fn create(value: f64) -> Result<Self, ValidaError> {
        into_created(Self::try_create(value, None))
    }

    pub fn degrees(&self) -> f64 {
        *self.inner.value()
    }
}

macro_rules! degrees_value_object {
    ($ty:ident) => {
        impl ValidatedValueObject for $ty {
            type Value = f64;

            fn value(&self) -> &f64 {
                self.inner.value()
            }

            fn validate(&self) -> ValidationResult {
                self.inner.validate()
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.degrees())
            }
        }
    };
}

degrees_value_object!(Latitude);
degrees_value_object!(Longitude);

/// A point on the WGS 84 ellipsoid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: Latitude,
    longitude: Longitude,
    #[serde(skip)]
    point: LatLon,
}

impl Coordinate {
    /// Both axes are validated; with `property_name` they report as
    /// `"<property_name>.Latitude"` and `"<property_name>.Longitude"`.
    pub fn try_create(latitude: f64, longitude: f64, property_name: Option<&str>) -> TryCreate<Self> {
        let (lat_field, lon_field) = match property_name {
            Some(p) => (format!("{p}.Latitude"), format!("{p}.Longitude")),
            None => ("Latitude".to_string(), "Longitude".to_string()),
        };
        let (lat_result, lat) = Latitude::try_create(latitude, Some(lat_field.as_str()));
        let (lon_result, lon) = Longitude::try_create(longitude, Some(lon_field.as_str()));
        let result = lat_result.merged(lon_result);
        let (result, built) = resolve("Coordinate", result, || {
            lat.zip(lon).map(|(latitude, longitude)| Self {
                point: (latitude.degrees(), longitude.degrees()),
                latitude,
                longitude,
            })
        });
        (result, built.flatten())
    }

    pub fn create(latitude: f64, longitude: f64) -> Result<Self, ValidaError> {
        into_created(Self::try_create(latitude, longitude, None))
    }

    pub fn latitude(&self) -> &Latitude {
        &self.latitude
    }

    pub fn longitude(&self) -> &Longitude {
        &self.longitude
    }

    pub fn as_lat_lon(&self) -> LatLon {
        self.point
    }

    /// Great-circle (Haversine) distance in kilometres.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        geo::haversine_km(self.point, other.point)
    }
}

impl ValidatedValueObject for Coordinate {
    type Value = LatLon;

    fn value(&self) -> &LatLon {
        &self.point
    }

    fn validate(&self) -> ValidationResult {
        self.latitude.validate().merged(self.longitude.validate())
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.point.0, self.point.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert!(Latitude::create(-90.0).is_ok());
        assert!(Longitude::create(180.0).is_ok());
        let (result, lat) = Latitude::try_create(91.0, None);
        assert!(lat.is_none());
        assert_eq!(result.codes(), vec!["OutOfRange"]);
    }

    #[test]
    fn both_axes_report() {
        let (result, c) = Coordinate::try_create(120.0, -200.0, Some("Origin"));
        assert!(c.is_none());
        let members: Vec<&str> = result.errors().iter().map(|e| e.member_name()).collect();
        assert_eq!(members, vec!["Origin.Latitude", "Origin.Longitude"]);
    }

    #[test]
    fn distance() {
        let london = Coordinate::create(51.5074, -0.1278).unwrap();
        let paris = Coordinate::create(48.8566, 2.3522).unwrap();
        let d = london.distance_to(&paris);
        assert!((d - 343.5).abs() < 1.0, "{d}");
        assert_eq!(london.distance_to(&london), 0.0);
        assert_eq!(london.to_string(), "51.5074, -0.1278");
    }

    #[test]
    fn serialises_axes() {
        let c = Coordinate::create(1.5, -2.25).unwrap();
        assert_eq!(
            serde_json::to_value(&c).unwrap(),
            serde_json::json!({ "latitude": 1.5, "longitude": -2.25 })
        );
    }
}
