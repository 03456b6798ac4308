use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, validator, TryCreate, ValidaError, ValidatedValue,
    ValidatedValueObject, ValidationResult, ValueValidator,
};
use valida_rules::geo::{self, LatLon, Segment};

const FIELD: &str = "Route";

/// Every endpoint must be a valid coordinate. Reports each bad axis once.
fn validate_endpoints(field: &str) -> ValueValidator<[Segment]> {
    let latitude = geo::validate_latitude(field);
    let longitude = geo::validate_longitude(field);
    validator(move |segments: &[Segment]| {
        let mut result = ValidationResult::success();
        for &(start, end) in segments {
            for (lat, lon) in [start, end] {
                for outcome in [latitude(&lat), longitude(&lon)].into_iter().flatten() {
                    if !outcome.is_valid() {
                        result.merge(outcome);
                    }
                }
            }
        }
        Some(result)
    })
}

/// An ordered, non-empty path of segments where each segment starts where
/// the previous one ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GeoRoute {
    inner: ValidatedValue<Vec<Segment>, [Segment]>,
}

impl GeoRoute {
    pub fn try_create(segments: &[Segment], property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or(FIELD);
        let validators = vec![
            geo::validate_not_empty(field),
            validate_endpoints(field),
            geo::validate_contiguous(field),
        ];
        let result = run_validators(segments, &validators);
        resolve("GeoRoute", result, || Self {
            inner: ValidatedValue::new(segments.to_vec(), validators),
        })
    }

    pub fn create(segments: &[Segment]) -> Result<Self, ValidaError> {
        into_created(Self::try_create(segments, None))
    }

    /// A route through `points` in order. Fewer than two points is empty.
    pub fn try_from_points(points: &[LatLon], property_name: Option<&str>) -> TryCreate<Self> {
        let segments: Vec<Segment> = points.windows(2).map(|w| (w[0], w[1])).collect();
        Self::try_create(&segments, property_name)
    }

    pub fn segments(&self) -> &[Segment] {
        self.inner.value()
    }

    pub fn start(&self) -> Option<LatLon> {
        self.segments().first().map(|s| s.0)
    }

    pub fn end(&self) -> Option<LatLon> {
        self.segments().last().map(|s| s.1)
    }

    /// Sum of the Haversine lengths of every segment, in kilometres.
    pub fn total_distance_km(&self) -> f64 {
        self.segments()
            .iter()
            .map(|&(a, b)| geo::haversine_km(a, b))
            .sum()
    }
}

impl ValidatedValueObject for GeoRoute {
    type Value = [Segment];

    fn value(&self) -> &[Segment] {
        self.inner.value()
    }

    fn validate(&self) -> ValidationResult {
        self.inner.validate()
    }
}

impl std::fmt::Display for GeoRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} segments, {:.1} km", self.segments().len(), self.total_distance_km())
    }
}
