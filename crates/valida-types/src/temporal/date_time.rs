use chrono::{DateTime, Duration, Utc};

use valida_core::ValidatedValue;

use super::range_value_object;

/// A span between two UTC instants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateRange {
    inner: ValidatedValue<(DateTime<Utc>, DateTime<Utc>)>,
    include_start: bool,
    include_end: bool,
}

range_value_object!(DateRange, DateTime<Utc>, "DateRange");

impl DateRange {
    /// `to - from`, regardless of inclusivity.
    pub fn duration(&self) -> Duration {
        self.to().signed_duration_since(self.from())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use valida_core::ValidaError;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn reversed_range() {
        let (result, range) = DateRange::try_create(at(2020, 1, 2, 0), at(2020, 1, 1, 0), None);
        assert!(range.is_none());
        assert_eq!(result.codes(), vec!["InvalidRange"]);

        let err = DateRange::new(at(2020, 1, 2, 0), at(2020, 1, 1, 0)).unwrap_err();
        assert!(matches!(err, ValidaError::InvalidRange { .. }));
    }

    #[test]
    fn inclusivity() {
        let closed = DateRange::new(at(2024, 1, 1, 0), at(2024, 1, 2, 0)).unwrap();
        assert!(closed.contains(at(2024, 1, 1, 0)));
        assert!(closed.contains(at(2024, 1, 2, 0)));
        assert!(!closed.contains(at(2024, 1, 2, 1)));

        let half_open = DateRange::new_with(at(2024, 1, 1, 0), at(2024, 1, 2, 0), true, false).unwrap();
        assert!(half_open.contains(at(2024, 1, 1, 0)));
        assert!(!half_open.contains(at(2024, 1, 2, 0)));
        assert_eq!(half_open.duration(), Duration::hours(24));
        assert_eq!(
            half_open.to_string(),
            "[2024-01-01 00:00:00 UTC, 2024-01-02 00:00:00 UTC)"
        );
    }

    #[test]
    fn overlap() {
        let a = DateRange::new_with(at(2024, 1, 1, 0), at(2024, 1, 1, 12), true, false).unwrap();
        let b = DateRange::new(at(2024, 1, 1, 12), at(2024, 1, 2, 0)).unwrap();
        let c = DateRange::new(at(2024, 1, 1, 6), at(2024, 1, 1, 18)).unwrap();
        assert!(!a.overlaps(&b), "half-open end touching a closed start");
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));

        let closed = DateRange::new(at(2024, 1, 1, 0), at(2024, 1, 1, 12)).unwrap();
        assert!(closed.overlaps(&b));
    }

    #[test]
    fn empty_ranges_never_overlap() {
        let empty = DateRange::new_with(at(2024, 1, 1, 6), at(2024, 1, 1, 6), true, false).unwrap();
        let wide = DateRange::new(at(2024, 1, 1, 0), at(2024, 1, 2, 0)).unwrap();
        assert!(empty.is_empty());
        assert!(!empty.overlaps(&wide));
        assert!(!empty.contains(at(2024, 1, 1, 6)));
    }
}
