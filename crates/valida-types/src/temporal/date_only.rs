use chrono::NaiveDate;

use valida_core::ValidatedValue;

use super::range_value_object;

/// A span of calendar days.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateOnlyRange {
    inner: ValidatedValue<(NaiveDate, NaiveDate)>,
    include_start: bool,
    include_end: bool,
}

range_value_object!(DateOnlyRange, NaiveDate, "DateOnlyRange");

impl DateOnlyRange {
    /// Number of dates the range contains.
    pub fn days(&self) -> i64 {
        let span = self.to().signed_duration_since(self.from()).num_days() + 1;
        let excluded = i64::from(!self.include_start) + i64::from(!self.include_end);
        (span - excluded).max(0)
    }

    /// Every date the range contains, in order.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.from()
            .iter_days()
            .take_while(move |d| *d <= self.to())
            .filter(move |d| self.contains(*d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn day_counts() {
        assert_eq!(DateOnlyRange::new(d(2024, 2, 1), d(2024, 2, 29)).unwrap().days(), 29);
        assert_eq!(
            DateOnlyRange::new_with(d(2024, 2, 1), d(2024, 3, 1), true, false).unwrap().days(),
            29
        );
        assert_eq!(DateOnlyRange::new(d(2024, 5, 5), d(2024, 5, 5)).unwrap().days(), 1);
        assert_eq!(
            DateOnlyRange::new_with(d(2024, 5, 5), d(2024, 5, 5), false, true).unwrap().days(),
            0
        );
    }

    #[test]
    fn iterates_contained_days() {
        let r = DateOnlyRange::new_with(d(2024, 12, 30), d(2025, 1, 2), false, true).unwrap();
        let days: Vec<NaiveDate> = r.iter_days().collect();
        assert_eq!(days, vec![d(2024, 12, 31), d(2025, 1, 1), d(2025, 1, 2)]);
        assert_eq!(days.len() as i64, r.days());
    }

    #[test]
    fn reversed_and_named() {
        let (result, _) = DateOnlyRange::try_create(d(2024, 2, 2), d(2024, 2, 1), Some("Stay"));
        assert_eq!(result.codes(), vec!["InvalidRange"]);
        assert_eq!(
            result.errors()[0].message(),
            "Stay start 2024-02-02 must not be after end 2024-02-01."
        );
    }

    #[test]
    fn serialises_bounds_and_flags() {
        let r = DateOnlyRange::new_with(d(2024, 1, 1), d(2024, 1, 31), true, false).unwrap();
        assert_eq!(
            serde_json::to_value(&r).unwrap(),
            serde_json::json!({
                "from": "2024-01-01",
                "to": "2024-01-31",
                "include_start": true,
                "include_end": false
            })
        );
    }
}
