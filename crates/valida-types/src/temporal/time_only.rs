use chrono::{Duration, NaiveTime};

use valida_core::ValidatedValue;

use super::range_value_object;

/// A span within a single day. Ranges that wrap past midnight are not
/// representable; split them into two.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeOnlyRange {
    inner: ValidatedValue<(NaiveTime, NaiveTime)>,
    include_start: bool,
    include_end: bool,
}

range_value_object!(TimeOnlyRange, NaiveTime, "TimeOnlyRange");

impl TimeOnlyRange {
    pub fn duration(&self) -> Duration {
        self.to().signed_duration_since(self.from())
    }
}
