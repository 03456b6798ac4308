//! # Ranges over dates and times
//!
//! Each range has a `from` and `to` bound plus independent inclusivity
//! flags. `from <= to` always holds: `try_create` reports a reversed range
//! as an `InvalidRange` failure, and the raw `new` constructor returns
//! [`ValidaError::InvalidRange`](valida_core::ValidaError::InvalidRange).
//!
//! | Type              | Bound              | Extras        |
//! |-------------------|--------------------|---------------|
//! | [`DateRange`]     | `DateTime<Utc>`    | `duration()`  |
//! | [`DateOnlyRange`] | `NaiveDate`        | `days()`      |
//! | [`TimeOnlyRange`] | `NaiveTime`        | `duration()`  |

/// Shared range API for a struct with `inner: ValidatedValue<(T, T)>`,
/// `include_start` and `include_end` fields.
macro_rules! range_value_object {
    ($ty:ident, $bound:ty, $field:literal) => {
        impl $ty {
            /// Fails with `InvalidRange` when `from > to`.
            pub fn try_create_with(
                from: $bound,
                to: $bound,
                include_start: bool,
                include_end: bool,
                property_name: Option<&str>,
            ) -> valida_core::TryCreate<Self> {
                let field = property_name.unwrap_or($field);
                let validators = vec![valida_rules::date::validate_range_order::<$bound>(field)];
                let bounds = (from, to);
                let result = valida_core::run_validators(&bounds, &validators);
                valida_core::resolve(stringify!($ty), result, || Self {
                    inner: valida_core::ValidatedValue::new(bounds, validators),
                    include_start,
                    include_end,
                })
            }

            /// Both ends inclusive.
            pub fn try_create(from: $bound, to: $bound, property_name: Option<&str>) -> valida_core::TryCreate<Self> {
                Self::try_create_with(from, to, true, true, property_name)
            }

            /// Both ends inclusive. Errors with `InvalidRange` when `from > to`.
            pub fn new(from: $bound, to: $bound) -> Result<Self, valida_core::ValidaError> {
                Self::new_with(from, to, true, true)
            }

            pub fn new_with(
                from: $bound,
                to: $bound,
                include_start: bool,
                include_end: bool,
            ) -> Result<Self, valida_core::ValidaError> {
                if from > to {
                    tracing::debug!(range = stringify!($ty), %from, %to, "reversed range rejected");
                    return Err(valida_core::ValidaError::InvalidRange {
                        from: from.to_string(),
                        to: to.to_string(),
                    });
                }
                let validators = vec![valida_rules::date::validate_range_order::<$bound>($field)];
                Ok(Self {
                    inner: valida_core::ValidatedValue::new((from, to), validators),
                    include_start,
                    include_end,
                })
            }

            pub fn from(&self) -> $bound {
                self.inner.value().0
            }

            pub fn to(&self) -> $bound {
                self.inner.value().1
            }

            pub fn include_start(&self) -> bool {
                self.include_start
            }

            pub fn include_end(&self) -> bool {
                self.include_end
            }

            /// Whether the range contains no point at all: equal bounds with
            /// at least one end exclusive.
            pub fn is_empty(&self) -> bool {
                self.from() == self.to() && !(self.include_start && self.include_end)
            }

            pub fn contains(&self, point: $bound) -> bool {
                let after_start = if self.include_start { point >= self.from() } else { point > self.from() };
                let before_end = if self.include_end { point <= self.to() } else { point < self.to() };
                after_start && before_end
            }

            /// Whether the two ranges share at least one point.
            pub fn overlaps(&self, other: &Self) -> bool {
                fn starts_before_end(start: $bound, start_incl: bool, end: $bound, end_incl: bool) -> bool {
                    start < end || (start == end && start_incl && end_incl)
                }
                !self.is_empty()
                    && !other.is_empty()
                    && starts_before_end(self.from(), self.include_start, other.to(), other.include_end)
                    && starts_before_end(other.from(), other.include_start, self.to(), self.include_end)
            }
        }

        impl valida_core::ValidatedValueObject for $ty {
            type Value = ($bound, $bound);

            fn value(&self) -> &($bound, $bound) {
                self.inner.value()
            }

            fn validate(&self) -> valida_core::ValidationResult {
                self.inner.validate()
            }
        }

        /// Interval notation, e.g. `[2024-01-01, 2024-02-01)`.
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(
                    f,
                    "{}{}, {}{}",
                    if self.include_start { '[' } else { '(' },
                    self.from(),
                    self.to(),
                    if self.include_end { ']' } else { ')' },
                )
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                use serde::ser::SerializeStruct;
                let mut s = serializer.serialize_struct(stringify!($ty), 4)?;
                s.serialize_field("from", &self.from())?;
                s.serialize_field("to", &self.to())?;
                s.serialize_field("include_start", &self.include_start)?;
                s.serialize_field("include_end", &self.include_end)?;
                s.end()
            }
        }
    };
}

pub(crate) use range_value_object;

mod date_only;
mod date_time;
mod time_only;

pub use date_only::DateOnlyRange;
pub use date_time::DateRange;
pub use time_only::TimeOnlyRange;
