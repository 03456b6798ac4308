//! Trait boilerplate shared by string-backed value objects.

/// Implement [`ValidatedValueObject`](valida_core::ValidatedValueObject),
/// `Display`, `AsRef<str>` and `as_str` for a type whose normalised value
/// lives in an `inner: ValidatedString` field.
macro_rules! string_value_object {
    ($ty:ident) => {
        impl $ty {
            /// The normalised value.
            pub fn as_str(&self) -> &str {
                self.inner.value()
            }
        }

        impl valida_core::ValidatedValueObject for $ty {
            type Value = str;

            fn value(&self) -> &str {
                self.inner.value()
            }

            fn validate(&self) -> valida_core::ValidationResult {
                self.inner.validate()
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.inner.value())
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.inner.value()
            }
        }
    };
}

pub(crate) use string_value_object;
