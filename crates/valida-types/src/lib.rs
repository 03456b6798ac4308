//! # valida-types — Validated Value Objects
//!
//! Immutable domain primitives built on the `valida-rules` catalogue. Each
//! type follows the same factory convention:
//!
//! ```
//! use valida_types::finance::RoutingNumber;
//!
//! let (result, routing) = RoutingNumber::try_create("021000021", None);
//! assert!(result.is_valid());
//! assert_eq!(routing.unwrap().as_str(), "021000021");
//!
//! let (result, routing) = RoutingNumber::try_create("021000020", None);
//! assert!(routing.is_none());
//! assert!(result.has_code("InvalidChecksum"));
//! ```
//!
//! - `try_create(.., property_name)` runs every validator for the
//!   parameterisation, returns the aggregated result and an instance only
//!   when the result is valid. `property_name` overrides the field name in
//!   error messages.
//! - `create(..)` is the strict adapter returning
//!   `Result<Self, ValidaError>`.
//! - Instances store the normalised value together with the validators
//!   that admitted it; [`ValidatedValueObject::validate`] re-runs them.
//! - Equality and hashing are by normalised value (plus identifying
//!   metadata such as the issuing country), never by validators.
//!
//! ## Modules
//!
//! | Module        | Types |
//! |---------------|-------|
//! | [`finance`]   | `BankAccountNumber`, `IbanNumber`, `BbanNumber`, `SwiftCode`, `RoutingNumber`, `SortCode`, `CreditCardNumber`, `CreditCardSecurityNumber`, `CreditCardExpiration`, `Money`, `Percentage` |
//! | [`identity`]  | `Passport`, `SocialSecurityNumber`, `DrivingLicenseNumber`, `HumanName`, `DateOfBirth` |
//! | [`contact`]   | `PhoneNumber`, `PostalCode`, `EmailAddress`, `PostalAddress`, `WebsiteUrl` |
//! | [`network`]   | `IpAddress`, `MacAddress` |
//! | [`logistics`] | `Barcode`, `TrackingNumber` |
//! | [`geo`]       | `Latitude`, `Longitude`, `Coordinate`, `GeoRoute` |
//! | [`temporal`]  | `DateRange`, `DateOnlyRange`, `TimeOnlyRange` |

mod macros;

pub mod contact;
pub mod finance;
pub mod geo;
pub mod identity;
pub mod logistics;
pub mod network;
pub mod temporal;

pub use valida_core::{
    CountryCode, Currency, TryCreate, ValidaError, ValidatedValueObject, ValidationError,
    ValidationResult,
};
pub use valida_rules::{BarcodeFormat, CardType, Carrier, IpVersion};
