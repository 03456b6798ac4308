//! # valida-rules — Validator Catalogue
//!
//! Checksum algorithms, input normalisation, length-guarded regex matching
//! and one module of validator factories per domain. Every factory takes a
//! field name (plus a country, bound or reference date where relevant) and
//! returns a [`ValueValidator`](valida_core::ValueValidator) that checks
//! exactly one concern.
//!
//! ## Conventions
//!
//! - Blank input is "not applicable" (`None`) everywhere except
//!   [`common::required`].
//! - Validators that depend on shape (checksums, component checks) return
//!   `None` for malformed input so that only the format error is reported.
//! - Country-dispatched validators pass for countries without a rule and
//!   for the `Unknown` and `All` wildcards.
//! - Each module exposes the `normalize` function its value object stores.
//!
//! ## Module Map
//!
//! | Domain    | Modules |
//! |-----------|---------|
//! | Shared    | [`checksum`], [`normalize`], [`pattern`], [`common`] |
//! | Banking   | [`bank_account`], [`iban`], [`bban`], [`swift`], [`routing`], [`sort_code`] |
//! | Payments  | [`credit_card`], [`money`], [`percentage`] |
//! | Identity  | [`ssn`], [`passport`], [`driving_license`], [`name`], [`date`] |
//! | Contact   | [`phone`], [`postal_code`], [`email`], [`address`], [`website`] |
//! | Network   | [`ip_address`], [`mac_address`] |
//! | Logistics | [`barcode`], [`tracking`] |
//! | Geo       | [`geo`] |

pub mod checksum;
pub mod common;
pub mod normalize;
pub mod pattern;

pub mod address;
pub mod bank_account;
pub mod barcode;
pub mod bban;
pub mod credit_card;
pub mod date;
pub mod driving_license;
pub mod email;
pub mod geo;
pub mod iban;
pub mod ip_address;
pub mod mac_address;
pub mod money;
pub mod name;
pub mod passport;
pub mod percentage;
pub mod phone;
pub mod postal_code;
pub mod routing;
pub mod sort_code;
pub mod ssn;
pub mod swift;
pub mod tracking;
pub mod website;

pub use barcode::BarcodeFormat;
pub use credit_card::CardType;
pub use geo::{LatLon, Segment};
pub use ip_address::IpVersion;
pub use tracking::Carrier;
