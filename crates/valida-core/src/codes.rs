//! # Stable Error Codes
//!
//! Every validator in the workspace reports failures with one of these
//! codes. They are part of the public contract: downstream code matches on
//! them, so a code never changes meaning once published.

// -- Generic shape codes -----------------------------------------------------

pub const REQUIRED: &str = "Required";
pub const INVALID_FORMAT: &str = "InvalidFormat";
pub const INVALID_LENGTH: &str = "InvalidLength";
pub const INVALID_CHECKSUM: &str = "InvalidChecksum";
pub const OUT_OF_RANGE: &str = "OutOfRange";
pub const INVALID_DECIMAL_PLACES: &str = "InvalidDecimalPlaces";

// -- Banking -----------------------------------------------------------------

pub const INVALID_COUNTRY_ACCOUNT_NUMBER_FORMAT: &str = "InvalidCountryAccountNumberFormat";
pub const INVALID_IBAN_FORMAT: &str = "InvalidIbanFormat";
pub const INVALID_IBAN_LENGTH: &str = "InvalidIbanLength";
pub const INVALID_IBAN_CHECKSUM: &str = "InvalidIbanChecksum";
pub const IBAN_COUNTRY_MISMATCH: &str = "IbanCountryMismatch";
pub const INVALID_BBAN_FORMAT: &str = "InvalidBbanFormat";
pub const INVALID_SWIFT_FORMAT: &str = "InvalidSwiftFormat";
pub const SWIFT_COUNTRY_MISMATCH: &str = "SwiftCountryMismatch";
pub const INVALID_SORT_CODE_FORMAT: &str = "InvalidSortCodeFormat";

// -- Payment cards -----------------------------------------------------------

pub const INVALID_CARD_NUMBER_FORMAT: &str = "InvalidCardNumberFormat";
pub const INVALID_SECURITY_CODE: &str = "InvalidSecurityCode";
pub const INVALID_MONTH: &str = "InvalidMonth";
pub const EXPIRED: &str = "Expired";

// -- Money -------------------------------------------------------------------

pub const NEGATIVE_AMOUNT: &str = "NegativeAmount";
pub const INVALID_CURRENCY_CODE: &str = "InvalidCurrencyCode";

// -- Identity documents ------------------------------------------------------

pub const INVALID_SSN_FORMAT: &str = "InvalidSsnFormat";
pub const INVALID_AREA_NUMBER: &str = "InvalidAreaNumber";
pub const INVALID_GROUP_NUMBER: &str = "InvalidGroupNumber";
pub const INVALID_SERIAL_NUMBER: &str = "InvalidSerialNumber";
pub const ADVERTISING_NUMBER: &str = "AdvertisingNumber";
pub const INVALID_PASSPORT_FORMAT: &str = "InvalidPassportFormat";
pub const INVALID_DRIVING_LICENSE_FORMAT: &str = "InvalidDrivingLicenseFormat";
pub const INVALID_NAME_CHARACTERS: &str = "InvalidNameCharacters";

// -- Contact -----------------------------------------------------------------

pub const INVALID_PHONE_FORMAT: &str = "InvalidPhoneFormat";
pub const INVALID_COUNTRY_PHONE_FORMAT: &str = "InvalidCountryPhoneFormat";
pub const INVALID_POSTAL_CODE_FORMAT: &str = "InvalidPostalCodeFormat";
pub const INVALID_EMAIL_FORMAT: &str = "InvalidEmailFormat";
pub const INVALID_STREET: &str = "InvalidStreet";
pub const INVALID_CITY: &str = "InvalidCity";
pub const INVALID_URL_FORMAT: &str = "InvalidUrlFormat";
pub const INVALID_URL_SCHEME: &str = "InvalidUrlScheme";

// -- Network -----------------------------------------------------------------

pub const INVALID_IP_ADDRESS_FORMAT: &str = "InvalidIpAddressFormat";
pub const INVALID_IP_VERSION: &str = "InvalidIpVersion";
pub const INVALID_MAC_ADDRESS_FORMAT: &str = "InvalidMacAddressFormat";
pub const ALL_ZEROS: &str = "AllZeros";
pub const BROADCAST_ADDRESS: &str = "BroadcastAddress";
pub const MULTICAST_ADDRESS: &str = "MulticastAddress";

// -- Logistics ---------------------------------------------------------------

pub const INVALID_BARCODE_FORMAT: &str = "InvalidBarcodeFormat";
pub const INVALID_TRACKING_NUMBER_FORMAT: &str = "InvalidTrackingNumberFormat";

// -- Temporal ----------------------------------------------------------------

pub const INVALID_RANGE: &str = "InvalidRange";
pub const FUTURE_DATE: &str = "FutureDate";
pub const PAST_DATE: &str = "PastDate";
pub const INVALID_AGE: &str = "InvalidAge";

// -- Geospatial --------------------------------------------------------------

pub const NON_CONTIGUOUS_SEGMENTS: &str = "NonContiguousSegments";
pub const EMPTY_ROUTE: &str = "EmptyRoute";
