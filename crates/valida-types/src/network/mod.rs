//! Network identifiers.

mod ip_address;
mod mac_address;

pub use ip_address::IpAddress;
pub use mac_address::MacAddress;
