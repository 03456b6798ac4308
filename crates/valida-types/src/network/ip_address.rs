use std::net::IpAddr;

use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, TryCreate, ValidaError, ValidatedString, ValidatedValue,
    ValueValidator,
};
use valida_rules::ip_address::{self, IpVersion};
use valida_rules::common;

use crate::macros::string_value_object;

const FIELD: &str = "IpAddress";

/// An IPv4 or IPv6 address, stored in its canonical textual form
/// (`"2001:0DB8::0001"` becomes `"2001:db8::1"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IpAddress {
    inner: ValidatedString,
    #[serde(skip)]
    addr: IpAddr,
}

impl IpAddress {
    fn build(value: &str, validators: Vec<ValueValidator<str>>) -> TryCreate<Self> {
        let result = run_validators(value, &validators);
        let (result, built) = resolve("IpAddress", result, || {
            ip_address::parse(value).map(|addr| Self {
                inner: ValidatedValue::new(addr.to_string(), validators),
                addr,
            })
        });
        (result, built.flatten())
    }

    pub fn try_create(value: &str, property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or(FIELD);
        Self::build(value, vec![common::required(field), ip_address::validate_format(field)])
    }

    /// Like [`try_create`](Self::try_create), additionally requiring `version`.
    pub fn try_create_version(
        value: &str,
        version: IpVersion,
        property_name: Option<&str>,
    ) -> TryCreate<Self> {
        let field = property_name.unwrap_or(FIELD);
        Self::build(
            value,
            vec![
                common::required(field),
                ip_address::validate_format(field),
                ip_address::validate_version(field, version),
            ],
        )
    }

    pub fn create(value: &str) -> Result<Self, ValidaError> {
        into_created(Self::try_create(value, None))
    }

    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    pub fn version(&self) -> IpVersion {
        IpVersion::of(&self.addr)
    }

    pub fn is_loopback(&self) -> bool {
        self.addr.is_loopback()
    }

    /// RFC 1918 for IPv4; unique local `fc00::/7` for IPv6.
    pub fn is_private(&self) -> bool {
        match self.addr {
            IpAddr::V4(v4) => v4.is_private(),
            IpAddr::V6(v6) => (v6.segments()[0] & 0xfe00) == 0xfc00,
        }
    }
}

string_value_object!(IpAddress);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_form() {
        let ip = IpAddress::create(" 2001:0DB8::0001 ").unwrap();
        assert_eq!(ip.as_str(), "2001:db8::1");
        assert_eq!(ip.version(), IpVersion::V6);
        assert!(!ip.is_private());
    }

    #[test]
    fn classification() {
        assert!(IpAddress::create("127.0.0.1").unwrap().is_loopback());
        assert!(IpAddress::create("::1").unwrap().is_loopback());
        assert!(IpAddress::create("10.1.2.3").unwrap().is_private());
        assert!(IpAddress::create("192.168.0.10").unwrap().is_private());
        assert!(IpAddress::create("fd12:3456::1").unwrap().is_private());
        assert!(!IpAddress::create("8.8.8.8").unwrap().is_private());
    }

    #[test]
    fn version_constraint() {
        let (result, ip) = IpAddress::try_create_version("::1", IpVersion::V4, None);
        assert!(ip.is_none());
        assert_eq!(result.codes(), vec!["InvalidIpVersion"]);
    }

    #[test]
    fn malformed() {
        let (result, _) = IpAddress::try_create("256.1.1.1", None);
        assert_eq!(result.codes(), vec!["InvalidIpAddressFormat"]);
    }
}
