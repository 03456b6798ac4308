use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, TryCreate, ValidaError, ValidatedString, ValidatedValue,
    ValueValidator,
};
use valida_rules::{common, mac_address};

use crate::macros::string_value_object;

const FIELD: &str = "MacAddress";

/// A MAC-48 address, stored as twelve uppercase hex digits.
///
/// Any of the accepted notations compare equal:
/// `00:1a:2b:3c:4d:5e`, `00-1A-2B-3C-4D-5E` and `001A.2B3C.4D5E`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MacAddress {
    inner: ValidatedString,
}

impl MacAddress {
    fn build(value: &str, validators: Vec<ValueValidator<str>>) -> TryCreate<Self> {
        let result = run_validators(value, &validators);
        resolve("MacAddress", result, || Self {
            inner: ValidatedValue::new(mac_address::normalize(value), validators),
        })
    }

    /// Rejects the all-zeros and broadcast addresses. Multicast is allowed.
    pub fn try_create(value: &str, property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or(FIELD);
        Self::build(
            value,
            vec![
                common::required(field),
                mac_address::validate_format(field),
                mac_address::validate_not_all_zeros(field),
                mac_address::validate_not_broadcast(field),
            ],
        )
    }

    /// Like [`try_create`](Self::try_create), also rejecting multicast
    /// addresses.
    pub fn try_create_unicast(value: &str, property_name: Option<&str>) -> TryCreate<Self> {
        let field = property_name.unwrap_or(FIELD);
        Self::build(
            value,
            vec![
                common::required(field),
                mac_address::validate_format(field),
                mac_address::validate_not_all_zeros(field),
                mac_address::validate_not_broadcast(field),
                mac_address::validate_not_multicast(field),
            ],
        )
    }

    pub fn create(value: &str) -> Result<Self, ValidaError> {
        into_created(Self::try_create(value, None))
    }

    /// Octets joined by `separator`, e.g. `formatted(":")` gives
    /// `"00:1A:2B:3C:4D:5E"`.
    pub fn formatted(&self, separator: &str) -> String {
        mac_address::format_with(self.as_str(), separator)
    }

    /// Organisationally Unique Identifier: the first three octets as six hex
    /// digits.
    pub fn oui(&self) -> &str {
        &self.as_str()[..6]
    }

    pub fn octets(&self) -> Option<[u8; 6]> {
        mac_address::parse_octets(self.as_str())
    }

    pub fn is_multicast(&self) -> bool {
        self.octets().map_or(false, |o| mac_address::is_multicast(&o))
    }

    /// The U/L bit of the first octet is set.
    pub fn is_locally_administered(&self) -> bool {
        self.octets().map_or(false, |o| o[0] & 0x02 == 0x02)
    }
}

string_value_object!(MacAddress);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notations_are_equal() {
        let a = MacAddress::create("00:1a:2b:3c:4d:5e").unwrap();
        let b = MacAddress::create("00-1A-2B-3C-4D-5E").unwrap();
        let c = MacAddress::create("001A.2B3C.4D5E").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.as_str(), "001A2B3C4D5E");
        assert_eq!(a.formatted("-"), "00-1A-2B-3C-4D-5E");
        assert_eq!(a.oui(), "001A2B");
    }

    #[test]
    fn special_addresses() {
        let (result, _) = MacAddress::try_create("00:00:00:00:00:00", None);
        assert_eq!(result.codes(), vec!["AllZeros"]);
        let (result, _) = MacAddress::try_create("FF:FF:FF:FF:FF:FF", None);
        assert_eq!(result.codes(), vec!["BroadcastAddress"]);

        let multicast = MacAddress::create("01:00:5E:00:00:FB").unwrap();
        assert!(multicast.is_multicast());
        let (result, _) = MacAddress::try_create_unicast("01:00:5E:00:00:FB", None);
        assert_eq!(result.codes(), vec!["MulticastAddress"]);
    }

    #[test]
    fn locally_administered_bit() {
        assert!(MacAddress::create("02:00:00:00:00:01").unwrap().is_locally_administered());
        assert!(!MacAddress::create("00:1A:2B:3C:4D:5E").unwrap().is_locally_administered());
    }
}
