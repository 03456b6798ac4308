use serde::Serialize;

use valida_core::{
    into_created, resolve, run_validators, CountryCode, TryCreate, ValidaError, ValidatedString,
    ValidatedValue, ValidatedValueObject, ValidationResult, ValueValidator,
};
use valida_rules::{address, common};

use super::postal_code::{PostalCode, FIELD as POSTAL_CODE_FIELD};

/// Longest accepted region (state, county, province) line.
pub const MAX_REGION_LENGTH: usize = 100;

/// A postal address. Every line is validated and all problems are reported
/// in one pass, each under its own member name (`"Street"`, `"City"`,
/// `"PostalCode"`, or `"<property_name>.Street"` and so on).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PostalAddress {
    street: ValidatedString,
    street2: Option<ValidatedString>,
    city: ValidatedString,
    region: Option<ValidatedString>,
    postal_code: PostalCode,
    country: CountryCode,
    #[serde(skip)]
    single_line: String,
}

fn member(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(p) => format!("{p}.{name}"),
        None => name.to_string(),
    }
}

fn present(line: Option<&str>) -> Option<&str> {
    line.map(str::trim).filter(|l| !l.is_empty())
}

fn line(value: &str, validators: Vec<ValueValidator<str>>) -> ValidatedString {
    ValidatedValue::new(value.trim().to_string(), validators)
}

impl PostalAddress {
    pub fn try_create(
        street: &str,
        street2: Option<&str>,
        city: &str,
        region: Option<&str>,
        postal_code: &str,
        country: CountryCode,
        property_name: Option<&str>,
    ) -> TryCreate<Self> {
        let street_field = member(property_name, "Street");
        let street2_field = member(property_name, "Street2");
        let city_field = member(property_name, "City");
        let region_field = member(property_name, "Region");
        let postal_field = member(property_name, POSTAL_CODE_FIELD);

        let street_v = vec![common::required(&street_field), address::validate_street(&street_field)];
        let street2_v = vec![address::validate_street(&street2_field)];
        let city_v = vec![common::required(&city_field), address::validate_city(&city_field)];
        let region_v = vec![common::max_length(&region_field, MAX_REGION_LENGTH)];

        let street2 = present(street2);
        let region = present(region);

        let mut result = run_validators(street, &street_v);
        if let Some(s) = street2 {
            result.merge(run_validators(s, &street2_v));
        }
        result.merge(run_validators(city, &city_v));
        if let Some(r) = region {
            result.merge(run_validators(r, &region_v));
        }
        let (postal_result, postal) = PostalCode::try_create(country, postal_code, Some(postal_field.as_str()));
        result.merge(postal_result);

        let (result, built) = resolve("PostalAddress", result, || {
            postal.map(|postal_code| {
                let mut address = Self {
                    street: line(street, street_v),
                    street2: street2.map(|s| line(s, street2_v)),
                    city: line(city, city_v),
                    region: region.map(|r| line(r, region_v)),
                    postal_code,
                    country,
                    single_line: String::new(),
                };
                address.single_line = address.render();
                address
            })
        });
        (result, built.flatten())
    }

    pub fn create(
        street: &str,
        street2: Option<&str>,
        city: &str,
        region: Option<&str>,
        postal_code: &str,
        country: CountryCode,
    ) -> Result<Self, ValidaError> {
        into_created(Self::try_create(street, street2, city, region, postal_code, country, None))
    }

    pub fn street(&self) -> &str {
        self.street.value()
    }

    pub fn street2(&self) -> Option<&str> {
        self.street2.as_ref().map(|s| s.value().as_str())
    }

    pub fn city(&self) -> &str {
        self.city.value()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_ref().map(|r| r.value().as_str())
    }

    pub fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }

    pub fn country(&self) -> CountryCode {
        self.country
    }

    fn render(&self) -> String {
        let mut parts: Vec<String> = vec![self.street().to_string()];
        parts.extend(self.street2().map(str::to_string));
        parts.push(self.city().to_string());
        let locality = match self.region() {
            Some(region) => format!("{region} {}", self.postal_code),
            None => self.postal_code.to_string(),
        };
        parts.push(locality);
        if !self.country.is_wildcard() {
            parts.push(self.country.alpha2().to_string());
        }
        parts.join(", ")
    }
}

impl ValidatedValueObject for PostalAddress {
    type Value = str;

    /// The address on one line, e.g.
    /// `"221B Baker Street, London, NW1 6XE, GB"`.
    fn value(&self) -> &str {
        &self.single_line
    }

    fn validate(&self) -> ValidationResult {
        let mut result = self.street.validate();
        if let Some(s) = &self.street2 {
            result.merge(s.validate());
        }
        result.merge(self.city.validate());
        if let Some(r) = &self.region {
            result.merge(r.validate());
        }
        result.merged(self.postal_code.validate())
    }
}

impl std::fmt::Display for PostalAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.single_line)
    }
}
