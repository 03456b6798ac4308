use serde::Serialize;
use url::Url;

use valida_core::{
    into_created, resolve, run_validators, TryCreate, ValidaError, ValidatedString, ValidatedValue,
    ValueValidator,
};
use valida_rules::{common, website};

use crate::macros::string_value_object;

const FIELD: &str = "Website";

/// Schemes accepted by [`WebsiteUrl::try_create`].
pub const WEB_SCHEMES: [&str; 2] = ["http", "https"];

/// An absolute web address, stored in the URL standard's serialisation
/// (`"HTTPS://Example.com"` becomes `"https://example.com/"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WebsiteUrl {
    inner: ValidatedString,
    #[serde(skip)]
    url: Url,
}

impl WebsiteUrl {
    fn validators(field: &str, schemes: &[&str]) -> Vec<ValueValidator<str>> {
        vec![
            common::required(field),
            website::validate_format(field),
            website::validate_scheme(field, schemes),
        ]
    }

    /// An `http` or `https` URL.
    pub fn try_create(value: &str, property_name: Option<&str>) -> TryCreate<Self> {
        Self::try_create_with_schemes(value, &WEB_SCHEMES, property_name)
    }

    /// A URL whose scheme is one of `schemes`.
    pub fn try_create_with_schemes(
        value: &str,
        schemes: &[&str],
        property_name: Option<&str>,
    ) -> TryCreate<Self> {
        let field = property_name.unwrap_or(FIELD);
        let validators = Self::validators(field, schemes);
        let result = run_validators(value, &validators);
        let (result, built) = resolve("WebsiteUrl", result, || {
            website::parse(value).map(|url| Self {
                inner: ValidatedValue::new(url.as_str().to_string(), validators),
                url,
            })
        });
        (result, built.flatten())
    }

    pub fn create(value: &str) -> Result<Self, ValidaError> {
        into_created(Self::try_create(value, None))
    }

    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn as_url(&self) -> &Url {
        &self.url
    }
}

string_value_object!(WebsiteUrl);
