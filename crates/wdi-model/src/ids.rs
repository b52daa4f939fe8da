#![deny(unsafe_code)]

use std::fmt;

use crate::ModelError;

/// Sentinel code the indicator extracts use for the world aggregate row.
pub const WORLD_CODE: &str = "wld";

/// Lowercase ISO 3166 alpha-3 code, the join key across every input.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.len() != 3 || !trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return Err(ModelError::InvalidCountryCode(value));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    /// True for the world aggregate pseudo-country.
    pub fn is_world(&self) -> bool {
        self.0 == WORLD_CODE
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CountryCode {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
