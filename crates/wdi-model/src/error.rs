use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid country code '{0}': expected three ASCII letters")]
    InvalidCountryCode(String),
    #[error("unknown indicator '{0}'")]
    UnknownIndicator(String),
    #[error("invalid year range {first}..={last}")]
    InvalidYearRange { first: u32, last: u32 },
}

pub type Result<T> = std::result::Result<T, ModelError>;
