//! Error types for the transform core.

use thiserror::Error;

use wdi_model::{CountryCode, Indicator};

/// Errors that abort a baseline run.
///
/// A country lacking an observation is not an error; it is resolved by the
/// world fallback.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Known countries absent from an indicator's raw rows.
    #[error("{indicator}: known countries missing from the extract: {}", join_codes(.missing))]
    DataIntegrity {
        indicator: Indicator,
        missing: Vec<CountryCode>,
    },

    /// A fallback was needed but the world aggregate has no value for the indicator.
    #[error("world aggregate has no {indicator} observation (needed as fallback for {country})")]
    WorldAggregateIncomplete {
        indicator: Indicator,
        country: CountryCode,
    },

    /// A selected observation is not a usable number.
    #[error("{indicator} value '{value}' ({year}) for {entity} is not a valid number")]
    InvalidValue {
        indicator: Indicator,
        entity: String,
        year: u32,
        value: String,
    },

    /// The indicator loader failed.
    #[error("failed to load {indicator}: {source}")]
    Source {
        indicator: Indicator,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

fn join_codes(codes: &[CountryCode]) -> String {
    codes
        .iter()
        .map(CountryCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
