//! Annual time series as read from an indicator extract.

use serde::{Deserialize, Serialize};

/// One (year, raw cell) pair. An empty `raw_value` means no observation that year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualObservation {
    pub year: u32,
    pub raw_value: String,
}

impl AnnualObservation {
    pub fn new(year: u32, raw_value: impl Into<String>) -> Self {
        Self {
            year,
            raw_value: raw_value.into(),
        }
    }

    /// Blank cells count as empty, so a whitespace-only value is no observation.
    pub fn is_empty(&self) -> bool {
        self.raw_value.trim().is_empty()
    }
}

/// All observations of one indicator for one entity (a country or the world).
///
/// Years are expected to be distinct. Position carries no meaning; consumers
/// select by year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorSeries {
    observations: Vec<AnnualObservation>,
}

impl IndicatorSeries {
    pub fn iter(&self) -> std::slice::Iter<'_, AnnualObservation> {
        self.observations.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

impl FromIterator<AnnualObservation> for IndicatorSeries {
    fn from_iter<I: IntoIterator<Item = AnnualObservation>>(iter: I) -> Self {
        Self {
            observations: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a IndicatorSeries {
    type Item = &'a AnnualObservation;
    type IntoIter = std::slice::Iter<'a, AnnualObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

/// The most recent non-empty observation of a series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestObservation {
    pub year: u32,
    pub value: String,
}

impl LatestObservation {
    pub fn new(year: u32, value: impl Into<String>) -> Self {
        Self {
            year,
            value: value.into(),
        }
    }
}

impl From<&AnnualObservation> for LatestObservation {
    fn from(observation: &AnnualObservation) -> Self {
        Self {
            year: observation.year,
            value: observation.raw_value.trim().to_string(),
        }
    }
}

/// One row of an indicator extract: an entity code and its series over the year window.
///
/// The code is kept as read; callers decide whether it names a country, the world
/// aggregate, or something to discard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorRow {
    pub country_code: String,
    pub country_name: String,
    pub series: IndicatorSeries,
}
