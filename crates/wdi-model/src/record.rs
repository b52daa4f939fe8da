//! Resolved and output record shapes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CountryCode, IndicatorValues};

pub const EMISSIONS_UNIT: &str = "kg CO2e";
pub const EMPLOYEES_UNIT: &str = "employees";

/// Where a record's indicator values came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Country,
    World,
}

impl Origin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::World => "world",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Indicator values chosen for one country, all from a single origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRecord {
    pub code: CountryCode,
    pub name: String,
    pub origin: Origin,
    pub values: IndicatorValues,
}

/// One row of the published dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub id: CountryCode,
    pub name: String,
    pub origin: Origin,
    pub emissions_year: u32,
    pub emissions_unit: String,
    /// Kilograms of CO2 equivalent.
    pub emissions: i64,
    pub employees_year: u32,
    pub employees: u64,
    pub employees_unit: String,
}
