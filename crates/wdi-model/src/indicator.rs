//! The three tracked indicators and the year window they are read over.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// First year (inclusive) read from every indicator extract.
pub const FIRST_YEAR: u32 = 2010;
/// Last year (inclusive) read from every indicator extract.
pub const LAST_YEAR: u32 = 2022;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    /// CO2 emissions in kilotons.
    Emissions,
    /// Total labor force, persons.
    LaborForce,
    /// Employment to population ratio, percent.
    Employment,
}

impl Indicator {
    /// Load order used by the pipeline.
    pub const ALL: [Indicator; 3] = [Self::Emissions, Self::LaborForce, Self::Employment];

    pub fn name(self) -> &'static str {
        match self {
            Self::Emissions => "emissions",
            Self::LaborForce => "labor_force",
            Self::Employment => "employment",
        }
    }

    /// World Development Indicators series code.
    pub fn source_code(self) -> &'static str {
        match self {
            Self::Emissions => "EN.ATM.CO2E.KT",
            Self::LaborForce => "SL.TLF.TOTL.IN",
            Self::Employment => "SL.EMP.TOTL.SP.ZS",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Emissions => "CO2 emissions (kt)",
            Self::LaborForce => "Labor force, total",
            Self::Employment => "Employment to population ratio (%)",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Indicator {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|indicator| {
                indicator.name().eq_ignore_ascii_case(needle)
                    || indicator.source_code().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ModelError::UnknownIndicator(s.to_string()))
    }
}

/// Inclusive range of years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    first: u32,
    last: u32,
}

impl YearRange {
    pub fn new(first: u32, last: u32) -> Result<Self, ModelError> {
        if first > last {
            return Err(ModelError::InvalidYearRange { first, last });
        }
        Ok(Self { first, last })
    }

    pub fn first(self) -> u32 {
        self.first
    }

    pub fn last(self) -> u32 {
        self.last
    }

    pub fn years(self) -> impl Iterator<Item = u32> {
        self.first..=self.last
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            first: FIRST_YEAR,
            last: LAST_YEAR,
        }
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}
