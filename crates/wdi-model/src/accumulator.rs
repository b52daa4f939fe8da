//! Per-entity indicator slots filled by the joiner.

use crate::{Indicator, LatestObservation};

/// One optional latest observation per indicator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndicatorSlots {
    pub emissions: Option<LatestObservation>,
    pub labor_force: Option<LatestObservation>,
    pub employment: Option<LatestObservation>,
}

impl IndicatorSlots {
    pub fn get(&self, indicator: Indicator) -> Option<&LatestObservation> {
        match indicator {
            Indicator::Emissions => self.emissions.as_ref(),
            Indicator::LaborForce => self.labor_force.as_ref(),
            Indicator::Employment => self.employment.as_ref(),
        }
    }

    pub fn set(&mut self, indicator: Indicator, value: Option<LatestObservation>) {
        let slot = match indicator {
            Indicator::Emissions => &mut self.emissions,
            Indicator::LaborForce => &mut self.labor_force,
            Indicator::Employment => &mut self.employment,
        };
        *slot = value;
    }

    /// Indicators with no observation.
    pub fn missing(&self) -> Vec<Indicator> {
        Indicator::ALL
            .into_iter()
            .filter(|&indicator| self.get(indicator).is_none())
            .collect()
    }

    /// All three values, or `None` as soon as one is absent.
    pub fn complete(&self) -> Option<IndicatorValues> {
        Some(IndicatorValues {
            emissions: self.emissions.clone()?,
            labor_force: self.labor_force.clone()?,
            employment: self.employment.clone()?,
        })
    }
}

/// Fully populated indicator set. Only constructible with all three values present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorValues {
    pub emissions: LatestObservation,
    pub labor_force: LatestObservation,
    pub employment: LatestObservation,
}

impl IndicatorValues {
    pub fn get(&self, indicator: Indicator) -> &LatestObservation {
        match indicator {
            Indicator::Emissions => &self.emissions,
            Indicator::LaborForce => &self.labor_force,
            Indicator::Employment => &self.employment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryAccumulator {
    pub name: String,
    pub slots: IndicatorSlots,
}

impl CountryAccumulator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: IndicatorSlots::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldAccumulator {
    pub slots: IndicatorSlots,
}
