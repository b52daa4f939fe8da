//! Data model for the per-country emissions and employment baseline.
//!
//! - **ids**: `CountryCode`, the join key shared by every input
//! - **indicator**: the three tracked indicators and the year window
//! - **series**: raw annual observations and their latest reduction
//! - **registry**: the country universe
//! - **accumulator**: per-country and world indicator slots
//! - **record**: resolved and output records

pub mod accumulator;
pub mod error;
pub mod ids;
pub mod indicator;
pub mod record;
pub mod registry;
pub mod series;

pub use accumulator::{CountryAccumulator, IndicatorSlots, IndicatorValues, WorldAccumulator};
pub use error::{ModelError, Result};
pub use ids::{CountryCode, WORLD_CODE};
pub use indicator::{FIRST_YEAR, Indicator, LAST_YEAR, YearRange};
pub use record::{EMISSIONS_UNIT, EMPLOYEES_UNIT, Origin, OutputRecord, ResolvedRecord};
pub use registry::{CountryRegistry, CountryRegistryEntry};
pub use series::{AnnualObservation, IndicatorRow, IndicatorSeries, LatestObservation};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_complete_only_when_all_present() {
        let mut slots = IndicatorSlots::default();
        slots.set(Indicator::Emissions, Some(LatestObservation::new(2020, "1.5")));
        slots.set(Indicator::LaborForce, Some(LatestObservation::new(2021, "100")));
        assert!(slots.complete().is_none());
        assert_eq!(slots.missing(), vec![Indicator::Employment]);

        slots.set(Indicator::Employment, Some(LatestObservation::new(2019, "55.5")));
        let values = slots.complete().expect("all indicators present");
        assert_eq!(values.get(Indicator::LaborForce).year, 2021);
        assert!(slots.missing().is_empty());
    }

    #[test]
    fn blank_cell_is_no_observation() {
        assert!(AnnualObservation::new(2020, "").is_empty());
        assert!(AnnualObservation::new(2020, "  ").is_empty());
        assert!(!AnnualObservation::new(2020, "0").is_empty());
    }

    #[test]
    fn origin_serializes_lowercase() {
        let json = serde_json::to_string(&Origin::World).expect("serialize origin");
        assert_eq!(json, "\"world\"");
        let round: Origin = serde_json::from_str("\"country\"").expect("deserialize origin");
        assert_eq!(round, Origin::Country);
    }
}
