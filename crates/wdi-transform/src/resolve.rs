//! World fallback for countries with incomplete indicators.

use tracing::debug;

use wdi_model::{CountryAccumulator, CountryCode, Origin, ResolvedRecord, WorldAccumulator};

use crate::error::{Result, TransformError};

/// Chooses the indicator values for one country.
///
/// A country with all three indicators keeps its own values. Otherwise every
/// value is taken from the world aggregate and the record is tagged
/// [`Origin::World`]; country and world values are never mixed.
pub fn resolve_record(
    code: &CountryCode,
    country: &CountryAccumulator,
    world: &WorldAccumulator,
) -> Result<ResolvedRecord> {
    if let Some(values) = country.slots.complete() {
        return Ok(ResolvedRecord {
            code: code.clone(),
            name: country.name.clone(),
            origin: Origin::Country,
            values,
        });
    }

    debug!(
        code = %code,
        missing = ?country.slots.missing(),
        "falling back to world aggregate"
    );
    let values = world.slots.complete().ok_or_else(|| {
        let indicator = world.slots.missing()[0];
        TransformError::WorldAggregateIncomplete {
            indicator,
            country: code.clone(),
        }
    })?;

    Ok(ResolvedRecord {
        code: code.clone(),
        name: country.name.clone(),
        origin: Origin::World,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wdi_model::{Indicator, IndicatorSlots, LatestObservation};

    type Slot<'a> = Option<(u32, &'a str)>;

    fn slots(emissions: Slot<'_>, labor: Slot<'_>, employment: Slot<'_>) -> IndicatorSlots {
        let obs = |v: Slot<'_>| v.map(|(year, value)| LatestObservation::new(year, value));
        IndicatorSlots {
            emissions: obs(emissions),
            labor_force: obs(labor),
            employment: obs(employment),
        }
    }

    fn world() -> WorldAccumulator {
        WorldAccumulator {
            slots: slots(
                Some((2020, "34000000")),
                Some((2022, "3500000000")),
                Some((2021, "57.3")),
            ),
        }
    }

    #[test]
    fn complete_country_keeps_own_values() {
        let code = CountryCode::new("fra").unwrap();
        let country = CountryAccumulator {
            name: "France".to_string(),
            slots: slots(
                Some((2020, "276640")),
                Some((2022, "31000000")),
                Some((2022, "50.1")),
            ),
        };
        let resolved = resolve_record(&code, &country, &world()).unwrap();
        assert_eq!(resolved.origin, Origin::Country);
        assert_eq!(resolved.values.emissions.value, "276640");
        assert_eq!(resolved.name, "France");
    }

    #[test]
    fn incomplete_country_takes_every_world_value() {
        let code = CountryCode::new("ata").unwrap();
        let country = CountryAccumulator {
            name: "Antarctica".to_string(),
            slots: slots(None, Some((2015, "1000")), Some((2016, "60.0"))),
        };
        let resolved = resolve_record(&code, &country, &world()).unwrap();

        assert_eq!(resolved.origin, Origin::World);
        assert_eq!(resolved.name, "Antarctica");
        assert_eq!(resolved.code, code);
        assert_eq!(Some(resolved.values), world().slots.complete());
    }

    #[test]
    fn incomplete_world_is_fatal_only_when_needed() {
        let code = CountryCode::new("ata").unwrap();
        let partial_world = WorldAccumulator {
            slots: slots(Some((2020, "1")), None, Some((2021, "57.3"))),
        };
        let empty = CountryAccumulator::new("Antarctica");
        let err = resolve_record(&code, &empty, &partial_world).unwrap_err();
        assert!(matches!(
            err,
            TransformError::WorldAggregateIncomplete { indicator: Indicator::LaborForce, .. }
        ));

        let complete = CountryAccumulator {
            name: "France".to_string(),
            slots: slots(Some((2020, "1")), Some((2020, "2")), Some((2020, "3"))),
        };
        assert!(resolve_record(&code, &complete, &partial_world).is_ok());
    }
}
