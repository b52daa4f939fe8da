//! Multi-indicator join.
//!
//! Each indicator is joined on its own into an immutable [`IndicatorTable`]
//! against the registry. [`merge_tables`] then combines the tables into one
//! accumulator per country plus the world accumulator, without mutating the
//! tables.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use wdi_model::{
    CountryAccumulator, CountryCode, CountryRegistry, Indicator, IndicatorRow, IndicatorSeries,
    LatestObservation, WorldAccumulator,
};

use crate::error::{Result, TransformError};
use crate::reduce::reduce_series;

/// One indicator joined against the registry and reduced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorTable {
    pub indicator: Indicator,
    /// Every registry country, with its latest observation if any.
    pub countries: BTreeMap<CountryCode, Option<LatestObservation>>,
    /// Latest world aggregate observation, `None` when absent or empty.
    pub world: Option<LatestObservation>,
    /// Rows dropped because their code is not a registry country.
    pub discarded: usize,
}

/// Per-country accumulators in registry order, plus the world accumulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinedIndicators {
    pub countries: Vec<(CountryCode, CountryAccumulator)>,
    pub world: WorldAccumulator,
}

/// Joins one indicator's raw rows against the registry.
///
/// Rows coded `wld` feed the world aggregate; rows for registry countries are
/// kept; anything else (regional aggregates, income groups) is discarded.
/// Every registry country must have a non-empty raw series, otherwise the
/// extract is considered broken and [`TransformError::DataIntegrity`] is
/// returned.
pub fn join_indicator(
    indicator: Indicator,
    rows: impl IntoIterator<Item = IndicatorRow>,
    registry: &CountryRegistry,
) -> Result<IndicatorTable> {
    let mut raw: BTreeMap<CountryCode, IndicatorSeries> = BTreeMap::new();
    let mut world_raw: Option<IndicatorSeries> = None;
    let mut discarded = 0usize;

    for row in rows {
        let Ok(code) = CountryCode::new(row.country_code.as_str()) else {
            debug!(indicator = %indicator, code = %row.country_code, "discarding row with non alpha-3 code");
            discarded += 1;
            continue;
        };

        if code.is_world() {
            if world_raw.replace(row.series).is_some() {
                warn!(indicator = %indicator, "duplicate world aggregate row, keeping the last one");
            }
        } else if registry.contains(&code) {
            if raw.contains_key(&code) {
                warn!(indicator = %indicator, code = %code, "duplicate country row, keeping the last one");
            }
            raw.insert(code, row.series);
        } else {
            debug!(indicator = %indicator, code = %code, name = %row.country_name, "discarding non-country row");
            discarded += 1;
        }
    }

    let missing: Vec<CountryCode> = registry
        .codes()
        .filter(|code| raw.get(*code).is_none_or(IndicatorSeries::is_empty))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(TransformError::DataIntegrity { indicator, missing });
    }

    let countries: BTreeMap<CountryCode, Option<LatestObservation>> = raw
        .iter()
        .map(|(code, series)| (code.clone(), reduce_series(series)))
        .collect();

    let world = match &world_raw {
        Some(series) => reduce_series(series),
        None => {
            warn!(indicator = %indicator, "extract has no world aggregate row");
            None
        }
    };

    let observed = countries.values().filter(|value| value.is_some()).count();
    info!(
        indicator = %indicator,
        countries = countries.len(),
        observed,
        without_value = countries.len() - observed,
        discarded,
        world_year = world.as_ref().map(|w| w.year),
        "joined indicator"
    );

    Ok(IndicatorTable {
        indicator,
        countries,
        world,
        discarded,
    })
}

/// Combines joined indicator tables into per-country and world accumulators.
///
/// Countries come out in registry order. An indicator with no table leaves
/// its slot empty everywhere.
pub fn merge_tables(registry: &CountryRegistry, tables: &[IndicatorTable]) -> JoinedIndicators {
    let mut world = WorldAccumulator::default();
    for table in tables {
        world.slots.set(table.indicator, table.world.clone());
    }

    let countries = registry
        .iter()
        .map(|entry| {
            let mut accumulator = CountryAccumulator::new(entry.display_name.clone());
            for table in tables {
                let value = table.countries.get(&entry.code).cloned().flatten();
                accumulator.slots.set(table.indicator, value);
            }
            (entry.code.clone(), accumulator)
        })
        .collect();

    JoinedIndicators { countries, world }
}
