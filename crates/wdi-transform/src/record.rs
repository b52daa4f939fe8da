//! Output record derivation: unit conversion and employee count.

use wdi_model::{
    EMISSIONS_UNIT, EMPLOYEES_UNIT, Indicator, LatestObservation, OutputRecord, ResolvedRecord,
};

use crate::error::{Result, TransformError};

/// Kilotons to kilograms.
pub const KILOTONS_TO_KG: f64 = 1_000_000.0;

fn invalid(indicator: Indicator, entity: &str, observation: &LatestObservation) -> TransformError {
    TransformError::InvalidValue {
        indicator,
        entity: entity.to_string(),
        year: observation.year,
        value: observation.value.clone(),
    }
}

fn parse_real(indicator: Indicator, entity: &str, observation: &LatestObservation) -> Result<f64> {
    observation
        .value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| invalid(indicator, entity, observation))
}

/// Emissions in kg CO2e from a kiloton value, truncated toward zero.
pub fn emissions_kg(entity: &str, emissions: &LatestObservation) -> Result<i64> {
    let kilotons = parse_real(Indicator::Emissions, entity, emissions)?;
    let kg = (kilotons * KILOTONS_TO_KG).trunc();
    if kg < i64::MIN as f64 || kg > i64::MAX as f64 {
        return Err(invalid(Indicator::Emissions, entity, emissions));
    }
    Ok(kg as i64)
}

/// Employed persons: labor force times the employment percentage, truncated toward zero.
///
/// The labor force is an integer count and the employment ratio a percentage.
pub fn employed_population(
    entity: &str,
    labor_force: &LatestObservation,
    employment: &LatestObservation,
) -> Result<u64> {
    let persons = labor_force
        .value
        .trim()
        .parse::<i64>()
        .map_err(|_| invalid(Indicator::LaborForce, entity, labor_force))?;
    let percentage = parse_real(Indicator::Employment, entity, employment)?;

    let employed = (persons as f64 * percentage / 100.0).trunc();
    if !employed.is_finite() || employed < 0.0 || employed > u64::MAX as f64 {
        return Err(invalid(Indicator::Employment, entity, employment));
    }
    Ok(employed as u64)
}

/// Builds the published record.
///
/// `employees_year` is the employment ratio's year even when the labor force
/// value comes from a different year.
pub fn transform_record(record: &ResolvedRecord) -> Result<OutputRecord> {
    let entity = record.code.as_str();
    let values = &record.values;

    Ok(OutputRecord {
        id: record.code.clone(),
        name: record.name.clone(),
        origin: record.origin,
        emissions_year: values.emissions.year,
        emissions_unit: EMISSIONS_UNIT.to_string(),
        emissions: emissions_kg(entity, &values.emissions)?,
        employees_year: values.employment.year,
        employees: employed_population(entity, &values.labor_force, &values.employment)?,
        employees_unit: EMPLOYEES_UNIT.to_string(),
    })
}
