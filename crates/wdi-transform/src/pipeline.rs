//! Baseline pipeline: registry → three indicator joins → fallback → records.
//!
//! Indicators are loaded and joined one after another; each join completes
//! before the next load starts. Any failure aborts the run and no records are
//! returned.

use tracing::{info, info_span};

use wdi_model::{
    CountryCode, CountryRegistry, Indicator, IndicatorRow, Origin, OutputRecord, YearRange,
};

use crate::error::{Result, TransformError};
use crate::join::{IndicatorTable, join_indicator, merge_tables};
use crate::record::transform_record;
use crate::resolve::resolve_record;

/// Producer of an indicator's raw rows over a year window.
pub trait IndicatorSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn load(
        &mut self,
        indicator: Indicator,
        years: YearRange,
    ) -> std::result::Result<Vec<IndicatorRow>, Self::Error>;
}

/// Options for a pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Year window read from every indicator.
    pub years: YearRange,
}

/// Counts describing a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub countries: usize,
    pub from_country: usize,
    pub from_world: usize,
    /// Countries whose values came from the world aggregate, in output order.
    pub fallbacks: Vec<CountryCode>,
    /// Rows discarded per indicator (regional aggregates and other non-countries).
    pub discarded: Vec<(Indicator, usize)>,
}

/// Records in registry order and the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    pub records: Vec<OutputRecord>,
    pub summary: RunSummary,
}

/// Loads and joins every indicator, then builds one record per registry country.
pub fn run_pipeline<S: IndicatorSource>(
    registry: &CountryRegistry,
    source: &mut S,
    options: PipelineOptions,
) -> Result<PipelineOutput> {
    let mut tables = Vec::with_capacity(Indicator::ALL.len());
    for indicator in Indicator::ALL {
        let span = info_span!("indicator", indicator = %indicator);
        let table = span.in_scope(|| -> Result<IndicatorTable> {
            let rows = source
                .load(indicator, options.years)
                .map_err(|e| TransformError::Source {
                    indicator,
                    source: Box::new(e),
                })?;
            join_indicator(indicator, rows, registry)
        })?;
        tables.push(table);
    }

    info_span!("resolve").in_scope(|| build_records(registry, &tables))
}

/// Merges joined tables, applies the world fallback and derives output records.
pub fn build_records(
    registry: &CountryRegistry,
    tables: &[IndicatorTable],
) -> Result<PipelineOutput> {
    let joined = merge_tables(registry, tables);

    let mut records = Vec::with_capacity(joined.countries.len());
    let mut summary = RunSummary {
        countries: joined.countries.len(),
        discarded: tables.iter().map(|t| (t.indicator, t.discarded)).collect(),
        ..RunSummary::default()
    };

    for (code, country) in &joined.countries {
        let resolved = resolve_record(code, country, &joined.world)?;
        match resolved.origin {
            Origin::Country => summary.from_country += 1,
            Origin::World => {
                summary.from_world += 1;
                summary.fallbacks.push(code.clone());
            }
        }
        records.push(transform_record(&resolved)?);
    }

    info!(
        countries = summary.countries,
        from_country = summary.from_country,
        from_world = summary.from_world,
        "built baseline records"
    );
    Ok(PipelineOutput { records, summary })
}
