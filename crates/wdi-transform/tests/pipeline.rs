//! End-to-end tests for the baseline pipeline over in-memory extracts.

use std::collections::BTreeMap;
use std::convert::Infallible;

use wdi_model::{
    AnnualObservation, CountryCode, CountryRegistry, CountryRegistryEntry, Indicator,
    IndicatorRow, Origin, YearRange,
};
use wdi_output::to_json_bytes;
use wdi_transform::{IndicatorSource, PipelineOptions, TransformError, run_pipeline};

#[derive(Clone, Default)]
struct MemorySource {
    rows: BTreeMap<Indicator, Vec<IndicatorRow>>,
    loads: Vec<Indicator>,
}

impl MemorySource {
    fn with(mut self, indicator: Indicator, rows: Vec<IndicatorRow>) -> Self {
        self.rows.insert(indicator, rows);
        self
    }
}

impl IndicatorSource for MemorySource {
    type Error = Infallible;

    fn load(
        &mut self,
        indicator: Indicator,
        years: YearRange,
    ) -> Result<Vec<IndicatorRow>, Infallible> {
        assert_eq!(years, YearRange::default());
        self.loads.push(indicator);
        Ok(self.rows.get(&indicator).cloned().unwrap_or_default())
    }
}

fn row(code: &str, values: &[(u32, &str)]) -> IndicatorRow {
    let series = YearRange::default()
        .years()
        .map(|year| {
            let value = values.iter().find(|(y, _)| *y == year).map_or("", |(_, v)| *v);
            AnnualObservation::new(year, value)
        })
        .collect();
    IndicatorRow {
        country_code: code.to_string(),
        country_name: String::new(),
        series,
    }
}

fn registry() -> CountryRegistry {
    [("nor", "Norway"), ("ata", "Antarctica"), ("ken", "Kenya")]
        .into_iter()
        .map(|(c, n)| CountryRegistryEntry::new(CountryCode::new(c).unwrap(), n))
        .collect()
}

fn source() -> MemorySource {
    MemorySource::default()
        .with(
            Indicator::Emissions,
            vec![
                row("NOR", &[(2019, "42000"), (2020, "41000")]),
                row("ATA", &[]),
                row("KEN", &[(2020, "100.0")]),
                row("WLD", &[(2020, "34000000.5")]),
                row("SSF", &[(2020, "800000")]),
            ],
        )
        .with(
            Indicator::LaborForce,
            vec![
                row("NOR", &[(2022, "2900000")]),
                row("ATA", &[(2015, "1000000")]),
                row("KEN", &[(2015, "1000000"), (2016, "")]),
                row("WLD", &[(2022, "3500000000")]),
            ],
        )
        .with(
            Indicator::Employment,
            vec![
                row("NOR", &[(2022, "70.5")]),
                row("ATA", &[(2016, "60.0")]),
                row("KEN", &[(2016, "60.0")]),
                row("WLD", &[(2021, "50.0")]),
            ],
        )
}

#[test]
fn every_registry_country_gets_exactly_one_record_in_order() {
    let mut source = source();
    let output = run_pipeline(&registry(), &mut source, PipelineOptions::default()).unwrap();

    let ids: Vec<&str> = output.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["nor", "ata", "ken"]);
    assert_eq!(source.loads, Indicator::ALL.to_vec());
    assert_eq!(output.summary.countries, 3);
    assert_eq!(output.summary.from_country, 2);
    assert_eq!(output.summary.from_world, 1);
    assert!(
        output
            .summary
            .discarded
            .contains(&(Indicator::Emissions, 1))
    );
}

#[test]
fn country_values_and_derivations() {
    let output = run_pipeline(&registry(), &mut source(), PipelineOptions::default()).unwrap();
    let kenya = &output.records[2];

    assert_eq!(kenya.origin, Origin::Country);
    assert_eq!(kenya.name, "Kenya");
    assert_eq!(kenya.emissions, 100_000_000);
    assert_eq!(kenya.emissions_year, 2020);
    assert_eq!(kenya.employees, 600_000);
    assert_eq!(kenya.employees_year, 2016);
}

#[test]
fn missing_emissions_falls_back_to_world_for_everything() {
    let output = run_pipeline(&registry(), &mut source(), PipelineOptions::default()).unwrap();
    let antarctica = &output.records[1];

    assert_eq!(antarctica.origin, Origin::World);
    assert_eq!(antarctica.name, "Antarctica");
    assert_eq!(antarctica.emissions, 34_000_000_500_000);
    assert_eq!(antarctica.emissions_year, 2020);
    // World labor force and ratio, not the country's own 1000000 x 60%.
    assert_eq!(antarctica.employees, 1_750_000_000);
    assert_eq!(antarctica.employees_year, 2021);
    assert_eq!(
        output.summary.fallbacks,
        vec![CountryCode::new("ata").unwrap()]
    );
}

#[test]
fn repeated_runs_are_identical() {
    let first = run_pipeline(&registry(), &mut source(), PipelineOptions::default()).unwrap();
    let second = run_pipeline(&registry(), &mut source(), PipelineOptions::default()).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        to_json_bytes(&first.records).unwrap(),
        to_json_bytes(&second.records).unwrap()
    );
}

#[test]
fn country_absent_from_one_extract_aborts_the_run() {
    let mut source = source().with(
        Indicator::LaborForce,
        vec![
            row("NOR", &[(2022, "2900000")]),
            row("KEN", &[(2015, "1000000")]),
            row("WLD", &[(2022, "3500000000")]),
        ],
    );
    let err = run_pipeline(&registry(), &mut source, PipelineOptions::default()).unwrap_err();

    match err {
        TransformError::DataIntegrity { indicator, missing } => {
            assert_eq!(indicator, Indicator::LaborForce);
            assert_eq!(missing, vec![CountryCode::new("ata").unwrap()]);
        }
        other => panic!("unexpected error: {other}"),
    }
    // Employment is never loaded once labor force fails.
    assert_eq!(
        source.loads,
        vec![Indicator::Emissions, Indicator::LaborForce]
    );
}

#[test]
fn world_without_needed_indicator_aborts_the_run() {
    let mut source = source().with(
        Indicator::Employment,
        vec![
            row("NOR", &[(2022, "70.5")]),
            row("ATA", &[(2016, "60.0")]),
            row("KEN", &[(2016, "60.0")]),
            row("WLD", &[]),
        ],
    );
    let result = run_pipeline(&registry(), &mut source, PipelineOptions::default());
    assert!(matches!(
        result,
        Err(TransformError::WorldAggregateIncomplete {
            indicator: Indicator::Employment,
            ..
        })
    ));
}

#[derive(Debug, thiserror::Error)]
#[error("extract unavailable")]
struct Unavailable;

struct FailingSource;

impl IndicatorSource for FailingSource {
    type Error = Unavailable;

    fn load(&mut self, _: Indicator, _: YearRange) -> Result<Vec<IndicatorRow>, Unavailable> {
        Err(Unavailable)
    }
}

#[test]
fn loader_failure_is_fatal() {
    let result = run_pipeline(&registry(), &mut FailingSource, PipelineOptions::default());
    match result {
        Err(TransformError::Source { indicator, source }) => {
            assert_eq!(indicator, Indicator::Emissions);
            assert_eq!(source.to_string(), "extract unavailable");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
