use std::fs;

use tempfile::TempDir;

use wdi_ingest::{IngestError, load_country_registry, read_indicator_csv};
use wdi_model::{Indicator, YearRange};

fn year_header() -> String {
    (1960..=2022)
        .map(|year| format!("\"{year}\""))
        .collect::<Vec<_>>()
        .join(",")
}

fn year_values(values: &[(u32, &str)]) -> String {
    (1960..=2022)
        .map(|year| {
            let value = values
                .iter()
                .find(|(y, _)| *y == year)
                .map_or("", |(_, v)| *v);
            format!("\"{value}\"")
        })
        .collect::<Vec<_>>()
        .join(",")
}

#[test]
fn reads_full_width_extract_over_default_window() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("API_EN.ATM.CO2E.KT_DS2_en_csv_v2.csv");
    let contents = format!(
        "\"Data Source\",\"World Development Indicators\",\n\n\
         \"Last Updated Date\",\"2023-05-10\",\n\n\
         \"Country Name\",\"Country Code\",\"Indicator Name\",\"Indicator Code\",{},\n\
         \"France\",\"FRA\",\"CO2 emissions (kt)\",\"EN.ATM.CO2E.KT\",{},\n\
         \"Euro area\",\"EMU\",\"CO2 emissions (kt)\",\"EN.ATM.CO2E.KT\",{},\n",
        year_header(),
        year_values(&[(1990, "1.0"), (2019, "300000.5"), (2020, "276640")]),
        year_values(&[]),
    );
    fs::write(&path, contents).unwrap();

    let rows = read_indicator_csv(&path, Indicator::Emissions, YearRange::default()).unwrap();
    assert_eq!(rows.len(), 2);

    let france = &rows[0];
    assert_eq!(france.country_code, "FRA");
    assert_eq!(france.series.iter().count(), 13);
    let first = france.series.iter().next().unwrap();
    assert_eq!(first.year, 2010);
    let filled: Vec<u32> = france
        .series
        .iter()
        .filter(|o| !o.is_empty())
        .map(|o| o.year)
        .collect();
    assert_eq!(filled, vec![2019, 2020]);

    assert!(rows[1].series.iter().all(|o| o.is_empty()));
}

#[test]
fn missing_extract_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let result = read_indicator_csv(
        &dir.path().join("absent.csv"),
        Indicator::Employment,
        YearRange::default(),
    );
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn loads_registry_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("countries.json");
    fs::write(
        &path,
        r#"[{"id":250,"alpha2":"fr","alpha3":"fra","en":"France"}]"#,
    )
    .unwrap();

    let registry = load_country_registry(&path).unwrap();
    assert_eq!(registry.len(), 1);

    fs::write(&path, "{not json").unwrap();
    assert!(matches!(
        load_country_registry(&path),
        Err(IngestError::RegistryParse { .. })
    ));
}
