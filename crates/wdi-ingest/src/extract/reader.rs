//! Indicator extract reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use wdi_model::{AnnualObservation, Indicator, IndicatorRow, IndicatorSeries, YearRange};

use crate::error::{IngestError, Result};

use super::header::{ExtractHeader, normalize_cell};

fn cell(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).map(normalize_cell).unwrap_or("")
}

/// Reads a World Bank indicator extract from disk.
pub fn read_indicator_csv(
    path: &Path,
    indicator: Indicator,
    years: YearRange,
) -> Result<Vec<IndicatorRow>> {
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    let rows = read_indicator_extract(file, path, indicator, years)?;
    info!(
        indicator = %indicator,
        path = %path.display(),
        rows = rows.len(),
        "read indicator extract"
    );
    Ok(rows)
}

/// Reads an indicator extract from any reader. `path` only labels errors.
///
/// Every returned row carries exactly one observation per year of `years`,
/// in ascending order, with an empty value where the extract has none.
pub fn read_indicator_extract<R: Read>(
    source: R,
    path: &Path,
    indicator: Indicator,
    years: YearRange,
) -> Result<Vec<IndicatorRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut header: Option<ExtractHeader> = None;
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| IngestError::csv(path, &e))?;
        if record.iter().all(|value| normalize_cell(value).is_empty()) {
            continue;
        }

        let columns = match &header {
            Some(columns) => columns,
            None => {
                if ExtractHeader::is_header_row(record.iter()) {
                    header = Some(ExtractHeader::resolve(record.iter(), years, path)?);
                }
                continue;
            }
        };

        let line = record.position().map_or(0, csv::Position::line);
        if let Some(idx) = columns.indicator_code {
            let found = cell(&record, idx);
            if !found.eq_ignore_ascii_case(indicator.source_code()) {
                return Err(IngestError::IndicatorMismatch {
                    path: path.to_path_buf(),
                    line,
                    expected: indicator.source_code(),
                    found: found.to_string(),
                });
            }
        }

        let country_code = cell(&record, columns.country_code);
        if country_code.is_empty() {
            debug!(path = %path.display(), line, "skipping row without country code");
            continue;
        }

        let series: IndicatorSeries = columns
            .years
            .iter()
            .map(|&(year, idx)| AnnualObservation::new(year, cell(&record, idx)))
            .collect();

        rows.push(IndicatorRow {
            country_code: country_code.to_string(),
            country_name: columns
                .country_name
                .map(|idx| cell(&record, idx).to_string())
                .unwrap_or_default(),
            series,
        });
    }

    if header.is_none() {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTRACT: &str = "\u{feff}\"Data Source\",\"World Development Indicators\",\n\
\n\
\"Last Updated Date\",\"2023-05-10\",\n\
\n\
\"Country Name\",\"Country Code\",\"Indicator Name\",\"Indicator Code\",\"2020\",\"2021\",\"2022\",\n\
\"Aruba\",\"ABW\",\"Labor force, total\",\"SL.TLF.TOTL.IN\",\"50000\",\"\",\"\",\n\
\"World\",\"WLD\",\"Labor force, total\",\"SL.TLF.TOTL.IN\",\"3400000000\",\"3450000000\",\"\",\n";

    fn window() -> YearRange {
        YearRange::new(2020, 2022).unwrap()
    }

    #[test]
    fn test_reads_rows_after_preamble() {
        let rows = read_indicator_extract(
            EXTRACT.as_bytes(),
            Path::new("API_SL.TLF.TOTL.IN.csv"),
            Indicator::LaborForce,
            window(),
        )
        .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].country_code, "ABW");
        assert_eq!(rows[0].country_name, "Aruba");
        let values: Vec<(u32, &str)> = rows[1]
            .series
            .iter()
            .map(|o| (o.year, o.raw_value.as_str()))
            .collect();
        assert_eq!(
            values,
            vec![(2020, "3400000000"), (2021, "3450000000"), (2022, "")]
        );
    }

    #[test]
    fn test_wrong_indicator_is_rejected() {
        let result = read_indicator_extract(
            EXTRACT.as_bytes(),
            Path::new("API_SL.TLF.TOTL.IN.csv"),
            Indicator::Employment,
            window(),
        );
        assert!(matches!(
            result,
            Err(IngestError::IndicatorMismatch { expected: "SL.EMP.TOTL.SP.ZS", .. })
        ));
    }

    #[test]
    fn test_missing_header_is_rejected() {
        let result = read_indicator_extract(
            "\"Data Source\",\"World Development Indicators\",\n".as_bytes(),
            Path::new("broken.csv"),
            Indicator::Emissions,
            window(),
        );
        assert!(matches!(result, Err(IngestError::NoHeaderDetected { .. })));
    }
}
