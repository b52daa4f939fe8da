//! Header row detection for indicator extracts.
//!
//! Extracts open with a few metadata lines (`"Data Source",...`,
//! `"Last Updated Date",...`) before the real header. The header is the first
//! row that names the country code column.

use std::path::Path;

use wdi_model::YearRange;

use crate::error::{IngestError, Result};

pub const COUNTRY_NAME_COLUMN: &str = "Country Name";
pub const COUNTRY_CODE_COLUMN: &str = "Country Code";
pub const INDICATOR_CODE_COLUMN: &str = "Indicator Code";

pub(crate) fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}').trim()
}

/// Column positions resolved from the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractHeader {
    pub country_code: usize,
    pub country_name: Option<usize>,
    pub indicator_code: Option<usize>,
    /// `(year, column)` for every year of the requested window, ascending.
    pub years: Vec<(u32, usize)>,
}

impl ExtractHeader {
    /// True when the row looks like the extract header.
    pub fn is_header_row<'a>(cells: impl IntoIterator<Item = &'a str>) -> bool {
        cells
            .into_iter()
            .any(|cell| normalize_cell(cell) == COUNTRY_CODE_COLUMN)
    }

    /// Resolves columns, requiring the code column and one column per year.
    pub fn resolve<'a>(
        cells: impl IntoIterator<Item = &'a str>,
        years: YearRange,
        path: &Path,
    ) -> Result<Self> {
        let columns: Vec<&str> = cells.into_iter().map(normalize_cell).collect();
        let position = |name: &str| columns.iter().position(|column| *column == name);

        let country_code = position(COUNTRY_CODE_COLUMN).ok_or_else(|| IngestError::MissingColumn {
            column: COUNTRY_CODE_COLUMN.to_string(),
            path: path.to_path_buf(),
        })?;

        let mut year_columns = Vec::new();
        for year in years.years() {
            let label = year.to_string();
            let column = position(label.as_str()).ok_or_else(|| IngestError::MissingColumn {
                column: label.clone(),
                path: path.to_path_buf(),
            })?;
            year_columns.push((year, column));
        }

        Ok(Self {
            country_code,
            country_name: position(COUNTRY_NAME_COLUMN),
            indicator_code: position(INDICATOR_CODE_COLUMN),
            years: year_columns,
        })
    }
}
