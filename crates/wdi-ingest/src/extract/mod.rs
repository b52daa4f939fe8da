//! World Bank indicator extract (CSV) reading.

mod header;
mod reader;

pub use header::{COUNTRY_CODE_COLUMN, COUNTRY_NAME_COLUMN, ExtractHeader, INDICATOR_CODE_COLUMN};
pub use reader::{read_indicator_csv, read_indicator_extract};
