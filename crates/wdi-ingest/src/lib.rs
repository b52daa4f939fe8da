//! Input loading for the country baseline.
//!
//! This crate provides the concrete loaders the transform core treats as
//! external collaborators:
//!
//! - **Country registry**: JSON list of countries (`alpha3` + `en`)
//! - **Indicator extracts**: World Bank `API_<code>_*.csv` files, read over the fixed year window
//! - **Discovery**: locate each indicator's extract in a data directory
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use wdi_ingest::{find_indicator_extract, load_country_registry, read_indicator_csv};
//! use wdi_model::{Indicator, YearRange};
//!
//! let registry = load_country_registry(Path::new("data/countries.json"))?;
//! let path = find_indicator_extract(Path::new("data"), Indicator::Emissions)?;
//! let rows = read_indicator_csv(&path, Indicator::Emissions, YearRange::default())?;
//! ```

mod discovery;
mod error;
mod extract;
mod registry;

// === Error Types ===
pub use error::{IngestError, Result};

// === Indicator Extracts ===
pub use extract::{
    COUNTRY_CODE_COLUMN, COUNTRY_NAME_COLUMN, ExtractHeader, INDICATOR_CODE_COLUMN,
    read_indicator_csv, read_indicator_extract,
};

// === File Discovery ===
pub use discovery::{extract_prefix, find_indicator_extract, list_csv_files};

// === Country Registry ===
pub use registry::{load_country_registry, parse_country_registry};
