//! Country registry loading.
//!
//! The registry is a JSON array in the layout of the public `world_countries`
//! combined list: one object per country with an `alpha3` code and an `en`
//! display name. Other fields are ignored.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use wdi_model::{CountryCode, CountryRegistry, CountryRegistryEntry};

use crate::error::{IngestError, Result};

#[derive(Debug, Deserialize)]
struct RegistryRecord {
    alpha3: String,
    #[serde(alias = "name")]
    en: String,
}

/// Loads the country registry from a JSON file.
pub fn load_country_registry(path: &Path) -> Result<CountryRegistry> {
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    let registry = parse_country_registry(BufReader::new(file), path)?;
    info!(
        path = %path.display(),
        countries = registry.len(),
        "loaded country registry"
    );
    Ok(registry)
}

/// Parses a registry from any reader. `path` only labels errors.
///
/// Codes are lowercased. A repeated code keeps its first position and takes
/// the later display name.
pub fn parse_country_registry<R: Read>(source: R, path: &Path) -> Result<CountryRegistry> {
    let records: Vec<RegistryRecord> =
        serde_json::from_reader(source).map_err(|e| IngestError::RegistryParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut registry = CountryRegistry::new();
    for record in records {
        let code =
            CountryCode::new(record.alpha3.as_str()).map_err(|_| IngestError::InvalidCountryCode {
                value: record.alpha3.clone(),
                path: path.to_path_buf(),
            })?;
        let name = record.en.trim().to_string();
        if !registry.insert(CountryRegistryEntry::new(code.clone(), name)) {
            warn!(code = %code, path = %path.display(), "duplicate country code in registry, keeping the later name");
        }
    }

    if registry.is_empty() {
        return Err(IngestError::EmptyRegistry {
            path: path.to_path_buf(),
        });
    }
    Ok(registry)
}
