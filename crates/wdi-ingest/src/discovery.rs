//! Locating indicator extracts in a data directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use wdi_model::Indicator;

use crate::error::{IngestError, Result};

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// File name prefix of the data extract for an indicator, e.g. `API_EN.ATM.CO2E.KT`.
pub fn extract_prefix(indicator: Indicator) -> String {
    format!("API_{}", indicator.source_code())
}

fn matches_extract(path: &Path, prefix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.get(..prefix.len()))
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Finds the single extract for `indicator` in `dir`.
///
/// Sidecar files (`Metadata_Country_*`, `Metadata_Indicator_*`) never match.
pub fn find_indicator_extract(dir: &Path, indicator: Indicator) -> Result<PathBuf> {
    let prefix = extract_prefix(indicator);
    let mut candidates: Vec<PathBuf> = list_csv_files(dir)?
        .into_iter()
        .filter(|path| matches_extract(path, &prefix))
        .collect();

    match candidates.len() {
        0 => Err(IngestError::ExtractNotFound {
            dir: dir.to_path_buf(),
            indicator,
            code: indicator.source_code(),
        }),
        1 => {
            let path = candidates.remove(0);
            debug!(indicator = %indicator, path = %path.display(), "discovered extract");
            Ok(path)
        }
        _ => Err(IngestError::AmbiguousExtract {
            dir: dir.to_path_buf(),
            indicator,
            candidates,
        }),
    }
}
