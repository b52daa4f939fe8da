//! JSON array output, one object per country.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use wdi_model::{CountryCode, OutputRecord};

use crate::error::{OutputError, Result};

const INDENT: &[u8] = b"    ";

/// Serializes records as a 4-space indented JSON array with a trailing newline.
pub fn to_json_bytes(records: &[OutputRecord]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    records
        .serialize(&mut serializer)
        .map_err(OutputError::Serialize)?;
    buffer.push(b'\n');
    Ok(buffer)
}

/// Writes the dataset to `path`.
///
/// The file is written next to the target and renamed into place, so an
/// existing dataset is never left half-written.
pub fn write_records_json(path: &Path, records: &[OutputRecord]) -> Result<()> {
    let bytes = to_json_bytes(records)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| OutputError::io("create directory", parent, e))?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file =
        File::create(&temp_path).map_err(|e| OutputError::io("create", &temp_path, e))?;
    file.write_all(&bytes)
        .map_err(|e| OutputError::io("write", &temp_path, e))?;
    file.sync_all()
        .map_err(|e| OutputError::io("sync", &temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| OutputError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    info!(path = %path.display(), records = records.len(), "wrote baseline dataset");
    Ok(())
}

/// Reads a dataset written by [`write_records_json`], keeping file order.
pub fn read_records_json(path: &Path) -> Result<Vec<OutputRecord>> {
    let file = File::open(path).map_err(|e| OutputError::io("open", path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| OutputError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Reads a dataset and indexes it by country code.
pub fn load_records_by_id(path: &Path) -> Result<BTreeMap<CountryCode, OutputRecord>> {
    let mut index = BTreeMap::new();
    for record in read_records_json(path)? {
        let id = record.id.clone();
        if index.insert(id.clone(), record).is_some() {
            return Err(OutputError::DuplicateId {
                id,
                path: path.to_path_buf(),
            });
        }
    }
    Ok(index)
}
