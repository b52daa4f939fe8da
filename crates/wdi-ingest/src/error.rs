//! Error types for input loading.

use std::path::PathBuf;
use thiserror::Error;

use wdi_model::Indicator;

/// Errors that can occur while loading the registry or an indicator extract.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Discovery Errors ===
    /// No extract for the indicator in the data directory.
    #[error("no extract for {indicator} ({code}) in {dir}")]
    ExtractNotFound {
        dir: PathBuf,
        indicator: Indicator,
        code: &'static str,
    },

    /// More than one candidate extract for the indicator.
    #[error("ambiguous extract for {indicator} in {dir}: {candidates:?}")]
    AmbiguousExtract {
        dir: PathBuf,
        indicator: Indicator,
        candidates: Vec<PathBuf>,
    },

    // === CSV Errors ===
    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// No row carrying the expected header columns.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },

    /// Required column not found.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// A row belongs to a different indicator than the one requested.
    #[error("{path} line {line}: expected indicator {expected}, found '{found}'")]
    IndicatorMismatch {
        path: PathBuf,
        line: u64,
        expected: &'static str,
        found: String,
    },

    // === Registry Errors ===
    /// Registry JSON could not be decoded.
    #[error("failed to parse country registry {path}: {source}")]
    RegistryParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Registry entry with an unusable country code.
    #[error("invalid country code '{value}' in {path}")]
    InvalidCountryCode { value: String, path: PathBuf },

    /// Registry has no entries.
    #[error("country registry is empty: {path}")]
    EmptyRegistry { path: PathBuf },
}

impl IngestError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: &csv::Error) -> Self {
        Self::CsvParse {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
