//! Build stages for the `build` command.
//!
//! Stages run in order: registry → extract resolution → transform → write.
//! The output file is written only after every record has been produced.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use wdi_ingest::{IngestError, find_indicator_extract, load_country_registry, read_indicator_csv};
use wdi_model::{CountryRegistry, Indicator, IndicatorRow, OutputRecord, YearRange};
use wdi_output::write_records_json;
use wdi_transform::{IndicatorSource, PipelineOptions, RunSummary, run_pipeline};

/// Inputs and output of a build run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub countries: PathBuf,
    /// Directory searched for extracts without an explicit path.
    pub data_dir: Option<PathBuf>,
    pub emissions: Option<PathBuf>,
    pub labor_force: Option<PathBuf>,
    pub employment: Option<PathBuf>,
    pub output: PathBuf,
    pub dry_run: bool,
    pub options: PipelineOptions,
}

impl BuildConfig {
    pub fn new(countries: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            countries: countries.into(),
            data_dir: None,
            emissions: None,
            labor_force: None,
            employment: None,
            output: output.into(),
            dry_run: false,
            options: PipelineOptions::default(),
        }
    }

    /// Explicit extract path given for `indicator`, if any.
    pub fn explicit_extract(&self, indicator: Indicator) -> Option<&Path> {
        match indicator {
            Indicator::Emissions => self.emissions.as_deref(),
            Indicator::LaborForce => self.labor_force.as_deref(),
            Indicator::Employment => self.employment.as_deref(),
        }
    }
}

/// Extract file chosen for each indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractPaths {
    pub emissions: PathBuf,
    pub labor_force: PathBuf,
    pub employment: PathBuf,
}

impl ExtractPaths {
    pub fn get(&self, indicator: Indicator) -> &Path {
        match indicator {
            Indicator::Emissions => &self.emissions,
            Indicator::LaborForce => &self.labor_force,
            Indicator::Employment => &self.employment,
        }
    }
}

/// Picks each extract from its explicit path, else from discovery in the data directory.
pub fn resolve_extracts(config: &BuildConfig) -> Result<ExtractPaths> {
    let pick = |indicator: Indicator| -> Result<PathBuf> {
        if let Some(path) = config.explicit_extract(indicator) {
            return Ok(path.to_path_buf());
        }
        let Some(dir) = config.data_dir.as_deref() else {
            bail!(
                "no extract for {indicator}: pass --{} or --data-dir",
                indicator.name().replace('_', "-")
            );
        };
        Ok(find_indicator_extract(dir, indicator)?)
    };
    Ok(ExtractPaths {
        emissions: pick(Indicator::Emissions)?,
        labor_force: pick(Indicator::LaborForce)?,
        employment: pick(Indicator::Employment)?,
    })
}

/// Reads indicator rows from World Bank CSV extracts on disk.
#[derive(Debug, Clone)]
pub struct FileIndicatorSource {
    paths: ExtractPaths,
}

impl FileIndicatorSource {
    pub fn new(paths: ExtractPaths) -> Self {
        Self { paths }
    }
}

impl IndicatorSource for FileIndicatorSource {
    type Error = IngestError;

    fn load(
        &mut self,
        indicator: Indicator,
        years: YearRange,
    ) -> std::result::Result<Vec<IndicatorRow>, Self::Error> {
        read_indicator_csv(self.paths.get(indicator), indicator, years)
    }
}

/// Outcome of a successful build.
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub registry_size: usize,
    pub extracts: ExtractPaths,
    pub records: Vec<OutputRecord>,
    pub summary: RunSummary,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
}

pub fn run_build(config: &BuildConfig) -> Result<BuildResult> {
    let registry = info_span!("registry", path = %config.countries.display())
        .in_scope(|| load_registry(&config.countries))?;

    let extracts = resolve_extracts(config)?;
    for indicator in Indicator::ALL {
        info!(
            indicator = %indicator,
            path = %extracts.get(indicator).display(),
            "selected extract"
        );
    }

    let mut source = FileIndicatorSource::new(extracts.clone());
    let output = run_pipeline(&registry, &mut source, config.options)
        .context("build baseline records")?;

    let written = if config.dry_run {
        info!("dry run, output not written");
        None
    } else {
        info_span!("write", path = %config.output.display()).in_scope(|| {
            write_records_json(&config.output, &output.records)
                .with_context(|| format!("write {}", config.output.display()))?;
            Ok::<_, anyhow::Error>(Some(config.output.clone()))
        })?
    };

    Ok(BuildResult {
        registry_size: registry.len(),
        extracts,
        records: output.records,
        summary: output.summary,
        output: written,
    })
}

fn load_registry(path: &Path) -> Result<CountryRegistry> {
    let registry = load_country_registry(path).context("load country registry")?;
    info!(countries = registry.len(), "loaded country registry");
    Ok(registry)
}
