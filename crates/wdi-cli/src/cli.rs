//! CLI argument definitions for the baseline builder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use wdi_model::Indicator;

#[derive(Parser)]
#[command(
    name = "wdi-baseline",
    version,
    about = "Build the per-country CO2 emissions and employment baseline",
    long_about = "Build the per-country CO2 emissions, labor force and employment baseline.\n\n\
                  Reads a country registry and three World Bank indicator extracts, takes the\n\
                  latest reported value per country over 2010-2022, falls back to the world\n\
                  aggregate for countries missing any indicator, and writes a JSON dataset."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the baseline dataset.
    Build(BuildArgs),

    /// List the tracked indicators.
    Indicators(IndicatorsArgs),

    /// Print a previously written dataset.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Country registry JSON (objects with `alpha3` and `en`).
    #[arg(long = "countries", value_name = "JSON")]
    pub countries: PathBuf,

    /// Directory holding the World Bank `API_<code>_*.csv` extracts.
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Emissions extract (overrides discovery).
    #[arg(long = "emissions", value_name = "CSV")]
    pub emissions: Option<PathBuf>,

    /// Labor force extract (overrides discovery).
    #[arg(long = "labor-force", value_name = "CSV")]
    pub labor_force: Option<PathBuf>,

    /// Employment-to-population extract (overrides discovery).
    #[arg(long = "employment", value_name = "CSV")]
    pub employment: Option<PathBuf>,

    /// Output dataset path.
    #[arg(long = "output", value_name = "PATH", default_value = "countries.json")]
    pub output: PathBuf,

    /// Build and report without writing the dataset.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct IndicatorsArgs {
    /// Show only this indicator (name such as `labor_force`, or World Bank code).
    #[arg(value_name = "INDICATOR")]
    pub indicator: Option<Indicator>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Dataset written by `build`.
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Show only the record with this country code.
    #[arg(long = "id", value_name = "CODE")]
    pub id: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicators_accepts_name_or_source_code() {
        let cli = Cli::try_parse_from(["wdi-baseline", "indicators", "SL.TLF.TOTL.IN"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Indicators(IndicatorsArgs {
                indicator: Some(Indicator::LaborForce)
            })
        ));

        let cli = Cli::try_parse_from(["wdi-baseline", "indicators"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Indicators(IndicatorsArgs { indicator: None })
        ));
    }

    #[test]
    fn indicators_rejects_unknown_name() {
        assert!(Cli::try_parse_from(["wdi-baseline", "indicators", "population"]).is_err());
    }

    #[test]
    fn build_defaults_output_path() {
        let cli = Cli::try_parse_from([
            "wdi-baseline",
            "build",
            "--countries",
            "countries.json",
            "--data-dir",
            "data",
        ])
        .unwrap();
        let Command::Build(args) = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(args.output, PathBuf::from("countries.json"));
        assert!(!args.dry_run);
    }
}
