use anyhow::{Context, Result, anyhow};
use comfy_table::Table;

use wdi_cli::pipeline::{BuildConfig, BuildResult, run_build};
use wdi_model::{CountryCode, Indicator, OutputRecord, YearRange};
use wdi_output::{load_records_by_id, read_records_json};
use wdi_transform::PipelineOptions;

use crate::cli::{BuildArgs, IndicatorsArgs, InspectArgs};
use crate::summary::{apply_table_style, print_records};

pub fn run_indicators(args: &IndicatorsArgs) -> Result<()> {
    let years = YearRange::default();
    let mut table = Table::new();
    table.set_header(vec!["Indicator", "Code", "Description", "Years"]);
    apply_table_style(&mut table);
    let selected = Indicator::ALL
        .into_iter()
        .filter(|indicator| args.indicator.is_none_or(|wanted| wanted == *indicator));
    for indicator in selected {
        table.add_row(vec![
            indicator.name().to_string(),
            indicator.source_code().to_string(),
            indicator.description().to_string(),
            years.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_build_command(args: &BuildArgs) -> Result<BuildResult> {
    let config = BuildConfig {
        countries: args.countries.clone(),
        data_dir: args.data_dir.clone(),
        emissions: args.emissions.clone(),
        labor_force: args.labor_force.clone(),
        employment: args.employment.clone(),
        output: args.output.clone(),
        dry_run: args.dry_run,
        options: PipelineOptions::default(),
    };
    run_build(&config)
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let records: Vec<OutputRecord> = match &args.id {
        Some(id) => {
            let code = CountryCode::new(id).with_context(|| format!("invalid --id '{id}'"))?;
            let mut by_id = load_records_by_id(&args.dataset)
                .with_context(|| format!("read {}", args.dataset.display()))?;
            let record = by_id
                .remove(&code)
                .ok_or_else(|| anyhow!("{code} not found in {}", args.dataset.display()))?;
            vec![record]
        }
        None => read_records_json(&args.dataset)
            .with_context(|| format!("read {}", args.dataset.display()))?,
    };
    print_records(&records);
    Ok(())
}
