//! Transform core for the per-country emissions and employment baseline.
//!
//! - **reduce**: latest non-empty observation of a series
//! - **join**: per-indicator join against the country registry, merged into accumulators
//! - **resolve**: all-or-nothing world fallback
//! - **record**: unit conversion and employee derivation
//! - **pipeline**: sequential orchestration behind the [`IndicatorSource`] seam

pub mod error;
pub mod join;
pub mod pipeline;
pub mod record;
pub mod reduce;
pub mod resolve;

pub use error::{Result, TransformError};
pub use join::{IndicatorTable, JoinedIndicators, join_indicator, merge_tables};
pub use pipeline::{
    IndicatorSource, PipelineOptions, PipelineOutput, RunSummary, build_records, run_pipeline,
};
pub use record::{KILOTONS_TO_KG, emissions_kg, employed_population, transform_record};
pub use reduce::reduce_series;
pub use resolve::resolve_record;
