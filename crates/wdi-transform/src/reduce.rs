//! Series reduction to the latest observation.

use wdi_model::{IndicatorSeries, LatestObservation};

/// Returns the observation with the greatest year among those with a value.
///
/// Selection is by year, so the order of `series` does not matter. Returns
/// `None` for an empty series or one with no values at all.
pub fn reduce_series(series: &IndicatorSeries) -> Option<LatestObservation> {
    series
        .iter()
        .filter(|observation| !observation.is_empty())
        .max_by_key(|observation| observation.year)
        .map(LatestObservation::from)
}
