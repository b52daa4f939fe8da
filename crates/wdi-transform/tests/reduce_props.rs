//! Property tests for series reduction.

use proptest::prelude::*;

use wdi_model::{AnnualObservation, IndicatorSeries, LatestObservation};
use wdi_transform::reduce_series;

fn observations() -> impl Strategy<Value = Vec<(u32, Option<String>)>> {
    proptest::collection::btree_map(
        2010u32..=2022,
        proptest::option::of("[0-9]{1,6}(\\.[0-9]{1,3})?"),
        0..=8,
    )
    .prop_map(|map| map.into_iter().collect())
}

fn to_series(observations: &[(u32, Option<String>)]) -> IndicatorSeries {
    observations
        .iter()
        .map(|(year, value)| AnnualObservation::new(*year, value.clone().unwrap_or_default()))
        .collect()
}

proptest! {
    #[test]
    fn latest_is_max_year_with_value(observations in observations()) {
        let expected = observations
            .iter()
            .filter_map(|(year, value)| value.as_ref().map(|v| (*year, v)))
            .max_by_key(|(year, _)| *year)
            .map(|(year, value)| LatestObservation::new(year, value.as_str()));

        prop_assert_eq!(reduce_series(&to_series(&observations)), expected);
    }

    #[test]
    fn order_does_not_matter(observations in observations()) {
        let mut reversed = observations.clone();
        reversed.reverse();
        prop_assert_eq!(
            reduce_series(&to_series(&observations)),
            reduce_series(&to_series(&reversed))
        );
    }
}
