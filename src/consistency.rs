//! Monitoring-consistency scatter data.
//!
//! Each monitored site contributes a time series of `(year, count)`
//! observations; the consistency chart draws one dot per observation, with
//! the year on the x axis and the site's ordinal on the y axis, so gaps in
//! monitoring show up as gaps in a dotted row.

use serde::{Deserialize, Serialize};

/// One dot of the consistency chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// Observation year.
    pub x: i32,
    /// 1-based ordinal of the time series the observation belongs to.
    pub y: u32,
}

/// Flatten per-site time series into scatter points, in input order.
///
/// Observation counts are carried by the upstream format but do not affect
/// the chart; an empty series contributes no points yet still advances the
/// ordinal, keeping rows aligned with the caller's site list.
pub fn consistency_points(series: &[Vec<(i32, f64)>]) -> Vec<ScatterPoint> {
    series
        .iter()
        .enumerate()
        .flat_map(|(series_index, observations)| {
            observations.iter().map(move |&(year, _count)| ScatterPoint {
                x: year,
                y: series_index as u32 + 1,
            })
        })
        .collect()
}
