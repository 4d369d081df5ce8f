/// Trend layer: raw statistical tool output → plot-ready index series.
///
/// Architecture:
/// ```text
///   trend text ("year" index lowerCI upperCI [speciesCount])
///        │
///        ▼
///   ┌──────────┐
///   │  builder  │  filter NA/blank lines, parse points, classify,
///   └──────────┘  split into solid (multi-species) / dashed (single)
///        │
///        ▼
///   ┌──────────┐
///   │ PlotSeries│  labels + parallel numeric arrays + rendering hints
///   └──────────┘
/// ```
///
/// Malformed data lines are never errors here: `NA` and blank lines are
/// dropped, unparsable numeric fields become NaN ("no data for this point"),
/// so the chart stays renderable despite upstream anomalies.

pub mod builder;
pub mod diagnostics;
pub mod model;

mod proptests;

pub use builder::{build, BuildOptions};
pub use diagnostics::{model_summary, ModelCounts};
pub use model::{PlotSeries, SeriesPoint};
