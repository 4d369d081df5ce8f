use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SeriesPoint – one data line of the trend file
// ---------------------------------------------------------------------------

/// A single year of the index series, as parsed from one data line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Calendar year (the x axis label).
    pub year: i32,
    /// Index estimate, relative to the first year (= 1).
    pub index: f64,
    /// Lower confidence bound.
    pub lower_ci: f64,
    /// Upper confidence bound.
    pub upper_ci: f64,
    /// Number of species contributing to the estimate, when the upstream
    /// tool reported one.
    pub species_count: Option<i32>,
}

impl SeriesPoint {
    /// Whether this point is derived from exactly one species: a collapsed
    /// confidence band or an explicit count of 1.
    ///
    /// NaN bounds compare unequal, so a point with unparsable CI fields is
    /// never classified single-species on the band test.
    pub fn is_single_species(&self) -> bool {
        self.lower_ci == self.upper_ci || self.species_count == Some(1)
    }
}

// ---------------------------------------------------------------------------
// PlotSeries – parallel arrays ready for a line chart
// ---------------------------------------------------------------------------

/// Plot-ready series: parallel arrays aligned to `labels`.
///
/// For every index, `solid_index` and/or `dashed_index` holds the value:
/// multi-species points go to the solid branch, single-species points to the
/// dashed branch, and a single-species point next to a multi-species one is
/// kept on both so the rendered segments connect. Absent values serialize as
/// `null`, which line-chart consumers treat as a gap.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotSeries {
    pub labels: Vec<i32>,
    pub solid_index: Vec<Option<f64>>,
    pub dashed_index: Vec<Option<f64>>,
    pub lower_ci: Vec<f64>,
    pub upper_ci: Vec<f64>,
    /// True when every point is single-species; the confidence-band fill is
    /// then drawn striped instead of flat. Vacuously true when empty.
    pub all_single_species: bool,
}

impl PlotSeries {
    /// Number of points (= number of year labels).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the series holds no points at all.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Y-axis title, `Index (<firstYear> = 1)`, or `None` for an empty
    /// series (no title is shown when there is nothing to plot).
    pub fn axis_title(&self) -> Option<String> {
        self.labels.first().map(|year| format!("Index ({year} = 1)"))
    }
}
