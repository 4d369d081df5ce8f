use log::debug;

use super::model::{PlotSeries, SeriesPoint};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Caller switches for [`build`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Ignore the species-count column entirely, leaving the collapsed
    /// confidence band as the only single-species signal.
    pub ignore_species_count: bool,
}

// ---------------------------------------------------------------------------
// Line parsing
// ---------------------------------------------------------------------------

/// Parse raw trend text into points.
///
/// The first line is a header and is discarded. A line is dropped when it is
/// blank after trimming, contains the upstream `NA` sentinel anywhere, or
/// its year fails integer parsing. Remaining fields are space-separated
/// `year index lowerCI upperCI [speciesCount]`; the year may be wrapped in
/// double quotes, and unparsable float fields become NaN rather than
/// failing the call.
pub fn parse_points(raw_text: &str, options: &BuildOptions) -> Vec<SeriesPoint> {
    let mut points = Vec::new();
    let mut dropped = 0usize;

    for line in raw_text.split('\n').skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        if line.contains("NA") {
            dropped += 1;
            continue;
        }

        let fields: Vec<&str> = line.split(' ').collect();
        let year = fields
            .first()
            .and_then(|f| f.trim_matches('"').parse::<i32>().ok());
        let Some(year) = year else {
            dropped += 1;
            continue;
        };

        let species_count = if options.ignore_species_count {
            None
        } else {
            fields.get(4).and_then(|f| f.parse::<i32>().ok())
        };

        points.push(SeriesPoint {
            year,
            index: parse_float(fields.get(1)),
            lower_ci: parse_float(fields.get(2)),
            upper_ci: parse_float(fields.get(3)),
            species_count,
        });
    }

    if dropped > 0 {
        debug!("dropped {dropped} unusable trend lines");
    }
    points
}

fn parse_float(field: Option<&&str>) -> f64 {
    field
        .and_then(|f| f.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

// ---------------------------------------------------------------------------
// Series derivation
// ---------------------------------------------------------------------------

/// Build plot-ready series from raw trend text.
///
/// Points are classified single- vs multi-species, and the index values are
/// split across two branches: `solid_index` carries multi-species points,
/// `dashed_index` carries single-species points. A single-species point
/// whose immediate neighbour is multi-species is kept on the solid branch
/// too, so the two rendered segments share a point at each boundary.
pub fn build(raw_text: &str, options: &BuildOptions) -> PlotSeries {
    let points = parse_points(raw_text, options);

    let single: Vec<bool> = points.iter().map(SeriesPoint::is_single_species).collect();

    let solid_index = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let neighbour_multi =
                (i > 0 && !single[i - 1]) || (i + 1 < single.len() && !single[i + 1]);
            if !single[i] || neighbour_multi {
                Some(p.index)
            } else {
                None
            }
        })
        .collect();

    let dashed_index = points
        .iter()
        .enumerate()
        .map(|(i, p)| if single[i] { Some(p.index) } else { None })
        .collect();

    PlotSeries {
        labels: points.iter().map(|p| p.year).collect(),
        solid_index,
        dashed_index,
        lower_ci: points.iter().map(|p| p.lower_ci).collect(),
        upper_ci: points.iter().map(|p| p.upper_ci).collect(),
        all_single_species: single.iter().all(|&s| s),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "\"Year\" Index Lower Upper\n";

    fn build_text(data_lines: &[&str]) -> PlotSeries {
        let text = format!("{HEADER}{}", data_lines.join("\n"));
        build(&text, &BuildOptions::default())
    }

    #[test]
    fn two_multi_species_points() {
        let series = build_text(&["1985 1 0.9 1.1", "1986 1.05 0.95 1.15"]);
        assert_eq!(series.labels, vec![1985, 1986]);
        assert!(!series.all_single_species);
        assert_eq!(series.solid_index, vec![Some(1.0), Some(1.05)]);
        assert_eq!(series.dashed_index, vec![None, None]);
        assert_eq!(series.lower_ci, vec![0.9, 0.95]);
        assert_eq!(series.upper_ci, vec![1.1, 1.15]);
    }

    #[test]
    fn collapsed_bands_make_everything_dashed() {
        let series = build_text(&["1985 1 1 1", "1986 1.1 1.1 1.1"]);
        assert!(series.all_single_species);
        assert_eq!(series.dashed_index, vec![Some(1.0), Some(1.1)]);
        assert_eq!(series.solid_index, vec![None, None]);
    }

    #[test]
    fn segments_share_points_at_boundaries() {
        let series = build_text(&[
            "2000 1.0 0.9 1.1",
            "2001 1.1 1.1 1.1",
            "2002 1.2 1.2 1.2",
            "2003 1.3 1.3 1.3",
            "2004 1.4 1.3 1.5",
        ]);
        // Single-species run 2001..=2003 between multi-species endpoints:
        // the run's edge points stay on the solid branch as well.
        assert_eq!(
            series.solid_index,
            vec![Some(1.0), Some(1.1), None, Some(1.3), Some(1.4)]
        );
        assert_eq!(
            series.dashed_index,
            vec![None, Some(1.1), Some(1.2), Some(1.3), None]
        );
        assert!(!series.all_single_species);
    }

    #[test]
    fn na_lines_are_dropped_wherever_they_appear() {
        let series = build_text(&[
            "1985 1 0.9 1.1",
            "1986 NA NA NA",
            "1987 1.2 1.1 1.3",
        ]);
        assert_eq!(series.labels, vec![1985, 1987]);
    }

    #[test]
    fn blank_lines_are_dropped() {
        let text = format!("{HEADER}1985 1 0.9 1.1\n\n1986 1.1 1.0 1.2\n");
        let series = build(&text, &BuildOptions::default());
        assert_eq!(series.labels, vec![1985, 1986]);
    }

    #[test]
    fn quoted_year_is_unwrapped() {
        let series = build_text(&["\"1985\" 1 0.9 1.1"]);
        assert_eq!(series.labels, vec![1985]);
    }

    #[test]
    fn species_count_column_is_parsed() {
        let points = parse_points(
            &format!("{HEADER}1985 1 0.9 1.1 3"),
            &BuildOptions::default(),
        );
        assert_eq!(points[0].species_count, Some(3));
    }

    #[test]
    fn species_count_of_one_forces_dashed() {
        let series = build_text(&["1985 1 0.9 1.1 1"]);
        assert!(series.all_single_species);
        assert_eq!(series.dashed_index, vec![Some(1.0)]);
    }

    #[test]
    fn ignore_species_count_option_leaves_only_the_band_test() {
        let text = format!("{HEADER}1985 1 0.9 1.1 1");
        let options = BuildOptions {
            ignore_species_count: true,
        };
        let series = build(&text, &options);
        assert!(!series.all_single_species);
        assert_eq!(series.solid_index, vec![Some(1.0)]);
    }

    #[test]
    fn unparsable_float_becomes_nan() {
        let series = build_text(&["1985 x 0.9 1.1"]);
        assert_eq!(series.labels, vec![1985]);
        assert!(series.solid_index[0].unwrap().is_nan());
    }

    #[test]
    fn unparsable_year_drops_the_line() {
        let series = build_text(&["19x5 1 0.9 1.1", "1986 1.1 1.0 1.2"]);
        assert_eq!(series.labels, vec![1986]);
    }

    #[test]
    fn header_line_is_always_discarded() {
        // Even a header that would parse as data must not become a point.
        let series = build(
            "1984 0.9 0.8 1.0\n1985 1 0.9 1.1",
            &BuildOptions::default(),
        );
        assert_eq!(series.labels, vec![1985]);
    }

    #[test]
    fn empty_input_yields_empty_series() {
        let series = build("", &BuildOptions::default());
        assert!(series.is_empty());
        assert_eq!(series.axis_title(), None);
    }

    #[test]
    fn header_only_yields_empty_series() {
        let series = build(HEADER, &BuildOptions::default());
        assert!(series.is_empty());
    }
}
