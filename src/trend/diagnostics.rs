use serde::{Deserialize, Serialize};

/// How many points of a trend were estimated by each method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCounts {
    /// Points estimated with a general additive model.
    pub gam: u64,
    /// Points estimated with log-linear (chain) interpolation.
    pub chain: u64,
}

/// Human-readable summary of model usage, e.g.
/// `Models used: general additive model (75%), log-linear interpolation (25%)`.
///
/// A clause whose count is zero is omitted; with no models at all the
/// summary is `Models used: none`. Percentages are rounded independently
/// per method, so the two clauses may not sum to exactly 100.
pub fn model_summary(counts: &ModelCounts) -> String {
    let total = counts.gam + counts.chain;
    if total == 0 {
        return "Models used: none".to_string();
    }

    let mut clauses = Vec::new();
    if counts.gam > 0 {
        clauses.push(format!(
            "general additive model ({}%)",
            percentage(counts.gam, total)
        ));
    }
    if counts.chain > 0 {
        clauses.push(format!(
            "log-linear interpolation ({}%)",
            percentage(counts.chain, total)
        ));
    }

    format!("Models used: {}", clauses.join(", "))
}

fn percentage(count: u64, total: u64) -> u64 {
    (count as f64 / total as f64 * 100.0).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_methods_present() {
        let summary = model_summary(&ModelCounts { gam: 3, chain: 1 });
        assert_eq!(
            summary,
            "Models used: general additive model (75%), log-linear interpolation (25%)"
        );
    }

    #[test]
    fn no_models_at_all() {
        assert_eq!(
            model_summary(&ModelCounts { gam: 0, chain: 0 }),
            "Models used: none"
        );
    }

    #[test]
    fn zero_count_clause_is_omitted() {
        assert_eq!(
            model_summary(&ModelCounts { gam: 5, chain: 0 }),
            "Models used: general additive model (100%)"
        );
        assert_eq!(
            model_summary(&ModelCounts { gam: 0, chain: 2 }),
            "Models used: log-linear interpolation (100%)"
        );
    }

    #[test]
    fn percentages_round_independently() {
        // 1/8 and 7/8 both round away from the halves: 13% + 88% = 101%.
        assert_eq!(
            model_summary(&ModelCounts { gam: 1, chain: 7 }),
            "Models used: general additive model (13%), log-linear interpolation (88%)"
        );
    }
}
