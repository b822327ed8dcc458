//! Severity scoring and variant selection.
//!
//! Each analysis pass collapses to a single scalar combining its
//! inflammatory, texture, structural, and pigmentation findings. The
//! scalar exists only to rank variants of the same photograph — it is
//! never exposed as an output metric.

use crate::types::ComprehensiveMetrics;

/// Collapse one pass to its severity scalar.
///
/// Inflammation is weighted 1.5× — erythema is the finding most often
/// masked by a flattering exposure, and the variant mechanism exists
/// primarily to recover it.
#[must_use]
pub fn severity_score(metrics: &ComprehensiveMetrics) -> f64 {
    let redness_term = (metrics.perceptual_color.average_redness / 20.0).min(1.0);

    1.5 * metrics.vascular.inflammation_score
        + metrics.texture.flaking_likelihood
        + metrics.texture.porelike_structures
        + metrics.structure.line_density
        + metrics.structure.laxity_score
        + metrics.pigmentation.hyperpigmentation_level
        + (1.0 - metrics.texture.smoothness)
        + redness_term
}

/// Index of the pass with the highest severity score.
///
/// Ties break to the first maximum, keeping selection stable under
/// input order. Returns 0 for an empty slice.
#[must_use]
pub fn select_severest(passes: &[ComprehensiveMetrics]) -> usize {
    let mut best_index = 0;
    let mut best_score = f64::NEG_INFINITY;

    for (index, pass) in passes.iter().enumerate() {
        let score = severity_score(pass);
        if score > best_score {
            best_index = index;
            best_score = score;
        }
    }

    best_index
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Metrics whose severity contributions are all zero.
    fn quiet_metrics() -> ComprehensiveMetrics {
        let mut m = ComprehensiveMetrics::fallback();
        m.vascular.inflammation_score = 0.0;
        m.texture.flaking_likelihood = 0.0;
        m.texture.porelike_structures = 0.0;
        m.texture.smoothness = 1.0;
        m.structure.line_density = 0.0;
        m.structure.laxity_score = 0.0;
        m.pigmentation.hyperpigmentation_level = 0.0;
        m.perceptual_color.average_redness = 0.0;
        m
    }

    /// Build metrics with a chosen severity by spending `score` across
    /// the unit-bounded contribution terms.
    fn metrics_with_severity(score: f64) -> ComprehensiveMetrics {
        let mut m = quiet_metrics();
        let mut remaining = score;

        // 1.5x weight first.
        let inflammation = (remaining / 1.5).min(1.0);
        m.vascular.inflammation_score = inflammation;
        remaining -= inflammation * 1.5;

        for slot in [
            &mut m.texture.flaking_likelihood,
            &mut m.texture.porelike_structures,
            &mut m.structure.line_density,
            &mut m.structure.laxity_score,
            &mut m.pigmentation.hyperpigmentation_level,
        ] {
            let take = remaining.min(1.0);
            *slot = take;
            remaining -= take;
        }

        // Roughness term: 1 - smoothness.
        let take = remaining.min(1.0);
        m.texture.smoothness = 1.0 - take;
        remaining -= take;

        // Redness term: min(1, a / 20).
        m.perceptual_color.average_redness = remaining.min(1.0) * 20.0;
        m
    }

    #[test]
    fn quiet_metrics_score_zero() {
        assert!(severity_score(&quiet_metrics()).abs() < f64::EPSILON);
    }

    #[test]
    fn synthetic_severities_round_trip() {
        for target in [0.0, 1.0, 3.0, 5.0, 8.0] {
            let m = metrics_with_severity(target);
            assert!(
                (severity_score(&m) - target).abs() < 1e-9,
                "target {target} produced {}",
                severity_score(&m),
            );
        }
    }

    #[test]
    fn inflammation_carries_extra_weight() {
        let mut inflamed = quiet_metrics();
        inflamed.vascular.inflammation_score = 1.0;

        let mut flaky = quiet_metrics();
        flaky.texture.flaking_likelihood = 1.0;

        assert!(severity_score(&inflamed) > severity_score(&flaky));
    }

    #[test]
    fn selects_known_maximum() {
        let passes = vec![
            metrics_with_severity(5.0),
            metrics_with_severity(8.0),
            metrics_with_severity(3.0),
        ];
        assert_eq!(select_severest(&passes), 1);
    }

    #[test]
    fn tie_breaks_to_first_maximum() {
        let passes = vec![
            metrics_with_severity(4.0),
            metrics_with_severity(4.0),
            metrics_with_severity(2.0),
        ];
        assert_eq!(select_severest(&passes), 0);
    }

    #[test]
    fn empty_slice_selects_zero() {
        assert_eq!(select_severest(&[]), 0);
    }

    #[test]
    fn single_pass_selects_itself() {
        let passes = vec![ComprehensiveMetrics::fallback()];
        assert_eq!(select_severest(&passes), 0);
    }
}
