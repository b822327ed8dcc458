//! The eight trending subscores.
//!
//! Each subscore compresses one clinical dimension into a 0–10 value
//! suitable for charting and comparison across visits. Two derivations
//! exist: the primary path from the selected pipeline pass, and a
//! concern-only fallback for records with no usable photograph.
//!
//! Note the polarity of `texture`: it tracks smoothness, so higher is
//! better. The health-score severity set inverts it (`10 - texture`);
//! every other subscore reads higher = worse.

use dermalens_pipeline::{ComprehensiveMetrics, RednessLevel};
use serde::{Deserialize, Serialize};

use crate::profile::{PoreCondition, SensitivityLevel, SkinProfile, SkinType};

/// The eight named subscores, each clamped to 0–10.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendingMetrics {
    /// Sebum production (5 is balanced; deviation in either direction
    /// is a finding).
    pub oiliness: f64,
    /// Surface smoothness (higher = smoother).
    pub texture: f64,
    /// Pore visibility.
    pub pores: f64,
    /// Line and wrinkle presence.
    pub wrinkles: f64,
    /// Redness severity.
    pub redness: f64,
    /// Dark spot density.
    pub dark_spots: f64,
    /// Breakout activity.
    pub acne: f64,
    /// Reactivity.
    pub sensitivity: f64,
}

impl TrendingMetrics {
    /// Derive the subscores from the selected pass and the contextual
    /// profile.
    #[must_use]
    pub fn from_metrics(metrics: &ComprehensiveMetrics, profile: &SkinProfile) -> Self {
        let color = &metrics.perceptual_color;

        let oiliness_base = match profile.skin_type {
            SkinType::Oily => 7.0,
            SkinType::Combination => 6.0,
            SkinType::Dry => 2.5,
            SkinType::Normal | SkinType::Sensitive => 5.0,
        };
        let oiliness = oiliness_base + (color.average_brightness - 0.5) * 2.0;

        let texture = metrics.texture.smoothness * 10.0;

        let pores = apply_pore_condition(
            metrics.texture.porelike_structures * 10.0,
            profile.pore_condition,
        );

        let wrinkles = metrics
            .structure
            .line_density
            .mul_add(6.0, metrics.structure.laxity_score * 4.0);

        let redness = redness_level_score(metrics.vascular.overall_redness_level)
            + metrics.vascular.inflammation_score * 2.0;

        let dark_spots = metrics.pigmentation.hyperpigmentation_level * 10.0;

        let acne = if metrics.vascular.has_active_breakouts {
            metrics.vascular.inflammation_score.mul_add(5.0, 5.0)
        } else {
            metrics.vascular.inflammation_score * 3.0
        };

        let redness_clamped = clamp10(redness);
        let sensitivity = (sensitivity_base(profile.sensitivity) + redness_clamped) / 2.0;

        Self {
            oiliness: clamp10(oiliness),
            texture: clamp10(texture),
            pores: clamp10(pores),
            wrinkles: clamp10(wrinkles),
            redness: redness_clamped,
            dark_spots: clamp10(dark_spots),
            acne: clamp10(acne),
            sensitivity: clamp10(sensitivity),
        }
    }

    /// Concern-only fallback: fixed defaults per concern when no image
    /// metrics are available.
    #[must_use]
    pub fn from_concerns(concerns: &[String], profile: &SkinProfile) -> Self {
        let has = |label: &str| {
            concerns
                .iter()
                .any(|concern| concern.eq_ignore_ascii_case(label))
        };

        let oiliness = if has("Oiliness") || profile.skin_type == SkinType::Oily {
            7.0
        } else if profile.skin_type == SkinType::Dry {
            2.5
        } else if profile.skin_type == SkinType::Combination {
            6.0
        } else {
            5.0
        };

        let texture = if has("Uneven Texture") { 4.0 } else { 7.0 };

        let pores = apply_pore_condition(
            if has("Enlarged Pores") { 7.0 } else { 3.0 },
            profile.pore_condition,
        );

        let wrinkles = if has("Wrinkles") {
            7.0
        } else if has("Fine Lines") {
            6.0
        } else if has("Aging") {
            5.0
        } else {
            2.0
        };

        let redness = if has("Redness") { 6.5 } else { 2.0 };
        let dark_spots = if has("Dark Spots") { 6.5 } else { 2.0 };

        let acne = if has("Acne") {
            7.0
        } else if has("Blemishes") {
            5.5
        } else {
            1.0
        };

        let sensitivity = sensitivity_base(profile.sensitivity);

        Self {
            oiliness: clamp10(oiliness),
            texture: clamp10(texture),
            pores: clamp10(pores),
            wrinkles: clamp10(wrinkles),
            redness: clamp10(redness),
            dark_spots: clamp10(dark_spots),
            acne: clamp10(acne),
            sensitivity: clamp10(sensitivity),
        }
    }
}

/// Base score for a redness severity level.
const fn redness_level_score(level: RednessLevel) -> f64 {
    match level {
        RednessLevel::Minimal => 1.0,
        RednessLevel::Low => 3.0,
        RednessLevel::Moderate => 5.0,
        RednessLevel::Elevated => 7.0,
        RednessLevel::High => 9.0,
    }
}

/// Base sensitivity score for the reported reactivity label.
const fn sensitivity_base(level: SensitivityLevel) -> f64 {
    match level {
        SensitivityLevel::Low => 1.5,
        SensitivityLevel::Normal => 3.0,
        SensitivityLevel::High => 7.0,
    }
}

/// Override the pore subscore with the reported condition: an enlarged
/// report raises the floor, a fine report caps the ceiling.
fn apply_pore_condition(score: f64, condition: PoreCondition) -> f64 {
    match condition {
        PoreCondition::Enlarged => score.max(7.0),
        PoreCondition::Fine => score.min(3.0),
        PoreCondition::Normal => score,
    }
}

/// Clamp a subscore to the 0–10 display range.
fn clamp10(value: f64) -> f64 {
    value.clamp(0.0, 10.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn neutral_profile() -> SkinProfile {
        SkinProfile::default()
    }

    fn owned(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|&l| l.to_owned()).collect()
    }

    // --- from_metrics tests ---

    #[test]
    fn fallback_metrics_score_below_severity_pivot() {
        // The documented neutral defaults must not look severe.
        let t = TrendingMetrics::from_metrics(
            &ComprehensiveMetrics::fallback(),
            &neutral_profile(),
        );
        assert!((t.oiliness - 5.0).abs() < 1e-9);
        assert!((t.texture - 5.0).abs() < 1e-9);
        assert!((t.pores - 4.0).abs() < 1e-9);
        assert!((t.wrinkles - 2.6).abs() < 1e-9);
        assert!((t.redness - 3.4).abs() < 1e-9);
        assert!((t.dark_spots - 2.0).abs() < 1e-9);
        assert!((t.acne - 0.6).abs() < 1e-9);
        assert!((t.sensitivity - 3.2).abs() < 1e-9);
    }

    #[test]
    fn all_subscores_clamp_to_ten() {
        let mut m = ComprehensiveMetrics::fallback();
        m.perceptual_color.average_brightness = 1.0;
        m.texture.smoothness = 1.0;
        m.texture.porelike_structures = 1.0;
        m.structure.line_density = 1.0;
        m.structure.laxity_score = 1.0;
        m.vascular.overall_redness_level = RednessLevel::High;
        m.vascular.inflammation_score = 1.0;
        m.vascular.has_active_breakouts = true;
        m.pigmentation.hyperpigmentation_level = 1.0;

        let profile = SkinProfile::from_labels(Some("Oily"), Some("High"), Some("Enlarged"));
        let t = TrendingMetrics::from_metrics(&m, &profile);
        for value in [
            t.oiliness, t.texture, t.pores, t.wrinkles, t.redness, t.dark_spots, t.acne,
            t.sensitivity,
        ] {
            assert!((0.0..=10.0).contains(&value), "out of range: {value}");
        }
        assert!((t.wrinkles - 10.0).abs() < f64::EPSILON);
        assert!((t.redness - 10.0).abs() < f64::EPSILON);
        assert!((t.acne - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn oiliness_tracks_skin_type_and_brightness() {
        let m = ComprehensiveMetrics::fallback();
        let oily = SkinProfile::from_labels(Some("Oily"), None, None);
        let dry = SkinProfile::from_labels(Some("Dry"), None, None);
        assert!((TrendingMetrics::from_metrics(&m, &oily).oiliness - 7.0).abs() < 1e-9);
        assert!((TrendingMetrics::from_metrics(&m, &dry).oiliness - 2.5).abs() < 1e-9);

        let mut bright = m;
        bright.perceptual_color.average_brightness = 0.8;
        assert!(
            (TrendingMetrics::from_metrics(&bright, &oily).oiliness - 7.6).abs() < 1e-9,
        );
    }

    #[test]
    fn pore_condition_overrides_measured_density() {
        let mut m = ComprehensiveMetrics::fallback();
        m.texture.porelike_structures = 0.9;

        let fine = SkinProfile::from_labels(None, None, Some("Fine"));
        assert!((TrendingMetrics::from_metrics(&m, &fine).pores - 3.0).abs() < 1e-9);

        m.texture.porelike_structures = 0.1;
        let enlarged = SkinProfile::from_labels(None, None, Some("Enlarged"));
        assert!((TrendingMetrics::from_metrics(&m, &enlarged).pores - 7.0).abs() < 1e-9);
    }

    #[test]
    fn acne_is_gated_on_breakout_flag() {
        let mut m = ComprehensiveMetrics::fallback();
        m.vascular.inflammation_score = 0.6;

        let without = TrendingMetrics::from_metrics(&m, &neutral_profile());
        assert!((without.acne - 1.8).abs() < 1e-9);

        m.vascular.has_active_breakouts = true;
        let with = TrendingMetrics::from_metrics(&m, &neutral_profile());
        assert!((with.acne - 8.0).abs() < 1e-9);
    }

    #[test]
    fn sensitivity_averages_label_base_with_redness() {
        let mut m = ComprehensiveMetrics::fallback();
        m.vascular.overall_redness_level = RednessLevel::High;
        m.vascular.inflammation_score = 0.5;
        // redness = 9 + 1 = 10; sensitivity = (7 + 10) / 2 = 8.5
        let profile = SkinProfile::from_labels(None, Some("High"), None);
        let t = TrendingMetrics::from_metrics(&m, &profile);
        assert!((t.sensitivity - 8.5).abs() < 1e-9);
    }

    // --- from_concerns tests ---

    #[test]
    fn no_concerns_yields_quiet_profile() {
        let t = TrendingMetrics::from_concerns(&[], &neutral_profile());
        assert!((t.oiliness - 5.0).abs() < f64::EPSILON);
        assert!((t.texture - 7.0).abs() < f64::EPSILON);
        assert!((t.pores - 3.0).abs() < f64::EPSILON);
        assert!((t.wrinkles - 2.0).abs() < f64::EPSILON);
        assert!((t.redness - 2.0).abs() < f64::EPSILON);
        assert!((t.dark_spots - 2.0).abs() < f64::EPSILON);
        assert!((t.acne - 1.0).abs() < f64::EPSILON);
        assert!((t.sensitivity - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn concern_defaults_apply_case_insensitively() {
        let t = TrendingMetrics::from_concerns(
            &owned(&["redness", "DARK SPOTS", "Wrinkles", "acne"]),
            &neutral_profile(),
        );
        assert!((t.redness - 6.5).abs() < f64::EPSILON);
        assert!((t.dark_spots - 6.5).abs() < f64::EPSILON);
        assert!((t.wrinkles - 7.0).abs() < f64::EPSILON);
        assert!((t.acne - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn wrinkle_defaults_prefer_most_severe_concern() {
        let fine = TrendingMetrics::from_concerns(&owned(&["Fine Lines"]), &neutral_profile());
        assert!((fine.wrinkles - 6.0).abs() < f64::EPSILON);

        let aging = TrendingMetrics::from_concerns(&owned(&["Aging"]), &neutral_profile());
        assert!((aging.wrinkles - 5.0).abs() < f64::EPSILON);

        let both = TrendingMetrics::from_concerns(
            &owned(&["Aging", "Wrinkles"]),
            &neutral_profile(),
        );
        assert!((both.wrinkles - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn serde_round_trip() {
        let t = TrendingMetrics::from_concerns(&owned(&["Acne"]), &neutral_profile());
        let json = serde_json::to_string(&t).unwrap();
        let deserialized: TrendingMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(t, deserialized);
    }
}
