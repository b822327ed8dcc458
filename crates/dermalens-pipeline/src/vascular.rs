//! Vascular and inflammatory classification.
//!
//! A pure function of the perceptual color pass — no additional
//! sampling. Average a* redness buckets into a severity level, and the
//! spread of redness across the sample grid distinguishes diffuse
//! flushing from sharp, localized spots.

use serde::{Deserialize, Serialize};

use crate::types::{PerceptualColorMetrics, VascularMetrics};

/// Redness (a*) above which a localized pattern counts as an active
/// breakout.
const BREAKOUT_REDNESS: f64 = 12.0;

/// Bucketed overall redness severity.
///
/// Ordered from least to most severe, so range comparisons
/// (`level >= Elevated`) read naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RednessLevel {
    /// a* below 5.
    Minimal,
    /// a* in [5, 10).
    Low,
    /// a* in [10, 15).
    Moderate,
    /// a* in [15, 20).
    Elevated,
    /// a* of 20 or more.
    High,
}

impl RednessLevel {
    /// Bucket an average a* redness value.
    #[must_use]
    pub fn from_redness(redness: f64) -> Self {
        if redness < 5.0 {
            Self::Minimal
        } else if redness < 10.0 {
            Self::Low
        } else if redness < 15.0 {
            Self::Moderate
        } else if redness < 20.0 {
            Self::Elevated
        } else {
            Self::High
        }
    }
}

/// Spatial distribution of redness.
///
/// `Mixed` is part of the published vocabulary but is never produced by
/// the variance buckets; it mirrors the reserved region tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RednessPattern {
    /// Even redness across the face (rosacea-like).
    Diffuse,
    /// Patchy redness (possible sensitivity).
    Clustered,
    /// Sharp, concentrated redness (acne/breakouts).
    Localized,
    /// Reserved; not assigned by the current rule set.
    Mixed,
}

impl RednessPattern {
    /// Bucket a redness standard deviation.
    #[must_use]
    pub fn from_variance(redness_variance: f64) -> Self {
        if redness_variance < 0.2 {
            Self::Diffuse
        } else if redness_variance < 0.4 {
            Self::Clustered
        } else {
            Self::Localized
        }
    }
}

/// Run the vascular pass over the color statistics.
#[must_use]
pub fn analyze_vascular(color: &PerceptualColorMetrics) -> VascularMetrics {
    let redness = color.average_redness;
    let overall_redness_level = RednessLevel::from_redness(redness);
    let redness_pattern = RednessPattern::from_variance(color.redness_variance);

    let inflammation_score =
        (redness / 20.0 + color.redness_variance * 0.5).clamp(0.0, 1.0);

    let has_active_breakouts =
        redness_pattern == RednessPattern::Localized && redness > BREAKOUT_REDNESS;

    VascularMetrics {
        overall_redness_level,
        redness_pattern,
        inflammation_score,
        has_active_breakouts,
    }
}
