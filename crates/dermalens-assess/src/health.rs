//! Composite health score.
//!
//! A single 0–100 integer summarizing one analysis: a concern-count
//! baseline adjusted by the three most severe subscore readings. The
//! score is monotonically non-increasing in concern count when the
//! subscores are held fixed.

use crate::trending::TrendingMetrics;

/// Baseline before severity adjustment: 85 minus 10 per concern.
#[must_use]
pub fn baseline(concern_count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let count = concern_count as f64;
    count.mul_add(-10.0, 85.0)
}

/// Compute the composite health score.
///
/// The severity set maps each subscore to a higher-is-worse reading:
/// oiliness contributes its deviation from the balanced midpoint (5),
/// texture is inverted (it tracks smoothness), and the rest pass
/// through. The three largest severities are averaged; an average above
/// 5 subtracts `(avg - 5) * 4` from the baseline, an average below 5
/// adds `(5 - avg) * 2`. The result is rounded and clamped to 0–100.
#[must_use]
pub fn health_score(trending: &TrendingMetrics, concern_count: usize) -> u8 {
    let mut severities = [
        ((trending.oiliness - 5.0).abs() * 2.0).min(10.0),
        10.0 - trending.texture,
        trending.pores,
        trending.wrinkles,
        trending.redness,
        trending.dark_spots,
        trending.acne,
        trending.sensitivity,
    ];
    severities.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    let top_average = (severities[0] + severities[1] + severities[2]) / 3.0;

    let mut score = baseline(concern_count);
    if top_average > 5.0 {
        score -= (top_average - 5.0) * 4.0;
    } else if top_average < 5.0 {
        score += (5.0 - top_average) * 2.0;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let clamped = score.round().clamp(0.0, 100.0) as u8;
    clamped
}
