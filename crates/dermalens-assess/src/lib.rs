//! dermalens-assess: concern derivation and scoring over pipeline
//! output (sans-IO).
//!
//! Consumes the structured metrics produced by `dermalens-pipeline` and
//! turns them into the outputs the recommendation layer reads:
//!
//! - a canonical, deduplicated concern list (threshold rules across all
//!   variant passes, unioned with free-text expansion),
//! - eight 0–10 trending subscores,
//! - a single 0–100 health score,
//! - the fixed-format clinical summary text block.
//!
//! Like the pipeline crate this is pure computation: no I/O, no shared
//! state, deterministic for a given input.

pub mod concerns;
pub mod health;
pub mod profile;
pub mod summary;
pub mod taxonomy;
pub mod trending;

use dermalens_pipeline::Analysis;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use profile::{PoreCondition, SensitivityLevel, SkinProfile, SkinType};
pub use summary::clinical_summary;
pub use taxonomy::Taxonomy;
pub use trending::TrendingMetrics;

/// The complete assessment for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Canonical concern list, deduplicated, first-detected order.
    pub concerns: Vec<String>,
    /// The eight 0–10 trending subscores.
    pub trending: TrendingMetrics,
    /// Composite 0–100 health score.
    pub health_score: u8,
}

/// Assess a completed image analysis.
///
/// Threshold concerns are evaluated across **all** variant passes;
/// trending subscores come from the severity-selected pass only.
/// `manual_concerns` holds free-text entries (already split) that are
/// expanded through the synonym table and unioned in after the
/// threshold concerns.
#[must_use]
pub fn assess(
    analysis: &Analysis,
    profile: &SkinProfile,
    manual_concerns: &[String],
    taxonomy: &Taxonomy,
) -> Assessment {
    let threshold = concerns::derive_concerns(&analysis.passes, taxonomy);
    let manual = concerns::expand_concerns(manual_concerns, taxonomy);
    let combined = concerns::combine(threshold, manual);

    let trending = TrendingMetrics::from_metrics(analysis.selected(), profile);
    let health_score = health::health_score(&trending, combined.len());

    debug!(
        concerns = combined.len(),
        health_score, "assessment complete",
    );

    Assessment {
        concerns: combined,
        trending,
        health_score,
    }
}

/// Assess from concerns alone, for records with no usable photograph.
///
/// Subscores come from the fixed per-concern defaults instead of image
/// metrics.
#[must_use]
pub fn assess_manual(
    manual_concerns: &[String],
    profile: &SkinProfile,
    taxonomy: &Taxonomy,
) -> Assessment {
    let combined = concerns::expand_concerns(manual_concerns, taxonomy);
    let trending = TrendingMetrics::from_concerns(&combined, profile);
    let health_score = health::health_score(&trending, combined.len());

    Assessment {
        concerns: combined,
        trending,
        health_score,
    }
}
