//! Shared types for the dermalens analysis pipeline.

use serde::{Deserialize, Serialize};

use crate::enhance::VariantPreset;
use crate::regions::SkinRegion;
use crate::vascular::{RednessLevel, RednessPattern};

/// Re-export `RgbaImage` so downstream crates can reference decoded
/// pixel buffers without depending on `image` directly.
pub use image::RgbaImage;

/// Global perceptual color statistics for one analysis pass.
///
/// Brightness is CIELAB L* normalized to 0–1; redness and yellowness are
/// the raw a* and b* chroma axes. The variance fields hold standard
/// deviations, not squared variances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerceptualColorMetrics {
    /// Mean perceptual lightness (0–1).
    pub average_brightness: f64,
    /// Mean a* axis value. Positive values shift toward red; values above
    /// roughly 10 are clinically notable.
    pub average_redness: f64,
    /// Mean b* axis value. Negative values shift toward blue.
    pub average_yellowness: f64,
    /// Tone consistency (0–1). Always equals
    /// `max(0, 1 - (brightness_variance + redness_variance) / 2)`.
    pub color_uniformity: f64,
    /// Mean RGB saturation (0–1).
    pub average_saturation: f64,
    /// Standard deviation of lightness.
    pub brightness_variance: f64,
    /// Standard deviation of the a* axis.
    pub redness_variance: f64,
}

/// Multi-scale surface texture measurements, all in 0–1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextureMetrics {
    /// Edge density at the finest detection scale (pores, micro-detail).
    pub fine_texture_level: f64,
    /// Edge density at the intermediate scale (surface variation).
    pub medium_texture_level: f64,
    /// Edge density at the coarsest scale (lines, wrinkles).
    pub coarse_texture_level: f64,
    /// `1 - mean(fine, medium, coarse)`; higher is smoother.
    pub smoothness: f64,
    /// Density of pore-like patterns, correlated with fine texture.
    pub porelike_structures: f64,
    /// High-frequency brightness variance combined with low reflectivity.
    pub flaking_likelihood: f64,
}

/// Structural features: lines, laxity, and facial symmetry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructuralMetrics {
    /// Presence of lines and wrinkles (0–1).
    pub line_density: f64,
    /// Set when `line_density` exceeds 0.4.
    pub has_expression_lines: bool,
    /// Shadow persistence in the lower face (0–1, higher = more laxity).
    pub laxity_score: f64,
    /// Left/right brightness symmetry (0–1, higher = more symmetric).
    pub symmetry_score: f64,
}

/// Vascular and inflammatory indicators derived from the color pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VascularMetrics {
    /// Bucketed overall redness severity.
    pub overall_redness_level: RednessLevel,
    /// Spatial distribution of redness.
    pub redness_pattern: RednessPattern,
    /// Combined redness/clustering score, clamped to 0–1.
    pub inflammation_score: f64,
    /// Sharp, localized redness consistent with active breakouts.
    pub has_active_breakouts: bool,
}

/// Pigment distribution measurements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PigmentationMetrics {
    /// Fraction of sampled points markedly darker than average,
    /// scaled and clamped to 0–1.
    pub hyperpigmentation_level: f64,
    /// Fraction of sampled points markedly lighter than average,
    /// scaled and clamped to 0–1.
    pub hypopigmentation_level: f64,
    /// Raw count of dark and light outlier samples.
    pub spot_count: usize,
    /// `1 - brightness_variance`; higher is more even.
    pub uniformity: f64,
    /// Pigment varies gradually rather than in discrete spots.
    pub has_diffuse_pigment: bool,
}

/// The full structured output of one pipeline pass over one image variant.
///
/// Immutable once constructed; every field is produced fresh per pass and
/// no shared state crosses pipeline stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveMetrics {
    /// Global perceptual color statistics.
    pub perceptual_color: PerceptualColorMetrics,
    /// The 3×3 spatial region breakdown, raster order. Empty for the
    /// fallback metrics.
    pub regions: Vec<SkinRegion>,
    /// Multi-scale texture measurements.
    pub texture: TextureMetrics,
    /// Structural features.
    pub structure: StructuralMetrics,
    /// Vascular and inflammatory indicators.
    pub vascular: VascularMetrics,
    /// Pigment distribution.
    pub pigmentation: PigmentationMetrics,
}

impl ComprehensiveMetrics {
    /// The documented neutral metrics used when an image cannot be
    /// decoded. Downstream scoring always receives a valid value; the
    /// pipeline never propagates a decode failure.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            perceptual_color: PerceptualColorMetrics {
                average_brightness: 0.5,
                average_redness: 0.0,
                average_yellowness: 0.0,
                color_uniformity: 0.8,
                average_saturation: 0.5,
                brightness_variance: 0.1,
                redness_variance: 0.1,
            },
            regions: Vec::new(),
            texture: TextureMetrics {
                fine_texture_level: 0.4,
                medium_texture_level: 0.4,
                coarse_texture_level: 0.3,
                smoothness: 0.5,
                porelike_structures: 0.4,
                flaking_likelihood: 0.2,
            },
            structure: StructuralMetrics {
                line_density: 0.3,
                has_expression_lines: false,
                laxity_score: 0.2,
                symmetry_score: 0.9,
            },
            vascular: VascularMetrics {
                overall_redness_level: RednessLevel::Low,
                redness_pattern: RednessPattern::Diffuse,
                inflammation_score: 0.2,
                has_active_breakouts: false,
            },
            pigmentation: PigmentationMetrics {
                hyperpigmentation_level: 0.2,
                hypopigmentation_level: 0.1,
                spot_count: 0,
                uniformity: 0.8,
                has_diffuse_pigment: true,
            },
        }
    }
}

/// Configuration for a full multi-variant analysis.
///
/// The variant list controls which enhanced renditions are analyzed in
/// addition to the unmodified image. An empty list analyzes the original
/// only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Enhancement presets applied to produce additional analysis passes.
    pub variants: Vec<VariantPreset>,
}

impl AnalysisConfig {
    /// The default enhancement presets. Mild contrast/saturation boosts
    /// surface redness and texture that a single exposure can mask.
    pub const DEFAULT_VARIANTS: [VariantPreset; 2] = [
        VariantPreset {
            contrast: 1.2,
            saturation: 1.15,
            brightness: 0.02,
        },
        VariantPreset {
            contrast: 1.3,
            saturation: 1.05,
            brightness: 0.0,
        },
    ];
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            variants: Self::DEFAULT_VARIANTS.to_vec(),
        }
    }
}

/// Result of a full multi-variant analysis.
///
/// `passes[0]` is always the unmodified image; subsequent entries follow
/// the configured variant order. `selected_index` points at the pass with
/// the highest severity score (first maximum on ties).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// One metrics set per analyzed image variant, in input order.
    pub passes: Vec<ComprehensiveMetrics>,
    /// Index into `passes` of the clinically severest pass.
    pub selected_index: usize,
}

impl Analysis {
    /// The metrics set chosen by severity selection, used for scoring.
    ///
    /// # Panics
    ///
    /// Panics if `passes` is empty. Both public constructors
    /// ([`crate::analyze`] and [`Self::fallback`]) guarantee at least one
    /// pass; the index is clamped for hand-built values.
    #[must_use]
    pub fn selected(&self) -> &ComprehensiveMetrics {
        let idx = self.selected_index.min(self.passes.len().saturating_sub(1));
        &self.passes[idx]
    }

    /// The analysis produced for an undecodable image: a single fallback
    /// pass and nothing else.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            passes: vec![ComprehensiveMetrics::fallback()],
            selected_index: 0,
        }
    }
}

/// Errors that can occur while preparing an image for analysis.
///
/// These never escape [`crate::analyze`]; they exist for callers that
/// decode explicitly via [`crate::decode::decode_rgba`].
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,
}
