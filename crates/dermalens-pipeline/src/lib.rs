//! dermalens-pipeline: pure skin-image metric extraction (sans-IO).
//!
//! Converts a facial photograph into structured, objective skin metrics
//! through six analysis passes over a sampled pixel grid:
//! perceptual color -> spatial regions -> texture -> structure ->
//! vascular -> pigmentation.
//!
//! The full pipeline runs over the original image plus mildly enhanced
//! variants; severity selection keeps the worst-case reading so a
//! flattering exposure cannot hide real findings.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and returns structured data. It never fails: an image
//! that cannot be decoded yields the documented fallback metrics so the
//! scoring layer downstream always receives a valid value.

pub mod color;
pub mod decode;
pub mod enhance;
pub mod pigment;
pub mod regions;
pub mod sample;
pub mod severity;
pub mod structure;
pub mod texture;
pub mod types;
pub mod vascular;

use rayon::prelude::*;
use tracing::debug;

pub use enhance::VariantPreset;
pub use regions::{RegionCharacteristic, RegionLocation, SkinRegion};
pub use types::{
    Analysis, AnalysisConfig, ComprehensiveMetrics, PerceptualColorMetrics, PigmentationMetrics,
    PipelineError, RgbaImage, StructuralMetrics, TextureMetrics, VascularMetrics,
};
pub use vascular::{RednessLevel, RednessPattern};

/// Run all six analysis passes over one image variant.
///
/// The color pass feeds the vascular and pigmentation passes; the other
/// passes are independent of each other and consume only the pixel
/// buffer.
#[must_use]
pub fn analyze_pass(image: &RgbaImage) -> ComprehensiveMetrics {
    let perceptual_color = color::analyze_color(image);
    let regions = regions::analyze_regions(image);
    let texture = texture::analyze_texture(image);
    let structure = structure::analyze_structure(image);
    let vascular = vascular::analyze_vascular(&perceptual_color);
    let pigmentation = pigment::analyze_pigmentation(image, &perceptual_color);

    ComprehensiveMetrics {
        perceptual_color,
        regions,
        texture,
        structure,
        vascular,
        pigmentation,
    }
}

/// Analyze a decoded image: one pass per variant, then severity
/// selection.
///
/// Pass 0 is always the unmodified image; subsequent passes follow
/// `config.variants` in order.
#[must_use]
pub fn analyze_image(image: &RgbaImage, config: &AnalysisConfig) -> Analysis {
    let variants = build_variants(image, config);
    let passes: Vec<ComprehensiveMetrics> = variants.iter().map(analyze_pass).collect();
    select(passes)
}

/// Like [`analyze_image`], but fans the variant passes out across the
/// rayon thread pool.
///
/// The variants are mutually independent, so this is the natural
/// parallelism boundary; everything inside one pass stays sequential.
#[must_use]
pub fn analyze_image_parallel(image: &RgbaImage, config: &AnalysisConfig) -> Analysis {
    let variants = build_variants(image, config);
    let passes: Vec<ComprehensiveMetrics> = variants.par_iter().map(analyze_pass).collect();
    select(passes)
}

/// Decode and analyze raw image bytes.
///
/// Decode failure short-circuits to [`Analysis::fallback`] instead of
/// an error — the downstream scoring stage always receives a valid
/// metrics set.
#[must_use]
pub fn analyze(image_bytes: &[u8], config: &AnalysisConfig) -> Analysis {
    match decode::decode_rgba(image_bytes) {
        Ok(image) => analyze_image(&image, config),
        Err(error) => {
            debug!(%error, "image decode failed, using fallback metrics");
            Analysis::fallback()
        }
    }
}

/// Decode and analyze raw image bytes with parallel variant passes.
///
/// Identical to [`analyze`] apart from the rayon fan-out.
#[must_use]
pub fn analyze_parallel(image_bytes: &[u8], config: &AnalysisConfig) -> Analysis {
    match decode::decode_rgba(image_bytes) {
        Ok(image) => analyze_image_parallel(&image, config),
        Err(error) => {
            debug!(%error, "image decode failed, using fallback metrics");
            Analysis::fallback()
        }
    }
}

/// The original image followed by each enhanced variant.
fn build_variants(image: &RgbaImage, config: &AnalysisConfig) -> Vec<RgbaImage> {
    let mut variants = Vec::with_capacity(config.variants.len() + 1);
    variants.push(image.clone());
    variants.extend(config.variants.iter().map(|preset| enhance::enhance(image, preset)));
    variants
}

/// Run severity selection and log the outcome.
fn select(passes: Vec<ComprehensiveMetrics>) -> Analysis {
    let selected_index = severity::select_severest(&passes);
    if let Some(selected) = passes.get(selected_index) {
        debug!(
            passes = passes.len(),
            selected_index,
            severity = severity::severity_score(selected),
            "severity selection complete",
        );
    }
    Analysis {
        passes,
        selected_index,
    }
}
