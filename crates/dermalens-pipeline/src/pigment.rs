//! Pigmentation analysis: dark/light spot counting.
//!
//! Samples a denser grid than the color pass (spots are small) and
//! counts points whose lightness deviates markedly from the global
//! average. Dark outliers approximate hyperpigmentation (sun spots,
//! melasma, PIH); light outliers approximate hypopigmentation.

use image::RgbaImage;

use crate::color;
use crate::types::{PerceptualColorMetrics, PigmentationMetrics};

/// Grid resolution for the pigmentation pass.
pub const PIGMENT_GRID: u32 = 30;

/// Lightness deviation from the global average that counts as a spot.
const SPOT_DELTA: f64 = 0.15;

/// Brightness variance below which pigment is considered diffuse rather
/// than spot-like.
const DIFFUSE_VARIANCE: f64 = 0.3;

/// Run the pigmentation pass.
///
/// `color` supplies the global average brightness and brightness
/// variance already computed by the perceptual color pass.
#[must_use]
pub fn analyze_pigmentation(
    image: &RgbaImage,
    color: &PerceptualColorMetrics,
) -> PigmentationMetrics {
    let lightness = color::lightness_values(image, PIGMENT_GRID);

    let average = color.average_brightness;
    let dark_spots = lightness.iter().filter(|&&l| l < average - SPOT_DELTA).count();
    let light_spots = lightness.iter().filter(|&&l| l > average + SPOT_DELTA).count();

    let hyperpigmentation_level = spot_density(dark_spots, lightness.len());
    let hypopigmentation_level = spot_density(light_spots, lightness.len());

    PigmentationMetrics {
        hyperpigmentation_level,
        hypopigmentation_level,
        spot_count: dark_spots + light_spots,
        uniformity: 1.0 - color.brightness_variance,
        has_diffuse_pigment: color.brightness_variance < DIFFUSE_VARIANCE,
    }
}

/// Spot count scaled to a 0–1 density: `min(1, count / total * 2)`.
fn spot_density(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let fraction = count as f64 / total as f64;
    (fraction * 2.0).min(1.0)
}
