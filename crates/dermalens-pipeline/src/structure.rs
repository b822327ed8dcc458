//! Structural features: line density, laxity, and symmetry.
//!
//! Laxity uses shadow persistence as a proxy: sagging in the lower face
//! casts soft shadows, so a markedly darker lower half raises the score.
//! Symmetry compares mean brightness of the two vertical halves;
//! pronounced asymmetry suggests a localized issue on one side.

use image::RgbaImage;

use crate::color;
use crate::sample;
use crate::texture;
use crate::types::StructuralMetrics;

/// Edge intensity used for line and wrinkle detection.
pub const LINE_SCALE: f64 = 2.0;

/// Line density above which expression lines are flagged.
const EXPRESSION_LINE_THRESHOLD: f64 = 0.4;

/// Grid resolution for half-image brightness estimates.
const HALF_GRID: u32 = 10;

/// Run the structural pass.
#[must_use]
pub fn analyze_structure(image: &RgbaImage) -> StructuralMetrics {
    let line_density = texture::edge_density(image, LINE_SCALE);

    StructuralMetrics {
        line_density,
        has_expression_lines: line_density > EXPRESSION_LINE_THRESHOLD,
        laxity_score: laxity_score(image),
        symmetry_score: symmetry_score(image),
    }
}

/// Shadow persistence in the lower half: `max(0, 1 - 2 * brightness)`.
///
/// A lower half at half brightness or above scores 0; full darkness
/// scores 1. Returns 0 when the image is too small to split.
fn laxity_score(image: &RgbaImage) -> f64 {
    let (width, height) = image.dimensions();
    let half_height = height / 2;
    if width == 0 || half_height == 0 {
        return 0.0;
    }

    let lower = sample::crop(image, 0, half_height, width, half_height);
    let brightness = color::mean_lightness(&lower, HALF_GRID);
    2.0_f64.mul_add(-brightness, 1.0).max(0.0)
}

/// Left/right brightness symmetry: `max(0, 1 - 3 * |left - right|)`.
///
/// Returns 1 (fully symmetric) when the image is too narrow to split.
fn symmetry_score(image: &RgbaImage) -> f64 {
    let (width, height) = image.dimensions();
    let half_width = width / 2;
    if half_width == 0 || height == 0 {
        return 1.0;
    }

    let left = sample::crop(image, 0, 0, half_width, height);
    let right = sample::crop(image, half_width, 0, half_width, height);

    let left_mean = color::mean_lightness(&left, HALF_GRID);
    let right_mean = color::mean_lightness(&right, HALF_GRID);

    let difference = (left_mean - right_mean).abs();
    3.0_f64.mul_add(-difference, 1.0).max(0.0)
}
