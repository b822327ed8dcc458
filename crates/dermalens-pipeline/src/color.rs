//! sRGB to CIELAB conversion and global perceptual color statistics.
//!
//! CIELAB separates lightness (L*) from the red-green (a*) and
//! blue-yellow (b*) chroma axes, so Euclidean differences approximate
//! perceived color differences far better than raw RGB. The a* axis in
//! particular tracks erythema: sustained values above ~10 on facial skin
//! suggest inflammation.

use image::RgbaImage;

use crate::sample::{self, PixelSample};
use crate::types::PerceptualColorMetrics;

/// Grid resolution for the global color pass.
pub const COLOR_GRID: u32 = 20;

/// A pixel converted to the perceptual representation.
///
/// `l` is CIELAB L* normalized to 0–1; `a` and `b` are the raw chroma
/// axes. Saturation is computed in RGB space alongside the Lab transfer
/// because the analyzers consume both together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabSample {
    /// Perceptual lightness (0–1).
    pub l: f64,
    /// Red-green axis (positive = red).
    pub a: f64,
    /// Blue-yellow axis (positive = yellow).
    pub b: f64,
    /// RGB saturation: `(max - min) / max`, 0 when max is 0.
    pub saturation: f64,
}

/// D65 reference white point for the XYZ normalization.
const D65: (f64, f64, f64) = (95.047, 100.0, 108.883);

/// Threshold below which the CIE transfer function switches from the
/// cube root to its linear segment.
const CIE_EPSILON: f64 = 0.008_856;

/// Convert a normalized sRGB sample to the perceptual representation.
///
/// Pure and total: degenerate inputs (all-zero channels) produce zeros
/// rather than an error.
#[must_use]
pub fn rgb_to_lab(sample: PixelSample) -> LabSample {
    let r = linearize(sample.r) * 100.0;
    let g = linearize(sample.g) * 100.0;
    let b = linearize(sample.b) * 100.0;

    // sRGB (D65) to XYZ.
    let x = r.mul_add(0.4124, g.mul_add(0.3576, b * 0.1805));
    let y = r.mul_add(0.2126, g.mul_add(0.7152, b * 0.0722));
    let z = r.mul_add(0.0193, g.mul_add(0.1192, b * 0.9505));

    let fx = cie_transfer(x / D65.0);
    let fy = cie_transfer(y / D65.1);
    let fz = cie_transfer(z / D65.2);

    let l = 116.0_f64.mul_add(fy, -16.0);
    let a = 500.0 * (fx - fy);
    let b_lab = 200.0 * (fy - fz);

    let max_channel = sample.r.max(sample.g).max(sample.b);
    let min_channel = sample.r.min(sample.g).min(sample.b);
    let saturation = if max_channel > 0.0 {
        (max_channel - min_channel) / max_channel
    } else {
        0.0
    };

    LabSample {
        l: l / 100.0,
        a,
        b: b_lab,
        saturation,
    }
}

/// Inverse sRGB gamma: map a display value to linear light.
fn linearize(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// CIE L*a*b* transfer function: cube root with a linear segment near
/// zero.
fn cie_transfer(t: f64) -> f64 {
    if t > CIE_EPSILON {
        t.cbrt()
    } else {
        7.787_f64.mul_add(t, 16.0 / 116.0)
    }
}

/// Run the global color pass: a 20×20 grid reduced to means and standard
/// deviations.
///
/// Fully deterministic given the sample set; an empty sample set (zero
/// area image) reduces to all-zero statistics.
#[must_use]
pub fn analyze_color(image: &RgbaImage) -> PerceptualColorMetrics {
    let samples = sample::sample_grid(image, COLOR_GRID);

    let mut lightness = Vec::with_capacity(samples.len());
    let mut redness = Vec::with_capacity(samples.len());
    let mut yellowness = Vec::with_capacity(samples.len());
    let mut saturation = Vec::with_capacity(samples.len());

    for s in samples {
        let lab = rgb_to_lab(s);
        lightness.push(lab.l);
        redness.push(lab.a);
        yellowness.push(lab.b);
        saturation.push(lab.saturation);
    }

    let average_brightness = sample::mean(&lightness);
    let average_redness = sample::mean(&redness);
    let average_yellowness = sample::mean(&yellowness);
    let average_saturation = sample::mean(&saturation);

    let brightness_variance = sample::std_dev(&lightness, average_brightness);
    let redness_variance = sample::std_dev(&redness, average_redness);

    let color_uniformity = (1.0 - (brightness_variance + redness_variance) / 2.0).max(0.0);

    PerceptualColorMetrics {
        average_brightness,
        average_redness,
        average_yellowness,
        color_uniformity,
        average_saturation,
        brightness_variance,
        redness_variance,
    }
}

/// Lightness values for an N×N grid over the image.
///
/// Shared by the texture (flaking variance), structure (laxity and
/// symmetry), and pigmentation passes.
#[must_use]
pub(crate) fn lightness_values(image: &RgbaImage, grid: u32) -> Vec<f64> {
    sample::sample_grid(image, grid)
        .into_iter()
        .map(|s| rgb_to_lab(s).l)
        .collect()
}

/// Mean lightness over an N×N grid, 0 for a degenerate image.
#[must_use]
pub(crate) fn mean_lightness(image: &RgbaImage, grid: u32) -> f64 {
    sample::mean(&lightness_values(image, grid))
}
