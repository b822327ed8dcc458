//! Multi-scale texture analysis.
//!
//! A single edge primitive — Sobel gradient magnitude scaled by an
//! intensity factor and reduced to its spatial mean — is run at three
//! intensity settings. Low intensity only registers strong gradients
//! (fine pore-scale detail survives), while high intensity saturates on
//! moderate gradients and picks up coarse lines and wrinkles.

use image::{Luma, RgbaImage};
use imageproc::definitions::Image;
use imageproc::filter::filter_clamped;
use imageproc::kernel;

use crate::color;
use crate::sample;
use crate::types::TextureMetrics;

/// Edge intensity for the fine (pores, micro-detail) scale.
pub const FINE_SCALE: f64 = 0.5;

/// Edge intensity for the medium (surface variation) scale.
pub const MEDIUM_SCALE: f64 = 1.5;

/// Edge intensity for the coarse (lines, wrinkles) scale.
pub const COARSE_SCALE: f64 = 3.0;

/// Fraction of fine texture attributed to pore-like structures.
const PORE_FACTOR: f64 = 0.8;

/// Grid resolution for the flaking brightness-variance estimate.
const VARIANCE_GRID: u32 = 20;

/// Grid resolution for the flaking mean-brightness estimate.
const BRIGHTNESS_GRID: u32 = 10;

/// Mean edge-map response at the given intensity, normalized to 0–1.
///
/// The edge map is the per-pixel Sobel gradient magnitude of the
/// grayscale image, scaled by `intensity` and saturated at the white
/// point. Averaging the map yields a scalar density: 0 for a flat image,
/// approaching 1 as edge coverage saturates.
#[must_use]
pub fn edge_density(image: &RgbaImage, intensity: f64) -> f64 {
    let gray = image::imageops::grayscale(image);
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return 0.0;
    }

    let gx: Image<Luma<i16>> = filter_clamped(&gray, kernel::SOBEL_HORIZONTAL_3X3);
    let gy: Image<Luma<i16>> = filter_clamped(&gray, kernel::SOBEL_VERTICAL_3X3);

    let sum: f64 = gx
        .iter()
        .zip(gy.iter())
        .map(|(&h, &v)| {
            let magnitude = f64::from(h).hypot(f64::from(v));
            (magnitude * intensity).min(255.0)
        })
        .sum();

    let pixel_count = f64::from(width) * f64::from(height);
    sum / (pixel_count * 255.0)
}

/// Run the texture pass: three edge scales, smoothness, pore density,
/// and flaking likelihood.
#[must_use]
pub fn analyze_texture(image: &RgbaImage) -> TextureMetrics {
    let fine = edge_density(image, FINE_SCALE);
    let medium = edge_density(image, MEDIUM_SCALE);
    let coarse = edge_density(image, COARSE_SCALE);

    let smoothness = 1.0 - (fine + medium + coarse) / 3.0;

    TextureMetrics {
        fine_texture_level: fine,
        medium_texture_level: medium,
        coarse_texture_level: coarse,
        smoothness,
        porelike_structures: fine * PORE_FACTOR,
        flaking_likelihood: flaking_likelihood(image),
    }
}

/// Flaking estimate: high-frequency brightness variance weighted down
/// unless the image is both noisy and dark.
///
/// Matte, flaking skin scatters light: bright specular skin with high
/// variance is more likely texture than scaling, so the variance is
/// halved unless mean brightness is low.
fn flaking_likelihood(image: &RgbaImage) -> f64 {
    let lightness = color::lightness_values(image, VARIANCE_GRID);
    let variance = sample::std_dev(&lightness, sample::mean(&lightness));
    let average_brightness = color::mean_lightness(image, BRIGHTNESS_GRID);

    let raw = if variance > 0.3 && average_brightness < 0.5 {
        variance
    } else {
        variance * 0.5
    };
    raw.min(1.0)
}
