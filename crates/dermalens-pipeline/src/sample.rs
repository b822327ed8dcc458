//! Grid sampling of RGBA pixel buffers.
//!
//! Every analyzer reduces the image through the same primitive: an N×N
//! grid of pixel samples taken at evenly spaced integer coordinates.
//! Sampling a few hundred points instead of walking every pixel keeps a
//! full multi-variant analysis cheap enough to run on each enhancement
//! pass independently.

use image::RgbaImage;

/// A single sampled pixel with channels normalized to 0–1.
///
/// Ephemeral: produced and consumed within one analysis pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelSample {
    /// Red channel (0–1).
    pub r: f64,
    /// Green channel (0–1).
    pub g: f64,
    /// Blue channel (0–1).
    pub b: f64,
}

/// Sample an N×N grid of pixels at integer steps of `width / grid` and
/// `height / grid`.
///
/// Coordinates falling outside the buffer are skipped, so the result may
/// hold fewer than `grid * grid` samples. Degenerate inputs (zero-area
/// image or zero grid) yield an empty vector; callers guard their
/// reductions against that case rather than dividing by zero.
#[must_use]
pub fn sample_grid(image: &RgbaImage, grid: u32) -> Vec<PixelSample> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 || grid == 0 {
        return Vec::new();
    }

    let step_x = width / grid;
    let step_y = height / grid;

    let mut samples = Vec::with_capacity((grid * grid) as usize);
    for row in 0..grid {
        for col in 0..grid {
            let x = col * step_x;
            let y = row * step_y;
            if x < width && y < height {
                let p = image.get_pixel(x, y).0;
                samples.push(PixelSample {
                    r: f64::from(p[0]) / 255.0,
                    g: f64::from(p[1]) / 255.0,
                    b: f64::from(p[2]) / 255.0,
                });
            }
        }
    }

    samples
}

/// Copy a rectangular crop out of the image.
///
/// The rectangle is clamped to the image bounds; a rectangle entirely
/// outside the buffer yields an empty image.
#[must_use]
pub(crate) fn crop(image: &RgbaImage, x: u32, y: u32, width: u32, height: u32) -> RgbaImage {
    image::imageops::crop_imm(image, x, y, width, height).to_image()
}

/// Arithmetic mean, 0 for an empty slice.
#[must_use]
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = values.len() as f64;
    values.iter().sum::<f64>() / count
}

/// Standard deviation around a precomputed mean, 0 for an empty slice.
#[must_use]
pub(crate) fn std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let count = values.len() as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;
    variance.sqrt()
}
