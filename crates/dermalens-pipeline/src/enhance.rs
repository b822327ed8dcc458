//! Image variant enhancement.
//!
//! A single exposure can mask subtle redness or texture. Each preset
//! produces a mildly boosted rendition of the source image; the full
//! pipeline runs on every rendition and severity selection keeps the
//! worst-case reading. The presets are intentionally gentle — they
//! surface what is already present rather than fabricating findings.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Per-channel adjustment applied to produce one enhanced variant.
///
/// Saturation scales each channel's distance from the pixel's luma,
/// contrast scales distance from mid-gray, and brightness is an
/// additive offset. All channel math happens in normalized 0–1 space
/// with a final clamp; alpha is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariantPreset {
    /// Contrast multiplier around mid-gray (1.0 = unchanged).
    pub contrast: f64,
    /// Saturation multiplier around the pixel luma (1.0 = unchanged).
    pub saturation: f64,
    /// Additive brightness offset (0.0 = unchanged).
    pub brightness: f64,
}

impl VariantPreset {
    /// The preset that leaves every pixel unchanged.
    pub const IDENTITY: Self = Self {
        contrast: 1.0,
        saturation: 1.0,
        brightness: 0.0,
    };
}

/// Apply a preset to every pixel, producing a new image.
#[must_use]
pub fn enhance(image: &RgbaImage, preset: &VariantPreset) -> RgbaImage {
    RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        let p = image.get_pixel(x, y).0;
        let r = f64::from(p[0]) / 255.0;
        let g = f64::from(p[1]) / 255.0;
        let b = f64::from(p[2]) / 255.0;

        // Rec. 601 luma, matching the grayscale conversion weights.
        let luma = 0.299_f64.mul_add(r, 0.587_f64.mul_add(g, 0.114 * b));

        image::Rgba([
            adjust_channel(r, luma, preset),
            adjust_channel(g, luma, preset),
            adjust_channel(b, luma, preset),
            p[3],
        ])
    })
}

/// Saturation, then contrast, then brightness, clamped back to a byte.
fn adjust_channel(c: f64, luma: f64, preset: &VariantPreset) -> u8 {
    let saturated = (c - luma).mul_add(preset.saturation, luma);
    let contrasted = (saturated - 0.5).mul_add(preset.contrast, 0.5);
    let value = (contrasted + preset.brightness).clamp(0.0, 1.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let byte = (value * 255.0).round() as u8;
    byte
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_preset_leaves_pixels_unchanged() {
        let img = RgbaImage::from_fn(8, 8, |x, y| {
            let v = u8::try_from((x * 13 + y * 29) % 256).unwrap_or(0);
            image::Rgba([v, v.wrapping_add(40), v.wrapping_add(90), 255])
        });
        let out = enhance(&img, &VariantPreset::IDENTITY);
        assert_eq!(img, out);
    }

    #[test]
    fn contrast_pushes_channels_away_from_mid_gray() {
        let img = RgbaImage::from_pixel(4, 4, image::Rgba([64, 64, 64, 255]));
        let preset = VariantPreset {
            contrast: 2.0,
            saturation: 1.0,
            brightness: 0.0,
        };
        let out = enhance(&img, &preset);
        // 0.251 -> (0.251 - 0.5) * 2 + 0.5 = 0.002
        assert!(out.get_pixel(0, 0).0[0] < 5);
    }

    #[test]
    fn zero_saturation_produces_grayscale() {
        let img = RgbaImage::from_pixel(4, 4, image::Rgba([200, 50, 90, 255]));
        let preset = VariantPreset {
            contrast: 1.0,
            saturation: 0.0,
            brightness: 0.0,
        };
        let out = enhance(&img, &preset);
        let p = out.get_pixel(0, 0).0;
        assert_eq!(p[0], p[1]);
        assert_eq!(p[1], p[2]);
    }

    #[test]
    fn brightness_offset_clamps_at_white() {
        let img = RgbaImage::from_pixel(4, 4, image::Rgba([250, 250, 250, 255]));
        let preset = VariantPreset {
            contrast: 1.0,
            saturation: 1.0,
            brightness: 0.5,
        };
        let out = enhance(&img, &preset);
        assert_eq!(out.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn saturation_boost_amplifies_red_cast() {
        let img = RgbaImage::from_pixel(4, 4, image::Rgba([180, 120, 120, 255]));
        let preset = VariantPreset {
            contrast: 1.0,
            saturation: 1.5,
            brightness: 0.0,
        };
        let out = enhance(&img, &preset);
        let p = out.get_pixel(0, 0).0;
        // Red moves further above luma, green/blue further below.
        assert!(p[0] > 180);
        assert!(p[1] < 120);
    }

    #[test]
    fn alpha_is_preserved() {
        let img = RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 77]));
        let preset = VariantPreset {
            contrast: 1.3,
            saturation: 1.05,
            brightness: 0.0,
        };
        let out = enhance(&img, &preset);
        assert_eq!(out.get_pixel(0, 0).0[3], 77);
    }
}
