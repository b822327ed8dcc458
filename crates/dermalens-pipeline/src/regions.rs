//! Spatial region mapping: a 3×3 partition of the face image.
//!
//! Each cell is sampled independently and tagged with its dominant
//! characteristic, giving downstream consumers a coarse answer to
//! *where* an issue concentrates (forehead redness vs. cheek dryness)
//! without any face-landmark detection.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::color;
use crate::sample;

/// Grid resolution used when sampling each region crop.
pub const REGION_GRID: u32 = 5;

/// Redness (a*) above which a region is tagged [`RegionCharacteristic::Redness`].
const REDNESS_THRESHOLD: f64 = 15.0;

/// Brightness below which a region is tagged [`RegionCharacteristic::Dryness`].
const DARKNESS_THRESHOLD: f64 = 0.3;

/// Texture energy above which a region is tagged
/// [`RegionCharacteristic::RoughTexture`].
const TEXTURE_ENERGY_THRESHOLD: f64 = 0.6;

/// One of the nine fixed spatial locations, raster order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionLocation {
    /// Top-left cell.
    TopLeft,
    /// Top-center cell (forehead).
    TopCenter,
    /// Top-right cell.
    TopRight,
    /// Middle-left cell (cheek).
    MiddleLeft,
    /// Middle-center cell (nose).
    MiddleCenter,
    /// Middle-right cell (cheek).
    MiddleRight,
    /// Bottom-left cell.
    BottomLeft,
    /// Bottom-center cell (chin).
    BottomCenter,
    /// Bottom-right cell.
    BottomRight,
}

impl RegionLocation {
    /// All nine locations in raster order (row-major, top-left first).
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::MiddleLeft,
        Self::MiddleCenter,
        Self::MiddleRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];
}

/// Dominant characteristic of one region.
///
/// The active classifier assigns only `Redness`, `Dryness`,
/// `RoughTexture`, and `Normal`. `Oiliness` and `Hyperpigmentation` are
/// part of the published vocabulary but have no assignment rule; the
/// rule set is intentionally left incomplete rather than inventing
/// thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionCharacteristic {
    /// No notable finding.
    Normal,
    /// Elevated a* redness.
    Redness,
    /// Low brightness, consistent with dry or dull skin.
    Dryness,
    /// Reserved; not assigned by the current rule set.
    Oiliness,
    /// High local brightness variance.
    RoughTexture,
    /// Reserved; not assigned by the current rule set.
    Hyperpigmentation,
}

/// Metrics and classification for one spatial cell. Immutable, produced
/// fresh per analysis pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkinRegion {
    /// Which cell of the 3×3 grid this is.
    pub location: RegionLocation,
    /// Mean perceptual lightness of the cell.
    pub brightness: f64,
    /// Mean a* redness of the cell.
    pub redness: f64,
    /// Mean RGB saturation of the cell.
    pub saturation: f64,
    /// Standard deviation of lightness within the cell.
    pub texture_energy: f64,
    /// First matching characteristic tag.
    pub dominant: RegionCharacteristic,
}

/// Classify a region from its reduced metrics. First match wins.
#[must_use]
pub fn classify(brightness: f64, redness: f64, texture_energy: f64) -> RegionCharacteristic {
    if redness > REDNESS_THRESHOLD {
        RegionCharacteristic::Redness
    } else if brightness < DARKNESS_THRESHOLD {
        RegionCharacteristic::Dryness
    } else if texture_energy > TEXTURE_ENERGY_THRESHOLD {
        RegionCharacteristic::RoughTexture
    } else {
        RegionCharacteristic::Normal
    }
}

/// Partition the image into a 3×3 grid of equal crops (raster order) and
/// reduce each to a [`SkinRegion`].
///
/// Images too small to partition (either axis under 3 pixels) fall back
/// to neutral per-cell metrics, mirroring the unreadable-crop behavior
/// of the sampling layer.
#[must_use]
pub fn analyze_regions(image: &RgbaImage) -> Vec<SkinRegion> {
    let (width, height) = image.dimensions();
    let cell_width = width / 3;
    let cell_height = height / 3;

    RegionLocation::ALL
        .iter()
        .enumerate()
        .map(|(index, &location)| {
            let row = u32::try_from(index).unwrap_or(0) / 3;
            let col = u32::try_from(index).unwrap_or(0) % 3;

            if cell_width == 0 || cell_height == 0 {
                return SkinRegion {
                    location,
                    brightness: 0.5,
                    redness: 0.0,
                    saturation: 0.5,
                    texture_energy: 0.5,
                    dominant: classify(0.5, 0.0, 0.5),
                };
            }

            let crop = sample::crop(
                image,
                col * cell_width,
                row * cell_height,
                cell_width,
                cell_height,
            );
            region_from_crop(location, &crop)
        })
        .collect()
}

/// Reduce one cell crop to its region metrics.
fn region_from_crop(location: RegionLocation, crop: &RgbaImage) -> SkinRegion {
    let samples = sample::sample_grid(crop, REGION_GRID);

    let mut lightness = Vec::with_capacity(samples.len());
    let mut redness_values = Vec::with_capacity(samples.len());
    let mut saturation_values = Vec::with_capacity(samples.len());
    for s in samples {
        let lab = color::rgb_to_lab(s);
        lightness.push(lab.l);
        redness_values.push(lab.a);
        saturation_values.push(lab.saturation);
    }

    let brightness = sample::mean(&lightness);
    let redness = sample::mean(&redness_values);
    let saturation = sample::mean(&saturation_values);
    let texture_energy = sample::std_dev(&lightness, brightness);

    SkinRegion {
        location,
        brightness,
        redness,
        saturation,
        texture_energy,
        dominant: classify(brightness, redness, texture_energy),
    }
}
