//! Property-style integration tests over randomized synthetic images.
//!
//! Uses a fixed-seed linear congruential generator so runs are
//! reproducible without an RNG dependency.

#![allow(clippy::unwrap_used)]

use dermalens_pipeline::{AnalysisConfig, ComprehensiveMetrics, analyze_image, analyze_pass};
use image::RgbaImage;

/// Minimal deterministic PRNG (numerical-recipes LCG constants).
struct Lcg(u64);

impl Lcg {
    fn next_u8(&mut self) -> u8 {
        self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 56) as u8
    }
}

/// Random image with block structure, so gradients and flat areas both
/// occur.
fn random_image(rng: &mut Lcg, size: u32, block: u32) -> RgbaImage {
    let blocks_per_row = size.div_ceil(block);
    let mut colors = Vec::new();
    for _ in 0..blocks_per_row * blocks_per_row {
        colors.push([rng.next_u8(), rng.next_u8(), rng.next_u8(), 255]);
    }
    RgbaImage::from_fn(size, size, |x, y| {
        let index = ((y / block) * blocks_per_row + (x / block)) as usize;
        image::Rgba(colors[index])
    })
}

/// Every 0–1 bounded field of one pass.
fn unit_bounded_fields(m: &ComprehensiveMetrics) -> Vec<(&'static str, f64)> {
    let mut fields = vec![
        ("average_brightness", m.perceptual_color.average_brightness),
        ("average_saturation", m.perceptual_color.average_saturation),
        ("color_uniformity", m.perceptual_color.color_uniformity),
        ("fine_texture_level", m.texture.fine_texture_level),
        ("medium_texture_level", m.texture.medium_texture_level),
        ("coarse_texture_level", m.texture.coarse_texture_level),
        ("smoothness", m.texture.smoothness),
        ("porelike_structures", m.texture.porelike_structures),
        ("flaking_likelihood", m.texture.flaking_likelihood),
        ("line_density", m.structure.line_density),
        ("laxity_score", m.structure.laxity_score),
        ("symmetry_score", m.structure.symmetry_score),
        ("inflammation_score", m.vascular.inflammation_score),
        ("hyperpigmentation_level", m.pigmentation.hyperpigmentation_level),
        ("hypopigmentation_level", m.pigmentation.hypopigmentation_level),
    ];
    for region in &m.regions {
        fields.push(("region_brightness", region.brightness));
        fields.push(("region_saturation", region.saturation));
    }
    fields
}

#[test]
fn bounded_fields_stay_in_unit_range_over_randomized_images() {
    let mut rng = Lcg(0x5EED_CAFE);
    for run in 0..1000 {
        let block = 1 + (u32::from(rng.next_u8()) % 8);
        let img = random_image(&mut rng, 36, block);
        let metrics = analyze_pass(&img);
        for (name, value) in unit_bounded_fields(&metrics) {
            assert!(
                (0.0..=1.0).contains(&value),
                "run {run}: {name} out of range: {value}",
            );
        }
    }
}

#[test]
fn uniformity_invariant_holds_over_randomized_images() {
    let mut rng = Lcg(0xBADD_F00D);
    for run in 0..200 {
        let img = random_image(&mut rng, 36, 3);
        let color = analyze_pass(&img).perceptual_color;
        let expected =
            (1.0 - (color.brightness_variance + color.redness_variance) / 2.0).max(0.0);
        assert!(
            (color.color_uniformity - expected).abs() < 1e-12,
            "run {run}: uniformity {} != {expected}",
            color.color_uniformity,
        );
    }
}

#[test]
fn multi_variant_analysis_keeps_bounds_and_selection_invariants() {
    let mut rng = Lcg(0xD015_1234);
    let config = AnalysisConfig::default();
    for run in 0..50 {
        let img = random_image(&mut rng, 48, 4);
        let analysis = analyze_image(&img, &config);
        assert_eq!(analysis.passes.len(), 3, "run {run}");
        assert!(analysis.selected_index < analysis.passes.len(), "run {run}");
        for pass in &analysis.passes {
            for (name, value) in unit_bounded_fields(pass) {
                assert!(
                    (0.0..=1.0).contains(&value),
                    "run {run}: {name} out of range: {value}",
                );
            }
        }
    }
}
