//! End-to-end scenarios: raw image bytes through the pipeline and the
//! full assessment.

#![allow(clippy::unwrap_used)]

use dermalens_assess::{SkinProfile, Taxonomy, assess, clinical_summary};
use dermalens_pipeline::{Analysis, AnalysisConfig, ComprehensiveMetrics, analyze};
use image::RgbaImage;

fn encode_png(img: &RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut buf);
    image::ImageEncoder::write_image(
        encoder,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ExtendedColorType::Rgba8,
    )
    .unwrap();
    buf
}

#[test]
fn undecodable_image_yields_fallback_metrics_and_clean_score() {
    let analysis = analyze(&[0x00, 0x01, 0x02], &AnalysisConfig::default());
    assert_eq!(analysis, Analysis::fallback());
    assert_eq!(*analysis.selected(), ComprehensiveMetrics::fallback());

    let assessment = assess(
        &analysis,
        &SkinProfile::default(),
        &[],
        &Taxonomy::default_vocabulary(),
    );
    assert!(assessment.concerns.is_empty());
    // Baseline 85 plus the improvement bonus from the calm defaults.
    assert!(assessment.health_score >= 85);
    assert!(assessment.health_score <= 100);
}

#[test]
fn solid_red_image_produces_redness_concern_and_high_level() {
    let img = RgbaImage::from_pixel(80, 80, image::Rgba([255, 0, 0, 255]));
    let analysis = analyze(&encode_png(&img), &AnalysisConfig::default());

    let selected = analysis.selected();
    assert_eq!(
        selected.vascular.overall_redness_level,
        dermalens_pipeline::RednessLevel::High,
    );
    assert!(selected.perceptual_color.average_redness > 20.0);

    let assessment = assess(
        &analysis,
        &SkinProfile::default(),
        &[],
        &Taxonomy::default_vocabulary(),
    );
    assert!(assessment.concerns.iter().any(|c| c == "Redness"));
    assert!(assessment.trending.redness > 8.0);
}

#[test]
fn concern_fires_when_any_variant_crosses_a_threshold() {
    // Hand-built analysis: the original pass is quiet, only an enhanced
    // pass shows flaking. The concern must still fire even though the
    // quiet pass could be the selected one.
    let quiet = ComprehensiveMetrics::fallback();
    let mut flaky = ComprehensiveMetrics::fallback();
    flaky.texture.flaking_likelihood = 0.6;

    let analysis = Analysis {
        passes: vec![quiet, flaky],
        selected_index: 0,
    };
    let assessment = assess(
        &analysis,
        &SkinProfile::default(),
        &[],
        &Taxonomy::default_vocabulary(),
    );
    assert_eq!(assessment.concerns, vec!["Dryness"]);
}

#[test]
fn clinical_summary_renders_for_a_real_analysis() {
    let img = RgbaImage::from_fn(90, 90, |x, y| {
        if (30..60).contains(&x) && (30..60).contains(&y) {
            image::Rgba([210, 130, 120, 255])
        } else {
            image::Rgba([200, 168, 150, 255])
        }
    });
    let analysis = analyze(&encode_png(&img), &AnalysisConfig::default());
    let summary = clinical_summary(analysis.selected());

    assert!(summary.contains("SPATIAL DISTRIBUTION (9 regions analyzed):"));
    assert!(summary.contains("COLOR PROFILE:"));
    assert!(summary.contains("PIGMENTATION:"));
}

#[test]
fn vocabulary_supplies_canonical_casing() {
    let taxonomy = Taxonomy::new(["DARK SPOTS".to_owned(), "Redness".to_owned()]);
    let mut m = ComprehensiveMetrics::fallback();
    m.pigmentation.hyperpigmentation_level = 0.5;
    let analysis = Analysis {
        passes: vec![m],
        selected_index: 0,
    };
    let assessment = assess(&analysis, &SkinProfile::default(), &[], &taxonomy);
    assert_eq!(assessment.concerns, vec!["DARK SPOTS"]);
}
