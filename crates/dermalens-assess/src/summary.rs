//! Clinical summary formatting.
//!
//! Renders one metrics set as the fixed multi-section text block that
//! external prompt builders embed verbatim. All display strings live
//! here — the domain enums carry no presentation text, keeping them
//! free for localization and testing.

use dermalens_pipeline::{
    ComprehensiveMetrics, RednessLevel, RednessPattern, RegionCharacteristic, RegionLocation,
    SkinRegion,
};

/// Display name for a spatial region.
#[must_use]
pub const fn region_label(location: RegionLocation) -> &'static str {
    match location {
        RegionLocation::TopLeft => "Upper Left",
        RegionLocation::TopCenter => "Upper Center (forehead)",
        RegionLocation::TopRight => "Upper Right",
        RegionLocation::MiddleLeft => "Mid Left (cheek)",
        RegionLocation::MiddleCenter => "Mid Center (nose)",
        RegionLocation::MiddleRight => "Mid Right (cheek)",
        RegionLocation::BottomLeft => "Lower Left",
        RegionLocation::BottomCenter => "Lower Center (chin)",
        RegionLocation::BottomRight => "Lower Right",
    }
}

/// Display name for a redness severity level.
#[must_use]
pub const fn redness_level_label(level: RednessLevel) -> &'static str {
    match level {
        RednessLevel::Minimal => "Minimal",
        RednessLevel::Low => "Low",
        RednessLevel::Moderate => "Moderate",
        RednessLevel::Elevated => "Elevated",
        RednessLevel::High => "High",
    }
}

/// Display name for a redness spatial pattern.
#[must_use]
pub const fn redness_pattern_label(pattern: RednessPattern) -> &'static str {
    match pattern {
        RednessPattern::Diffuse => "Diffuse (rosacea-like)",
        RednessPattern::Clustered => "Clustered (possible sensitivity)",
        RednessPattern::Localized => "Localized (acne/breakouts)",
        RednessPattern::Mixed => "Mixed pattern",
    }
}

/// Render the fixed-format clinical summary text block.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn clinical_summary(metrics: &ComprehensiveMetrics) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("COMPREHENSIVE SKIN IMAGE ANALYSIS:".to_owned());
    lines.push(String::new());

    let color = &metrics.perceptual_color;
    lines.push("COLOR PROFILE:".to_owned());
    lines.push(format!(
        "- Overall Brightness: {:.1}%",
        color.average_brightness * 100.0,
    ));
    lines.push(annotated(
        format!("- Redness Index (a*): {:.2}", color.average_redness),
        color.average_redness > 10.0,
        "[ELEVATED - suggests inflammation/erythema]",
    ));
    lines.push(annotated(
        format!("- Yellow-Blue Index (b*): {:.2}", color.average_yellowness),
        color.average_yellowness < -5.0,
        "[BLUE-SHIFTED - possible dullness]",
    ));
    lines.push(annotated(
        format!("- Color Uniformity: {:.1}%", color.color_uniformity * 100.0),
        color.color_uniformity < 0.7,
        "[PATCHY - uneven tone detected]",
    ));
    lines.push(format!(
        "- Saturation Level: {:.1}%",
        color.average_saturation * 100.0,
    ));
    lines.push(String::new());

    lines.push(format!(
        "SPATIAL DISTRIBUTION ({} regions analyzed):",
        metrics.regions.len(),
    ));
    push_region_line(
        &mut lines,
        &metrics.regions,
        RegionCharacteristic::Redness,
        "Redness concentrated in",
    );
    push_region_line(
        &mut lines,
        &metrics.regions,
        RegionCharacteristic::Dryness,
        "Dry/dull areas in",
    );
    push_region_line(
        &mut lines,
        &metrics.regions,
        RegionCharacteristic::RoughTexture,
        "Rough texture in",
    );
    lines.push(String::new());

    let texture = &metrics.texture;
    lines.push("TEXTURE PROFILE:".to_owned());
    lines.push(annotated(
        format!(
            "- Fine Texture (pores/micro-detail): {:.1}%",
            texture.fine_texture_level * 100.0,
        ),
        texture.fine_texture_level > 0.6,
        "[HIGH - visible pores/roughness]",
    ));
    lines.push(format!(
        "- Medium Texture (surface variation): {:.1}%",
        texture.medium_texture_level * 100.0,
    ));
    lines.push(annotated(
        format!(
            "- Coarse Texture (lines/wrinkles): {:.1}%",
            texture.coarse_texture_level * 100.0,
        ),
        texture.coarse_texture_level > 0.5,
        "[VISIBLE aging signs]",
    ));
    lines.push(annotated(
        format!("- Overall Smoothness: {:.1}%", texture.smoothness * 100.0),
        texture.smoothness < 0.4,
        "[ROUGH - possible dehydration/barrier issues]",
    ));
    lines.push(annotated(
        format!(
            "- Flaking/Scaling Likelihood: {:.1}%",
            texture.flaking_likelihood * 100.0,
        ),
        texture.flaking_likelihood > 0.5,
        "[POSSIBLE barrier disruption]",
    ));
    lines.push(String::new());

    let structure = &metrics.structure;
    lines.push("STRUCTURAL FEATURES:".to_owned());
    lines.push(annotated(
        format!("- Line Density: {:.1}%", structure.line_density * 100.0),
        structure.line_density > 0.5,
        "[MODERATE-HIGH wrinkle presence]",
    ));
    lines.push(format!(
        "- Expression Lines: {}",
        if structure.has_expression_lines {
            "Detected"
        } else {
            "Minimal"
        },
    ));
    lines.push(format!(
        "- Skin Laxity Indicators: {:.1}%",
        structure.laxity_score * 100.0,
    ));
    lines.push(annotated(
        format!(
            "- Left-Right Symmetry: {:.1}%",
            structure.symmetry_score * 100.0,
        ),
        structure.symmetry_score < 0.7,
        "[ASYMMETRIC - possible localized issues]",
    ));
    lines.push(String::new());

    let vascular = &metrics.vascular;
    lines.push("VASCULAR & INFLAMMATION:".to_owned());
    lines.push(format!(
        "- Overall Redness Level: {}",
        redness_level_label(vascular.overall_redness_level),
    ));
    lines.push(format!(
        "- Redness Pattern: {}",
        redness_pattern_label(vascular.redness_pattern),
    ));
    lines.push(annotated(
        format!(
            "- Inflammation Indicators: {:.1}%",
            vascular.inflammation_score * 100.0,
        ),
        vascular.inflammation_score > 0.6,
        "[ELEVATED - active inflammation likely]",
    ));
    if vascular.has_active_breakouts {
        lines.push("- Active Breakouts: Detected [sharp, localized redness]".to_owned());
    }
    lines.push(String::new());

    let pigmentation = &metrics.pigmentation;
    lines.push("PIGMENTATION:".to_owned());
    lines.push(annotated(
        format!(
            "- Hyperpigmentation Density: {:.1}%",
            pigmentation.hyperpigmentation_level * 100.0,
        ),
        pigmentation.hyperpigmentation_level > 0.4,
        "[SIGNIFICANT dark spots/melasma risk]",
    ));
    lines.push(format!(
        "- Hypopigmentation Presence: {:.1}%",
        pigmentation.hypopigmentation_level * 100.0,
    ));
    lines.push(format!("- Freckle/Spot Count: ~{}", pigmentation.spot_count));
    lines.push(annotated(
        format!(
            "- Pigment Uniformity: {:.1}%",
            pigmentation.uniformity * 100.0,
        ),
        pigmentation.uniformity < 0.6,
        "[UNEVEN tone - sun damage/PIH likely]",
    ));

    lines.join("\n")
}

/// Append a threshold annotation to a line when it applies.
fn annotated(line: String, applies: bool, suffix: &str) -> String {
    if applies {
        format!("{line} {suffix}")
    } else {
        line
    }
}

/// Push a "concentrated in" line listing regions with the given
/// characteristic; omitted entirely when no region matches.
fn push_region_line(
    lines: &mut Vec<String>,
    regions: &[SkinRegion],
    characteristic: RegionCharacteristic,
    prefix: &str,
) {
    let names: Vec<&str> = regions
        .iter()
        .filter(|region| region.dominant == characteristic)
        .map(|region| region_label(region.location))
        .collect();
    if !names.is_empty() {
        lines.push(format!("- {prefix}: {}", names.join(", ")));
    }
}
