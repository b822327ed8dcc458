//! Concern derivation and taxonomy normalization.
//!
//! Two independent sources feed the concern list:
//!
//! 1. Threshold rules over the pipeline metrics, evaluated across
//!    **all** variant passes — a concern fires if any pass satisfies
//!    its predicate, so a finding surfaced only under enhancement still
//!    registers.
//! 2. Free-text expansion of manual or externally supplied strings
//!    through a synonym table.
//!
//! Both sources emit canonical labels, unioned and deduplicated
//! case-insensitively with first-seen order. Expansion is idempotent:
//! feeding an already-canonical list back through changes nothing.

use dermalens_pipeline::{ComprehensiveMetrics, RednessLevel};

use crate::taxonomy::{self, Taxonomy};

/// A metric predicate that raises one canonical concern.
struct ThresholdRule {
    label: &'static str,
    applies: fn(&ComprehensiveMetrics) -> bool,
}

/// The threshold rule set, in first-seen output order.
const THRESHOLD_RULES: &[ThresholdRule] = &[
    ThresholdRule {
        label: "Dark Spots",
        applies: |m| m.pigmentation.hyperpigmentation_level > 0.35,
    },
    ThresholdRule {
        label: "Redness",
        applies: |m| {
            m.vascular.overall_redness_level >= RednessLevel::Elevated
                || m.perceptual_color.average_redness > 8.0
        },
    },
    ThresholdRule {
        label: "Uneven Texture",
        applies: |m| m.texture.smoothness < 0.45,
    },
    ThresholdRule {
        label: "Fine Lines",
        applies: |m| m.structure.line_density > 0.45,
    },
    ThresholdRule {
        label: "Dryness",
        applies: |m| m.texture.flaking_likelihood > 0.4,
    },
    ThresholdRule {
        label: "Enlarged Pores",
        applies: |m| m.texture.porelike_structures > 0.45,
    },
    ThresholdRule {
        label: "Acne",
        applies: |m| m.vascular.has_active_breakouts,
    },
    ThresholdRule {
        label: "Aging",
        applies: |m| m.structure.laxity_score > 0.45,
    },
];

/// One synonym-table entry: any pattern occurring in the lowercased
/// input raises the label.
struct SynonymRule {
    patterns: &'static [&'static str],
    label: &'static str,
}

/// The synonym table. Canonical labels match their own entry, which is
/// what makes expansion idempotent.
const SYNONYM_RULES: &[SynonymRule] = &[
    SynonymRule {
        patterns: &["fine line"],
        label: "Fine Lines",
    },
    SynonymRule {
        patterns: &["wrinkle"],
        label: "Wrinkles",
    },
    SynonymRule {
        patterns: &["dark spot", "hyperpigmentation", "pigmentation"],
        label: "Dark Spots",
    },
    SynonymRule {
        patterns: &["blackhead", "clogged pores", "pimple", "blemish"],
        label: "Blemishes",
    },
    SynonymRule {
        patterns: &["acne", "breakout"],
        label: "Acne",
    },
    SynonymRule {
        patterns: &["dehydrated"],
        label: "Dehydrated Skin",
    },
    SynonymRule {
        patterns: &["dry skin", "flaky", "dryness"],
        label: "Dryness",
    },
    SynonymRule {
        patterns: &["dull", "lifeless"],
        label: "Dull Skin",
    },
    SynonymRule {
        patterns: &["enlarged pores", "large pores"],
        label: "Enlarged Pores",
    },
    SynonymRule {
        patterns: &["oily", "oiliness", "sebum"],
        label: "Oiliness",
    },
    SynonymRule {
        patterns: &["redness", "flushing"],
        label: "Redness",
    },
    SynonymRule {
        patterns: &["puffy", "under eye"],
        label: "Puffiness Under Eyes",
    },
    SynonymRule {
        patterns: &["pollution"],
        label: "Pollution",
    },
    SynonymRule {
        patterns: &["scar"],
        label: "Scar Prevention",
    },
    SynonymRule {
        patterns: &["aging", "mature"],
        label: "Aging",
    },
];

/// Phrases that collapse to Wrinkles alone instead of raising both line
/// concerns.
const COMBINED_LINE_PHRASES: &[&str] = &["fine lines + wrinkles", "fine lines and wrinkles"];

/// Pore qualifiers that suppress the bare "pores" fallback match.
const QUALIFIED_PORES: &[&str] = &["enlarged pores", "large pores", "clogged pores"];

/// Evaluate the threshold rules across every pass.
///
/// Returns canonical labels in rule order, normalized against the
/// vocabulary.
#[must_use]
pub fn derive_concerns(passes: &[ComprehensiveMetrics], taxonomy: &Taxonomy) -> Vec<String> {
    let matched = THRESHOLD_RULES
        .iter()
        .filter(|rule| passes.iter().any(|pass| (rule.applies)(pass)))
        .map(|rule| taxonomy.normalize(rule.label));
    taxonomy::dedupe(matched)
}

/// Expand free-text inputs into canonical concerns.
///
/// Each input is lowercased and matched against the synonym table;
/// unrecognized non-empty inputs pass through trimmed (normalized
/// against the vocabulary) rather than being dropped. The result is
/// deduplicated case-insensitively with first-seen order, and the
/// function is idempotent over its own output.
#[must_use]
pub fn expand_concerns(inputs: &[String], taxonomy: &Taxonomy) -> Vec<String> {
    let mut labels = Vec::new();
    for input in inputs {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            continue;
        }
        let matched = expand_one(trimmed);
        if matched.is_empty() {
            labels.push(taxonomy.normalize(trimmed));
        } else {
            labels.extend(matched.into_iter().map(|label| taxonomy.normalize(label)));
        }
    }
    taxonomy::dedupe(labels)
}

/// Synonym matches for a single free-text entry.
fn expand_one(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    let mut labels = Vec::new();

    // "fine lines + wrinkles" collapses to Wrinkles only.
    let combined = COMBINED_LINE_PHRASES
        .iter()
        .any(|phrase| lower.contains(phrase));
    if combined {
        labels.push("Wrinkles");
    }

    for rule in SYNONYM_RULES {
        if combined && (rule.label == "Fine Lines" || rule.label == "Wrinkles") {
            continue;
        }
        if rule.patterns.iter().any(|pattern| lower.contains(pattern)) {
            labels.push(rule.label);
        }
    }

    // Bare "pores" maps to the generic concern only when no qualified
    // pore phrase claimed it.
    if lower.contains("pores") && !QUALIFIED_PORES.iter().any(|phrase| lower.contains(phrase)) {
        labels.push("Pores");
    }

    labels
}

/// Split comma-separated manual concern input into individual entries.
#[must_use]
pub fn split_manual(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Union two concern lists, deduplicating case-insensitively with
/// first-seen order. Pure: returns a fresh list.
#[must_use]
pub fn combine(primary: Vec<String>, secondary: Vec<String>) -> Vec<String> {
    taxonomy::dedupe(primary.into_iter().chain(secondary))
}
