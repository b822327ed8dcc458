//! The canonical concern vocabulary.
//!
//! The vocabulary is supplied by the caller and treated as read-only:
//! the engine consults it for canonical casing but never mutates or
//! persists it. A default label set is provided for callers without
//! external configuration.

use serde::{Deserialize, Serialize};

/// An externally supplied, fixed concern vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    labels: Vec<String>,
}

impl Taxonomy {
    /// Build a taxonomy from caller-supplied labels.
    ///
    /// Labels are deduplicated case-insensitively; the first casing
    /// seen for a label is the canonical one.
    #[must_use]
    pub fn new(labels: impl IntoIterator<Item = String>) -> Self {
        Self {
            labels: dedupe(labels),
        }
    }

    /// The standard vocabulary used when no external configuration is
    /// supplied.
    #[must_use]
    pub fn default_vocabulary() -> Self {
        Self::new(
            [
                "Redness",
                "Dark Spots",
                "Uneven Texture",
                "Fine Lines",
                "Wrinkles",
                "Dryness",
                "Dehydrated Skin",
                "Dull Skin",
                "Enlarged Pores",
                "Pores",
                "Acne",
                "Blemishes",
                "Oiliness",
                "Aging",
                "Puffiness Under Eyes",
                "Pollution",
                "Scar Prevention",
            ]
            .into_iter()
            .map(str::to_owned),
        )
    }

    /// Canonical casing for a label, matched case-insensitively.
    ///
    /// Returns `None` for labels outside the vocabulary; callers pass
    /// such labels through unchanged rather than dropping them — the
    /// vocabulary normalizes casing, it does not censor.
    #[must_use]
    pub fn canonical(&self, label: &str) -> Option<&str> {
        let needle = label.to_lowercase();
        self.labels
            .iter()
            .find(|candidate| candidate.to_lowercase() == needle)
            .map(String::as_str)
    }

    /// Normalize a label: vocabulary casing when known, the input
    /// (trimmed) otherwise.
    #[must_use]
    pub fn normalize(&self, label: &str) -> String {
        let trimmed = label.trim();
        self.canonical(trimmed)
            .map_or_else(|| trimmed.to_owned(), str::to_owned)
    }

    /// All labels in vocabulary order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::default_vocabulary()
    }
}

/// Deduplicate labels case-insensitively, keeping first-seen order and
/// casing. Pure: always returns a fresh list.
#[must_use]
pub fn dedupe(labels: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut result = Vec::new();
    for label in labels {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_lowercase()) {
            result.push(trimmed.to_owned());
        }
    }
    result
}
