//! Contextual skin profile parsed from manual overrides.
//!
//! Estheticians often record skin type, sensitivity, and pore condition
//! alongside the photograph. These labels adjust the trending subscores
//! but never the raw image metrics. Parsing is lenient: unrecognized or
//! absent input falls back to the Normal bucket.

use serde::{Deserialize, Serialize};

/// Fitzpatrick-independent skin type bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkinType {
    /// Balanced sebum production.
    #[default]
    Normal,
    /// Low sebum, prone to tightness and flaking.
    Dry,
    /// High sebum production.
    Oily,
    /// Oily T-zone with normal-to-dry cheeks.
    Combination,
    /// Reactive to products and environment.
    Sensitive,
}

impl SkinType {
    /// Parse a manual skin-type label, defaulting to `Normal`.
    #[must_use]
    pub fn parse(label: Option<&str>) -> Self {
        match lowercased(label).as_deref() {
            Some(l) if l.contains("combination") => Self::Combination,
            Some(l) if l.contains("oily") => Self::Oily,
            Some(l) if l.contains("dry") => Self::Dry,
            Some(l) if l.contains("sensitive") => Self::Sensitive,
            _ => Self::Normal,
        }
    }
}

/// Reported reactivity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensitivityLevel {
    /// Rarely reactive.
    Low,
    /// Typical reactivity.
    #[default]
    Normal,
    /// Frequently reactive.
    High,
}

impl SensitivityLevel {
    /// Parse a manual sensitivity label, defaulting to `Normal`.
    #[must_use]
    pub fn parse(label: Option<&str>) -> Self {
        match lowercased(label).as_deref() {
            Some(l) if l.contains("high") => Self::High,
            Some(l) if l.contains("low") => Self::Low,
            _ => Self::Normal,
        }
    }
}

/// Reported pore condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoreCondition {
    /// Barely visible pores.
    Fine,
    /// Typical pore visibility.
    #[default]
    Normal,
    /// Visibly enlarged pores.
    Enlarged,
}

impl PoreCondition {
    /// Parse a manual pore-condition label, defaulting to `Normal`.
    #[must_use]
    pub fn parse(label: Option<&str>) -> Self {
        match lowercased(label).as_deref() {
            Some(l) if l.contains("enlarged") || l.contains("large") => Self::Enlarged,
            Some(l) if l.contains("fine") => Self::Fine,
            _ => Self::Normal,
        }
    }
}

/// The combined contextual profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinProfile {
    /// Skin type bucket.
    pub skin_type: SkinType,
    /// Reactivity level.
    pub sensitivity: SensitivityLevel,
    /// Pore condition.
    pub pore_condition: PoreCondition,
    /// Reported hydration on a 1–10 scale. Carried through for
    /// downstream consumers; does not alter the subscores.
    pub hydration_level: Option<u8>,
}

impl SkinProfile {
    /// Parse the three optional contextual labels.
    #[must_use]
    pub fn from_labels(
        skin_type: Option<&str>,
        sensitivity: Option<&str>,
        pore_condition: Option<&str>,
    ) -> Self {
        Self {
            skin_type: SkinType::parse(skin_type),
            sensitivity: SensitivityLevel::parse(sensitivity),
            pore_condition: PoreCondition::parse(pore_condition),
            hydration_level: None,
        }
    }

    /// Attach a manually reported hydration level ("7", "7/10", ...).
    ///
    /// Values that do not start with a 1–10 integer are ignored.
    #[must_use]
    pub fn with_hydration(mut self, label: Option<&str>) -> Self {
        self.hydration_level = label
            .map(str::trim)
            .and_then(|l| l.split(['/', ' ']).next())
            .and_then(|l| l.parse::<u8>().ok())
            .filter(|&level| (1..=10).contains(&level));
        self
    }
}

/// Lowercase a non-empty label.
fn lowercased(label: Option<&str>) -> Option<String> {
    label
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_lowercase)
}
