//! Presentation settings
//!
//! Nothing here touches the simulation; these only change what gets painted.

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    Medium,
    #[default]
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Background stars drawn per frame
    pub fn star_count(&self) -> usize {
        match self {
            QualityPreset::Low => 0,
            QualityPreset::Medium => 25,
            QualityPreset::High => 50,
        }
    }

    /// Whether platforms get their stripe decoration
    pub fn platform_stripes(&self) -> bool {
        !matches!(self, QualityPreset::Low)
    }
}

/// Render preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Player jump bob / walk wobble
    pub animation_effects: bool,
    /// Reduced motion (freezes stars and cosmetic jitter)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::High,
            animation_effects: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Build settings from a URL query string like `?quality=low&motion=reduced`
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "quality" => {
                    if let Some(preset) = QualityPreset::from_str(value) {
                        settings.quality = preset;
                    } else {
                        log::warn!("Unknown quality preset '{value}'");
                    }
                }
                "motion" => settings.reduced_motion = value == "reduced",
                "effects" => settings.animation_effects = value != "off",
                _ => {}
            }
        }
        settings
    }

    /// Effective cosmetic jitter (respects reduced_motion)
    pub fn effective_animation(&self) -> bool {
        self.animation_effects && !self.reduced_motion
    }
}
