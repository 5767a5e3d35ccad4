//! Inferred design-preference profile.
//!
//! Same attribute groups as a [`BrandDesign`](crate::catalog::BrandDesign),
//! with a confidence on every primary mood, averaged secondary qualities,
//! a 0–1 hero-overlay intensity and a provenance `metadata` block.

use crate::catalog::{
    AestheticAndMood, ColorPalette, ComponentStyling, ImageryAndMedia, LayoutAndStructure,
    MicroInteractionsAndAnimation, Mood, Quality, Typography,
};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Profile-format revision written by both inference paths.
pub const SCHEMA_VERSION: &str = "2.1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, Default)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InferenceMethod {
    #[default]
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodScore {
    pub value: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceRecord {
    pub method: InferenceMethod,
    pub confidence: f64,
    pub total_swipes: u32,
    pub liked_count: u32,
    pub disliked_count: u32,
    /// Parameters that needed AI reasoning because deterministic confidence was low.
    pub ai_refined: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMetadata {
    pub profile_id: String,
    pub user_id: String,
    pub created_at: String,
    pub schema_version: String,
    pub inference: InferenceRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceProfile {
    pub metadata: ProfileMetadata,
    pub aesthetic_and_mood: AestheticAndMood<MoodScore, f64>,
    pub layout_and_structure: LayoutAndStructure,
    pub color_palette: ColorPalette,
    pub typography: Typography,
    pub component_styling: ComponentStyling,
    pub imagery_and_media: ImageryAndMedia<f64>,
    pub micro_interactions_and_animation: MicroInteractionsAndAnimation,
}

impl PreferenceProfile {
    pub fn mood(&self, mood: Mood) -> MoodScore {
        *self.aesthetic_and_mood.primary_moods.get(mood)
    }

    pub fn quality(&self, quality: Quality) -> f64 {
        *self.aesthetic_and_mood.secondary_qualities.get(quality)
    }

    /// Pretty JSON, the form the page-generation prompt embeds verbatim.
    pub fn to_prompt_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Check the numeric profile invariants; returns the first violation.
    pub fn check_invariants(&self) -> Result<(), String> {
        let inference = &self.metadata.inference;
        if inference.liked_count + inference.disliked_count != inference.total_swipes {
            return Err(format!(
                "likedCount {} + dislikedCount {} != totalSwipes {}",
                inference.liked_count, inference.disliked_count, inference.total_swipes
            ));
        }
        if !unit(inference.confidence) {
            return Err(format!(
                "overall confidence {} outside [0,1]",
                inference.confidence
            ));
        }
        for mood in Mood::ALL {
            let score = self.mood(mood);
            if !(0.0..=10.0).contains(&score.value) {
                return Err(format!("{mood} value {} outside [0,10]", score.value));
            }
            if !unit(score.confidence) {
                return Err(format!(
                    "{mood} confidence {} outside [0,1]",
                    score.confidence
                ));
            }
        }
        for quality in Quality::ALL {
            let value = self.quality(quality);
            if !(0.0..=10.0).contains(&value) {
                return Err(format!("{quality} value {value} outside [0,10]"));
            }
        }
        let intensity = self.imagery_and_media.hero_image_overlay.intensity;
        if !unit(intensity) {
            return Err(format!("hero overlay intensity {intensity} outside [0,1]"));
        }
        Ok(())
    }
}

fn unit(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}
