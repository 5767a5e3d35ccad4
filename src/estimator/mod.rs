//! Deterministic preference estimator.
//!
//! Averages continuous scores over the liked designs and takes the mode of
//! every categorical attribute. The output depends only on the session: the
//! profile id is a digest of the history and `createdAt` is the last swipe.

pub mod stats;

use crate::catalog::{
    AestheticAndMood, BodyType, BrandDesign, ButtonStyle, ColorPalette, ComponentStyling,
    FooterSchema, HeaderSchema, HeadingType, HeroImageOverlay, HexColor, HoverEffect,
    ImageryAndMedia, LayoutAndStructure, MicroInteractionsAndAnimation, Mood, PrimaryMoods,
    Quality, SchemeType, SecondaryQualities, Typography,
};
use crate::error::InferenceError;
use crate::profile::{
    InferenceMethod, InferenceRecord, MoodScore, PreferenceProfile, ProfileMetadata,
    SCHEMA_VERSION,
};
use crate::session::{SwipeResult, SwipeSession};
use chrono::SecondsFormat;
use sha2::{Digest, Sha256};
use stats::{ModeEstimate, majority, mean, mode, population_std_dev, round_to, spread_confidence};

/// Parameters below this confidence are the ones the AI path reasons about.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.70;

const DEFAULT_ACCENT: &str = "#3B82F6";
const DARK_BACKGROUND: &str = "#000000";
const DARK_TEXT: &str = "#FFFFFF";
const DARK_SECONDARY_ACCENT: &str = "#1F1F1F";
const LIGHT_BACKGROUND: &str = "#FFFFFF";
const LIGHT_TEXT: &str = "#000000";
const LIGHT_SECONDARY_ACCENT: &str = "#F3F4F6";

const FOOTER_ELEMENTS: [&str; 4] = ["logo", "linkColumns", "socialIcons", "copyright"];
const HOVER_TARGETS: [&str; 2] = ["buttons", "cards"];

/// Estimate a profile from the session's liked designs.
pub fn estimate(session: &SwipeSession) -> Result<PreferenceProfile, InferenceError> {
    estimate_swipes(session.user_id(), session.swipes())
}

pub fn estimate_swipes(
    user_id: &str,
    swipes: &[SwipeResult],
) -> Result<PreferenceProfile, InferenceError> {
    let liked = LikedDesigns::from_swipes(swipes).ok_or(InferenceError::NoLikedSwipes {
        total: swipes.len(),
    })?;
    let liked_count = liked.designs.len();

    tracing::info!(
        total = swipes.len(),
        liked = liked_count,
        disliked = swipes.len() - liked_count,
        "Statistical preference inference started"
    );

    let mut confidences: Vec<(String, f64)> = Vec::new();

    let primary_moods = PrimaryMoods::from_fn(|m| {
        let values = liked.values(|d| f64::from(d.mood(m)));
        let std_dev = population_std_dev(&values);
        let score = MoodScore {
            value: round_to(mean(&values), 1),
            confidence: spread_confidence(std_dev),
        };
        tracing::debug!(mood = %m, mean = score.value, std_dev, "mood average");
        confidences.push((m.to_string(), score.confidence));
        score
    });
    let secondary_qualities =
        SecondaryQualities::from_fn(|q| round_to(mean(&liked.values(|d| f64::from(d.quality(q)))), 1));

    let mut track = |name: &str, confidence: f64| confidences.push((name.to_string(), confidence));

    let density = liked.mode(|d| d.layout_and_structure.density);
    let content_flow = liked.mode(|d| d.layout_and_structure.content_flow);
    let header_style = liked.mode(|d| d.layout_and_structure.header_schema.style);
    let header_layout = liked.mode(|d| d.layout_and_structure.header_schema.layout);
    let footer_layout = liked.mode(|d| d.layout_and_structure.footer_schema.layout);
    let scheme = liked.mode(|d| d.color_palette.scheme_type);
    let heading_family = liked.mode(|d| d.typography.heading.font_family);
    let heading_weight = liked.mode(|d| d.typography.heading.font_weight);
    let letter_spacing = liked.mode(|d| d.typography.heading.letter_spacing);
    let text_transform = liked.mode(|d| d.typography.heading.text_transform);
    let body_family = liked.mode(|d| d.typography.body.font_family);
    let body_weight = liked.mode(|d| d.typography.body.font_weight);
    let line_height = liked.mode(|d| d.typography.body.line_height);
    let overall_scale = liked.mode(|d| d.typography.overall_scale);
    let corner_radius = liked.mode(|d| d.component_styling.corner_radius);
    let button_variant = liked.mode(|d| d.component_styling.button_style.variant);
    let shadow_style = liked.mode(|d| d.component_styling.shadow_style);
    let border_style = liked.mode(|d| d.component_styling.border_style);
    let image_framing = liked.mode(|d| d.imagery_and_media.image_framing);
    let overlay_type = liked.mode(|d| d.imagery_and_media.hero_image_overlay.kind);
    let icon_style = liked.mode(|d| d.imagery_and_media.icon_style);
    let scroll_type = liked.mode(|d| d.micro_interactions_and_animation.scroll_animation_type);
    let hover_type = liked.mode(|d| d.micro_interactions_and_animation.hover_effect.kind);

    track("density", density.confidence);
    track("contentFlow", content_flow.confidence);
    track("headerSchema.style", header_style.confidence);
    track("headerSchema.layout", header_layout.confidence);
    track("footerSchema.layout", footer_layout.confidence);
    track("colorScheme", scheme.confidence);
    track("heading.fontFamily", heading_family.confidence);
    track("heading.fontWeight", heading_weight.confidence);
    track("heading.letterSpacing", letter_spacing.confidence);
    track("heading.textTransform", text_transform.confidence);
    track("body.fontFamily", body_family.confidence);
    track("body.fontWeight", body_weight.confidence);
    track("body.lineHeight", line_height.confidence);
    track("overallScale", overall_scale.confidence);
    track("cornerRadius", corner_radius.confidence);
    track("buttonStyle.variant", button_variant.confidence);
    track("shadowStyle", shadow_style.confidence);
    track("borderStyle", border_style.confidence);
    track("imageFraming", image_framing.confidence);
    track("heroImageOverlay.type", overlay_type.confidence);
    track("iconStyle", icon_style.confidence);
    track("scrollAnimationType", scroll_type.confidence);
    track("hoverEffect.type", hover_type.confidence);

    tracing::debug!(
        density = %density.value,
        density_frequency = density.frequency,
        content_flow = %content_flow.value,
        content_flow_frequency = content_flow.frequency,
        scheme = %scheme.value,
        scheme_frequency = scheme.frequency,
        liked = liked_count,
        "frequency analysis"
    );

    let low_confidence: Vec<&str> = confidences
        .iter()
        .filter(|(_, c)| *c < LOW_CONFIDENCE_THRESHOLD)
        .map(|(name, _)| name.as_str())
        .collect();
    if !low_confidence.is_empty() {
        tracing::debug!(
            parameters = %low_confidence.join(", "),
            "low-confidence parameters resolved by frequency only"
        );
    }

    let overall_confidence = round_to(
        (primary_moods.luxury.confidence
            + primary_moods.minimalist.confidence
            + density.confidence
            + content_flow.confidence)
            / 4.0,
        2,
    );

    let intensity_percent = mean(&liked.values(|d| {
        f64::from(d.imagery_and_media.hero_image_overlay.intensity)
    }))
    .round();

    let profile = PreferenceProfile {
        metadata: ProfileMetadata {
            profile_id: profile_id(swipes),
            user_id: user_id.to_string(),
            created_at: created_at(swipes),
            schema_version: SCHEMA_VERSION.to_string(),
            inference: InferenceRecord {
                method: InferenceMethod::Hybrid,
                confidence: overall_confidence,
                total_swipes: count(swipes.len()),
                liked_count: count(liked_count),
                disliked_count: count(swipes.len() - liked_count),
                ai_refined: Vec::new(),
            },
        },
        aesthetic_and_mood: AestheticAndMood {
            primary_moods,
            secondary_qualities,
        },
        layout_and_structure: LayoutAndStructure {
            density: density.value,
            content_flow: content_flow.value,
            header_schema: HeaderSchema {
                style: header_style.value,
                layout: header_layout.value,
                show_announcement_bar: liked
                    .flag(|d| d.layout_and_structure.header_schema.show_announcement_bar),
                show_search_bar: liked.flag(|d| d.layout_and_structure.header_schema.show_search_bar),
            },
            footer_schema: FooterSchema {
                layout: footer_layout.value,
                elements: FOOTER_ELEMENTS.iter().map(ToString::to_string).collect(),
            },
        },
        color_palette: derive_palette(scheme.value, &liked),
        typography: Typography {
            heading: HeadingType {
                font_family: heading_family.value,
                font_weight: heading_weight.value,
                letter_spacing: letter_spacing.value,
                text_transform: text_transform.value,
            },
            body: BodyType {
                font_family: body_family.value,
                font_weight: body_weight.value,
                line_height: line_height.value,
            },
            overall_scale: overall_scale.value,
        },
        component_styling: ComponentStyling {
            corner_radius: corner_radius.value,
            button_style: ButtonStyle {
                variant: button_variant.value,
            },
            shadow_style: shadow_style.value,
            border_style: border_style.value,
        },
        imagery_and_media: ImageryAndMedia {
            image_framing: image_framing.value,
            hero_image_overlay: HeroImageOverlay {
                kind: overlay_type.value,
                intensity: intensity_percent / 100.0,
            },
            icon_style: icon_style.value,
        },
        micro_interactions_and_animation: MicroInteractionsAndAnimation {
            use_scroll_animation: liked.flag(|d| d.micro_interactions_and_animation.use_scroll_animation),
            scroll_animation_type: scroll_type.value,
            hover_effect: HoverEffect {
                target: HOVER_TARGETS.iter().map(ToString::to_string).collect(),
                kind: hover_type.value,
            },
        },
    };

    tracing::info!(
        confidence = profile.metadata.inference.confidence,
        "Statistical preference inference complete"
    );

    Ok(profile)
}

/// Colours are categorical: the vibrant accent is reused, never averaged.
fn derive_palette(scheme: SchemeType, liked: &LikedDesigns<'_>) -> ColorPalette {
    let dark = scheme.is_dark();
    let accent = if scheme == SchemeType::Vibrant {
        liked
            .designs
            .iter()
            .find(|d| d.color_palette.scheme_type == SchemeType::Vibrant)
            .map_or_else(
                || HexColor::from_static(DEFAULT_ACCENT),
                |d| d.color_palette.accent_color.clone(),
            )
    } else {
        HexColor::from_static(DEFAULT_ACCENT)
    };

    ColorPalette {
        scheme_type: scheme,
        primary_background_color: HexColor::from_static(if dark {
            DARK_BACKGROUND
        } else {
            LIGHT_BACKGROUND
        }),
        primary_text_color: HexColor::from_static(if dark { DARK_TEXT } else { LIGHT_TEXT }),
        accent_color: accent,
        secondary_accent_color: HexColor::from_static(if dark {
            DARK_SECONDARY_ACCENT
        } else {
            LIGHT_SECONDARY_ACCENT
        }),
    }
}

/// Liked designs in swipe order. Never empty.
struct LikedDesigns<'a> {
    first: &'a BrandDesign,
    designs: Vec<&'a BrandDesign>,
}

impl<'a> LikedDesigns<'a> {
    fn from_swipes(swipes: &'a [SwipeResult]) -> Option<Self> {
        let designs: Vec<&BrandDesign> = swipes
            .iter()
            .filter(|s| s.liked)
            .map(|s| &s.brand_design)
            .collect();
        let first = *designs.first()?;
        Some(Self { first, designs })
    }

    fn values(&self, f: impl Fn(&BrandDesign) -> f64) -> Vec<f64> {
        self.designs.iter().map(|d| f(d)).collect()
    }

    fn mode<T: Copy + PartialEq>(&self, f: impl Fn(&BrandDesign) -> T) -> ModeEstimate<T> {
        let values: Vec<T> = self.designs.iter().map(|d| f(d)).collect();
        mode(&values).unwrap_or_else(|| ModeEstimate {
            value: f(self.first),
            frequency: 1,
            confidence: 1.0,
        })
    }

    fn flag(&self, f: impl Fn(&BrandDesign) -> bool) -> bool {
        let flags: Vec<bool> = self.designs.iter().map(|d| f(d)).collect();
        majority(&flags)
    }
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn profile_id(swipes: &[SwipeResult]) -> String {
    let mut hasher = Sha256::new();
    for swipe in swipes {
        hasher.update(swipe.brand_name.as_bytes());
        hasher.update([0, u8::from(swipe.liked), 0]);
        hasher.update(swipe.timestamp.timestamp_millis().to_be_bytes());
    }
    let digest = hex::encode(hasher.finalize());
    format!("profile_{}", &digest[..16])
}

/// Timestamp of the final swipe in history order.
fn created_at(swipes: &[SwipeResult]) -> String {
    swipes
        .last()
        .map(|s| s.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}
