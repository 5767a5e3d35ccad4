use super::engine::{INFERENCE_TEMPLATE, PromptEngine};
use crate::catalog::{
    BodyFontFamily, BorderStyle, ButtonVariant, ContentFlow, CornerRadius, Density, FontWeight,
    FooterLayout, HeaderLayout, HeaderStyle, HeadingFontFamily, HoverEffectType, IconStyle,
    ImageFraming, LetterSpacing, LineHeight, Mood, OverallScale, OverlayType, Quality, SchemeType,
    ScrollAnimation, ShadowStyle, TextTransform,
};
use crate::estimator::LOW_CONFIDENCE_THRESHOLD;
use crate::profile::SCHEMA_VERSION;
use crate::session::{SwipeResult, SwipeSession};
use serde::Serialize;
use std::collections::BTreeMap;
use strum::VariantNames;
use tera::Context;

#[derive(Serialize)]
struct Section<'a> {
    title: &'static str,
    swipes: Vec<&'a SwipeResult>,
}

#[derive(Serialize)]
struct Feature {
    path: &'static str,
    options: String,
}

/// Build the analysis request for one session.
pub fn compile_inference_prompt(session: &SwipeSession) -> anyhow::Result<String> {
    compile_for_swipes(session.user_id(), session.swipes())
}

pub fn compile_for_swipes(user_id: &str, swipes: &[SwipeResult]) -> anyhow::Result<String> {
    let engine = PromptEngine::new()?;
    let (liked, disliked): (Vec<&SwipeResult>, Vec<&SwipeResult>) =
        swipes.iter().partition(|s| s.liked);

    let mut ctx = Context::new();
    ctx.insert("user_id", user_id);
    ctx.insert("schema_version", SCHEMA_VERSION);
    ctx.insert("total", &swipes.len());
    ctx.insert("liked_count", &liked.len());
    ctx.insert("disliked_count", &disliked.len());
    ctx.insert("low_confidence", &format!("{LOW_CONFIDENCE_THRESHOLD:.2}"));
    ctx.insert(
        "moods",
        &Mood::ALL.iter().map(ToString::to_string).collect::<Vec<_>>(),
    );
    ctx.insert(
        "qualities",
        &Quality::ALL.iter().map(ToString::to_string).collect::<Vec<_>>(),
    );
    ctx.insert("options", &enum_options());
    ctx.insert("features", &frequency_features());
    ctx.insert(
        "sections",
        &[
            Section {
                title: "LIKED",
                swipes: liked,
            },
            Section {
                title: "DISLIKED",
                swipes: disliked,
            },
        ],
    );

    let prompt = engine.render(INFERENCE_TEMPLATE, &ctx)?;
    tracing::debug!(chars = prompt.len(), swipes = swipes.len(), "inference prompt compiled");
    Ok(prompt)
}

fn enum_options() -> BTreeMap<&'static str, String> {
    [
        ("density", Density::VARIANTS),
        ("contentFlow", ContentFlow::VARIANTS),
        ("headerStyle", HeaderStyle::VARIANTS),
        ("headerLayout", HeaderLayout::VARIANTS),
        ("footerLayout", FooterLayout::VARIANTS),
        ("schemeType", SchemeType::VARIANTS),
        ("headingFontFamily", HeadingFontFamily::VARIANTS),
        ("bodyFontFamily", BodyFontFamily::VARIANTS),
        ("fontWeight", FontWeight::VARIANTS),
        ("letterSpacing", LetterSpacing::VARIANTS),
        ("textTransform", TextTransform::VARIANTS),
        ("lineHeight", LineHeight::VARIANTS),
        ("overallScale", OverallScale::VARIANTS),
        ("cornerRadius", CornerRadius::VARIANTS),
        ("buttonVariant", ButtonVariant::VARIANTS),
        ("shadowStyle", ShadowStyle::VARIANTS),
        ("borderStyle", BorderStyle::VARIANTS),
        ("imageFraming", ImageFraming::VARIANTS),
        ("overlayType", OverlayType::VARIANTS),
        ("iconStyle", IconStyle::VARIANTS),
        ("scrollAnimation", ScrollAnimation::VARIANTS),
        ("hoverEffect", HoverEffectType::VARIANTS),
    ]
    .into_iter()
    .map(|(key, variants)| (key, variants.join("/")))
    .collect()
}

fn frequency_features() -> Vec<Feature> {
    let quoted = |variants: &[&str]| {
        variants
            .iter()
            .map(|v| format!("\"{v}\""))
            .collect::<Vec<_>>()
            .join(" vs ")
    };
    [
        ("layoutAndStructure.density", Density::VARIANTS),
        ("layoutAndStructure.contentFlow", ContentFlow::VARIANTS),
        ("layoutAndStructure.headerSchema.style", HeaderStyle::VARIANTS),
        ("layoutAndStructure.headerSchema.layout", HeaderLayout::VARIANTS),
        ("layoutAndStructure.footerSchema.layout", FooterLayout::VARIANTS),
        ("colorPalette.schemeType", SchemeType::VARIANTS),
        ("typography.heading.fontFamily", HeadingFontFamily::VARIANTS),
        ("typography.heading.fontWeight", FontWeight::VARIANTS),
        ("typography.heading.letterSpacing", LetterSpacing::VARIANTS),
        ("typography.heading.textTransform", TextTransform::VARIANTS),
        ("typography.body.fontFamily", BodyFontFamily::VARIANTS),
        ("typography.body.fontWeight", FontWeight::VARIANTS),
        ("typography.body.lineHeight", LineHeight::VARIANTS),
        ("typography.overallScale", OverallScale::VARIANTS),
        ("componentStyling.cornerRadius", CornerRadius::VARIANTS),
        ("componentStyling.buttonStyle.variant", ButtonVariant::VARIANTS),
        ("componentStyling.shadowStyle", ShadowStyle::VARIANTS),
        ("componentStyling.borderStyle", BorderStyle::VARIANTS),
        ("imageryAndMedia.imageFraming", ImageFraming::VARIANTS),
        ("imageryAndMedia.heroImageOverlay.type", OverlayType::VARIANTS),
        ("imageryAndMedia.iconStyle", IconStyle::VARIANTS),
        (
            "microInteractionsAndAnimation.scrollAnimationType",
            ScrollAnimation::VARIANTS,
        ),
        (
            "microInteractionsAndAnimation.hoverEffect.type",
            HoverEffectType::VARIANTS,
        ),
    ]
    .into_iter()
    .map(|(path, variants)| Feature {
        path,
        options: quoted(variants),
    })
    .collect()
}
