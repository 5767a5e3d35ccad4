//! Declarative description of the profile wire format.
//!
//! Each rule names a dotted field path and the shape its value must have.
//! Rules are ordered so that a parent object is always checked before its
//! children, which keeps the first reported path the most specific useful one.

use crate::catalog::{
    BodyFontFamily, BorderStyle, ButtonVariant, ContentFlow, CornerRadius, Density, FontWeight,
    FooterLayout, HeaderLayout, HeaderStyle, HeadingFontFamily, HoverEffectType, IconStyle,
    ImageFraming, LetterSpacing, LineHeight, Mood, OverallScale, OverlayType, Quality, SchemeType,
    ScrollAnimation, ShadowStyle, TextTransform,
};
use std::sync::LazyLock;
use strum::VariantNames;

pub const TOP_LEVEL_GROUPS: [&str; 8] = [
    "metadata",
    "aestheticAndMood",
    "layoutAndStructure",
    "colorPalette",
    "typography",
    "componentStyling",
    "imageryAndMedia",
    "microInteractionsAndAnimation",
];

const INFERENCE_METHODS: &[&str] = &["hybrid"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Object,
    /// Non-empty string.
    Text,
    Number { min: f64, max: f64 },
    /// Non-negative integer.
    Count,
    Flag,
    StringList,
    OneOf(&'static [&'static str]),
    HexColor,
    /// The one repairable field: numeric strings are coerced and the value
    /// is clamped into [0,1].
    Intensity,
}

impl FieldKind {
    const SCORE: Self = Self::Number { min: 0.0, max: 10.0 };
    const UNIT: Self = Self::Number { min: 0.0, max: 1.0 };

    /// Failure text appended to the dotted path.
    pub fn requirement(&self) -> String {
        match self {
            Self::Object => "is required and must be an object".into(),
            Self::Text => "is required and must be a non-empty string".into(),
            Self::Number { min, max } => format!("must be a number between {min} and {max}"),
            Self::Count => "must be a non-negative integer".into(),
            Self::Flag => "must be a boolean".into(),
            Self::StringList => "must be an array of strings".into(),
            Self::OneOf(allowed) => format!("must be one of: {}", allowed.join(", ")),
            Self::HexColor => "must be a valid hex color (e.g., #FFFFFF)".into(),
            Self::Intensity => "must be a number".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub path: String,
    pub kind: FieldKind,
}

/// Every field of a profile, in validation order.
pub static PROFILE_SCHEMA: LazyLock<Vec<FieldRule>> = LazyLock::new(build_schema);

struct SchemaBuilder {
    rules: Vec<FieldRule>,
}

impl SchemaBuilder {
    fn field(&mut self, path: impl Into<String>, kind: FieldKind) -> &mut Self {
        self.rules.push(FieldRule {
            path: path.into(),
            kind,
        });
        self
    }

    fn group(&mut self, prefix: &str, fields: &[(&str, FieldKind)]) -> &mut Self {
        if !self.rules.iter().any(|r| r.path == prefix) {
            self.field(prefix, FieldKind::Object);
        }
        for (name, kind) in fields {
            self.field(format!("{prefix}.{name}"), *kind);
        }
        self
    }
}

fn build_schema() -> Vec<FieldRule> {
    use FieldKind::{Count, Flag, HexColor, Intensity, Object, OneOf, StringList, Text};

    let mut schema = SchemaBuilder { rules: Vec::new() };
    for group in TOP_LEVEL_GROUPS {
        schema.field(group, Object);
    }

    schema
        .group(
            "metadata",
            &[
                ("profileId", Text),
                ("userId", Text),
                ("createdAt", Text),
                ("schemaVersion", Text),
            ],
        )
        .group(
            "metadata.inference",
            &[
                ("method", OneOf(INFERENCE_METHODS)),
                ("confidence", FieldKind::UNIT),
                ("totalSwipes", Count),
                ("likedCount", Count),
                ("dislikedCount", Count),
                ("aiRefined", StringList),
            ],
        );

    schema.field("aestheticAndMood.primaryMoods", Object);
    for mood in Mood::ALL {
        schema.group(
            &format!("aestheticAndMood.primaryMoods.{mood}"),
            &[("value", FieldKind::SCORE), ("confidence", FieldKind::UNIT)],
        );
    }
    schema.field("aestheticAndMood.secondaryQualities", Object);
    for quality in Quality::ALL {
        schema.field(
            format!("aestheticAndMood.secondaryQualities.{quality}"),
            FieldKind::SCORE,
        );
    }

    schema
        .group(
            "layoutAndStructure",
            &[
                ("density", OneOf(Density::VARIANTS)),
                ("contentFlow", OneOf(ContentFlow::VARIANTS)),
            ],
        )
        .group(
            "layoutAndStructure.headerSchema",
            &[
                ("style", OneOf(HeaderStyle::VARIANTS)),
                ("layout", OneOf(HeaderLayout::VARIANTS)),
                ("showAnnouncementBar", Flag),
                ("showSearchBar", Flag),
            ],
        )
        .group(
            "layoutAndStructure.footerSchema",
            &[
                ("layout", OneOf(FooterLayout::VARIANTS)),
                ("elements", StringList),
            ],
        )
        .group(
            "colorPalette",
            &[
                ("schemeType", OneOf(SchemeType::VARIANTS)),
                ("primaryBackgroundColor", HexColor),
                ("primaryTextColor", HexColor),
                ("accentColor", HexColor),
                ("secondaryAccentColor", HexColor),
            ],
        )
        .group(
            "typography",
            &[("overallScale", OneOf(OverallScale::VARIANTS))],
        )
        .group(
            "typography.heading",
            &[
                ("fontFamily", OneOf(HeadingFontFamily::VARIANTS)),
                ("fontWeight", OneOf(FontWeight::VARIANTS)),
                ("letterSpacing", OneOf(LetterSpacing::VARIANTS)),
                ("textTransform", OneOf(TextTransform::VARIANTS)),
            ],
        )
        .group(
            "typography.body",
            &[
                ("fontFamily", OneOf(BodyFontFamily::VARIANTS)),
                ("fontWeight", OneOf(FontWeight::VARIANTS)),
                ("lineHeight", OneOf(LineHeight::VARIANTS)),
            ],
        )
        .group(
            "componentStyling",
            &[
                ("cornerRadius", OneOf(CornerRadius::VARIANTS)),
                ("shadowStyle", OneOf(ShadowStyle::VARIANTS)),
                ("borderStyle", OneOf(BorderStyle::VARIANTS)),
            ],
        )
        .group(
            "componentStyling.buttonStyle",
            &[("variant", OneOf(ButtonVariant::VARIANTS))],
        )
        .group(
            "imageryAndMedia",
            &[
                ("imageFraming", OneOf(ImageFraming::VARIANTS)),
                ("iconStyle", OneOf(IconStyle::VARIANTS)),
            ],
        )
        .group(
            "imageryAndMedia.heroImageOverlay",
            &[("type", OneOf(OverlayType::VARIANTS)), ("intensity", Intensity)],
        )
        .group(
            "microInteractionsAndAnimation",
            &[
                ("useScrollAnimation", Flag),
                ("scrollAnimationType", OneOf(ScrollAnimation::VARIANTS)),
            ],
        )
        .group(
            "microInteractionsAndAnimation.hoverEffect",
            &[
                ("target", StringList),
                ("type", OneOf(HoverEffectType::VARIANTS)),
            ],
        );

    schema.rules
}
