use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, VariantNames};

/// Declares a closed attribute set. Serde and strum agree on the wire
/// spelling, and `VARIANTS` lists the allowed values for schema checks.
macro_rules! design_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, VariantNames,
        )]
        #[serde(rename_all = "camelCase")]
        #[strum(serialize_all = "camelCase")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }
    };
}

design_enum!(Density { Spacious, Standard, Compact });
design_enum!(ContentFlow { SingleColumn, Grid, Asymmetrical });
design_enum!(HeaderStyle { Fixed, Sticky, Static });
design_enum!(HeaderLayout { ThreeColumnLogoCenter, LogoLeftNavRight, StackedCenter });
design_enum!(FooterLayout { SimpleCopyright, LinksWithSocial, MultiColumnWithLogo });
design_enum!(SchemeType { Light, Dark, LightMonochrome, DarkMonochrome, Vibrant, EarthTones });
design_enum!(HeadingFontFamily {
    Serif,
    #[serde(rename = "sans-serif")]
    #[strum(serialize = "sans-serif")]
    SansSerif,
    Script,
    Display,
});
design_enum!(BodyFontFamily {
    Serif,
    #[serde(rename = "sans-serif")]
    #[strum(serialize = "sans-serif")]
    SansSerif,
});
design_enum!(FontWeight { Light, Normal, Medium, Bold });
design_enum!(LetterSpacing { Tight, Normal, Wide });
design_enum!(TextTransform { None, Uppercase, Capitalize });
design_enum!(LineHeight { Tight, Normal, Relaxed });
design_enum!(OverallScale { Small, Standard, Large });
design_enum!(CornerRadius { Sharp, Rounded, Pill });
design_enum!(ButtonVariant { Filled, Outlined, TextLink });
design_enum!(ShadowStyle { None, Subtle, Deep });
design_enum!(BorderStyle { None, Thin, Thick });
design_enum!(ImageFraming { FullBleed, Card, Contained });
design_enum!(OverlayType { None, DarkGradient, LightGradient, ColorWash });
design_enum!(IconStyle { LineArt, Filled, DuoTone });
design_enum!(ScrollAnimation { None, FadeInUp, SlideInLeft, ZoomIn });
design_enum!(HoverEffectType { None, ColorChange, Scale, Lift });

impl SchemeType {
    /// Any scheme whose name contains "dark".
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark | Self::DarkMonochrome)
    }
}

// ── Colour ───────────────────────────────────────────────────────────────────

/// `#RRGGBB` colour. Construction rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(value: &str) -> Option<Self> {
        is_hex_color(value).then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn from_static(value: &'static str) -> Self {
        debug_assert!(is_hex_color(value));
        Self(value.to_string())
    }
}

/// Strict `#` + exactly six hex digits.
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_hex_color(&value) {
            Ok(Self(value))
        } else {
            Err(format!("invalid hex color {value:?} (expected #RRGGBB)"))
        }
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Moods and qualities ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "camelCase")]
pub enum Mood {
    Luxury,
    Minimalist,
    Corporate,
    Playful,
    Techy,
    Earthy,
    Brutalist,
}

impl Mood {
    pub const ALL: [Self; 7] = [
        Self::Luxury,
        Self::Minimalist,
        Self::Corporate,
        Self::Playful,
        Self::Techy,
        Self::Earthy,
        Self::Brutalist,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "camelCase")]
pub enum Quality {
    Modern,
    Classic,
    Nostalgic,
    Futuristic,
    Handmade,
}

impl Quality {
    pub const ALL: [Self; 5] = [
        Self::Modern,
        Self::Classic,
        Self::Nostalgic,
        Self::Futuristic,
        Self::Handmade,
    ];
}

/// The seven primary moods. `T` is a raw 0–10 score on catalog entries and a
/// scored estimate on inferred profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryMoods<T> {
    pub luxury: T,
    pub minimalist: T,
    pub corporate: T,
    pub playful: T,
    pub techy: T,
    pub earthy: T,
    pub brutalist: T,
}

impl<T> PrimaryMoods<T> {
    pub fn get(&self, mood: Mood) -> &T {
        match mood {
            Mood::Luxury => &self.luxury,
            Mood::Minimalist => &self.minimalist,
            Mood::Corporate => &self.corporate,
            Mood::Playful => &self.playful,
            Mood::Techy => &self.techy,
            Mood::Earthy => &self.earthy,
            Mood::Brutalist => &self.brutalist,
        }
    }

    /// Build all seven moods from a per-mood function, in declaration order.
    pub fn from_fn(mut f: impl FnMut(Mood) -> T) -> Self {
        Self {
            luxury: f(Mood::Luxury),
            minimalist: f(Mood::Minimalist),
            corporate: f(Mood::Corporate),
            playful: f(Mood::Playful),
            techy: f(Mood::Techy),
            earthy: f(Mood::Earthy),
            brutalist: f(Mood::Brutalist),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryQualities<T> {
    pub modern: T,
    pub classic: T,
    pub nostalgic: T,
    pub futuristic: T,
    pub handmade: T,
}

impl<T> SecondaryQualities<T> {
    pub fn get(&self, quality: Quality) -> &T {
        match quality {
            Quality::Modern => &self.modern,
            Quality::Classic => &self.classic,
            Quality::Nostalgic => &self.nostalgic,
            Quality::Futuristic => &self.futuristic,
            Quality::Handmade => &self.handmade,
        }
    }

    pub fn from_fn(mut f: impl FnMut(Quality) -> T) -> Self {
        Self {
            modern: f(Quality::Modern),
            classic: f(Quality::Classic),
            nostalgic: f(Quality::Nostalgic),
            futuristic: f(Quality::Futuristic),
            handmade: f(Quality::Handmade),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AestheticAndMood<M, Q> {
    pub primary_moods: PrimaryMoods<M>,
    pub secondary_qualities: SecondaryQualities<Q>,
}

// ── Layout ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderSchema {
    pub style: HeaderStyle,
    pub layout: HeaderLayout,
    pub show_announcement_bar: bool,
    pub show_search_bar: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterSchema {
    pub layout: FooterLayout,
    pub elements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutAndStructure {
    pub density: Density,
    pub content_flow: ContentFlow,
    pub header_schema: HeaderSchema,
    pub footer_schema: FooterSchema,
}

// ── Colour palette ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub scheme_type: SchemeType,
    pub primary_background_color: HexColor,
    pub primary_text_color: HexColor,
    pub accent_color: HexColor,
    pub secondary_accent_color: HexColor,
}

// ── Typography ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingType {
    pub font_family: HeadingFontFamily,
    pub font_weight: FontWeight,
    pub letter_spacing: LetterSpacing,
    pub text_transform: TextTransform,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyType {
    pub font_family: BodyFontFamily,
    pub font_weight: FontWeight,
    pub line_height: LineHeight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub heading: HeadingType,
    pub body: BodyType,
    pub overall_scale: OverallScale,
}

// ── Components ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonStyle {
    pub variant: ButtonVariant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStyling {
    pub corner_radius: CornerRadius,
    pub button_style: ButtonStyle,
    pub shadow_style: ShadowStyle,
    pub border_style: BorderStyle,
}

// ── Imagery ──────────────────────────────────────────────────────────────────

/// Hero overlay. `I` is the 0–100 authored intensity on catalog entries and
/// the 0–1 intensity on inferred profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroImageOverlay<I> {
    #[serde(rename = "type")]
    pub kind: OverlayType,
    pub intensity: I,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageryAndMedia<I> {
    pub image_framing: ImageFraming,
    pub hero_image_overlay: HeroImageOverlay<I>,
    pub icon_style: IconStyle,
}

// ── Motion ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverEffect {
    pub target: Vec<String>,
    #[serde(rename = "type")]
    pub kind: HoverEffectType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MicroInteractionsAndAnimation {
    pub use_scroll_animation: bool,
    pub scroll_animation_type: ScrollAnimation,
    pub hover_effect: HoverEffect,
}

// ── Catalog entry ────────────────────────────────────────────────────────────

/// One reference design: a complete point in the design-attribute space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandDesign {
    pub name: String,
    pub image: String,
    pub aesthetic_and_mood: AestheticAndMood<u8, u8>,
    pub layout_and_structure: LayoutAndStructure,
    pub color_palette: ColorPalette,
    pub typography: Typography,
    pub component_styling: ComponentStyling,
    pub imagery_and_media: ImageryAndMedia<u8>,
    pub micro_interactions_and_animation: MicroInteractionsAndAnimation,
}

impl BrandDesign {
    pub fn mood(&self, mood: Mood) -> u8 {
        *self.aesthetic_and_mood.primary_moods.get(mood)
    }

    pub fn quality(&self, quality: Quality) -> u8 {
        *self.aesthetic_and_mood.secondary_qualities.get(quality)
    }
}
