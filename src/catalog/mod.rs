//! Built-in reference designs.
//!
//! The catalog is decoded once from embedded JSON, checked against the
//! attribute invariants, and shared read-only afterwards.

pub mod design;

pub use design::{
    AestheticAndMood, BodyFontFamily, BodyType, BorderStyle, BrandDesign, ButtonStyle,
    ButtonVariant, ColorPalette, ComponentStyling, ContentFlow, CornerRadius, Density,
    FontWeight, FooterLayout, FooterSchema, HeaderLayout, HeaderSchema, HeaderStyle,
    HeadingFontFamily, HeadingType, HeroImageOverlay, HexColor, HoverEffect, HoverEffectType,
    IconStyle, ImageFraming, ImageryAndMedia, LayoutAndStructure, LetterSpacing, LineHeight,
    MicroInteractionsAndAnimation, Mood, OverallScale, OverlayType, PrimaryMoods, Quality,
    SchemeType, ScrollAnimation, SecondaryQualities, ShadowStyle, TextTransform, Typography,
    is_hex_color,
};

use crate::error::CatalogError;
use std::sync::LazyLock;

const BUILTIN_CATALOG: &str = include_str!("brands.json");

static BUILTIN: LazyLock<Result<Catalog, CatalogError>> =
    LazyLock::new(|| Catalog::from_json(BUILTIN_CATALOG));

pub const MAX_SCORE: u8 = 10;
pub const MAX_OVERLAY_INTENSITY: u8 = 100;

/// Ordered, immutable list of reference designs.
#[derive(Debug, Clone)]
pub struct Catalog {
    designs: Vec<BrandDesign>,
}

impl Catalog {
    /// The designs shipped with the crate, decoded and checked on first use.
    pub fn builtin() -> Result<&'static Self, CatalogError> {
        BUILTIN
            .as_ref()
            .map_err(|err| CatalogError::Builtin(err.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let designs: Vec<BrandDesign> = serde_json::from_str(json)?;
        Self::new(designs)
    }

    pub fn new(designs: Vec<BrandDesign>) -> Result<Self, CatalogError> {
        for design in &designs {
            validate_design(design)?;
        }
        Ok(Self { designs })
    }

    pub fn get(&self, brand_name: &str) -> Option<&BrandDesign> {
        self.designs.iter().find(|d| d.name == brand_name)
    }

    pub fn designs(&self) -> &[BrandDesign] {
        &self.designs
    }

    pub fn iter(&self) -> impl Iterator<Item = &BrandDesign> {
        self.designs.iter()
    }

    pub fn len(&self) -> usize {
        self.designs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }
}

fn validate_design(design: &BrandDesign) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidEntry {
        brand: design.name.clone(),
        reason,
    };

    if design.name.trim().is_empty() {
        return Err(invalid("name must not be empty".into()));
    }
    for mood in Mood::ALL {
        let score = design.mood(mood);
        if score > MAX_SCORE {
            return Err(invalid(format!("mood {mood} score {score} exceeds {MAX_SCORE}")));
        }
    }
    for quality in Quality::ALL {
        let score = design.quality(quality);
        if score > MAX_SCORE {
            return Err(invalid(format!(
                "quality {quality} score {score} exceeds {MAX_SCORE}"
            )));
        }
    }
    let intensity = design.imagery_and_media.hero_image_overlay.intensity;
    if intensity > MAX_OVERLAY_INTENSITY {
        return Err(invalid(format!(
            "hero overlay intensity {intensity} exceeds {MAX_OVERLAY_INTENSITY}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_ten_brands_in_order() {
        let catalog = Catalog::builtin().unwrap();
        let names: Vec<&str> = catalog.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Nintendo",
                "Disney",
                "Chanel",
                "American Express",
                "BMW",
                "Nike",
                "Tesla",
                "McDonald's",
                "Mercedes",
                "Coca-Cola",
            ]
        );
    }

    #[test]
    fn builtin_is_decoded_once_and_shared() {
        let first = Catalog::builtin().unwrap();
        let second = Catalog::builtin().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn lookup_by_name() {
        let catalog = Catalog::builtin().unwrap();
        let chanel = catalog.get("Chanel").unwrap();
        assert_eq!(chanel.mood(Mood::Luxury), 10);
        assert_eq!(chanel.color_palette.scheme_type, SchemeType::LightMonochrome);
        assert_eq!(
            chanel.typography.heading.font_family,
            HeadingFontFamily::Serif
        );
        assert!(catalog.get("Unknown Brand").is_none());
    }

    #[test]
    fn builtin_intensities_are_authored_on_percent_scale() {
        let catalog = Catalog::builtin().unwrap();
        let bmw = catalog.get("BMW").unwrap();
        assert_eq!(bmw.imagery_and_media.hero_image_overlay.intensity, 60);
        assert_eq!(
            bmw.imagery_and_media.hero_image_overlay.kind,
            OverlayType::DarkGradient
        );
    }

    #[test]
    fn rejects_out_of_range_score() {
        let mut design = Catalog::builtin().unwrap().designs()[0].clone();
        design.aesthetic_and_mood.primary_moods.techy = 11;
        let err = Catalog::new(vec![design]).unwrap_err();
        assert!(err.to_string().contains("techy"));
    }

    #[test]
    fn rejects_out_of_range_intensity() {
        let mut design = Catalog::builtin().unwrap().designs()[0].clone();
        design.imagery_and_media.hero_image_overlay.intensity = 120;
        assert!(Catalog::new(vec![design]).is_err());
    }

    #[test]
    fn rejects_malformed_color_on_decode() {
        let json = BUILTIN_CATALOG.replacen("#E60012", "red", 1);
        assert!(matches!(
            Catalog::from_json(&json),
            Err(CatalogError::Decode(_))
        ));
    }
}
