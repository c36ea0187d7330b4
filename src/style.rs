//! Styles and the planner color palette
//!
//! This module provides the resolved visual style attached to every drawing
//! primitive, plus the palette of per-kind default styles. Palettes can be
//! loaded from TOML files so the same planner data can be rendered with
//! different color schemes.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::event::{Event, EventKind};

/// Errors that can occur when loading or parsing palette files
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Failed to read palette file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse palette TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb` hex notation.
    pub fn from_hex(s: &str) -> Option<Color> {
        let hex = s.strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color::new(r, g, b))
            }
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Color::new(r * 17, g * 17, b * 17))
            }
            _ => None,
        }
    }

    /// Perceived luminance in 0.0..=1.0 (`0.299 r + 0.587 g + 0.114 b`,
    /// normalized).
    pub fn luminance(&self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }

    /// Black for bright colors, white for dark ones.
    ///
    /// Text filled with the contrast color of its background stays legible
    /// for any RGB triple.
    pub fn contrast(&self) -> Color {
        if self.luminance() > 0.5 {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ColorVisitor;

        impl serde::de::Visitor<'_> for ColorVisitor {
            type Value = Color;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a hex color like \"#c8c8c8\"")
            }

            fn visit_str<E>(self, v: &str) -> Result<Color, E>
            where
                E: serde::de::Error,
            {
                Color::from_hex(v).ok_or_else(|| E::custom(format!("invalid hex color '{}'", v)))
            }
        }

        deserializer.deserialize_str(ColorVisitor)
    }
}

/// A fully resolved visual style.
///
/// Every drawing primitive the layout engine emits carries concrete values
/// taken from one of these records; the rendering backend never needs to
/// resolve anything further.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Text color for labels drawn with this style.
    pub foreground: Color,
    /// Fill color for rectangles.
    pub background: Color,
    pub stroke: Color,
    pub font: String,
    /// Text size in millimeters.
    pub text_size: f64,
    /// Stroke width in millimeters.
    pub stroke_width: f64,
}

impl Style {
    /// Legible text color for this style's background (see
    /// [`Color::contrast`]).
    pub fn contrast_color(&self) -> Color {
        self.background.contrast()
    }

    /// Replace the background fill, keeping everything else.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Apply a partial overlay, with the overlay taking precedence.
    fn overlaid(&self, overlay: &StyleOverlay) -> Style {
        Style {
            foreground: overlay.foreground.unwrap_or(self.foreground),
            background: overlay.background.unwrap_or(self.background),
            stroke: overlay.stroke.unwrap_or(self.stroke),
            font: overlay.font.clone().unwrap_or_else(|| self.font.clone()),
            text_size: overlay.text_size.unwrap_or(self.text_size),
            stroke_width: overlay.stroke_width.unwrap_or(self.stroke_width),
        }
    }
}

/// The default style tables for a planner sheet.
///
/// One immutable palette is passed into the layout engine per run; events
/// without an explicit style fall back to their kind's entry here.
#[derive(Debug, Clone, PartialEq)]
pub struct StylePalette {
    /// Optional name for the palette
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Day cells on Monday..Friday with no background match.
    pub weekday: Style,
    /// Day cells on Saturday/Sunday, superseding any background match.
    pub weekend: Style,
    /// Background and special-date ranges (vacations, holidays).
    pub special: Style,
    /// Normal slot-packed events.
    pub event: Style,
    /// Month name labels.
    pub label: Style,
}

impl Default for StylePalette {
    fn default() -> Self {
        let day = Style {
            foreground: Color::BLACK,
            background: Color::new(200, 200, 200),
            stroke: Color::new(10, 10, 16),
            font: "Ubuntu".to_string(),
            text_size: 8.0,
            stroke_width: 0.5,
        };
        Self {
            name: None,
            description: None,
            weekend: Style {
                background: Color::new(244, 44, 44),
                ..day.clone()
            },
            special: Style {
                background: Color::new(208, 255, 156),
                ..day.clone()
            },
            event: Style {
                background: Color::new(255, 255, 89),
                text_size: 5.0,
                ..day.clone()
            },
            label: Style {
                background: Color::WHITE,
                stroke_width: 0.0,
                ..day.clone()
            },
            weekday: day,
        }
    }
}

/// TOML structure for deserializing palettes
#[derive(Deserialize)]
struct TomlPalette {
    metadata: Option<TomlMetadata>,
    weekday: Option<StyleOverlay>,
    weekend: Option<StyleOverlay>,
    special: Option<StyleOverlay>,
    event: Option<StyleOverlay>,
    label: Option<StyleOverlay>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// A partial style: only the fields a palette file names.
#[derive(Debug, Default, Deserialize)]
struct StyleOverlay {
    foreground: Option<Color>,
    background: Option<Color>,
    stroke: Option<Color>,
    font: Option<String>,
    text_size: Option<f64>,
    stroke_width: Option<f64>,
}

impl StylePalette {
    /// Load a palette from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a palette from a TOML string
    ///
    /// Tables are partial overlays: fields the file does not name keep their
    /// built-in defaults.
    pub fn from_str(content: &str) -> Result<Self, PaletteError> {
        let parsed: TomlPalette = toml::from_str(content)?;

        let mut palette = StylePalette::default();
        palette.name = parsed.metadata.as_ref().and_then(|m| m.name.clone());
        palette.description = parsed.metadata.as_ref().and_then(|m| m.description.clone());
        if let Some(overlay) = &parsed.weekday {
            palette.weekday = palette.weekday.overlaid(overlay);
        }
        if let Some(overlay) = &parsed.weekend {
            palette.weekend = palette.weekend.overlaid(overlay);
        }
        if let Some(overlay) = &parsed.special {
            palette.special = palette.special.overlaid(overlay);
        }
        if let Some(overlay) = &parsed.event {
            palette.event = palette.event.overlaid(overlay);
        }
        if let Some(overlay) = &parsed.label {
            palette.label = palette.label.overlaid(overlay);
        }
        Ok(palette)
    }

    /// The default style for an event kind.
    ///
    /// `Background` and `SpecialDate` share the special-range entry;
    /// `Empty` maps to the weekday style, though nothing is ever drawn
    /// with it.
    pub fn style_for(&self, kind: EventKind) -> &Style {
        match kind {
            EventKind::Normal => &self.event,
            EventKind::Background | EventKind::SpecialDate => &self.special,
            EventKind::Weekend => &self.weekend,
            EventKind::Empty => &self.weekday,
        }
    }

    /// An event's explicit style, or its kind's default.
    pub fn resolve<'a>(&'a self, event: &'a Event) -> &'a Style {
        event.style.as_ref().unwrap_or_else(|| self.style_for(event.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use chrono::NaiveDate;

    #[test]
    fn test_contrast_white_background_is_black() {
        assert_eq!(Color::WHITE.contrast(), Color::BLACK);
    }

    #[test]
    fn test_contrast_black_background_is_white() {
        assert_eq!(Color::BLACK.contrast(), Color::WHITE);
    }

    #[test]
    fn test_contrast_colored_backgrounds() {
        // Saturated red is dark enough for white text.
        assert_eq!(Color::new(240, 37, 89).contrast(), Color::WHITE);
        // Pale yellow needs black text.
        assert_eq!(Color::new(255, 255, 89).contrast(), Color::BLACK);
    }

    #[test]
    fn test_luminance_range() {
        assert_eq!(Color::BLACK.luminance(), 0.0);
        assert!((Color::WHITE.luminance() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_hex_parse_long_form() {
        assert_eq!(Color::from_hex("#f02559"), Some(Color::new(240, 37, 89)));
        assert_eq!(Color::from_hex("#000000"), Some(Color::BLACK));
    }

    #[test]
    fn test_hex_parse_short_form() {
        assert_eq!(Color::from_hex("#abc"), Some(Color::new(170, 187, 204)));
        assert_eq!(Color::from_hex("#fff"), Some(Color::WHITE));
    }

    #[test]
    fn test_hex_parse_rejects_garbage() {
        assert_eq!(Color::from_hex("f02559"), None);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#gghhii"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
    }

    #[test]
    fn test_hex_display_round_trip() {
        let color = Color::new(240, 37, 89);
        assert_eq!(Color::from_hex(&color.to_string()), Some(color));
    }

    #[test]
    fn test_default_palette_colors() {
        let palette = StylePalette::default();
        assert_eq!(palette.weekday.background, Color::new(200, 200, 200));
        assert_eq!(palette.weekend.background, Color::new(244, 44, 44));
        assert_eq!(palette.special.background, Color::new(208, 255, 156));
        assert_eq!(palette.weekday.font, "Ubuntu");
        assert_eq!(palette.event.text_size, 5.0);
    }

    #[test]
    fn test_palette_overlay_touches_only_named_fields() {
        let toml_str = r##"
[weekend]
background = "#102030"
"##;
        let palette = StylePalette::from_str(toml_str).expect("Should parse");
        assert_eq!(palette.weekend.background, Color::new(16, 32, 48));
        // Everything else keeps its default.
        assert_eq!(palette.weekend.font, "Ubuntu");
        assert_eq!(palette.weekend.stroke, Color::new(10, 10, 16));
        assert_eq!(palette.weekday, StylePalette::default().weekday);
    }

    #[test]
    fn test_palette_metadata() {
        let toml_str = r##"
[metadata]
name = "High contrast"
description = "For cheap printers"

[event]
background = "#ffffff"
text_size = 6.0
"##;
        let palette = StylePalette::from_str(toml_str).expect("Should parse");
        assert_eq!(palette.name, Some("High contrast".to_string()));
        assert_eq!(palette.description, Some("For cheap printers".to_string()));
        assert_eq!(palette.event.background, Color::WHITE);
        assert_eq!(palette.event.text_size, 6.0);
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = StylePalette::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(PaletteError::ParseError(_))));
    }

    #[test]
    fn test_invalid_color_rejected() {
        let result = StylePalette::from_str("[weekday]\nbackground = \"red\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_prefers_event_style() {
        let palette = StylePalette::default();
        let day = NaiveDate::from_ymd_opt(2015, 8, 15).unwrap();
        let styled = Event::new("styled", day)
            .with_style(palette.event.clone().with_background(Color::new(37, 89, 240)));
        let plain = Event::new("plain", day);

        assert_eq!(palette.resolve(&styled).background, Color::new(37, 89, 240));
        assert_eq!(palette.resolve(&plain), &palette.event);
    }

    #[test]
    fn test_style_for_kinds() {
        let palette = StylePalette::default();
        assert_eq!(palette.style_for(EventKind::Normal), &palette.event);
        assert_eq!(palette.style_for(EventKind::Background), &palette.special);
        assert_eq!(palette.style_for(EventKind::SpecialDate), &palette.special);
        assert_eq!(palette.style_for(EventKind::Weekend), &palette.weekend);
    }
}
