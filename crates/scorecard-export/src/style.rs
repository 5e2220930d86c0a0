//! Presentation style presets
//!
//! Named color/font/size bundles handed to the deck renderer. The engine
//! does not interpret these values; it only supplies them alongside the
//! tables.

use crate::error::ExportError;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Color roles used across slides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRoles {
    /// Headings and accents
    pub primary: Rgb,
    /// Secondary accent
    pub accent: Rgb,
    /// Body text on dark backgrounds
    pub text_light: Rgb,
    /// Slide background
    pub background: Rgb,
    /// Alternating table-row background
    pub background_alt: Rgb,
}

/// Heading and body font names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSet {
    /// Heading font
    pub heading: String,
    /// Body font
    pub body: String,
}

/// Point sizes shared by every preset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    /// Title slide heading
    pub title: f32,
    /// Title slide subtitle
    pub subtitle: f32,
    /// Body text
    pub body: f32,
    /// Table header row
    pub table_header: f32,
    /// Table body rows
    pub table_body: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            title: 36.0,
            subtitle: 24.0,
            body: 12.0,
            table_header: 11.0,
            table_body: 10.0,
        }
    }
}

/// One complete style preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylePreset {
    /// Preset name
    pub name: String,
    /// Color roles
    pub colors: ColorRoles,
    /// Fonts
    pub fonts: FontSet,
    /// Point sizes
    pub font_sizes: FontSizes,
}

fn preset(name: &str, colors: ColorRoles, heading: &str, body: &str) -> StylePreset {
    StylePreset {
        name: name.to_string(),
        colors,
        fonts: FontSet {
            heading: heading.to_string(),
            body: body.to_string(),
        },
        font_sizes: FontSizes::default(),
    }
}

static PRESETS: Lazy<IndexMap<&'static str, StylePreset>> = Lazy::new(|| {
    let mut m = IndexMap::new();
    m.insert(
        "FC",
        preset(
            "FC",
            ColorRoles {
                primary: Rgb(0, 225, 0),
                accent: Rgb(0, 200, 0),
                text_light: Rgb(255, 255, 255),
                background: Rgb(0, 0, 0),
                background_alt: Rgb(40, 40, 40),
            },
            "Inter",
            "Inter",
        ),
    );
    m.insert(
        "Battlefield",
        preset(
            "Battlefield",
            ColorRoles {
                primary: Rgb(255, 135, 0),
                accent: Rgb(0, 153, 221),
                text_light: Rgb(255, 255, 255),
                background: Rgb(27, 28, 30),
                background_alt: Rgb(50, 52, 56),
            },
            "Arial Black",
            "Arial",
        ),
    );
    m.insert(
        "Apex",
        preset(
            "Apex",
            ColorRoles {
                primary: Rgb(218, 41, 42),
                accent: Rgb(255, 255, 255),
                text_light: Rgb(255, 255, 255),
                background: Rgb(34, 34, 34),
                background_alt: Rgb(60, 60, 60),
            },
            "Verdana",
            "Verdana",
        ),
    );
    m
});

/// Registered preset names, in registration order
#[must_use]
pub fn style_preset_names() -> Vec<&'static str> {
    PRESETS.keys().copied().collect()
}

/// Look up a preset by name
#[must_use]
pub fn style_preset(name: &str) -> Option<&'static StylePreset> {
    PRESETS.get(name)
}

/// Look up a preset by name, erroring when none is registered
///
/// For callers resolving a user-supplied preset name straight into a deck
/// build.
pub fn require_style_preset(name: &str) -> Result<&'static StylePreset, ExportError> {
    style_preset(name).ok_or_else(|| ExportError::UnknownStyle(name.to_string()))
}
