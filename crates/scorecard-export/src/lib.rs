//! Scorecard Export - descriptors for external renderers
//!
//! Builds the typed inputs the presentation and workbook collaborators
//! consume: style presets, an ordered slide-deck descriptor, and workbook
//! sheet descriptors. Everything here is pure data; rendering, file I/O,
//! and image-generation network calls stay outside the engine.

#![warn(unreachable_pub)]

pub mod deck;
pub mod error;
pub mod style;
pub mod workbook;

pub use deck::{build_deck, BackgroundRequest, DeckSpec, PageGeometry, Slide};
pub use error::ExportError;
pub use style::{
    require_style_preset, style_preset, style_preset_names, ColorRoles, FontSet, FontSizes, Rgb,
    StylePreset,
};
pub use workbook::{build_workbook, event_sheet_name, sheet_name, SheetContent, SheetSpec, WorkbookSpec};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
