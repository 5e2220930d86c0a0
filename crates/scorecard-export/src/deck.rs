//! Slide deck descriptors
//!
//! An ordered, renderer-agnostic description of the scorecard deck: a title
//! slide, a timeline of moments, then per selected moment a divider slide
//! and its metric table. Background images are described as generation
//! requests; fetching them is the renderer's job.

use crate::error::ExportError;
use crate::style::StylePreset;
use scorecard_core::{MomentBook, ScorecardTable};
use serde::{Deserialize, Serialize};

/// Default image subject for the title slide
const TITLE_SLIDE_DETAIL: &str = "a cinematic football stadium";
/// Default image subject for moment divider slides
const MOMENT_SLIDE_DETAIL: &str = "football culture";

/// Request for an AI-generated slide background
///
/// The engine only builds the prompt text; the renderer decides whether to
/// fetch an image or fall back to a solid background color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundRequest {
    /// Free-text region driving the image subject
    pub region: String,
    /// Subject detail inserted into the prompt
    pub prompt_detail: String,
}

impl BackgroundRequest {
    /// Full generation prompt
    #[must_use]
    pub fn prompt(&self) -> String {
        format!(
            "Dark, gritty, artistic representation of {} in {}, cinematic, \
             ultra-realistic photo, dramatic lighting, epic style",
            self.prompt_detail, self.region
        )
    }
}

/// Slide page geometry in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page width
    pub width_in: f32,
    /// Page height
    pub height_in: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        // Widescreen 16:9
        Self {
            width_in: 16.0,
            height_in: 9.0,
        }
    }
}

/// One slide in the deck, in render order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Slide {
    /// Opening slide with title, subtitle, and background
    Title {
        /// Deck title
        title: String,
        /// Deck subtitle
        subtitle: String,
        /// Background image request
        background: BackgroundRequest,
    },
    /// Timeline of the included moments, in save order
    Timeline {
        /// Moment names
        moments: Vec<String>,
    },
    /// Divider slide announcing one moment
    MomentTitle {
        /// Slide caption
        caption: String,
        /// Background image request
        background: BackgroundRequest,
    },
    /// One moment's metric table
    MetricTable {
        /// Slide caption
        caption: String,
        /// The snapshotted table
        table: ScorecardTable,
    },
}

/// Complete deck descriptor consumed by the presentation renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckSpec {
    /// Style preset to render with
    pub style: StylePreset,
    /// Page geometry
    pub page: PageGeometry,
    /// Slides in render order
    pub slides: Vec<Slide>,
}

/// Build a deck descriptor from saved moments
///
/// `selected` names moments from `moments` to include, in the given order.
/// The moment tables are value-copies; the deck cannot observe later session
/// activity.
pub fn build_deck(
    title: &str,
    subtitle: &str,
    region: &str,
    style: StylePreset,
    selected: &[&str],
    moments: &MomentBook,
) -> Result<DeckSpec, ExportError> {
    if selected.is_empty() {
        return Err(ExportError::NoMomentsSelected);
    }

    let mut slides = Vec::with_capacity(2 + selected.len() * 2);
    slides.push(Slide::Title {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        background: BackgroundRequest {
            region: region.to_string(),
            prompt_detail: TITLE_SLIDE_DETAIL.to_string(),
        },
    });
    slides.push(Slide::Timeline {
        moments: selected.iter().map(ToString::to_string).collect(),
    });

    for name in selected {
        let moment = moments
            .get(name)
            .ok_or_else(|| ExportError::UnknownMoment((*name).to_string()))?;
        let upper = moment.name().to_uppercase();
        slides.push(Slide::MomentTitle {
            caption: format!("SCORECARD:\n{upper}"),
            background: BackgroundRequest {
                region: region.to_string(),
                prompt_detail: MOMENT_SLIDE_DETAIL.to_string(),
            },
        });
        slides.push(Slide::MetricTable {
            caption: format!("{upper} METRICS"),
            table: moment.table().clone(),
        });
    }

    Ok(DeckSpec {
        style,
        page: PageGeometry::default(),
        slides,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::style_preset;
    use pretty_assertions::assert_eq;
    use scorecard_core::assemble;
    use scorecard_metrics::MetricName;

    fn book_with(names: &[&str]) -> MomentBook {
        let metrics = vec![MetricName::from("Views")];
        let mut table = assemble(&metrics, None, None);
        table.set_actuals(&metrics[0], Some(120.0)).unwrap();
        table.set_benchmark(&metrics[0], Some(100.0)).unwrap();

        let mut book = MomentBook::new();
        for name in names {
            book.save(*name, &table).unwrap();
        }
        book
    }

    #[test]
    fn deck_slide_order() {
        let book = book_with(&["Pre-Reveal", "Launch Week"]);
        let style = style_preset("FC").unwrap().clone();
        let deck = build_deck(
            "Game Scorecard",
            "A detailed analysis",
            "Brazil",
            style,
            &["Pre-Reveal", "Launch Week"],
            &book,
        )
        .unwrap();

        assert_eq!(deck.slides.len(), 6);
        assert!(matches!(&deck.slides[0], Slide::Title { title, .. } if title == "Game Scorecard"));
        assert!(matches!(
            &deck.slides[1],
            Slide::Timeline { moments } if moments == &vec!["Pre-Reveal".to_string(), "Launch Week".to_string()]
        ));
        assert!(matches!(
            &deck.slides[2],
            Slide::MomentTitle { caption, .. } if caption == "SCORECARD:\nPRE-REVEAL"
        ));
        assert!(matches!(
            &deck.slides[3],
            Slide::MetricTable { caption, .. } if caption == "PRE-REVEAL METRICS"
        ));
        assert!(matches!(&deck.slides[4], Slide::MomentTitle { .. }));
        assert!(matches!(&deck.slides[5], Slide::MetricTable { .. }));
    }

    #[test]
    fn empty_selection_is_an_error() {
        let book = book_with(&["Only"]);
        let style = style_preset("FC").unwrap().clone();
        let err = build_deck("T", "S", "US", style, &[], &book).unwrap_err();
        assert!(matches!(err, ExportError::NoMomentsSelected));
    }

    #[test]
    fn unknown_moment_is_an_error() {
        let book = book_with(&["Only"]);
        let style = style_preset("FC").unwrap().clone();
        let err = build_deck("T", "S", "US", style, &["Ghost"], &book).unwrap_err();
        assert!(matches!(err, ExportError::UnknownMoment(n) if n == "Ghost"));
    }

    #[test]
    fn background_prompt_embeds_region_and_detail() {
        let bg = BackgroundRequest {
            region: "Brazil".to_string(),
            prompt_detail: "football culture".to_string(),
        };
        let prompt = bg.prompt();
        assert!(prompt.contains("football culture in Brazil"));
        assert!(prompt.starts_with("Dark, gritty"));
    }

    #[test]
    fn page_defaults_to_widescreen() {
        let page = PageGeometry::default();
        assert_eq!(page.width_in, 16.0);
        assert_eq!(page.height_in, 9.0);
    }

    #[test]
    fn deck_serde_round_trip() {
        let book = book_with(&["Only"]);
        let style = style_preset("Apex").unwrap().clone();
        let deck = build_deck("T", "S", "JP", style, &["Only"], &book).unwrap();
        let json = serde_json::to_string(&deck).unwrap();
        let back: DeckSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, deck);
    }
}
