//! YAML deck scripts.
//!
//! A deck script describes a whole presentation as data:
//!
//! ```yaml
//! properties:
//!   title: Snap & Send
//! theme:
//!   footer_label: "© Tech84"
//! slides:
//!   - kind: title
//!     title: Snap & Send
//!     subtitle: Community Incident Reporting Platform
//!   - kind: content
//!     title: The Problem
//!     items:
//!       - Potholes go unreported
//!       - title: Slow response
//!         desc: Reports get lost between departments
//!   - kind: workflow
//!     title: How It Works
//!     steps:
//!       - { title: Snap, desc: Take a photo }
//!       - { title: Send, desc: Submit with location }
//! ```
//!
//! Loading only checks the shape of the document; [`DeckScript::build`] runs
//! the layout engine and reports the first slide that cannot be laid out.

use crate::common::error::{Error, Result};
use crate::deck::{Canvas, Deck, DeckProperties, SlideKind};
use crate::layout::{ContentItem, LayoutEngine, Theme, WorkflowStep};
use serde::Deserialize;
use std::path::Path;

/// Slide size override, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanvasSpec {
    pub width_in: f64,
    pub height_in: f64,
}

/// One slide of a script, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum SlideSpec {
    Title {
        title: String,
        #[serde(default)]
        subtitle: String,
    },
    Section {
        title: String,
    },
    Content {
        title: String,
        items: Vec<ContentItem>,
    },
    TwoColumn {
        title: String,
        left_title: String,
        left_items: Vec<String>,
        right_title: String,
        right_items: Vec<String>,
    },
    Workflow {
        title: String,
        steps: Vec<WorkflowStep>,
    },
}

impl SlideSpec {
    pub fn kind(&self) -> SlideKind {
        match self {
            SlideSpec::Title { .. } => SlideKind::Title,
            SlideSpec::Section { .. } => SlideKind::Section,
            SlideSpec::Content { .. } => SlideKind::Content,
            SlideSpec::TwoColumn { .. } => SlideKind::TwoColumn,
            SlideSpec::Workflow { .. } => SlideKind::Workflow,
        }
    }

    /// Lay out this slide and append it to `deck`.
    pub fn apply(&self, engine: &LayoutEngine, deck: &mut Deck) -> Result<()> {
        match self {
            SlideSpec::Title { title, subtitle } => engine.title_slide(deck, title, subtitle)?,
            SlideSpec::Section { title } => engine.section_slide(deck, title)?,
            SlideSpec::Content { title, items } => engine.content_slide(deck, title, items)?,
            SlideSpec::TwoColumn {
                title,
                left_title,
                left_items,
                right_title,
                right_items,
            } => engine.two_column_slide(deck, title, left_title, left_items, right_title, right_items)?,
            SlideSpec::Workflow { title, steps } => engine.workflow_slide(deck, title, steps)?,
        };
        Ok(())
    }
}

/// A complete deck description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeckScript {
    #[serde(default)]
    pub properties: DeckProperties,
    /// Defaults to 16:9 widescreen
    #[serde(default)]
    pub canvas: Option<CanvasSpec>,
    /// Defaults to [`Theme::default`]
    #[serde(default)]
    pub theme: Option<Theme>,
    pub slides: Vec<SlideSpec>,
}

impl DeckScript {
    /// Parse a script from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| Error::Script(e.to_string()))
    }

    /// Read and parse a script file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        log::debug!("loading deck script {}", path.display());
        Self::from_yaml_str(&yaml)
    }

    /// The theme this script lays out with.
    pub fn theme(&self) -> Theme {
        self.theme.clone().unwrap_or_default()
    }

    /// Run the layout engine over every slide.
    ///
    /// Stops at the first slide that fails; the error names its 1-based
    /// position and kind.
    pub fn build(&self) -> Result<Deck> {
        let canvas = match self.canvas {
            Some(spec) => Canvas::from_inches(spec.width_in, spec.height_in)?,
            None => Canvas::default(),
        };
        let engine = LayoutEngine::new(self.theme())?;

        let mut deck = Deck::with_canvas(canvas);
        deck.set_properties(self.properties.clone());

        for (index, spec) in self.slides.iter().enumerate() {
            spec.apply(&engine, &mut deck).map_err(|e| {
                Error::Script(format!(
                    "slide {} ({}): {}",
                    index + 1,
                    spec.kind().as_str(),
                    e
                ))
            })?;
        }

        log::debug!("built {} slides from script", deck.len());
        Ok(deck)
    }
}
