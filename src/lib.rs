//! Slidesmith - template-driven slide decks written as PowerPoint files
//!
//! A deck is built slide by slide from five fixed layout templates (title,
//! section, bulleted content, two-column comparison and left-to-right
//! workflow) on a shared color [`Theme`], and then written as a .pptx
//! package.
//!
//! # Features
//!
//! - **Layout templates**: fixed geometry in inches, scaled to the canvas
//! - **Deck scripts**: whole decks described in YAML
//! - **PPTX writer**: deterministic output, atomic saves
//! - **Inspector**: read a written file back for verification
//!
//! # Example - Building a deck in code
//!
//! ```no_run
//! use slidesmith::{ContentItem, Deck, LayoutEngine, PptxWriter, Theme, WorkflowStep};
//!
//! # fn main() -> slidesmith::Result<()> {
//! let theme = Theme::default().with_footer_label("© Tech84");
//! let engine = LayoutEngine::new(theme)?;
//! let mut deck = Deck::new();
//!
//! engine.title_slide(&mut deck, "Snap & Send", "Community Incident Reporting Platform")?;
//! engine.content_slide(
//!     &mut deck,
//!     "The Problem",
//!     &[ContentItem::detailed("Slow reporting", "Issues go unnoticed for weeks")],
//! )?;
//! engine.workflow_slide(
//!     &mut deck,
//!     "How It Works",
//!     &[WorkflowStep::new("Snap", "Take a photo"), WorkflowStep::new("Send", "Submit it")],
//! )?;
//!
//! PptxWriter::new().save(&deck, "proposal.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Loading a deck script
//!
//! ```no_run
//! use slidesmith::{DeckScript, PptxWriter, PresentationSummary};
//!
//! # fn main() -> slidesmith::Result<()> {
//! let script = DeckScript::from_path("deck.yaml")?;
//! let deck = script.build()?;
//! PptxWriter::with_theme(&script.theme()).save(&deck, "deck.pptx")?;
//!
//! let summary = PresentationSummary::from_path("deck.pptx")?;
//! assert_eq!(summary.slide_count(), deck.len());
//! # Ok(())
//! # }
//! ```

/// Colors, units, XML helpers and the crate error type
pub mod common;

/// In-memory deck model: canvas, slides, shapes and text
pub mod deck;

/// Layout templates and the theme they draw with
pub mod layout;

/// OOXML packaging and the PowerPoint writer
pub mod ooxml;

/// YAML deck scripts
pub mod script;

// Re-export commonly used types for convenience
pub use common::{Color, Error, Result};
pub use deck::{
    Alignment, Canvas, Deck, DeckProperties, Marker, Paragraph, Rect, Shape, ShapeKind, Slide,
    SlideKind, TextFrame,
};
pub use layout::{ContentItem, LayoutEngine, Theme, WorkflowStep};
pub use ooxml::pptx::{PptxWriter, PresentationSummary, ShapeSummary, SlideSummary};
pub use script::{DeckScript, SlideSpec};
