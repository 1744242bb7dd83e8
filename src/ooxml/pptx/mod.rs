//! PowerPoint (.pptx) output.
//!
//! [`PptxWriter`] serializes a [`Deck`](crate::Deck) into a PresentationML
//! package and [`PresentationSummary`] reads one back for verification.

pub mod package;
pub mod reader;
pub mod template;
pub mod writer;

pub use package::PptxWriter;
pub use reader::{PresentationSummary, ShapeSummary, SlideSummary};
