//! In-memory deck model.
//!
//! A [`Deck`] is a fixed-size canvas plus an ordered list of [`Slide`]s.
//! Slides are produced whole by the layout templates and cannot be changed
//! once appended; the deck only ever grows at the end, so its order is the
//! order in which the templates were invoked.

pub mod shape;
pub mod slide;
pub mod text;

pub use shape::{Rect, Shape, ShapeKind};
pub use slide::{Slide, SlideBuilder, SlideKind};
pub use text::{Alignment, Marker, Paragraph, TextFrame};

use crate::common::error::{Error, Result};
use crate::common::unit::{self, EMUS_PER_INCH};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Slide dimensions in EMU, shared by every slide of a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: i64,
    pub height: i64,
}

impl Canvas {
    /// 16:9 widescreen, 13.333" x 7.5".
    pub const WIDESCREEN: Canvas = Canvas {
        width: 12_192_000,
        height: 6_858_000,
    };

    /// 4:3 standard, 10" x 7.5".
    pub const STANDARD: Canvas = Canvas {
        width: 10 * EMUS_PER_INCH,
        height: 6_858_000,
    };

    /// Smallest slide side PowerPoint accepts (1").
    pub const MIN_EXTENT: i64 = EMUS_PER_INCH;

    /// Largest slide side PowerPoint accepts (56").
    pub const MAX_EXTENT: i64 = 56 * EMUS_PER_INCH;

    /// Canvas of the given size, each side between 1" and 56".
    pub fn from_inches(width: f64, height: f64) -> Result<Self> {
        let canvas = Self {
            width: unit::inches(width),
            height: unit::inches(height),
        };
        if !canvas.is_valid_size() {
            return Err(Error::InvalidLayout(format!(
                "slide size must be between 1\" and 56\" per side, got {width}\" x {height}\""
            )));
        }
        Ok(canvas)
    }

    /// Whether both sides lie in the range allowed for `p:sldSz`.
    pub fn is_valid_size(&self) -> bool {
        let range = Self::MIN_EXTENT..=Self::MAX_EXTENT;
        range.contains(&self.width) && range.contains(&self.height)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::WIDESCREEN
    }
}

/// Document properties written to `docProps/core.xml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckProperties {
    pub title: Option<String>,
    pub creator: Option<String>,
    pub subject: Option<String>,
    /// Creation timestamp; omitted from the package when unset so output
    /// stays reproducible.
    pub created: Option<DateTime<Utc>>,
}

/// An ordered collection of slides on a fixed canvas.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Deck {
    canvas: Canvas,
    properties: DeckProperties,
    slides: Vec<Slide>,
}

impl Deck {
    /// Create an empty widescreen deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty deck on the given canvas.
    pub fn with_canvas(canvas: Canvas) -> Self {
        Self {
            canvas,
            ..Self::default()
        }
    }

    #[inline]
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    #[inline]
    pub fn properties(&self) -> &DeckProperties {
        &self.properties
    }

    pub fn set_properties(&mut self, properties: DeckProperties) {
        self.properties = properties;
    }

    #[inline]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Append a finished slide and return a reference to it.
    ///
    /// Fails without modifying the deck if any shape leaves the canvas.
    pub fn push(&mut self, slide: Slide) -> Result<&Slide> {
        let index = self.slides.len();
        if let Some(shape) = slide
            .shapes()
            .iter()
            .find(|s| !s.frame.within(self.canvas.width, self.canvas.height))
        {
            return Err(Error::OutOfBounds {
                slide: index + 1,
                shape: shape.name.clone(),
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }

        log::debug!(
            "slide {}: {} template, {} shapes",
            index + 1,
            slide.kind().as_str(),
            slide.shape_count()
        );
        self.slides.push(slide);
        Ok(&self.slides[index])
    }
}
