//! Paragraph and text frame model.
use crate::common::Color;

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// DrawingML `algn` attribute value.
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Alignment::Left => "l",
            Alignment::Center => "ctr",
            Alignment::Right => "r",
        }
    }
}

/// Leading decoration of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    /// Plain paragraph
    #[default]
    None,
    /// Bullet glyph with a hanging indent
    Bullet,
    /// No glyph, indented to line up under a bulleted heading
    Indented,
}

/// A single paragraph of uniformly formatted text.
///
/// A `'\n'` in `text` is a line break inside the paragraph, not a new
/// paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    /// Font size in points
    pub size_pt: f64,
    pub bold: bool,
    pub color: Color,
    pub alignment: Alignment,
    /// Spacing after the paragraph in points
    pub space_after_pt: Option<f64>,
    pub marker: Marker,
}

impl Paragraph {
    /// Create a left-aligned, regular-weight paragraph.
    pub fn new(text: impl Into<String>, size_pt: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            size_pt,
            bold: false,
            color,
            alignment: Alignment::Left,
            space_after_pt: None,
            marker: Marker::None,
        }
    }

    /// Builder method: set bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder method: set alignment.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Builder method: set spacing after, in points.
    pub fn space_after(mut self, pt: f64) -> Self {
        self.space_after_pt = Some(pt);
        self
    }

    /// Builder method: render with a bullet.
    pub fn bullet(mut self) -> Self {
        self.marker = Marker::Bullet;
        self
    }

    /// Builder method: indent under the previous bullet.
    pub fn indented(mut self) -> Self {
        self.marker = Marker::Indented;
        self
    }
}

/// The text body of a text box.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextFrame {
    pub paragraphs: Vec<Paragraph>,
    pub word_wrap: bool,
}

impl TextFrame {
    /// A frame with a single paragraph.
    pub fn single(paragraph: Paragraph) -> Self {
        Self {
            paragraphs: vec![paragraph],
            word_wrap: false,
        }
    }

    /// A frame with the given paragraphs.
    pub fn with_paragraphs(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            paragraphs,
            word_wrap: false,
        }
    }

    /// Builder method: enable word wrap.
    pub fn wrapped(mut self) -> Self {
        self.word_wrap = true;
        self
    }

    /// Concatenated text of all paragraphs, one per line.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
