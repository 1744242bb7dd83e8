//! Shape primitives placed on a slide.
use crate::common::Color;
use crate::deck::text::TextFrame;

/// The drawable primitive a shape renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    RoundedRectangle,
    Oval,
    RightArrow,
    TextBox,
}

impl ShapeKind {
    /// DrawingML preset geometry name.
    pub fn preset(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle | ShapeKind::TextBox => "rect",
            ShapeKind::RoundedRectangle => "roundRect",
            ShapeKind::Oval => "ellipse",
            ShapeKind::RightArrow => "rightArrow",
        }
    }

    /// Prefix used for the shape's display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::RoundedRectangle => "Rounded Rectangle",
            ShapeKind::Oval => "Oval",
            ShapeKind::RightArrow => "Right Arrow",
            ShapeKind::TextBox => "TextBox",
        }
    }
}

/// Position and size in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    #[inline]
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }

    /// Whether the rectangle lies inside `[0, width] x [0, height]`.
    pub fn within(&self, width: i64, height: i64) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.width >= 0
            && self.height >= 0
            && self.right() <= width
            && self.bottom() <= height
    }
}

/// A shape on a slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Slide-local shape id (the group root owns id 1)
    pub id: u32,
    pub name: String,
    pub kind: ShapeKind,
    pub frame: Rect,
    /// Solid fill, or no fill when `None`
    pub fill: Option<Color>,
    /// Solid outline, or no outline when `None`
    pub line: Option<Color>,
    pub text: Option<TextFrame>,
}

impl Shape {
    pub(crate) fn new(id: u32, kind: ShapeKind, frame: Rect) -> Self {
        Self {
            id,
            name: format!("{} {}", kind.display_name(), id - 1),
            kind,
            frame,
            fill: None,
            line: None,
            text: None,
        }
    }

    /// Builder method: set solid fill.
    pub fn fill(&mut self, color: Color) -> &mut Self {
        self.fill = Some(color);
        self
    }

    /// Builder method: set outline color.
    pub fn line(&mut self, color: Color) -> &mut Self {
        self.line = Some(color);
        self
    }

    /// Builder method: attach a text frame.
    pub fn text(&mut self, frame: TextFrame) -> &mut Self {
        self.text = Some(frame);
        self
    }

    pub fn is_text_box(&self) -> bool {
        self.kind == ShapeKind::TextBox
    }
}
