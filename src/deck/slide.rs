//! Slides and the builder the layout templates use to place shapes.
use crate::deck::shape::{Rect, Shape, ShapeKind};
use crate::deck::text::{Paragraph, TextFrame};

/// The layout template a slide was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideKind {
    Title,
    Section,
    Content,
    TwoColumn,
    Workflow,
}

impl SlideKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideKind::Title => "title",
            SlideKind::Section => "section",
            SlideKind::Content => "content",
            SlideKind::TwoColumn => "two_column",
            SlideKind::Workflow => "workflow",
        }
    }
}

/// An immutable slide: an ordered list of shapes, back to front.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    kind: SlideKind,
    shapes: Vec<Shape>,
}

impl Slide {
    /// Get the template this slide came from.
    #[inline]
    pub fn kind(&self) -> SlideKind {
        self.kind
    }

    /// Get the shapes in z-order.
    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Get the number of shapes.
    #[inline]
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Iterate over shapes of one kind.
    pub fn shapes_of(&self, kind: ShapeKind) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(move |s| s.kind == kind)
    }

    /// Iterate over every paragraph of every text box, in z-order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.shapes
            .iter()
            .filter_map(|s| s.text.as_ref())
            .flat_map(|frame| frame.paragraphs.iter())
    }

    /// Find the first text box whose text equals `text`.
    pub fn text_box(&self, text: &str) -> Option<&Shape> {
        self.shapes
            .iter()
            .find(|s| s.text.as_ref().is_some_and(|frame| frame.text() == text))
    }
}

/// Accumulates shapes for one slide, assigning ids in placement order.
#[derive(Debug)]
pub struct SlideBuilder {
    kind: SlideKind,
    shapes: Vec<Shape>,
}

impl SlideBuilder {
    pub fn new(kind: SlideKind) -> Self {
        Self {
            kind,
            shapes: Vec::new(),
        }
    }

    /// Add an autoshape and return it for styling.
    pub fn add_shape(&mut self, kind: ShapeKind, frame: Rect) -> &mut Shape {
        // id 1 belongs to the slide's root group shape
        let id = self.shapes.len() as u32 + 2;
        self.shapes.push(Shape::new(id, kind, frame));
        let last = self.shapes.len() - 1;
        &mut self.shapes[last]
    }

    /// Add a text box holding `frame`.
    pub fn add_text_box(&mut self, frame: Rect, text: TextFrame) -> &mut Shape {
        let shape = self.add_shape(ShapeKind::TextBox, frame);
        shape.text(text);
        shape
    }

    pub fn finish(self) -> Slide {
        Slide {
            kind: self.kind,
            shapes: self.shapes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Color;

    #[test]
    fn test_builder_assigns_sequential_ids() {
        let mut builder = SlideBuilder::new(SlideKind::Section);
        builder.add_shape(ShapeKind::Rectangle, Rect::new(0, 0, 10, 10));
        builder.add_text_box(
            Rect::new(0, 0, 10, 10),
            TextFrame::single(Paragraph::new("Hi", 12.0, Color::WHITE)),
        );
        let slide = builder.finish();

        assert_eq!(slide.kind(), SlideKind::Section);
        let ids: Vec<u32> = slide.shapes().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(slide.paragraphs().count(), 1);
        assert!(slide.text_box("Hi").is_some());
        assert!(slide.text_box("Bye").is_none());
    }
}
