//! Section divider slides.
use crate::common::error::Result;
use crate::common::unit::inches;
use crate::deck::{Alignment, Canvas, Paragraph, Rect, ShapeKind, Slide, SlideBuilder, SlideKind, TextFrame};
use crate::layout::theme::Theme;

/// Build a section slide: a full-height accent bar on the left edge and a
/// large left-aligned title near the vertical center.
pub fn build(canvas: Canvas, theme: &Theme, title: &str) -> Result<Slide> {
    let mut builder = SlideBuilder::new(SlideKind::Section);

    builder
        .add_shape(
            ShapeKind::Rectangle,
            Rect::new(0, 0, inches(0.3), canvas.height),
        )
        .fill(theme.primary);

    builder.add_text_box(
        Rect::new(
            inches(0.8),
            inches(3.0),
            canvas.width - inches(1.8),
            inches(1.5),
        ),
        TextFrame::single(
            Paragraph::new(title, 44.0, theme.dark)
                .bold()
                .align(Alignment::Left),
        ),
    );

    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_slide() {
        let theme = Theme::default();
        let slide = build(Canvas::default(), &theme, "Executive Summary").unwrap();

        assert_eq!(slide.shape_count(), 2);
        let bar = &slide.shapes()[0];
        assert_eq!(bar.frame.x, 0);
        assert_eq!(bar.frame.height, Canvas::default().height);
        assert_eq!(bar.fill, Some(theme.primary));

        let title = slide.text_box("Executive Summary").unwrap();
        assert_eq!(
            title.text.as_ref().unwrap().paragraphs[0].alignment,
            Alignment::Left
        );
    }
}
