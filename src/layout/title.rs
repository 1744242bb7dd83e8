//! Opening and closing slides.
use crate::common::error::Result;
use crate::common::unit::inches;
use crate::deck::{Alignment, Canvas, Paragraph, Rect, ShapeKind, Slide, SlideBuilder, SlideKind, TextFrame};
use crate::layout::theme::Theme;

/// Build a title slide: full-bleed dark background, accent bar, centered
/// title and subtitle, and the theme's title footer near the bottom.
pub fn build(canvas: Canvas, theme: &Theme, title: &str, subtitle: &str) -> Result<Slide> {
    let mut builder = SlideBuilder::new(SlideKind::Title);
    let text_width = canvas.width - inches(1.0);

    builder
        .add_shape(ShapeKind::Rectangle, Rect::new(0, 0, canvas.width, canvas.height))
        .fill(theme.dark);

    builder
        .add_shape(
            ShapeKind::Rectangle,
            Rect::new(0, inches(3.2), canvas.width, inches(0.1)),
        )
        .fill(theme.primary);

    builder.add_text_box(
        Rect::new(inches(0.5), inches(2.0), text_width, inches(1.2)),
        TextFrame::single(
            Paragraph::new(title, 54.0, theme.white)
                .bold()
                .align(Alignment::Center),
        ),
    );

    builder.add_text_box(
        Rect::new(inches(0.5), inches(3.5), text_width, inches(1.0)),
        TextFrame::single(Paragraph::new(subtitle, 24.0, theme.light).align(Alignment::Center)),
    );

    if let Some(footer) = theme.title_footer.as_deref() {
        builder.add_text_box(
            Rect::new(
                inches(0.5),
                canvas.height - inches(0.7),
                text_width,
                inches(0.5),
            ),
            TextFrame::single(Paragraph::new(footer, 14.0, theme.light).align(Alignment::Center)),
        );
    }

    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_slide_shapes() {
        let theme = Theme::default().with_title_footer("© Acme");
        let slide = build(Canvas::default(), &theme, "Hello", "World").unwrap();

        assert_eq!(slide.kind(), SlideKind::Title);
        assert_eq!(slide.shapes_of(ShapeKind::Rectangle).count(), 2);
        assert_eq!(slide.shapes_of(ShapeKind::TextBox).count(), 3);

        let background = &slide.shapes()[0];
        assert_eq!(background.frame, Rect::new(0, 0, 12_192_000, 6_858_000));
        assert_eq!(background.fill, Some(theme.dark));
        assert_eq!(background.line, None);

        let title = slide.text_box("Hello").unwrap();
        let p = &title.text.as_ref().unwrap().paragraphs[0];
        assert!(p.bold);
        assert_eq!(p.size_pt, 54.0);
        assert_eq!(p.alignment, Alignment::Center);
    }

    #[test]
    fn test_title_footer_omitted_without_theme_text() {
        let slide = build(Canvas::default(), &Theme::default(), "Hello", "World").unwrap();
        assert_eq!(slide.shapes_of(ShapeKind::TextBox).count(), 2);
    }

    #[test]
    fn test_accent_bar_sits_between_title_and_subtitle() {
        let slide = build(Canvas::default(), &Theme::default(), "T", "S").unwrap();
        let accent = slide.shapes()[1].frame;
        let title = slide.text_box("T").unwrap().frame;
        let subtitle = slide.text_box("S").unwrap().frame;
        assert!(title.bottom() <= accent.y);
        assert!(accent.bottom() <= subtitle.y);
    }
}
