//! Header bar and footer label shared by the content-style templates.
use crate::common::unit::{EMUS_PER_INCH, inches};
use crate::deck::{Alignment, Canvas, Paragraph, Rect, ShapeKind, SlideBuilder, TextFrame};
use crate::layout::theme::Theme;

pub(crate) const HEADER_HEIGHT: f64 = 1.2;

/// Gap between the footer label and the right edge (1/3").
const FOOTER_RIGHT_MARGIN: i64 = EMUS_PER_INCH / 3;

/// Dark full-width bar across the top with the slide title in it.
pub(crate) fn header(builder: &mut SlideBuilder, canvas: Canvas, theme: &Theme, title: &str) {
    builder
        .add_shape(
            ShapeKind::Rectangle,
            Rect::new(0, 0, canvas.width, inches(HEADER_HEIGHT)),
        )
        .fill(theme.dark);

    builder.add_text_box(
        Rect::new(
            inches(0.5),
            inches(0.35),
            canvas.width - inches(1.0),
            inches(0.7),
        ),
        TextFrame::single(Paragraph::new(title, 32.0, theme.white).bold()),
    );
}

/// Small right-aligned label in the bottom-right corner, if the theme has one.
pub(crate) fn footer_label(builder: &mut SlideBuilder, canvas: Canvas, theme: &Theme) {
    let Some(label) = theme.footer_label.as_deref() else {
        return;
    };

    builder.add_text_box(
        Rect::new(
            canvas.width - inches(1.5) - FOOTER_RIGHT_MARGIN,
            canvas.height - inches(0.5),
            inches(1.5),
            inches(0.4),
        ),
        TextFrame::single(
            Paragraph::new(label, 10.0, theme.muted).align(Alignment::Right),
        ),
    );
}
