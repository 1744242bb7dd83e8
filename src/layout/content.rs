//! Bulleted content slides.
use crate::common::error::{Error, Result};
use crate::common::unit::inches;
use crate::deck::{Canvas, Paragraph, Rect, Slide, SlideBuilder, SlideKind, TextFrame};
use crate::layout::chrome;
use crate::layout::items::ContentItem;
use crate::layout::theme::Theme;

/// Build a content slide: header bar with the title, a word-wrapped list
/// rendered from `items`, and the footer label.
///
/// Detailed items become a bold bullet heading plus an indented description;
/// plain items become a single bullet.
pub fn build(canvas: Canvas, theme: &Theme, title: &str, items: &[ContentItem]) -> Result<Slide> {
    if items.is_empty() {
        return Err(Error::EmptyItems {
            slide: title.to_string(),
            list: "items",
        });
    }

    let mut builder = SlideBuilder::new(SlideKind::Content);
    chrome::header(&mut builder, canvas, theme, title);

    let mut paragraphs = Vec::with_capacity(items.iter().map(ContentItem::paragraph_count).sum());
    for item in items {
        push_paragraphs(&mut paragraphs, theme, item);
    }
    builder.add_text_box(
        Rect::new(
            inches(0.5),
            inches(1.6),
            canvas.width - inches(1.0),
            inches(5.5),
        ),
        TextFrame::with_paragraphs(paragraphs).wrapped(),
    );

    chrome::footer_label(&mut builder, canvas, theme);
    Ok(builder.finish())
}

fn push_paragraphs(out: &mut Vec<Paragraph>, theme: &Theme, item: &ContentItem) {
    match item {
        ContentItem::Plain(text) => out.push(
            Paragraph::new(text.as_str(), 20.0, theme.text)
                .bullet()
                .space_after(12.0),
        ),
        ContentItem::Detailed { title, description } => {
            out.push(
                Paragraph::new(title.as_str(), 22.0, theme.dark)
                    .bold()
                    .bullet()
                    .space_after(4.0),
            );
            if let Some(desc) = description {
                out.push(
                    Paragraph::new(desc.as_str(), 18.0, theme.muted)
                        .indented()
                        .space_after(16.0),
                );
            }
        },
    }
}
