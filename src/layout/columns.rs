//! Two-column comparison slides.
use crate::common::Color;
use crate::common::error::{Error, Result};
use crate::common::unit::inches;
use crate::deck::{
    Alignment, Canvas, Paragraph, Rect, ShapeKind, Slide, SlideBuilder, SlideKind, TextFrame,
};
use crate::layout::chrome;
use crate::layout::theme::Theme;

const SIDE_MARGIN: f64 = 0.4;
const GUTTER: f64 = 0.5;
const PANEL_TOP: f64 = 1.5;
const PANEL_HEIGHT: f64 = 5.5;

/// One side of a two-column slide.
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub title: &'a str,
    pub items: &'a [String],
}

struct ColumnStyle {
    fill: Color,
    line: Color,
    heading: Color,
}

/// Build a two-column slide: header bar, two equal rounded panels separated
/// by a fixed gutter, each with a centered heading and a bullet list.
pub fn build(canvas: Canvas, theme: &Theme, title: &str, left: Column<'_>, right: Column<'_>) -> Result<Slide> {
    for (column, list) in [(&left, "left items"), (&right, "right items")] {
        if column.items.is_empty() {
            return Err(Error::EmptyItems {
                slide: title.to_string(),
                list,
            });
        }
    }

    let panel_width = (canvas.width - 2 * inches(SIDE_MARGIN) - inches(GUTTER)) / 2;
    if panel_width <= inches(0.6) {
        return Err(Error::InvalidLayout(format!(
            "canvas too narrow for two columns on slide '{title}'"
        )));
    }

    let mut builder = SlideBuilder::new(SlideKind::TwoColumn);
    chrome::header(&mut builder, canvas, theme, title);

    let left_x = inches(SIDE_MARGIN);
    let right_x = left_x + panel_width + inches(GUTTER);

    column(
        &mut builder,
        theme,
        left_x,
        panel_width,
        left,
        ColumnStyle {
            fill: theme.light,
            line: theme.primary,
            heading: theme.dark,
        },
    );
    column(
        &mut builder,
        theme,
        right_x,
        panel_width,
        right,
        ColumnStyle {
            fill: theme.secondary_light,
            line: theme.secondary,
            heading: theme.secondary_dark,
        },
    );

    chrome::footer_label(&mut builder, canvas, theme);
    Ok(builder.finish())
}

fn column(builder: &mut SlideBuilder, theme: &Theme, x: i64, width: i64, column: Column<'_>, style: ColumnStyle) {
    builder
        .add_shape(
            ShapeKind::RoundedRectangle,
            Rect::new(x, inches(PANEL_TOP), width, inches(PANEL_HEIGHT)),
        )
        .fill(style.fill)
        .line(style.line);

    builder.add_text_box(
        Rect::new(x + inches(0.2), inches(1.7), width - inches(0.4), inches(0.6)),
        TextFrame::single(
            Paragraph::new(column.title, 24.0, style.heading)
                .bold()
                .align(Alignment::Center),
        ),
    );

    let bullets = column
        .items
        .iter()
        .map(|item| {
            Paragraph::new(item.as_str(), 16.0, theme.text)
                .bullet()
                .space_after(8.0)
        })
        .collect();
    builder.add_text_box(
        Rect::new(x + inches(0.3), inches(2.4), width - inches(0.6), inches(4.4)),
        TextFrame::with_paragraphs(bullets).wrapped(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_panels_are_equal_and_aligned() {
        let left = strings(&["a", "b"]);
        let right = strings(&["c"]);
        let slide = build(
            Canvas::default(),
            &Theme::default(),
            "Overview",
            Column { title: "Citizens", items: &left },
            Column { title: "Authorities", items: &right },
        )
        .unwrap();

        let panels: Vec<_> = slide.shapes_of(ShapeKind::RoundedRectangle).collect();
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].frame.width, panels[1].frame.width);
        assert_eq!(panels[0].frame.y, panels[1].frame.y);
        assert_eq!(panels[0].frame.height, panels[1].frame.height);
        assert_eq!(panels[1].frame.x - panels[0].frame.right(), inches(GUTTER));
    }

    #[test]
    fn test_column_colors_differ() {
        let theme = Theme::default();
        let items = strings(&["x"]);
        let slide = build(
            Canvas::default(),
            &theme,
            "T",
            Column { title: "L", items: &items },
            Column { title: "R", items: &items },
        )
        .unwrap();

        let panels: Vec<_> = slide.shapes_of(ShapeKind::RoundedRectangle).collect();
        assert_eq!(panels[0].fill, Some(theme.light));
        assert_eq!(panels[0].line, Some(theme.primary));
        assert_eq!(panels[1].fill, Some(theme.secondary_light));
        assert_eq!(panels[1].line, Some(theme.secondary));

        let right_heading = slide.text_box("R").unwrap();
        assert_eq!(
            right_heading.text.as_ref().unwrap().paragraphs[0].color,
            theme.secondary_dark
        );
    }

    #[test]
    fn test_bullets_per_item() {
        let left = strings(&["one", "two", "three"]);
        let right = strings(&["four"]);
        let slide = build(
            Canvas::default(),
            &Theme::default(),
            "T",
            Column { title: "L", items: &left },
            Column { title: "R", items: &right },
        )
        .unwrap();

        let bullets = slide
            .paragraphs()
            .filter(|p| p.marker == crate::deck::Marker::Bullet)
            .count();
        assert_eq!(bullets, 4);
        assert!(slide.paragraphs().filter(|p| p.marker == crate::deck::Marker::Bullet).all(|p| p.size_pt == 16.0));
    }

    #[test]
    fn test_empty_column_rejected() {
        let items = strings(&["x"]);
        let err = build(
            Canvas::default(),
            &Theme::default(),
            "T",
            Column { title: "L", items: &items },
            Column { title: "R", items: &[] },
        )
        .unwrap_err();
        assert!(matches!(err, Error::EmptyItems { list: "right items", .. }));
    }
}
