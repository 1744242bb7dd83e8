//! Left-to-right process slides.
use crate::common::error::{Error, Result};
use crate::common::unit::inches;
use crate::deck::{
    Alignment, Canvas, Paragraph, Rect, ShapeKind, Slide, SlideBuilder, SlideKind, TextFrame,
};
use crate::layout::chrome;
use crate::layout::items::WorkflowStep;
use crate::layout::theme::Theme;

/// Narrowest step slot that still holds the 0.6" badge inside its card.
const MIN_STEP_WIDTH: f64 = 0.8;

/// Build a workflow slide: header bar and one card per step, tiled across
/// the canvas width, with numbered badges and arrows between cards.
///
/// Each step gets `(canvas_width - 1") / N` of horizontal space. Card
/// outline and badge fill cycle through `theme.palette`.
pub fn build(canvas: Canvas, theme: &Theme, title: &str, steps: &[WorkflowStep]) -> Result<Slide> {
    if steps.is_empty() {
        return Err(Error::EmptySteps(title.to_string()));
    }
    theme.validate()?;

    let step_width = (canvas.width - inches(1.0)) / steps.len() as i64;
    if step_width < inches(MIN_STEP_WIDTH) {
        return Err(Error::InvalidLayout(format!(
            "{} steps do not fit on workflow slide '{title}'",
            steps.len()
        )));
    }

    let mut builder = SlideBuilder::new(SlideKind::Workflow);
    chrome::header(&mut builder, canvas, theme, title);

    let last = steps.len() - 1;
    for (i, step) in steps.iter().enumerate() {
        let x = inches(0.5) + step_width * i as i64;
        let accent = theme.palette_color(i)?;
        let badge_x = x + step_width / 2 - inches(0.3);

        builder
            .add_shape(
                ShapeKind::RoundedRectangle,
                Rect::new(x + inches(0.1), inches(1.8), step_width - inches(0.2), inches(4.5)),
            )
            .fill(theme.card)
            .line(accent);

        builder
            .add_shape(
                ShapeKind::Oval,
                Rect::new(badge_x, inches(2.0), inches(0.6), inches(0.6)),
            )
            .fill(accent);

        builder.add_text_box(
            Rect::new(badge_x, inches(2.1), inches(0.6), inches(0.5)),
            TextFrame::single(
                Paragraph::new((i + 1).to_string(), 20.0, theme.white)
                    .bold()
                    .align(Alignment::Center),
            ),
        );

        builder.add_text_box(
            Rect::new(x + inches(0.2), inches(2.8), step_width - inches(0.4), inches(0.6)),
            TextFrame::single(
                Paragraph::new(step.title.as_str(), 16.0, theme.text)
                    .bold()
                    .align(Alignment::Center),
            ),
        );

        builder.add_text_box(
            Rect::new(x + inches(0.2), inches(3.4), step_width - inches(0.4), inches(2.5)),
            TextFrame::single(
                Paragraph::new(step.description.as_str(), 12.0, theme.muted)
                    .align(Alignment::Center),
            )
            .wrapped(),
        );

        if i < last {
            builder
                .add_shape(
                    ShapeKind::RightArrow,
                    Rect::new(x + step_width - inches(0.15), inches(4.0), inches(0.3), inches(0.3)),
                )
                .fill(theme.muted);
        }
    }

    chrome::footer_label(&mut builder, canvas, theme);
    Ok(builder.finish())
}
