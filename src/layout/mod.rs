//! Slide layout templates.
//!
//! Each template is a pure function from a [`Canvas`], a [`Theme`] and its
//! payload to a finished [`Slide`]. [`LayoutEngine`] wraps them so that each
//! call appends exactly one slide to a caller-owned [`Deck`]:
//!
//! ```rust
//! use slidesmith::{ContentItem, Deck, LayoutEngine, Theme, WorkflowStep};
//!
//! # fn main() -> slidesmith::Result<()> {
//! let engine = LayoutEngine::new(Theme::default())?;
//! let mut deck = Deck::new();
//!
//! engine.title_slide(&mut deck, "Quarterly Review", "Where we are")?;
//! engine.content_slide(
//!     &mut deck,
//!     "Highlights",
//!     &[ContentItem::plain("Shipped v2"), ContentItem::detailed("Growth", "Up 40%")],
//! )?;
//! engine.workflow_slide(
//!     &mut deck,
//!     "Next",
//!     &[WorkflowStep::new("Plan", "Scope it"), WorkflowStep::new("Build", "Ship it")],
//! )?;
//! assert_eq!(deck.len(), 3);
//! # Ok(())
//! # }
//! ```

mod chrome;
pub mod columns;
pub mod content;
pub mod items;
pub mod section;
pub mod theme;
pub mod title;
pub mod workflow;

pub use columns::Column;
pub use items::{ContentItem, WorkflowStep};
pub use theme::Theme;

use crate::common::error::Result;
use crate::deck::{Deck, Slide};

/// Applies the layout templates with a fixed theme.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    theme: Theme,
}

impl LayoutEngine {
    /// Create an engine, rejecting themes the templates cannot use.
    pub fn new(theme: Theme) -> Result<Self> {
        theme.validate()?;
        Ok(Self { theme })
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Append an opening/closing slide.
    pub fn title_slide<'d>(&self, deck: &'d mut Deck, title: &str, subtitle: &str) -> Result<&'d Slide> {
        let slide = title::build(deck.canvas(), &self.theme, title, subtitle)?;
        deck.push(slide)
    }

    /// Append a section divider.
    pub fn section_slide<'d>(&self, deck: &'d mut Deck, title: &str) -> Result<&'d Slide> {
        let slide = section::build(deck.canvas(), &self.theme, title)?;
        deck.push(slide)
    }

    /// Append a bulleted content slide.
    pub fn content_slide<'d>(&self, deck: &'d mut Deck, title: &str, items: &[ContentItem]) -> Result<&'d Slide> {
        let slide = content::build(deck.canvas(), &self.theme, title, items)?;
        deck.push(slide)
    }

    /// Append a two-column comparison slide.
    pub fn two_column_slide<'d>(
        &self,
        deck: &'d mut Deck,
        title: &str,
        left_title: &str,
        left_items: &[String],
        right_title: &str,
        right_items: &[String],
    ) -> Result<&'d Slide> {
        let slide = columns::build(
            deck.canvas(),
            &self.theme,
            title,
            Column {
                title: left_title,
                items: left_items,
            },
            Column {
                title: right_title,
                items: right_items,
            },
        )?;
        deck.push(slide)
    }

    /// Append a workflow slide.
    pub fn workflow_slide<'d>(&self, deck: &'d mut Deck, title: &str, steps: &[WorkflowStep]) -> Result<&'d Slide> {
        let slide = workflow::build(deck.canvas(), &self.theme, title, steps)?;
        deck.push(slide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;
    use crate::deck::{Canvas, SlideKind};
    use proptest::prelude::*;

    fn sample_deck(engine: &LayoutEngine, canvas: Canvas) -> Deck {
        let mut deck = Deck::with_canvas(canvas);
        let column = vec!["one".to_string(), "two".to_string()];
        engine.title_slide(&mut deck, "Title", "Subtitle").unwrap();
        engine.section_slide(&mut deck, "Section").unwrap();
        engine
            .content_slide(&mut deck, "Content", &[ContentItem::detailed("H", "d")])
            .unwrap();
        engine
            .two_column_slide(&mut deck, "Columns", "L", &column, "R", &column)
            .unwrap();
        engine
            .workflow_slide(
                &mut deck,
                "Flow",
                &[WorkflowStep::new("a", "x"), WorkflowStep::new("b", "y")],
            )
            .unwrap();
        engine.title_slide(&mut deck, "Thanks", "Questions?").unwrap();
        deck
    }

    #[test]
    fn test_order_follows_calls() {
        let engine = LayoutEngine::default();
        let deck = sample_deck(&engine, Canvas::default());
        let kinds: Vec<SlideKind> = deck.slides().iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                SlideKind::Title,
                SlideKind::Section,
                SlideKind::Content,
                SlideKind::TwoColumn,
                SlideKind::Workflow,
                SlideKind::Title,
            ]
        );
        assert!(deck.slides()[5].text_box("Thanks").is_some());
    }

    #[test]
    fn test_every_shape_fits_both_canvases() {
        let theme = Theme::default()
            .with_footer_label("© Acme")
            .with_title_footer("Acme");
        let engine = LayoutEngine::new(theme).unwrap();
        for canvas in [Canvas::WIDESCREEN, Canvas::STANDARD] {
            let deck = sample_deck(&engine, canvas);
            for slide in deck.slides() {
                for shape in slide.shapes() {
                    assert!(shape.frame.within(canvas.width, canvas.height), "{}", shape.name);
                }
            }
        }
    }

    #[test]
    fn test_failed_slide_leaves_deck_untouched() {
        let engine = LayoutEngine::default();
        let mut deck = Deck::new();
        engine.section_slide(&mut deck, "S").unwrap();
        let err = engine.content_slide(&mut deck, "Empty", &[]).unwrap_err();
        assert!(matches!(err, Error::EmptyItems { .. }));
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_engine_rejects_empty_palette() {
        let theme = Theme {
            palette: Vec::new(),
            ..Theme::default()
        };
        assert!(matches!(LayoutEngine::new(theme), Err(Error::EmptyPalette)));
    }

    #[test]
    fn test_rebuild_is_identical() {
        let engine = LayoutEngine::default();
        assert_eq!(
            sample_deck(&engine, Canvas::default()),
            sample_deck(&engine, Canvas::default())
        );
    }

    fn item_strategy() -> impl Strategy<Value = ContentItem> {
        prop_oneof![
            "[a-zA-Z ]{1,30}".prop_map(ContentItem::Plain),
            ("[a-zA-Z ]{1,20}", proptest::option::of("[a-zA-Z ]{1,40}")).prop_map(
                |(title, description)| ContentItem::Detailed { title, description }
            ),
        ]
    }

    fn step_strategy() -> impl Strategy<Value = WorkflowStep> {
        ("[a-zA-Z]{1,12}", "[a-zA-Z ]{1,60}").prop_map(|(t, d)| WorkflowStep::new(t, d))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_content_paragraph_count(items in prop::collection::vec(item_strategy(), 1..12)) {
            let engine = LayoutEngine::default();
            let mut deck = Deck::new();
            let slide = engine.content_slide(&mut deck, "T", &items).unwrap();

            let expected: usize = items.iter().map(ContentItem::paragraph_count).sum();
            // the header title is the one paragraph outside the body
            prop_assert_eq!(slide.paragraphs().count() - 1, expected);
        }

        #[test]
        fn prop_workflow_cards_and_arrows(steps in prop::collection::vec(step_strategy(), 1..10)) {
            let engine = LayoutEngine::default();
            let mut deck = Deck::new();
            let slide = engine.workflow_slide(&mut deck, "W", &steps).unwrap();
            let palette = &engine.theme().palette;

            let cards: Vec<_> = slide.shapes_of(crate::deck::ShapeKind::RoundedRectangle).collect();
            prop_assert_eq!(cards.len(), steps.len());
            prop_assert_eq!(
                slide.shapes_of(crate::deck::ShapeKind::RightArrow).count(),
                steps.len() - 1
            );
            for (i, card) in cards.iter().enumerate() {
                prop_assert_eq!(card.line, Some(palette[i % palette.len()]));
            }
        }

        #[test]
        fn prop_two_column_panels_match(
            left in prop::collection::vec("[a-z]{1,10}", 1..10),
            right in prop::collection::vec("[a-z]{1,10}", 1..10),
        ) {
            let engine = LayoutEngine::default();
            let mut deck = Deck::new();
            let slide = engine.two_column_slide(&mut deck, "T", "L", &left, "R", &right).unwrap();
            let panels: Vec<_> = slide.shapes_of(crate::deck::ShapeKind::RoundedRectangle).collect();

            prop_assert_eq!(panels.len(), 2);
            prop_assert_eq!(panels[0].frame.width, panels[1].frame.width);
            prop_assert_eq!(panels[0].frame.y, panels[1].frame.y);
            prop_assert_eq!(panels[0].frame.height, panels[1].frame.height);
        }
    }
}
