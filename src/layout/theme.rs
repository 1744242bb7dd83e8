//! Color scheme and footer configuration shared by all layout templates.
use crate::common::error::{Error, Result};
use crate::common::Color;
use serde::{Deserialize, Serialize};

/// Colors and fixed labels applied by the layout templates.
///
/// Every field has a default, so a deck script only needs to name the
/// values it overrides:
///
/// ```yaml
/// theme:
///   dark: "1E3A8A"
///   footer_label: "© Acme"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    /// Title-slide background, header bars, headings
    pub dark: Color,
    /// Accent bars
    pub primary: Color,
    /// Subtitle text and left column panel fill
    pub light: Color,
    /// Body text
    pub text: Color,
    /// Descriptions, footers, workflow arrows
    pub muted: Color,
    /// Text on dark backgrounds
    pub white: Color,
    /// Right column outline
    pub secondary: Color,
    /// Right column panel fill
    pub secondary_light: Color,
    /// Right column heading
    pub secondary_dark: Color,
    /// Workflow card fill
    pub card: Color,
    /// Workflow card outline and badge colors, cycled by step index
    pub palette: Vec<Color>,
    /// Bottom-right label on content, two-column and workflow slides
    pub footer_label: Option<String>,
    /// Centered footer line on title slides
    pub title_footer: Option<String>,
}

impl Default for Theme {
    fn default() -> Self {
        let primary = Color::new(16, 185, 129);
        let secondary = Color::new(59, 130, 246);
        Self {
            dark: Color::new(6, 95, 70),
            primary,
            light: Color::new(209, 250, 229),
            text: Color::new(31, 41, 55),
            muted: Color::new(107, 114, 128),
            white: Color::WHITE,
            secondary,
            secondary_light: Color::new(219, 234, 254),
            secondary_dark: Color::new(30, 64, 175),
            card: Color::new(249, 250, 251),
            palette: vec![
                primary,
                secondary,
                Color::new(245, 158, 11),
                Color::new(239, 68, 68),
                Color::new(139, 92, 246),
            ],
            footer_label: None,
            title_footer: None,
        }
    }
}

impl Theme {
    /// Builder method: set the bottom-right footer label.
    pub fn with_footer_label(mut self, label: impl Into<String>) -> Self {
        self.footer_label = Some(label.into());
        self
    }

    /// Builder method: set the title-slide footer line.
    pub fn with_title_footer(mut self, footer: impl Into<String>) -> Self {
        self.title_footer = Some(footer.into());
        self
    }

    /// Palette color for the `index`-th workflow step.
    pub fn palette_color(&self, index: usize) -> Result<Color> {
        if self.palette.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(self.palette[index % self.palette.len()])
    }

    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(())
    }
}
