//! Unified error type for slidesmith.
//!
//! Layout validation, deck script loading and package writing all surface
//! through [`Error`], so callers only ever match one enum.
use thiserror::Error;

/// Main error type for slidesmith operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A content or column slide was given no items
    #[error("Slide '{slide}' has no items in {list}")]
    EmptyItems { slide: String, list: &'static str },

    /// A workflow slide was given no steps
    #[error("Workflow slide '{0}' has no steps")]
    EmptySteps(String),

    /// The theme palette used for workflow cards is empty
    #[error("Theme palette must contain at least one color")]
    EmptyPalette,

    /// A shape would be placed outside the canvas
    #[error("Shape '{shape}' on slide {slide} lies outside the {width}x{height} EMU canvas")]
    OutOfBounds {
        slide: usize,
        shape: String,
        width: i64,
        height: i64,
    },

    /// A layout cannot be computed for the given input
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// A color string is not a six-digit hex triple
    #[error("Invalid color '{0}': expected RRGGBB hex")]
    InvalidColor(String),

    /// A deck script could not be parsed or built
    #[error("Deck script error: {0}")]
    Script(String),

    /// XML generation or parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(String),

    /// Package assembly error
    #[error("Package error: {0}")]
    Package(String),
}

/// Result type for slidesmith operations.
pub type Result<T> = std::result::Result<T, Error>;
