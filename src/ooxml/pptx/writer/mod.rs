//! XML generators for the parts of a PPTX package.

pub mod pres;
pub mod props;
pub mod shape;
pub mod slide;
pub mod theme;

pub use theme::ColorScheme;
