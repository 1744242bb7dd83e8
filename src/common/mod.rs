//! Common types and utilities shared by the layout engine and the writer.

// Submodule declarations
pub mod color;
pub mod error;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use color::Color;
pub use error::{Error, Result};
