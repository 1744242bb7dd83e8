//! XML helpers shared by the package writer and the inspector.

pub mod escape;

pub use escape::{escape_xml, unescape_xml};
