//! Office Open XML packaging.
//!
//! - [`opc`]: the Open Packaging Conventions container (parts,
//!   relationships, content types, ZIP)
//! - [`pptx`]: PresentationML parts written on top of it

pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
pub use opc::{OpcPackage, PackURI};
pub use pptx::{PptxWriter, PresentationSummary};
