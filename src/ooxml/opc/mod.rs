//! Open Packaging Conventions (OPC) implementation.
//!
//! The container layer below PresentationML: part names, relationships,
//! content types and the ZIP archive holding them. Only what is needed to
//! write a package and read one back for inspection is implemented.

pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use error::OpcError;
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::{BlobPart, Part};
pub use rel::{Relationship, Relationships};
