//! Errors raised by the packaging layer.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpcError {
    /// A part name that is not an absolute `/`-rooted path
    #[error("bad part name: {0}")]
    InvalidPackUri(String),

    /// Lookup of a part the package does not contain
    #[error("package has no part {0}")]
    PartNotFound(String),

    /// A `.rels` or `[Content_Types].xml` part that cannot be understood
    #[error("malformed package XML: {0}")]
    XmlError(String),

    #[error("zip container: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("package I/O: {0}")]
    IoError(#[from] std::io::Error),

    #[error("package XML: {0}")]
    QuickXmlError(#[from] quick_xml::Error),

    #[error("part text is not UTF-8: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    #[error("bad attribute in package XML: {0}")]
    AttrError(String),
}

impl From<quick_xml::events::attributes::AttrError> for OpcError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        OpcError::AttrError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OpcError>;
