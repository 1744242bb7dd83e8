//! Errors raised while writing or inspecting PresentationML packages.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OoxmlError>;

#[derive(Error, Debug)]
pub enum OoxmlError {
    #[error("package: {0}")]
    Opc(#[from] crate::ooxml::opc::error::OpcError),

    /// Serializing a part or parsing one back failed
    #[error("presentation XML: {0}")]
    Xml(String),

    /// A part the presentation structure requires is absent
    #[error("missing part: {0}")]
    PartNotFound(String),

    /// Well-formed XML whose content does not describe a usable presentation
    #[error("invalid presentation: {0}")]
    InvalidFormat(String),

    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::Error> for OoxmlError {
    fn from(err: quick_xml::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

// write! into a String only fails if a Display impl does
impl From<std::fmt::Error> for OoxmlError {
    fn from(err: std::fmt::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for OoxmlError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        OoxmlError::Xml(format!("attribute: {}", err))
    }
}

impl From<std::str::Utf8Error> for OoxmlError {
    fn from(err: std::str::Utf8Error) -> Self {
        OoxmlError::InvalidFormat(format!("text is not UTF-8: {}", err))
    }
}
