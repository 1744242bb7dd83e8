//! Error conversion implementations.
//!
//! From impls mapping the packaging layer's errors onto the unified [`Error`].

use super::types::Error;
use crate::ooxml::error::OoxmlError;
use crate::ooxml::opc::error::OpcError;

impl From<OpcError> for Error {
    fn from(err: OpcError) -> Self {
        match err {
            OpcError::IoError(e) => Error::Io(e),
            OpcError::ZipError(e) => Error::Zip(e.to_string()),
            OpcError::XmlError(s) => Error::Xml(s),
            OpcError::QuickXmlError(e) => Error::Xml(e.to_string()),
            other => Error::Package(other.to_string()),
        }
    }
}

impl From<OoxmlError> for Error {
    fn from(err: OoxmlError) -> Self {
        match err {
            OoxmlError::Opc(e) => Error::from(e),
            OoxmlError::Io(e) => Error::Io(e),
            OoxmlError::Xml(s) => Error::Xml(s),
            other => Error::Package(other.to_string()),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            other => Error::Zip(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opc_io_error_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = OpcError::IoError(io).into();
        match err {
            Error::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_ooxml_xml_error_maps_to_xml() {
        let err: Error = OoxmlError::Xml("bad tag".to_string()).into();
        assert!(matches!(err, Error::Xml(ref s) if s == "bad tag"));
    }
}
