//! An in-memory OPC package under construction.
//!
//! Parts are kept in the order they were added, which is also the order
//! they are written to the ZIP container.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::part::Part;
use crate::ooxml::opc::pkgwriter::PackageWriter;
use crate::ooxml::opc::rel::Relationships;
use std::path::Path;

pub struct OpcPackage {
    /// Package-level relationships (`_rels/.rels`)
    rels: Relationships,

    parts: Vec<Box<dyn Part>>,
}

impl OpcPackage {
    pub fn new() -> Self {
        Self {
            rels: Relationships::new(PACKAGE_URI.to_string()),
            parts: Vec::new(),
        }
    }

    /// Add a part; a part with the same name is replaced in place.
    pub fn add_part(&mut self, part: Box<dyn Part>) {
        match self
            .parts
            .iter()
            .position(|p| p.partname() == part.partname())
        {
            Some(pos) => self.parts[pos] = part,
            None => self.parts.push(part),
        }
    }

    pub fn get_part(&self, partname: &PackURI) -> Result<&dyn Part> {
        self.parts
            .iter()
            .find(|p| p.partname() == partname)
            .map(|p| p.as_ref())
            .ok_or_else(|| OpcError::PartNotFound(partname.to_string()))
    }

    pub fn iter_parts(&self) -> impl Iterator<Item = &dyn Part> {
        self.parts.iter().map(|p| p.as_ref())
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    pub fn rels(&self) -> &Relationships {
        &self.rels
    }

    /// Relate the package itself to a part, returning the rId.
    pub fn relate_to(&mut self, target: &PackURI, reltype: &str) -> String {
        let target_ref = target.relative_ref(PACKAGE_URI);
        self.rels.get_or_add(reltype, &target_ref).r_id().to_string()
    }

    /// Serialize the package to ZIP bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        PackageWriter::to_bytes(self)
    }

    /// Write the package to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PackageWriter::write(path, self)
    }
}

impl Default for OpcPackage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::part::BlobPart;

    #[test]
    fn test_add_part_replaces_same_name() {
        let mut pkg = OpcPackage::new();
        let uri = PackURI::new("/a.xml").unwrap();
        pkg.add_part(Box::new(BlobPart::new(uri.clone(), "application/xml", b"1".to_vec())));
        pkg.add_part(Box::new(BlobPart::new(uri.clone(), "application/xml", b"2".to_vec())));

        assert_eq!(pkg.part_count(), 1);
        assert_eq!(pkg.get_part(&uri).unwrap().blob(), b"2");
    }

    #[test]
    fn test_missing_part() {
        let pkg = OpcPackage::new();
        let uri = PackURI::new("/missing.xml").unwrap();
        assert!(matches!(pkg.get_part(&uri), Err(OpcError::PartNotFound(_))));
    }
}
