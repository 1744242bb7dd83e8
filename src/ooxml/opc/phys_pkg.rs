//! Physical package access: the ZIP container behind an OPC package.

use crate::ooxml::opc::error::{OpcError, Result};
use crate::ooxml::opc::packuri::PackURI;
use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipArchive, ZipWriter};

/// Physical package writer.
///
/// Every entry gets the same fixed timestamp so identical packages
/// serialize to identical bytes.
pub struct PhysPkgWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
        }
    }

    /// Write a part with Deflate compression and a fixed timestamp.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());
        self.archive.start_file(pack_uri.membername(), options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the package bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.archive.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Physical package reader over an in-memory ZIP archive.
pub struct PhysPkgReader<'data> {
    archive: ZipArchive<Cursor<&'data [u8]>>,
}

impl<'data> PhysPkgReader<'data> {
    pub fn new(data: &'data [u8]) -> Result<Self> {
        Ok(Self {
            archive: ZipArchive::new(Cursor::new(data))?,
        })
    }

    /// Read and decompress one part.
    pub fn blob_for(&mut self, pack_uri: &PackURI) -> Result<Vec<u8>> {
        let mut file = self
            .archive
            .by_name(pack_uri.membername())
            .map_err(|_| OpcError::PartNotFound(pack_uri.to_string()))?;
        let mut blob = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut blob)?;
        Ok(blob)
    }

    /// Read a part's relationships, or none if it has no `.rels` part.
    pub fn rels_xml_for(&mut self, pack_uri: &PackURI) -> Result<Option<Vec<u8>>> {
        let rels_uri = pack_uri.rels_uri().map_err(OpcError::InvalidPackUri)?;
        if !self.contains(&rels_uri) {
            return Ok(None);
        }
        self.blob_for(&rels_uri).map(Some)
    }

    pub fn contains(&self, pack_uri: &PackURI) -> bool {
        self.archive.index_for_name(pack_uri.membername()).is_some()
    }

    /// All member names in archive order.
    pub fn member_names(&self) -> Vec<String> {
        self.archive.file_names().map(String::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut writer = PhysPkgWriter::new();
        let pack_uri = PackURI::new("/test.txt").unwrap();
        writer.write(&pack_uri, b"Hello, World!").unwrap();
        let zip_data = writer.finish().unwrap();

        let mut reader = PhysPkgReader::new(&zip_data).unwrap();
        assert_eq!(reader.blob_for(&pack_uri).unwrap(), b"Hello, World!");
    }

    #[test]
    fn test_multiple_parts_keep_order() {
        let mut writer = PhysPkgWriter::new();
        let content_types = PackURI::new("/[Content_Types].xml").unwrap();
        let rels = PackURI::new("/_rels/.rels").unwrap();
        let pres = PackURI::new("/ppt/presentation.xml").unwrap();

        writer.write(&content_types, b"<Types/>").unwrap();
        writer.write(&rels, b"<Relationships/>").unwrap();
        writer.write(&pres, b"<presentation/>").unwrap();

        let zip_data = writer.finish().unwrap();
        let mut reader = PhysPkgReader::new(&zip_data).unwrap();
        assert_eq!(
            reader.member_names(),
            vec!["[Content_Types].xml", "_rels/.rels", "ppt/presentation.xml"]
        );
        assert_eq!(reader.blob_for(&pres).unwrap(), b"<presentation/>");
        assert!(!reader.contains(&PackURI::new("/missing.xml").unwrap()));
    }

    #[test]
    fn test_identical_input_identical_bytes() {
        let build = || {
            let mut writer = PhysPkgWriter::new();
            writer
                .write(&PackURI::new("/a.xml").unwrap(), b"<a/>")
                .unwrap();
            writer.finish().unwrap()
        };
        assert_eq!(build(), build());
    }
}
