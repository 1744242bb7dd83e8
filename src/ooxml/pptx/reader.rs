//! Read-back inspection of written presentations.
//!
//! [`PresentationSummary`] opens a .pptx and reports, per slide in
//! presentation order, the shapes with their geometry preset, colors and
//! paragraph texts. It understands what [`PptxWriter`](super::PptxWriter)
//! writes and is not a general PPTX reader.

use crate::common::Color;
use crate::common::error::Result;
use crate::common::xml::unescape_xml;
use crate::ooxml::error::OoxmlError;
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::packuri::{PACKAGE_URI, PackURI};
use crate::ooxml::opc::phys_pkg::PhysPkgReader;
use crate::ooxml::opc::rel::Relationships;
use quick_xml::Reader;
use quick_xml::events::{BytesRef, BytesStart, Event};
use std::path::Path;

type XmlResult<T> = std::result::Result<T, OoxmlError>;

/// Slide order, slide size and per-slide shape summaries of a presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationSummary {
    /// Slide width in EMU
    pub slide_width: i64,
    /// Slide height in EMU
    pub slide_height: i64,
    /// `dc:title` of the core properties, if any
    pub title: Option<String>,
    pub slides: Vec<SlideSummary>,
}

/// One slide part.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSummary {
    /// Part name, e.g. "/ppt/slides/slide1.xml"
    pub partname: String,
    /// Shapes in z-order
    pub shapes: Vec<ShapeSummary>,
}

/// One `p:sp` element.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeSummary {
    pub id: u32,
    pub name: String,
    /// Preset geometry, e.g. "rect" or "rightArrow"
    pub preset: String,
    pub text_box: bool,
    pub fill: Option<Color>,
    pub line: Option<Color>,
    /// Paragraph texts, with line breaks as `'\n'`
    pub paragraphs: Vec<String>,
}

impl SlideSummary {
    /// All paragraph texts of the slide, in shape order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.shapes
            .iter()
            .flat_map(|shape| shape.paragraphs.iter().map(String::as_str))
    }

    /// Shapes with the given preset geometry.
    pub fn shapes_with_preset<'a>(&'a self, preset: &'a str) -> impl Iterator<Item = &'a ShapeSummary> {
        self.shapes.iter().filter(move |shape| shape.preset == preset)
    }
}

impl PresentationSummary {
    /// Inspect a .pptx file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Inspect .pptx bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = PhysPkgReader::new(bytes)?;

        let package_uri = PackURI::new(PACKAGE_URI).map_err(OoxmlError::InvalidFormat)?;
        let pkg_rels = match reader.rels_xml_for(&package_uri)? {
            Some(xml) => Relationships::from_xml(PACKAGE_URI.to_string(), &xml)?,
            None => return Err(OoxmlError::PartNotFound("/_rels/.rels".to_string()).into()),
        };

        let pres_uri = pkg_rels
            .with_reltype(rt::OFFICE_DOCUMENT)
            .next()
            .ok_or_else(|| OoxmlError::PartNotFound("main presentation part".to_string()))?
            .target_partname()?;

        let title = match pkg_rels.with_reltype(rt::CORE_PROPERTIES).next() {
            Some(rel) => {
                let core_uri = rel.target_partname()?;
                parse_core_title(&reader.blob_for(&core_uri)?)?
            },
            None => None,
        };

        let pres_xml = reader.blob_for(&pres_uri)?;
        let pres_rels = match reader.rels_xml_for(&pres_uri)? {
            Some(xml) => Relationships::from_xml(pres_uri.base_uri().to_string(), &xml)?,
            None => Relationships::new(pres_uri.base_uri().to_string()),
        };
        let (slide_width, slide_height, slide_rel_ids) = parse_presentation(&pres_xml)?;

        let mut slides = Vec::with_capacity(slide_rel_ids.len());
        for r_id in slide_rel_ids {
            let rel = pres_rels.get(&r_id).ok_or_else(|| {
                OoxmlError::InvalidFormat(format!("slide relationship {} is missing", r_id))
            })?;
            let slide_uri = rel.target_partname()?;
            let shapes = parse_slide(&reader.blob_for(&slide_uri)?)?;
            slides.push(SlideSummary {
                partname: slide_uri.to_string(),
                shapes,
            });
        }

        Ok(Self {
            slide_width,
            slide_height,
            title,
            slides,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// Value of the attribute with the exact qualified name `key`.
fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> XmlResult<Option<String>> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == key {
            let raw = std::str::from_utf8(&attr.value)?;
            return Ok(Some(unescape_xml(raw)));
        }
    }
    Ok(None)
}

fn attr_i64(e: &BytesStart<'_>, key: &[u8]) -> XmlResult<i64> {
    let value = attr_value(e, key)?.ok_or_else(|| {
        OoxmlError::InvalidFormat(format!(
            "missing attribute {}",
            String::from_utf8_lossy(key)
        ))
    })?;
    value
        .parse()
        .map_err(|_| OoxmlError::InvalidFormat(format!("not an integer: {}", value)))
}

/// Text of an entity or character reference such as `amp` or `#8226`.
fn resolve_ref(e: &BytesRef<'_>) -> XmlResult<String> {
    let name = std::str::from_utf8(e)?;
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => num.parse(),
        }
        .map_err(|_| OoxmlError::Xml(format!("bad character reference &{};", name)))?;
        let ch = char::from_u32(code)
            .ok_or_else(|| OoxmlError::Xml(format!("bad character reference &{};", name)))?;
        return Ok(ch.to_string());
    }
    Ok(unescape_xml(&format!("&{};", name)))
}

/// Slide size and slide relationship IDs in `p:sldIdLst` order.
fn parse_presentation(xml: &[u8]) -> XmlResult<(i64, i64, Vec<String>)> {
    let mut reader = Reader::from_reader(xml);
    let mut size = None;
    let mut rel_ids = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => match e.local_name().as_ref() {
                b"sldId" => {
                    let r_id = attr_value(&e, b"r:id")?.ok_or_else(|| {
                        OoxmlError::InvalidFormat("p:sldId without r:id".to_string())
                    })?;
                    rel_ids.push(r_id);
                },
                b"sldSz" => size = Some((attr_i64(&e, b"cx")?, attr_i64(&e, b"cy")?)),
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
    }

    let (width, height) =
        size.ok_or_else(|| OoxmlError::InvalidFormat("presentation has no p:sldSz".to_string()))?;
    Ok((width, height, rel_ids))
}

fn parse_core_title(xml: &[u8]) -> XmlResult<Option<String>> {
    let mut reader = Reader::from_reader(xml);
    let mut in_title = false;
    let mut title: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"title" => {
                in_title = true;
                title = Some(String::new());
            },
            Event::Text(e) if in_title => {
                if let Some(ref mut t) = title {
                    t.push_str(std::str::from_utf8(e.as_ref())?);
                }
            },
            Event::GeneralRef(e) if in_title => {
                if let Some(ref mut t) = title {
                    t.push_str(&resolve_ref(&e)?);
                }
            },
            Event::End(e) if e.local_name().as_ref() == b"title" => in_title = false,
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(title)
}

/// Parse the shapes of one slide part.
fn parse_slide(xml: &[u8]) -> XmlResult<Vec<ShapeSummary>> {
    let mut reader = Reader::from_reader(xml);
    let mut shapes = Vec::new();

    let mut current: Option<ShapeSummary> = None;
    let mut paragraph: Option<String> = None;
    let mut in_sp_pr = false;
    let mut in_ln = false;
    let mut in_t = false;

    loop {
        let event = reader.read_event()?;
        let (e, is_start) = match event {
            Event::Start(e) => (e, true),
            Event::Empty(e) => (e, false),
            Event::Text(e) => {
                if let (true, Some(text)) = (in_t, paragraph.as_mut()) {
                    text.push_str(std::str::from_utf8(e.as_ref())?);
                }
                continue;
            },
            Event::GeneralRef(e) => {
                if let (true, Some(text)) = (in_t, paragraph.as_mut()) {
                    text.push_str(&resolve_ref(&e)?);
                }
                continue;
            },
            Event::End(e) => {
                match e.local_name().as_ref() {
                    b"sp" => shapes.extend(current.take()),
                    b"spPr" => in_sp_pr = false,
                    b"ln" => in_ln = false,
                    b"t" => in_t = false,
                    b"p" => {
                        if let (Some(shape), Some(text)) = (current.as_mut(), paragraph.take()) {
                            shape.paragraphs.push(text);
                        }
                    },
                    _ => {},
                }
                continue;
            },
            Event::Eof => break,
            _ => continue,
        };

        let name = e.local_name();
        if name.as_ref() == b"sp" && is_start {
            current = Some(ShapeSummary::default());
            continue;
        }
        let Some(shape) = current.as_mut() else {
            continue;
        };

        match name.as_ref() {
            b"cNvPr" => {
                shape.id = attr_i64(&e, b"id")? as u32;
                shape.name = attr_value(&e, b"name")?.unwrap_or_default();
            },
            b"cNvSpPr" => shape.text_box = attr_value(&e, b"txBox")?.as_deref() == Some("1"),
            b"prstGeom" => shape.preset = attr_value(&e, b"prst")?.unwrap_or_default(),
            b"spPr" => in_sp_pr = is_start,
            b"ln" => in_ln = is_start,
            b"srgbClr" if in_sp_pr => {
                let color = attr_value(&e, b"val")?
                    .map(|hex| Color::from_hex(&hex))
                    .transpose()
                    .map_err(|err| OoxmlError::InvalidFormat(err.to_string()))?;
                if in_ln {
                    shape.line = color;
                } else {
                    shape.fill = color;
                }
            },
            b"p" => {
                paragraph = Some(String::new());
                if !is_start {
                    // <a:p/> is an empty paragraph
                    if let Some(text) = paragraph.take() {
                        shape.paragraphs.push(text);
                    }
                }
            },
            b"t" => in_t = is_start,
            b"br" => {
                if let Some(text) = paragraph.as_mut() {
                    text.push('\n');
                }
            },
            _ => {},
        }
    }

    Ok(shapes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::PptxWriter;
    use crate::{ContentItem, Deck, DeckProperties, LayoutEngine, Theme, WorkflowStep};

    const SLIDE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>
<p:sp><p:nvSpPr><p:cNvPr id="2" name="Box &amp; Co"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr><p:spPr><a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/><a:ln><a:solidFill><a:srgbClr val="10B981"/></a:solidFill></a:ln></p:spPr>
<p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:r><a:rPr><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill></a:rPr><a:t>Q &amp; A</a:t></a:r><a:br/><a:r><a:t>&#8226; next</a:t></a:r></a:p><a:p/></p:txBody></p:sp>
</p:spTree></p:cSld></p:sld>"#;

    #[test]
    fn test_parse_slide_shape() {
        let shapes = parse_slide(SLIDE.as_bytes()).unwrap();
        assert_eq!(shapes.len(), 1);

        let shape = &shapes[0];
        assert_eq!(shape.id, 2);
        assert_eq!(shape.name, "Box & Co");
        assert!(shape.text_box);
        assert_eq!(shape.preset, "rect");
        assert_eq!(shape.fill, None);
        assert_eq!(shape.line, Some(Color::new(16, 185, 129)));
        assert_eq!(shape.paragraphs, vec!["Q & A\n\u{2022} next".to_string(), String::new()]);
    }

    #[test]
    fn test_round_trip_through_writer() {
        let engine = LayoutEngine::new(Theme::default().with_footer_label("© Tech84")).unwrap();
        let mut deck = Deck::new();
        deck.set_properties(DeckProperties {
            title: Some("Snap & Send".to_string()),
            ..Default::default()
        });
        engine
            .title_slide(&mut deck, "Snap & Send", "Community Incident Reporting")
            .unwrap();
        engine
            .content_slide(
                &mut deck,
                "Key Features",
                &[
                    ContentItem::detailed("Photo Capture", "Snap a picture of the issue"),
                    ContentItem::plain("Real-time updates"),
                ],
            )
            .unwrap();
        engine
            .workflow_slide(
                &mut deck,
                "How It Works",
                &[
                    WorkflowStep::new("Snap", "Take a photo"),
                    WorkflowStep::new("Send", "Submit the report"),
                    WorkflowStep::new("Track", "Follow progress"),
                ],
            )
            .unwrap();
        engine.section_slide(&mut deck, "Thank\nYou").unwrap();

        let bytes = PptxWriter::new().to_bytes(&deck).unwrap();
        let summary = PresentationSummary::from_bytes(&bytes).unwrap();

        assert_eq!(summary.slide_count(), 4);
        assert_eq!(summary.slide_width, 12_192_000);
        assert_eq!(summary.title.as_deref(), Some("Snap & Send"));

        for (written, read) in deck.slides().iter().zip(&summary.slides) {
            let expected: Vec<&str> = written.paragraphs().map(|p| p.text.as_str()).collect();
            let actual: Vec<&str> = read.paragraphs().collect();
            assert_eq!(expected, actual);
            assert_eq!(written.shape_count(), read.shapes.len());
        }

        let workflow = &summary.slides[2];
        assert_eq!(workflow.shapes_with_preset("rightArrow").count(), 2);
        assert!(summary.slides[1].paragraphs().any(|p| p == "© Tech84"));
    }

    #[test]
    fn test_colors_survive_round_trip() {
        let engine = LayoutEngine::new(Theme::default()).unwrap();
        let mut deck = Deck::new();
        engine.section_slide(&mut deck, "Overview").unwrap();

        let bytes = PptxWriter::new().to_bytes(&deck).unwrap();
        let summary = PresentationSummary::from_bytes(&bytes).unwrap();

        for (written, read) in deck.slides()[0].shapes().iter().zip(&summary.slides[0].shapes) {
            assert_eq!(written.id, read.id);
            assert_eq!(written.name, read.name);
            assert_eq!(written.kind.preset(), read.preset);
            assert_eq!(written.fill, read.fill);
            assert_eq!(written.line, read.line);
            assert_eq!(written.is_text_box(), read.text_box);
        }
    }

    #[test]
    fn test_control_characters_in_item_text() {
        use std::io::Read;

        let engine = LayoutEngine::new(Theme::default()).unwrap();
        let mut deck = Deck::new();
        engine
            .content_slide(
                &mut deck,
                "Controls",
                &[ContentItem::plain("line\u{000B}tab"), ContentItem::plain("bell\u{0007}")],
            )
            .unwrap();
        let bytes = PptxWriter::new().to_bytes(&deck).unwrap();

        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes.as_slice())).unwrap();
        let mut slide_xml = String::new();
        archive
            .by_name("ppt/slides/slide1.xml")
            .unwrap()
            .read_to_string(&mut slide_xml)
            .unwrap();
        assert!(!slide_xml.contains('\u{000B}'));
        assert!(!slide_xml.contains('\u{0007}'));

        let summary = PresentationSummary::from_bytes(&bytes).unwrap();
        let paragraphs: Vec<&str> = summary.slides[0].paragraphs().collect();
        assert_eq!(paragraphs, vec!["Controls", "line\ntab", "bell_x0007_"]);
    }

    #[test]
    fn test_not_a_zip() {
        assert!(PresentationSummary::from_bytes(b"definitely not a zip").is_err());
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        let engine = LayoutEngine::new(Theme::default()).unwrap();
        let mut deck = Deck::new();
        engine.section_slide(&mut deck, "Overview").unwrap();
        PptxWriter::new().save(&deck, &path).unwrap();

        let summary = PresentationSummary::from_path(&path).unwrap();
        assert_eq!(summary.slides[0].partname, "/ppt/slides/slide1.xml");
        assert!(summary.slides[0].paragraphs().any(|p| p == "Overview"));
    }
}
