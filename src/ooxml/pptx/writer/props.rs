//! Document property parts: `docProps/core.xml` and `docProps/app.xml`.
use crate::common::xml::escape_xml;
use crate::deck::{Canvas, DeckProperties};
use crate::ooxml::error::Result;
use chrono::SecondsFormat;
use std::fmt::Write as FmtWrite;

/// Application name recorded in the extended properties.
pub(crate) const APPLICATION: &str = "slidesmith";

/// Create core.xml content (Core Properties).
///
/// `dcterms:created` is only written when the deck carries a timestamp, so
/// the same deck always serializes to the same bytes.
pub(crate) fn core_props_xml(props: &DeckProperties) -> Result<String> {
    let mut xml = String::with_capacity(768);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

    if let Some(ref title) = props.title {
        write!(xml, "<dc:title>{}</dc:title>", escape_xml(title))?;
    }
    if let Some(ref subject) = props.subject {
        write!(xml, "<dc:subject>{}</dc:subject>", escape_xml(subject))?;
    }
    let creator = props.creator.as_deref().unwrap_or(APPLICATION);
    write!(xml, "<dc:creator>{}</dc:creator>", escape_xml(creator))?;
    write!(
        xml,
        "<cp:lastModifiedBy>{}</cp:lastModifiedBy>",
        escape_xml(creator)
    )?;
    xml.push_str("<cp:revision>1</cp:revision>");
    if let Some(created) = props.created {
        let timestamp = created.to_rfc3339_opts(SecondsFormat::Secs, true);
        write!(
            xml,
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{0}</dcterms:created><dcterms:modified xsi:type="dcterms:W3CDTF">{0}</dcterms:modified>"#,
            timestamp
        )?;
    }

    xml.push_str("</cp:coreProperties>");
    Ok(xml)
}

/// Name PowerPoint shows for a slide size in `PresentationFormat`.
pub(crate) fn presentation_format(canvas: Canvas) -> &'static str {
    match (canvas.width, canvas.height) {
        (12_192_000, 6_858_000) => "Widescreen",
        (9_144_000, 6_858_000) => "On-screen Show (4:3)",
        (9_144_000, 5_143_500) => "On-screen Show (16:9)",
        (9_144_000, 5_715_000) => "On-screen Show (16:10)",
        _ => "Custom",
    }
}

/// Create app.xml content (Extended Properties).
pub(crate) fn app_props_xml(canvas: Canvas, slide_count: usize) -> Result<String> {
    let mut xml = String::with_capacity(512);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
    write!(xml, "<Application>{}</Application>", APPLICATION)?;
    write!(
        xml,
        "<PresentationFormat>{}</PresentationFormat>",
        presentation_format(canvas)
    )?;
    write!(xml, "<Slides>{}</Slides>", slide_count)?;
    xml.push_str("<Notes>0</Notes>");
    xml.push_str("<HiddenSlides>0</HiddenSlides>");
    xml.push_str("<ScaleCrop>false</ScaleCrop>");
    xml.push_str("<LinksUpToDate>false</LinksUpToDate>");
    xml.push_str("<SharedDoc>false</SharedDoc>");
    xml.push_str("<HyperlinksChanged>false</HyperlinksChanged>");
    xml.push_str("<AppVersion>16.0000</AppVersion>");
    xml.push_str("</Properties>");

    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_core_props_without_timestamp() {
        let props = DeckProperties {
            title: Some("Snap & Send".to_string()),
            ..Default::default()
        };
        let xml = core_props_xml(&props).unwrap();

        assert!(xml.contains("<dc:title>Snap &amp; Send</dc:title>"));
        assert!(xml.contains("<dc:creator>slidesmith</dc:creator>"));
        assert!(!xml.contains("dcterms:created"));
    }

    #[test]
    fn test_core_props_with_timestamp() {
        let props = DeckProperties {
            creator: Some("Tech84".to_string()),
            created: Some(Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap()),
            ..Default::default()
        };
        let xml = core_props_xml(&props).unwrap();

        assert!(xml.contains("<dc:creator>Tech84</dc:creator>"));
        assert!(xml.contains(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">2025-03-01T09:30:00Z</dcterms:created>"#
        ));
    }

    #[test]
    fn test_app_props_slide_count() {
        let xml = app_props_xml(Canvas::WIDESCREEN, 17).unwrap();
        assert!(xml.contains("<Slides>17</Slides>"));
        assert!(xml.contains("<Application>slidesmith</Application>"));
        assert!(xml.contains("<PresentationFormat>Widescreen</PresentationFormat>"));
    }

    #[test]
    fn test_presentation_format_follows_canvas() {
        assert_eq!(presentation_format(Canvas::STANDARD), "On-screen Show (4:3)");
        let custom = Canvas::from_inches(8.0, 8.0).unwrap();
        assert_eq!(presentation_format(custom), "Custom");
        let xml = app_props_xml(custom, 1).unwrap();
        assert!(xml.contains("<PresentationFormat>Custom</PresentationFormat>"));
    }
}
