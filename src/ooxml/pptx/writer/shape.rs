//! Shape serialization for PPTX slides.
//!
//! Every deck shape becomes a `p:sp` element: non-visual properties, an
//! `a:xfrm` frame with preset geometry, fill and outline, and an optional
//! text body.
use crate::common::Color;
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::deck::{Marker, Paragraph, Shape, TextFrame};
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

/// Left margin of bulleted and indented paragraphs (0.3125in).
pub(crate) const BULLET_MARGIN: i64 = 285_750;

/// Write one shape as a `p:sp` element.
pub(crate) fn write_shape(xml: &mut String, shape: &Shape) -> Result<()> {
    xml.push_str("<p:sp>");

    xml.push_str("<p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="{}"/>"#,
        shape.id,
        escape_xml(&shape.name)
    )?;
    if shape.is_text_box() {
        xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
    } else {
        xml.push_str("<p:cNvSpPr/>");
    }
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    xml.push_str("<a:xfrm>");
    write!(
        xml,
        r#"<a:off x="{}" y="{}"/>"#,
        itoa::Buffer::new().format(shape.frame.x),
        itoa::Buffer::new().format(shape.frame.y)
    )?;
    write!(
        xml,
        r#"<a:ext cx="{}" cy="{}"/>"#,
        itoa::Buffer::new().format(shape.frame.width),
        itoa::Buffer::new().format(shape.frame.height)
    )?;
    xml.push_str("</a:xfrm>");
    write!(
        xml,
        r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
        shape.kind.preset()
    )?;

    match shape.fill {
        Some(color) => write_solid_fill(xml, color)?,
        None => xml.push_str("<a:noFill/>"),
    }
    match shape.line {
        Some(color) => {
            xml.push_str("<a:ln>");
            write_solid_fill(xml, color)?;
            xml.push_str("</a:ln>");
        },
        None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
    }
    xml.push_str("</p:spPr>");

    if let Some(ref frame) = shape.text {
        write_text_body(xml, frame, shape.is_text_box())?;
    }

    xml.push_str("</p:sp>");
    Ok(())
}

fn write_solid_fill(xml: &mut String, color: Color) -> Result<()> {
    write!(
        xml,
        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
        color.to_hex()
    )?;
    Ok(())
}

/// Write a `p:txBody`. Text inside autoshapes is vertically centered.
fn write_text_body(xml: &mut String, frame: &TextFrame, text_box: bool) -> Result<()> {
    xml.push_str("<p:txBody>");
    let wrap = if frame.word_wrap { "square" } else { "none" };
    if text_box {
        write!(xml, r#"<a:bodyPr wrap="{}" rtlCol="0"/>"#, wrap)?;
    } else {
        write!(xml, r#"<a:bodyPr wrap="{}" rtlCol="0" anchor="ctr"/>"#, wrap)?;
    }
    xml.push_str("<a:lstStyle/>");

    if frame.paragraphs.is_empty() {
        // a text body needs at least one paragraph
        xml.push_str("<a:p/>");
    }
    for paragraph in &frame.paragraphs {
        write_paragraph(xml, paragraph)?;
    }

    xml.push_str("</p:txBody>");
    Ok(())
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) -> Result<()> {
    xml.push_str("<a:p>");

    write!(xml, r#"<a:pPr algn="{}""#, paragraph.alignment.as_ooxml())?;
    match paragraph.marker {
        Marker::Bullet => write!(xml, r#" marL="{}" indent="-{}""#, BULLET_MARGIN, BULLET_MARGIN)?,
        Marker::Indented => write!(xml, r#" marL="{}" indent="0""#, BULLET_MARGIN)?,
        Marker::None => {},
    }
    xml.push('>');
    if let Some(pt) = paragraph.space_after_pt {
        write!(
            xml,
            r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
            pt_to_centipoints(pt)
        )?;
    }
    match paragraph.marker {
        Marker::Bullet => {
            xml.push_str(r#"<a:buFont typeface="Arial"/><a:buChar char="&#8226;"/>"#);
        },
        Marker::Indented | Marker::None => xml.push_str("<a:buNone/>"),
    }
    xml.push_str("</a:pPr>");

    let size = pt_to_centipoints(paragraph.size_pt);
    // vertical tab is the soft line break of PowerPoint's own text model
    for (i, line) in paragraph.text.split(['\n', '\u{000B}']).enumerate() {
        if i > 0 {
            xml.push_str("<a:br>");
            write_run_props(xml, "a:rPr", paragraph, size)?;
            xml.push_str("</a:br>");
        }
        if line.is_empty() {
            continue;
        }
        xml.push_str("<a:r>");
        write_run_props(xml, "a:rPr", paragraph, size)?;
        write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
        xml.push_str("</a:r>");
    }
    write_run_props(xml, "a:endParaRPr", paragraph, size)?;

    xml.push_str("</a:p>");
    Ok(())
}

fn write_run_props(xml: &mut String, tag: &str, paragraph: &Paragraph, size: u32) -> Result<()> {
    write!(xml, r#"<{} lang="en-US" sz="{}""#, tag, size)?;
    if paragraph.bold {
        xml.push_str(r#" b="1""#);
    }
    xml.push_str(r#" dirty="0">"#);
    write_solid_fill(xml, paragraph.color)?;
    write!(xml, "</{}>", tag)?;
    Ok(())
}
