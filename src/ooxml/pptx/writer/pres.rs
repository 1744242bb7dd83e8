//! Presentation part XML for PPTX.
use crate::deck::Canvas;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::namespace as ns;
use std::fmt::Write as FmtWrite;

/// First `p:sldId/@id`; lower values are reserved.
pub(crate) const FIRST_SLIDE_ID: u32 = 256;

/// `p:sldMasterId/@id` of the only slide master.
pub(crate) const SLIDE_MASTER_ID: u32 = 2_147_483_648;

/// Generate `ppt/presentation.xml`.
///
/// # Arguments
/// * `canvas` - Slide size
/// * `master_rel_id` - Relationship ID of the slide master
/// * `slide_rel_ids` - Relationship IDs of the slides, in deck order
pub(crate) fn presentation_xml(
    canvas: Canvas,
    master_rel_id: &str,
    slide_rel_ids: &[String],
) -> Result<String> {
    if !canvas.is_valid_size() {
        return Err(OoxmlError::InvalidFormat(format!(
            "slide size must be within {}..={} EMU per side, got {}x{}",
            Canvas::MIN_EXTENT,
            Canvas::MAX_EXTENT,
            canvas.width, canvas.height
        )));
    }

    let mut xml = String::with_capacity(1024 + slide_rel_ids.len() * 48);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(
        xml,
        r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
        ns::DML_MAIN,
        ns::OFC_RELATIONSHIPS,
        ns::PML_MAIN
    )?;

    // Write slide master ID list
    xml.push_str("<p:sldMasterIdLst>");
    write!(
        xml,
        r#"<p:sldMasterId id="{}" r:id="{}"/>"#,
        SLIDE_MASTER_ID, master_rel_id
    )?;
    xml.push_str("</p:sldMasterIdLst>");

    // Write slide ID list
    if !slide_rel_ids.is_empty() {
        xml.push_str("<p:sldIdLst>");
        for (index, rel_id) in slide_rel_ids.iter().enumerate() {
            write!(
                xml,
                r#"<p:sldId id="{}" r:id="{}"/>"#,
                FIRST_SLIDE_ID + index as u32,
                rel_id
            )?;
        }
        xml.push_str("</p:sldIdLst>");
    }

    write!(
        xml,
        r#"<p:sldSz cx="{}" cy="{}"/>"#,
        canvas.width, canvas.height
    )?;
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");

    Ok(xml)
}
