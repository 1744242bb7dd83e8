//! Static parts shared by every generated presentation.
//!
//! The slide master carries no placeholders and the single layout is blank:
//! every shape on a slide is placed explicitly by a layout template.

/// Slide master with an empty shape tree and plain text styles.
pub fn default_slide_master_xml() -> &'static str {
    include_str!("../../../resources/slideMasters/slideMaster1.xml")
}

/// Blank slide layout used by every slide.
pub fn blank_slide_layout_xml() -> &'static str {
    include_str!("../../../resources/slideLayouts/slideLayout1.xml")
}

/// Table style list naming the built-in Medium Style 2 as default; no custom styles.
pub fn default_table_styles_xml() -> &'static str {
    include_str!("../../../resources/tableStyles.xml")
}

/// Editor view settings: normal view at the default zoom.
pub fn default_view_props_xml() -> &'static str {
    include_str!("../../../resources/viewProps.xml")
}

/// Presentation-wide settings, left at PowerPoint's defaults.
pub fn default_pres_props_xml() -> &'static str {
    include_str!("../../../resources/presProps.xml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_references_single_layout() {
        let master = default_slide_master_xml();
        assert!(master.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
        assert!(blank_slide_layout_xml().contains(r#"type="blank""#));
    }

    #[test]
    fn test_templates_are_xml() {
        for xml in [
            default_slide_master_xml(),
            blank_slide_layout_xml(),
            default_table_styles_xml(),
            default_view_props_xml(),
            default_pres_props_xml(),
        ] {
            assert!(xml.starts_with("<?xml"));
        }
    }
}
