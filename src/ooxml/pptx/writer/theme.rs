//! Theme part writer for PPTX packages.
//!
//! Writes `ppt/theme/theme1.xml`. The color scheme is taken from the layout
//! [`Theme`] so colors picked in PowerPoint's own palette match the deck.
use crate::common::Color;
use crate::layout::Theme;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace as ns;
use std::fmt::Write as FmtWrite;

/// The twelve theme colors of a DrawingML color scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    /// Dark 1 color (usually for text)
    dk1: Color,
    /// Light 1 color (usually for background)
    lt1: Color,
    /// Dark 2 color (secondary text)
    dk2: Color,
    /// Light 2 color (secondary background)
    lt2: Color,
    /// Accent colors (6 colors)
    accents: [Color; 6],
    /// Hyperlink color
    hlink: Color,
    /// Followed hyperlink color
    fol_hlink: Color,
}

impl ColorScheme {
    /// Derive a scheme from layout colors.
    ///
    /// Accents 1 and 2 are the primary and secondary colors, accents 3 to 6
    /// continue through the workflow palette.
    pub fn from_theme(theme: &Theme) -> Self {
        let mut accents = [theme.primary, theme.secondary, theme.primary, theme.secondary, theme.dark, theme.muted];
        for (slot, color) in accents.iter_mut().skip(2).zip(theme.palette.iter().skip(2)) {
            *slot = *color;
        }

        Self {
            dk1: theme.text,
            lt1: theme.white,
            dk2: theme.dark,
            lt2: theme.light,
            accents,
            hlink: theme.secondary,
            fol_hlink: theme.secondary_dark,
        }
    }

    /// Generate color scheme XML.
    fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str(r#"<a:clrScheme name="Slidesmith">"#);

        write!(xml, r#"<a:dk1><a:srgbClr val="{}"/></a:dk1>"#, self.dk1)?;
        write!(xml, r#"<a:lt1><a:srgbClr val="{}"/></a:lt1>"#, self.lt1)?;
        write!(xml, r#"<a:dk2><a:srgbClr val="{}"/></a:dk2>"#, self.dk2)?;
        write!(xml, r#"<a:lt2><a:srgbClr val="{}"/></a:lt2>"#, self.lt2)?;

        for (i, accent) in self.accents.iter().enumerate() {
            write!(
                xml,
                r#"<a:accent{0}><a:srgbClr val="{1}"/></a:accent{0}>"#,
                i + 1,
                accent
            )?;
        }

        write!(xml, r#"<a:hlink><a:srgbClr val="{}"/></a:hlink>"#, self.hlink)?;
        write!(
            xml,
            r#"<a:folHlink><a:srgbClr val="{}"/></a:folHlink>"#,
            self.fol_hlink
        )?;

        xml.push_str("</a:clrScheme>");
        Ok(())
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

/// Generate theme1.xml content.
pub(crate) fn theme_xml(scheme: &ColorScheme) -> Result<String> {
    let mut xml = String::with_capacity(4096);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, r#"<a:theme xmlns:a="{}" name="Slidesmith">"#, ns::DML_MAIN)?;
    xml.push_str("<a:themeElements>");

    scheme.to_xml(&mut xml)?;

    xml.push_str(r#"<a:fontScheme name="Office">"#);
    xml.push_str(r#"<a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#);
    xml.push_str(r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#);
    xml.push_str("</a:fontScheme>");

    // Format scheme: flat fills and plain lines, three of each as required
    xml.push_str(r#"<a:fmtScheme name="Office">"#);
    xml.push_str("<a:fillStyleLst>");
    for _ in 0..3 {
        xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    }
    xml.push_str("</a:fillStyleLst>");
    xml.push_str("<a:lnStyleLst>");
    for width in [6350, 12700, 19050] {
        write!(
            xml,
            r#"<a:ln w="{}" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/><a:miter lim="800000"/></a:ln>"#,
            width
        )?;
    }
    xml.push_str("</a:lnStyleLst>");
    xml.push_str("<a:effectStyleLst>");
    for _ in 0..3 {
        xml.push_str("<a:effectStyle><a:effectLst/></a:effectStyle>");
    }
    xml.push_str("</a:effectStyleLst>");
    xml.push_str("<a:bgFillStyleLst>");
    for _ in 0..3 {
        xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    }
    xml.push_str("</a:bgFillStyleLst>");
    xml.push_str("</a:fmtScheme>");

    xml.push_str("</a:themeElements>");
    xml.push_str("<a:objectDefaults/>");
    xml.push_str("<a:extraClrSchemeLst/>");
    xml.push_str("</a:theme>");

    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_follows_layout_theme() {
        let scheme = ColorScheme::from_theme(&Theme::default());
        assert_eq!(scheme.dk2, Color::new(6, 95, 70));
        assert_eq!(scheme.accents[0], Color::new(16, 185, 129));
        assert_eq!(scheme.accents[2], Color::new(245, 158, 11));
        assert_eq!(scheme.accents[4], Color::new(139, 92, 246));
    }

    #[test]
    fn test_short_palette_keeps_fallback_accents() {
        let theme = Theme {
            palette: vec![Color::WHITE],
            ..Theme::default()
        };
        let scheme = ColorScheme::from_theme(&theme);
        assert_eq!(scheme.accents[2], theme.primary);
        assert_eq!(scheme.accents[5], theme.muted);
    }

    #[test]
    fn test_xml_generation() {
        let xml = theme_xml(&ColorScheme::default()).unwrap();

        assert!(xml.contains("<?xml version"));
        assert!(xml.contains(r#"<a:accent1><a:srgbClr val="10B981"/></a:accent1>"#));
        assert!(xml.contains("a:fontScheme"));
        assert_eq!(xml.matches("<a:effectStyle>").count(), 3);
    }
}
