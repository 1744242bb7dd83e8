//! PPTX package assembly.
//!
//! [`PptxWriter`] turns a finished [`Deck`] into an OPC package: one slide
//! master, one blank layout, one theme and a slide part per deck slide.

use crate::common::error::Result;
use crate::deck::Deck;
use crate::layout::Theme;
use crate::ooxml::error::OoxmlError;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::{BlobPart, OpcPackage, PackURI, Part};
use crate::ooxml::pptx::template;
use crate::ooxml::pptx::writer::{ColorScheme, pres, props, slide, theme};
use std::path::Path;

pub(crate) const PRESENTATION_URI: &str = "/ppt/presentation.xml";
const SLIDE_MASTER_URI: &str = "/ppt/slideMasters/slideMaster1.xml";
const SLIDE_LAYOUT_URI: &str = "/ppt/slideLayouts/slideLayout1.xml";
const THEME_URI: &str = "/ppt/theme/theme1.xml";
const PRES_PROPS_URI: &str = "/ppt/presProps.xml";
const VIEW_PROPS_URI: &str = "/ppt/viewProps.xml";
const TABLE_STYLES_URI: &str = "/ppt/tableStyles.xml";
const CORE_PROPS_URI: &str = "/docProps/core.xml";
const APP_PROPS_URI: &str = "/docProps/app.xml";

fn uri(s: &str) -> std::result::Result<PackURI, OoxmlError> {
    PackURI::new(s).map_err(OoxmlError::InvalidFormat)
}

/// Writes decks as PowerPoint (.pptx) files.
///
/// The same deck always produces the same bytes: parts and relationships
/// are emitted in a fixed order and ZIP timestamps are fixed.
///
/// # Examples
///
/// ```rust,no_run
/// use slidesmith::{Deck, LayoutEngine, PptxWriter, Theme};
///
/// let engine = LayoutEngine::new(Theme::default())?;
/// let mut deck = Deck::new();
/// engine.section_slide(&mut deck, "Overview")?;
///
/// PptxWriter::new().save(&deck, "overview.pptx")?;
/// # Ok::<(), slidesmith::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PptxWriter {
    color_scheme: ColorScheme,
}

impl PptxWriter {
    /// A writer using the default theme colors.
    pub fn new() -> Self {
        Self::default()
    }

    /// A writer whose package theme uses the colors of `theme`.
    pub fn with_theme(theme: &Theme) -> Self {
        Self {
            color_scheme: ColorScheme::from_theme(theme),
        }
    }

    /// Serialize a deck to the bytes of a .pptx file.
    pub fn to_bytes(&self, deck: &Deck) -> Result<Vec<u8>> {
        let package = self.build_package(deck)?;
        Ok(package.to_bytes()?)
    }

    /// Write a deck to `path`.
    ///
    /// The package is serialized in memory first and then moved into place
    /// atomically; on error no file is left at `path`.
    pub fn save<P: AsRef<Path>>(&self, deck: &Deck, path: P) -> Result<()> {
        let path = path.as_ref();
        let package = self.build_package(deck)?;
        package.save(path)?;
        log::info!("wrote {} slides to {}", deck.len(), path.display());
        Ok(())
    }

    /// Assemble the OPC package for a deck.
    pub fn build_package(&self, deck: &Deck) -> std::result::Result<OpcPackage, OoxmlError> {
        let mut package = OpcPackage::new();

        let pres_uri = uri(PRESENTATION_URI)?;
        let master_uri = uri(SLIDE_MASTER_URI)?;
        let layout_uri = uri(SLIDE_LAYOUT_URI)?;
        let theme_uri = uri(THEME_URI)?;

        let mut pres_part = BlobPart::new(pres_uri.clone(), ct::PML_PRESENTATION_MAIN, Vec::new());
        let master_rel_id = pres_part.relate_to(&master_uri, rt::SLIDE_MASTER);

        let mut slide_parts = Vec::with_capacity(deck.len());
        let mut slide_rel_ids = Vec::with_capacity(deck.len());
        for (index, deck_slide) in deck.slides().iter().enumerate() {
            let slide_uri = uri(&format!("/ppt/slides/slide{}.xml", index + 1))?;
            slide_rel_ids.push(pres_part.relate_to(&slide_uri, rt::SLIDE));

            let xml = slide::slide_xml(deck_slide)?;
            let mut part = BlobPart::new(slide_uri, ct::PML_SLIDE, xml.into_bytes());
            part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
            log::debug!(
                "slide {} ({}): {} shapes",
                index + 1,
                deck_slide.kind().as_str(),
                deck_slide.shape_count()
            );
            slide_parts.push(part);
        }

        for (target, reltype) in [
            (PRES_PROPS_URI, rt::PRES_PROPS),
            (VIEW_PROPS_URI, rt::VIEW_PROPS),
            (THEME_URI, rt::THEME),
            (TABLE_STYLES_URI, rt::TABLE_STYLES),
        ] {
            pres_part.relate_to(&uri(target)?, reltype);
        }

        let pres_xml = pres::presentation_xml(deck.canvas(), &master_rel_id, &slide_rel_ids)?;
        pres_part.set_blob(pres_xml.into_bytes());

        let mut master_part = BlobPart::new(
            master_uri.clone(),
            ct::PML_SLIDE_MASTER,
            template::default_slide_master_xml().as_bytes().to_vec(),
        );
        // the master's sldLayoutId list refers to rId1
        master_part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
        master_part.relate_to(&theme_uri, rt::THEME);

        let mut layout_part = BlobPart::new(
            layout_uri,
            ct::PML_SLIDE_LAYOUT,
            template::blank_slide_layout_xml().as_bytes().to_vec(),
        );
        layout_part.relate_to(&master_uri, rt::SLIDE_MASTER);

        package.relate_to(&pres_uri, rt::OFFICE_DOCUMENT);
        package.add_part(Box::new(pres_part));
        package.add_part(Box::new(master_part));
        package.add_part(Box::new(layout_part));
        for part in slide_parts {
            package.add_part(Box::new(part));
        }

        package.add_part(Box::new(BlobPart::new(
            theme_uri,
            ct::OFC_THEME,
            theme::theme_xml(&self.color_scheme)?.into_bytes(),
        )));
        for (target, content_type, xml) in [
            (PRES_PROPS_URI, ct::PML_PRES_PROPS, template::default_pres_props_xml()),
            (VIEW_PROPS_URI, ct::PML_VIEW_PROPS, template::default_view_props_xml()),
            (TABLE_STYLES_URI, ct::PML_TABLE_STYLES, template::default_table_styles_xml()),
        ] {
            package.add_part(Box::new(BlobPart::new(
                uri(target)?,
                content_type,
                xml.as_bytes().to_vec(),
            )));
        }

        let core_uri = uri(CORE_PROPS_URI)?;
        let app_uri = uri(APP_PROPS_URI)?;
        package.relate_to(&core_uri, rt::CORE_PROPERTIES);
        package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);
        package.add_part(Box::new(BlobPart::new(
            core_uri,
            ct::OPC_CORE_PROPERTIES,
            props::core_props_xml(deck.properties())?.into_bytes(),
        )));
        package.add_part(Box::new(BlobPart::new(
            app_uri,
            ct::OFC_EXTENDED_PROPERTIES,
            props::app_props_xml(deck.canvas(), deck.len())?.into_bytes(),
        )));

        log::debug!("assembled package with {} parts", package.part_count());
        Ok(package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::phys_pkg::PhysPkgReader;
    use crate::{ContentItem, LayoutEngine};

    fn sample_deck() -> Deck {
        let engine = LayoutEngine::new(Theme::default()).unwrap();
        let mut deck = Deck::new();
        engine
            .title_slide(&mut deck, "Snap & Send", "Community Incident Reporting")
            .unwrap();
        engine.section_slide(&mut deck, "The Problem").unwrap();
        engine
            .content_slide(
                &mut deck,
                "Challenges",
                &[ContentItem::plain("Slow reporting"), ContentItem::detailed("Visibility", "No status updates")],
            )
            .unwrap();
        deck
    }

    #[test]
    fn test_package_layout() {
        let package = PptxWriter::new().build_package(&sample_deck()).unwrap();
        let names: Vec<String> = package.iter_parts().map(|p| p.partname().to_string()).collect();

        assert_eq!(names[0], "/ppt/presentation.xml");
        assert!(names.contains(&"/ppt/slides/slide3.xml".to_string()));
        assert!(!names.contains(&"/ppt/slides/slide4.xml".to_string()));
        assert_eq!(package.rels().len(), 3);
    }

    #[test]
    fn test_presentation_rels_order() {
        let package = PptxWriter::new().build_package(&sample_deck()).unwrap();
        let pres = package.get_part(&PackURI::new(PRESENTATION_URI).unwrap()).unwrap();
        let rels: Vec<(&str, &str)> = pres
            .rels()
            .iter()
            .map(|r| (r.r_id(), r.target_ref()))
            .collect();

        assert_eq!(rels[0], ("rId1", "slideMasters/slideMaster1.xml"));
        assert_eq!(rels[1], ("rId2", "slides/slide1.xml"));
        assert_eq!(rels[3], ("rId4", "slides/slide3.xml"));
        assert_eq!(rels.len(), 8);
    }

    #[test]
    fn test_slide_relates_to_layout() {
        let package = PptxWriter::new().build_package(&sample_deck()).unwrap();
        let slide = package
            .get_part(&PackURI::new("/ppt/slides/slide1.xml").unwrap())
            .unwrap();
        let rel = slide.rels().get("rId1").unwrap();
        assert_eq!(rel.target_ref(), "../slideLayouts/slideLayout1.xml");
        assert_eq!(rel.reltype(), rt::SLIDE_LAYOUT);
    }

    #[test]
    fn test_to_bytes_is_deterministic() {
        let deck = sample_deck();
        let writer = PptxWriter::new();
        assert_eq!(writer.to_bytes(&deck).unwrap(), writer.to_bytes(&deck).unwrap());
    }

    #[test]
    fn test_empty_deck_is_valid_package() {
        let bytes = PptxWriter::new().to_bytes(&Deck::new()).unwrap();
        let mut reader = PhysPkgReader::new(&bytes).unwrap();
        let pres = reader.blob_for(&PackURI::new(PRESENTATION_URI).unwrap()).unwrap();
        let pres = String::from_utf8(pres).unwrap();
        assert!(!pres.contains("sldIdLst"));
        assert!(reader.contains(&PackURI::new("/ppt/theme/theme1.xml").unwrap()));
    }

    #[test]
    fn test_theme_colors_reach_package() {
        let theme = Theme {
            primary: crate::Color::new(1, 2, 3),
            ..Theme::default()
        };
        let bytes = PptxWriter::with_theme(&theme).to_bytes(&Deck::new()).unwrap();
        let mut reader = PhysPkgReader::new(&bytes).unwrap();
        let xml = reader.blob_for(&PackURI::new(THEME_URI).unwrap()).unwrap();
        assert!(String::from_utf8(xml).unwrap().contains(r#"<a:accent1><a:srgbClr val="010203"/>"#));
    }

    #[test]
    fn test_save_to_missing_directory_leaves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("deck.pptx");
        let err = PptxWriter::new().save(&sample_deck(), &path).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
        assert!(!path.exists());
    }
}
