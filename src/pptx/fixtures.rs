//! Shared test fixtures for the shape renderers.

use super::context::{DocumentContext, PartScope, RenderContext};
use crate::container::{OoxmlContainer, Relationship, Relationships};
use crate::model::SlideSize;
use crate::session::RenderSession;
use crate::style::theme::tests::{office_theme, THEME_XML};
use crate::xml::XmlNode;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

const REL_PREFIX: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/";

/// Zip `files` into package bytes.
pub(crate) fn package_bytes(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut buffer = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(Cursor::new(&mut buffer));
        let options = SimpleFileOptions::default();
        for (name, content) in files {
            zip.start_file(*name, options).unwrap();
            zip.write_all(content).unwrap();
        }
        zip.finish().unwrap();
    }
    buffer
}

/// A slide part with a picture, a hyperlink and a slide link relationship.
pub(crate) struct Fixture {
    pub container: OoxmlContainer,
    pub doc: DocumentContext,
    pub session: RenderSession,
    pub rels: Relationships,
}

impl Fixture {
    pub fn new() -> Self {
        let container = OoxmlContainer::from_bytes(package_bytes(&[
            ("ppt/media/image1.png", b"png-bytes"),
            ("ppt/media/image2.jpeg", b"jpeg-bytes"),
        ]))
        .unwrap();

        let mut rels = Relationships::new("ppt/slides/slide1.xml");
        for (id, kind, target, external) in [
            ("rId2", "image", "../media/image1.png", false),
            ("rId3", "hyperlink", "https://example.com/", true),
            ("rId4", "slide", "slide2.xml", false),
            ("rId5", "image", "../media/image2.jpeg", false),
            ("rId6", "image", "../media/missing.png", false),
        ] {
            rels.add(Relationship {
                id: id.to_string(),
                rel_type: format!("{}{}", REL_PREFIX, kind),
                target: target.to_string(),
                external,
            });
        }

        Self {
            container,
            doc: DocumentContext {
                theme: office_theme(),
                size: SlideSize::new(960.0, 540.0),
                ..Default::default()
            },
            session: RenderSession::new(),
            rels,
        }
    }

    /// Context for the slide walk.
    pub fn slide<'a>(&'a self, text_styles: Option<&'a XmlNode>) -> RenderContext<'a> {
        self.context(false, text_styles)
    }

    /// Context for a layout or master walk.
    pub fn master(&self) -> RenderContext<'_> {
        self.context(true, None)
    }

    fn context<'a>(&'a self, is_master: bool, text_styles: Option<&'a XmlNode>) -> RenderContext<'a> {
        RenderContext {
            doc: &self.doc,
            session: &self.session,
            part: PartScope {
                container: &self.container,
                rels: &self.rels,
                layout: None,
                master: None,
                text_styles,
                is_master,
            },
        }
    }
}

pub(crate) fn node(xml: &str) -> XmlNode {
    XmlNode::parse(xml).unwrap()
}

const NS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;

/// Wrap shapes into a part root of the given element.
pub(crate) fn part(root: &str, attrs: &str, shapes: &str) -> String {
    format!(
        "<{root} {ns}{attrs}><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>{shapes}</p:spTree></p:cSld></{root}>",
        root = root,
        ns = NS,
        attrs = attrs,
        shapes = shapes
    )
}

fn rels(entries: &[(String, &str, String)]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for (id, kind, target) in entries {
        xml.push_str(&format!(
            r#"<Relationship Id="{}" Type="{}{}" Target="{}"/>"#,
            id, REL_PREFIX, kind, target
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

/// Builder for a small in-memory deck: one master, one layout, any number of
/// slides.
pub(crate) struct Deck {
    pub master: String,
    pub layout: String,
    pub slides: Vec<(String, Option<String>)>,
    pub theme: bool,
}

impl Deck {
    pub fn new() -> Self {
        Self {
            master: part("p:sldMaster", "", ""),
            layout: part("p:sldLayout", "", ""),
            slides: Vec::new(),
            theme: true,
        }
    }

    /// Add a slide holding `shapes`.
    pub fn slide(mut self, shapes: &str) -> Self {
        self.slides.push((part("p:sld", "", shapes), None));
        self
    }

    /// Add a slide from its full XML.
    pub fn raw_slide(mut self, xml: impl Into<String>) -> Self {
        self.slides.push((xml.into(), None));
        self
    }

    /// Attach speaker notes to the last slide.
    pub fn notes(mut self, text: &str) -> Self {
        if let Some(last) = self.slides.last_mut() {
            last.1 = Some(format!(
                r#"<p:notes {}><p:cSld><p:spTree><p:sp><p:nvSpPr><p:cNvPr id="2" name="Notes"/><p:cNvSpPr/><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr><p:txBody><a:bodyPr/><a:p><a:r><a:t>{}</a:t></a:r></a:p></p:txBody></p:sp></p:spTree></p:cSld></p:notes>"#,
                NS, text
            ));
        }
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut files: Vec<(String, String)> = vec![
            (
                "[Content_Types].xml".into(),
                r#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/></Types>"#.into(),
            ),
            (
                "_rels/.rels".into(),
                rels(&[("rId1".into(), "officeDocument", "ppt/presentation.xml".into())]),
            ),
        ];

        let mut pres_rels = vec![(
            "rId1".to_string(),
            "slideMaster",
            "slideMasters/slideMaster1.xml".to_string(),
        )];
        if self.theme {
            pres_rels.push(("rId2".into(), "theme", "theme/theme1.xml".into()));
            files.push(("ppt/theme/theme1.xml".into(), THEME_XML.into()));
        }
        let mut ids = String::new();
        for (i, (xml, notes)) in self.slides.iter().enumerate() {
            let n = i + 1;
            ids.push_str(&format!(r#"<p:sldId id="{}" r:id="rId{}"/>"#, 255 + n, 100 + n));
            pres_rels.push((format!("rId{}", 100 + n), "slide", format!("slides/slide{}.xml", n)));
            files.push((format!("ppt/slides/slide{}.xml", n), xml.clone()));

            let mut slide_rels = vec![(
                "rId1".to_string(),
                "slideLayout",
                "../slideLayouts/slideLayout1.xml".to_string(),
            )];
            if let Some(notes) = notes {
                slide_rels.push(("rId2".into(), "notesSlide", format!("../notesSlides/notesSlide{}.xml", n)));
                files.push((format!("ppt/notesSlides/notesSlide{}.xml", n), notes.clone()));
            }
            files.push((format!("ppt/slides/_rels/slide{}.xml.rels", n), rels(&slide_rels)));
        }

        files.push((
            "ppt/presentation.xml".into(),
            format!(
                r#"<p:presentation {}><p:sldIdLst>{}</p:sldIdLst><p:sldSz cx="9144000" cy="5143500"/><p:defaultTextStyle><a:defPPr><a:defRPr sz="1800"/></a:defPPr></p:defaultTextStyle></p:presentation>"#,
                NS, ids
            ),
        ));
        files.push(("ppt/_rels/presentation.xml.rels".into(), rels(&pres_rels)));
        files.push(("ppt/slideMasters/slideMaster1.xml".into(), self.master.clone()));
        files.push((
            "ppt/slideMasters/_rels/slideMaster1.xml.rels".into(),
            rels(&[
                ("rId1".into(), "slideLayout", "../slideLayouts/slideLayout1.xml".into()),
                ("rId2".into(), "theme", "../theme/theme1.xml".into()),
            ]),
        ));
        files.push(("ppt/slideLayouts/slideLayout1.xml".into(), self.layout.clone()));
        files.push((
            "ppt/slideLayouts/_rels/slideLayout1.xml.rels".into(),
            rels(&[("rId1".into(), "slideMaster", "../slideMasters/slideMaster1.xml".into())]),
        ));

        let borrowed: Vec<(&str, &[u8])> = files
            .iter()
            .map(|(name, xml)| (name.as_str(), xml.as_bytes()))
            .collect();
        package_bytes(&borrowed)
    }
}
