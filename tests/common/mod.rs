//! In-memory deck builder for integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;

pub const NS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;

const REL_PREFIX: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/";

pub const THEME: &str = r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office"><a:themeElements>
<a:clrScheme name="Office"><a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1><a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1><a:accent1><a:srgbClr val="4472C4"/></a:accent1><a:accent2><a:srgbClr val="ED7D31"/></a:accent2></a:clrScheme>
<a:fontScheme name="Office"><a:majorFont><a:latin typeface="Calibri Light"/></a:majorFont><a:minorFont><a:latin typeface="Calibri"/></a:minorFont></a:fontScheme>
<a:fmtScheme name="Office"><a:fillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:srgbClr val="00FF00"/></a:solidFill></a:fillStyleLst>
<a:lnStyleLst><a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln></a:lnStyleLst>
<a:bgFillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:bgFillStyleLst></a:fmtScheme>
</a:themeElements></a:theme>"#;

/// Wrap shapes (and anything after `p:cSld`, such as timing) into a part.
pub fn part(root: &str, shapes: &str, tail: &str) -> String {
    format!(
        "<{root} {ns}><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>{shapes}</p:spTree></p:cSld>{tail}</{root}>",
        root = root,
        ns = NS,
        shapes = shapes,
        tail = tail
    )
}

/// A rectangle at 100,100 sized 200x100 px with the given `spPr` fill
/// markup.
pub fn rect(id: u32, name: &str, fill: &str) -> String {
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="{}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr><a:xfrm><a:off x="952500" y="952500"/><a:ext cx="1905000" cy="952500"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom>{}</p:spPr></p:sp>"#,
        id, name, fill
    )
}

/// A placeholder shape; `xfrm` is `None` to inherit the position.
pub fn placeholder(id: u32, name: &str, ph: &str, xfrm: Option<(i64, i64)>, body: &str) -> String {
    let sp_pr = match xfrm {
        Some((x, y)) => format!(
            r#"<p:spPr><a:xfrm><a:off x="{}" y="{}"/><a:ext cx="1905000" cy="952500"/></a:xfrm></p:spPr>"#,
            x, y
        ),
        None => "<p:spPr/>".to_string(),
    };
    format!(
        r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="{}"/><p:cNvSpPr/><p:nvPr>{}</p:nvPr></p:nvSpPr>{}<p:txBody><a:bodyPr/>{}</p:txBody></p:sp>"#,
        id, name, ph, sp_pr, body
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

struct SlideEntry {
    xml: String,
    notes: Option<String>,
    image: Option<Vec<u8>>,
}

/// One master, one layout and any number of slides.
pub struct DeckBuilder {
    master: String,
    layout: String,
    slides: Vec<SlideEntry>,
    title: Option<String>,
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckBuilder {
    pub fn new() -> Self {
        Self {
            master: part("p:sldMaster", "", ""),
            layout: part("p:sldLayout", "", ""),
            slides: Vec::new(),
            title: None,
        }
    }

    pub fn master(mut self, shapes: &str) -> Self {
        self.master = part("p:sldMaster", shapes, "");
        self
    }

    pub fn layout(mut self, shapes: &str) -> Self {
        self.layout = part("p:sldLayout", shapes, "");
        self
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn slide(self, shapes: &str) -> Self {
        self.slide_with(shapes, "")
    }

    /// Add a slide with extra elements after `p:cSld`.
    pub fn slide_with(mut self, shapes: &str, tail: &str) -> Self {
        self.slides.push(SlideEntry {
            xml: part("p:sld", shapes, tail),
            notes: None,
            image: None,
        });
        self
    }

    /// Attach speaker notes to the last slide.
    pub fn notes(mut self, text: &str) -> Self {
        if let Some(last) = self.slides.last_mut() {
            last.notes = Some(format!(
                r#"<p:notes {}><p:cSld><p:spTree><p:sp><p:nvSpPr><p:cNvPr id="2" name="Notes"/><p:cNvSpPr/><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr><p:txBody><a:bodyPr/><a:p><a:r><a:t>{}</a:t></a:r></a:p></p:txBody></p:sp></p:spTree></p:cSld></p:notes>"#,
                NS, text
            ));
        }
        self
    }

    /// Attach a media part to the last slide as relationship `rId9`.
    pub fn image(mut self, data: &[u8]) -> Self {
        if let Some(last) = self.slides.last_mut() {
            last.image = Some(data.to_vec());
        }
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut media: Vec<(String, Vec<u8>)> = Vec::new();
        let mut files: Vec<(String, String)> = vec![
            (
                "[Content_Types].xml".into(),
                r#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/></Types>"#.into(),
            ),
            (
                "_rels/.rels".into(),
                rels(&[("rId1".into(), "officeDocument", "ppt/presentation.xml".into())]),
            ),
            ("ppt/theme/theme1.xml".into(), THEME.into()),
        ];

        if let Some(title) = &self.title {
            files.push((
                "docProps/core.xml".into(),
                format!(
                    r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/"><dc:title>{}</dc:title><dc:creator>Tester</dc:creator></cp:coreProperties>"#,
                    title
                ),
            ));
        }

        let mut pres_rels = vec![
            ("rId1".to_string(), "slideMaster", "slideMasters/slideMaster1.xml".to_string()),
            ("rId2".to_string(), "theme", "theme/theme1.xml".to_string()),
        ];
        let mut ids = String::new();
        for (i, slide) in self.slides.iter().enumerate() {
            let n = i + 1;
            ids.push_str(&format!(r#"<p:sldId id="{}" r:id="rId{}"/>"#, 255 + n, 100 + n));
            pres_rels.push((format!("rId{}", 100 + n), "slide", format!("slides/slide{}.xml", n)));
            files.push((format!("ppt/slides/slide{}.xml", n), slide.xml.clone()));

            let mut slide_rels = vec![(
                "rId1".to_string(),
                "slideLayout",
                "../slideLayouts/slideLayout1.xml".to_string(),
            )];
            if let Some(notes) = &slide.notes {
                slide_rels.push(("rId2".into(), "notesSlide", format!("../notesSlides/notesSlide{}.xml", n)));
                files.push((format!("ppt/notesSlides/notesSlide{}.xml", n), notes.clone()));
            }
            if let Some(data) = &slide.image {
                slide_rels.push(("rId9".into(), "image", format!("../media/image{}.png", n)));
                media.push((format!("ppt/media/image{}.png", n), data.clone()));
            }
            files.push((format!("ppt/slides/_rels/slide{}.xml.rels", n), rels(&slide_rels)));
        }

        files.push((
            "ppt/presentation.xml".into(),
            format!(
                r#"<p:presentation {}><p:sldIdLst>{}</p:sldIdLst><p:sldSz cx="9144000" cy="5143500"/></p:presentation>"#,
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

        let mut entries: Vec<(&str, &[u8])> = files
            .iter()
            .map(|(name, xml)| (name.as_str(), xml.as_bytes()))
            .collect();
        entries.extend(media.iter().map(|(name, data)| (name.as_str(), data.as_slice())));
        zip_entries(&entries)
    }
}

/// Zip raw entries into package bytes.
pub fn zip_entries(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut buffer = Vec::new();
    {
        let mut zip = zip::ZipWriter::new(Cursor::new(&mut buffer));
        let options = SimpleFileOptions::default();
        for (name, content) in entries {
            zip.start_file(*name, options).unwrap();
            zip.write_all(content).unwrap();
        }
        zip.finish().unwrap();
    }
    buffer
}
