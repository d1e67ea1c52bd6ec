//! Presentation package detection.
//!
//! PowerPoint writes the same package structure for decks, macro-enabled
//! decks, slide shows and templates; only the main part content type
//! differs. Word and Excel packages are recognized so they can be rejected
//! with a helpful message.

use crate::container::decode_xml_bytes;
use crate::error::{Error, Result};
use crate::xml::XmlNode;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

const PRESENTATION_TYPES: [(&str, PresentationKind); 4] = [
    (
        "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml",
        PresentationKind::Presentation,
    ),
    (
        "application/vnd.ms-powerpoint.presentation.macroEnabled.main+xml",
        PresentationKind::MacroEnabled,
    ),
    (
        "application/vnd.openxmlformats-officedocument.presentationml.slideshow.main+xml",
        PresentationKind::Slideshow,
    ),
    (
        "application/vnd.openxmlformats-officedocument.presentationml.template.main+xml",
        PresentationKind::Template,
    ),
];

/// Flavour of presentation package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationKind {
    /// Regular deck (.pptx)
    Presentation,
    /// Macro-enabled deck (.pptm)
    MacroEnabled,
    /// Slide show (.ppsx)
    Slideshow,
    /// Template (.potx)
    Template,
}

impl PresentationKind {
    /// Returns the usual file extension for this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            PresentationKind::Presentation => "pptx",
            PresentationKind::MacroEnabled => "pptm",
            PresentationKind::Slideshow => "ppsx",
            PresentationKind::Template => "potx",
        }
    }
}

impl std::fmt::Display for PresentationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PresentationKind::Presentation => "PowerPoint Presentation",
            PresentationKind::MacroEnabled => "PowerPoint Macro-Enabled Presentation",
            PresentationKind::Slideshow => "PowerPoint Slide Show",
            PresentationKind::Template => "PowerPoint Template",
        };
        write!(f, "{}", name)
    }
}

/// Detect the presentation kind of a file.
pub fn detect_from_path(path: impl AsRef<Path>) -> Result<PresentationKind> {
    let file = File::open(path.as_ref())?;
    detect_from_reader(BufReader::new(file))
}

/// Detect the presentation kind from bytes.
///
/// # Example
///
/// ```no_run
/// use unslide::detect::detect_from_bytes;
///
/// let data = std::fs::read("deck.pptx")?;
/// let kind = detect_from_bytes(&data)?;
/// println!("{} (.{})", kind, kind.extension());
/// # Ok::<(), unslide::Error>(())
/// ```
pub fn detect_from_bytes(data: &[u8]) -> Result<PresentationKind> {
    if data.len() < 4 || data[..4] != ZIP_MAGIC {
        return Err(Error::UnknownFormat);
    }
    detect_from_reader(std::io::Cursor::new(data))
}

/// Detect the presentation kind from a reader.
pub fn detect_from_reader<R: Read + Seek>(reader: R) -> Result<PresentationKind> {
    let mut archive = zip::ZipArchive::new(reader)?;

    let content_types = match archive.by_name("[Content_Types].xml") {
        Ok(mut file) => {
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes)?;
            decode_xml_bytes(&bytes)?
        }
        Err(_) => return Err(Error::MissingComponent("[Content_Types].xml".to_string())),
    };

    classify(&XmlNode::parse(&content_types)?)
}

fn classify(types: &XmlNode) -> Result<PresentationKind> {
    let declared: Vec<&str> = types
        .children
        .iter()
        .filter_map(|n| n.attr("ContentType"))
        .collect();

    for (content_type, kind) in PRESENTATION_TYPES {
        if declared.contains(&content_type) {
            return Ok(kind);
        }
    }

    if declared.iter().any(|t| t.contains("wordprocessingml")) {
        Err(Error::UnsupportedFormat("Word document".to_string()))
    } else if declared.iter().any(|t| t.contains("spreadsheetml")) {
        Err(Error::UnsupportedFormat("Excel workbook".to_string()))
    } else {
        Err(Error::UnknownFormat)
    }
}
