//! ZIP container abstraction for the presentation package.

use crate::error::{Error, Result};
use crate::model::Metadata;
use crate::xml::XmlNode;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// Prefix shared by the package relationship type URIs.
const REL_TYPE_PREFIX: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/";

/// A relationship entry from a .rels file.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path as written (relative to the source part, or absolute)
    pub target: String,
    /// Whether the target is external
    pub external: bool,
}

impl Relationship {
    /// Short relationship kind, e.g. `slideLayout` or `image`.
    pub fn kind(&self) -> &str {
        self.rel_type
            .strip_prefix(REL_TYPE_PREFIX)
            .unwrap_or_else(|| self.rel_type.rsplit('/').next().unwrap_or(&self.rel_type))
    }
}

/// Relationships of one part, with targets resolved against that part.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    /// Path of the part that owns these relationships
    pub source: String,
    /// Map from relationship ID to relationship data
    pub by_id: HashMap<String, Relationship>,
    /// Relationships in document order
    pub ordered: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    /// Get a relationship by ID.
    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.by_id.get(id)
    }

    /// First relationship of the given short kind.
    pub fn first_of_kind(&self, kind: &str) -> Option<&Relationship> {
        self.ordered.iter().find(|r| r.kind() == kind)
    }

    /// Package path a relationship points to. External targets are returned as-is.
    pub fn resolve(&self, rel: &Relationship) -> String {
        if rel.external {
            rel.target.clone()
        } else {
            OoxmlContainer::resolve_path(&self.source, &rel.target)
        }
    }

    /// Resolved package path of the first relationship of `kind`.
    pub fn target_of_kind(&self, kind: &str) -> Option<String> {
        self.first_of_kind(kind).map(|r| self.resolve(r))
    }

    /// Add a relationship.
    pub fn add(&mut self, rel: Relationship) {
        self.by_id.insert(rel.id.clone(), rel.clone());
        self.ordered.push(rel);
    }
}

/// Decode XML bytes handling a UTF-8 BOM and UTF-16 LE/BE packages.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    match bytes {
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8(rest.to_vec())
            .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))),
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes).map(|s| utf8_declaration(&s)),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes).map(|s| utf8_declaration(&s)),
        _ => Ok(String::from_utf8(bytes.to_vec())
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())),
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String> {
    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Once decoded to a Rust string the declaration must no longer claim UTF-16.
fn utf8_declaration(content: &str) -> String {
    match content.find("?>") {
        Some(end) if content.starts_with("<?xml") => {
            let decl = content[..end]
                .replace("UTF-16", "UTF-8")
                .replace("utf-16", "UTF-8");
            format!("{}{}", decl, &content[end..])
        }
        _ => content.to_string(),
    }
}

/// OOXML container abstraction over a ZIP archive.
pub struct OoxmlContainer {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl OoxmlContainer {
    /// Open a container from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use unslide::container::OoxmlContainer;
    ///
    /// let container = OoxmlContainer::open("deck.pptx")?;
    /// # Ok::<(), unslide::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Create a container from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let archive = zip::ZipArchive::new(Cursor::new(data))?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Create a container from a reader.
    pub fn from_reader<R: Read + Seek>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Read an XML part from the archive as a string.
    pub fn read_xml(&self, path: &str) -> Result<String> {
        let bytes = self.read_binary(path)?;
        decode_xml_bytes(&bytes)
    }

    /// Read an XML part and parse it into a node tree.
    pub fn read_tree(&self, path: &str) -> Result<XmlNode> {
        let xml = self.read_xml(path)?;
        XmlNode::parse(&xml).map_err(|e| Error::XmlParse(format!("{}: {}", path, e)))
    }

    /// Read a binary part from the archive.
    pub fn read_binary(&self, path: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(path)
            .map_err(|_| Error::MissingComponent(path.to_string()))?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Check if a part exists in the archive.
    pub fn exists(&self, path: &str) -> bool {
        let archive = self.archive.borrow();
        let found = archive.file_names().any(|n| n == path);
        found
    }

    /// List all parts in the archive.
    pub fn list_files(&self) -> Vec<String> {
        let archive = self.archive.borrow();
        archive.file_names().map(String::from).collect()
    }

    /// Read the relationships owned by `part_path`. A part without a .rels
    /// file simply has no relationships.
    pub fn read_relationships(&self, part_path: &str) -> Result<Relationships> {
        let rels_path = match part_path.rsplit_once('/') {
            Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
            None if part_path.is_empty() => "_rels/.rels".to_string(),
            None => format!("_rels/{}.rels", part_path),
        };

        let mut rels = Relationships::new(part_path);
        if !self.exists(&rels_path) {
            return Ok(rels);
        }

        let root = self.read_tree(&rels_path)?;
        for node in root.children.iter().filter(|n| n.local_name() == "Relationship") {
            let id = node.attr("Id").unwrap_or_default();
            if id.is_empty() {
                continue;
            }
            rels.add(Relationship {
                id: id.to_string(),
                rel_type: node.attr("Type").unwrap_or_default().to_string(),
                target: node.attr("Target").unwrap_or_default().to_string(),
                external: node
                    .attr("TargetMode")
                    .is_some_and(|m| m.eq_ignore_ascii_case("external")),
            });
        }
        Ok(rels)
    }

    /// Parse core metadata from docProps/core.xml.
    pub fn parse_core_metadata(&self) -> Result<Metadata> {
        let mut meta = Metadata::default();
        if !self.exists("docProps/core.xml") {
            return Ok(meta);
        }

        let root = self.read_tree("docProps/core.xml")?;
        for node in &root.children {
            let text = node.text().trim().to_string();
            if text.is_empty() {
                continue;
            }
            match node.local_name() {
                "title" => meta.title = Some(text),
                "creator" => meta.author = Some(text),
                "subject" => meta.subject = Some(text),
                "lastModifiedBy" => meta.last_modified_by = Some(text),
                "created" => meta.created = Some(text),
                "modified" => meta.modified = Some(text),
                _ => {}
            }
        }
        Ok(meta)
    }

    /// Resolve a relative path from a base path.
    pub fn resolve_path(base: &str, relative: &str) -> String {
        if let Some(stripped) = relative.strip_prefix('/') {
            return stripped.to_string();
        }

        let mut parts: Vec<&str> = base.split('/').collect();
        parts.pop();
        for component in relative.split('/') {
            match component {
                ".." => {
                    parts.pop();
                }
                "." | "" => {}
                c => parts.push(c),
            }
        }
        parts.join("/")
    }
}

impl std::fmt::Debug for OoxmlContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OoxmlContainer")
            .field("files", &self.list_files().len())
            .finish()
    }
}
