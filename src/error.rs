//! Error types for the unslide library.

use std::io;
use thiserror::Error;

/// Result type alias for unslide operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a presentation.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not a ZIP package at all.
    #[error("Unknown file format")]
    UnknownFormat,

    /// The package is an Office document, but not a presentation.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Error reading ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// A required package part or relationship is missing.
    #[error("Missing component: {0}")]
    MissingComponent(String),

    /// A referenced resource (image, linked part) was not found.
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// A length or angle attribute held a non-numeric value.
    #[error("Unit conversion error: cannot convert {0:?}")]
    UnitConversion(String),

    /// The preset geometry name is missing or not in the catalog.
    #[error("Unknown preset geometry: {0}")]
    UnknownGeometry(String),

    /// A custom geometry path used a command we cannot translate.
    #[error("Unknown path command: {0}")]
    UnknownPathCommand(String),

    /// Error during rendering or serialization of output.
    #[error("Render error: {0}")]
    Render(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(format!("JSON serialization error: {}", err))
    }
}
