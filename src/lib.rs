//! # unslide
//!
//! PowerPoint (PPTX) slide conversion to absolutely positioned HTML with
//! inline SVG geometry.
//!
//! Every slide becomes a `<section>` holding the master, layout and slide
//! shapes in stacking order, with theme colors, fills, outlines, text styles
//! and placeholder inheritance resolved. Animation timelines and speaker
//! notes are carried alongside the markup.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unslide::{convert_file, render::to_html_page};
//!
//! let presentation = convert_file("slides.pptx")?;
//! for slide in &presentation.slides {
//!     println!("slide {}: {} bytes of markup", slide.index + 1, slide.html.len());
//! }
//!
//! std::fs::write("slides.html", to_html_page(&presentation))?;
//! # Ok::<(), unslide::Error>(())
//! ```
//!
//! ## Images
//!
//! Pictures are embedded as data URIs by default. Supply an
//! [`ImageLoader`](render::ImageLoader) to store them elsewhere:
//!
//! ```no_run
//! use unslide::pptx::PptxConverter;
//! use unslide::render::{ConvertOptions, ImageSource};
//!
//! let options = ConvertOptions::new().with_image_loader(|image: &ImageSource<'_>| -> unslide::Result<String> {
//!     let file = image.name.rsplit('/').next().unwrap_or(image.name);
//!     std::fs::write(format!("assets/{}", file), image.data)?;
//!     Ok(format!("assets/{}", file))
//! });
//! let presentation = PptxConverter::open("slides.pptx")?.with_options(options).convert();
//! # Ok::<(), unslide::Error>(())
//! ```
//!
//! ## Features
//!
//! - `async`: Async I/O support with Tokio

pub mod animation;
pub mod container;
pub mod detect;
pub mod error;
pub mod geometry;
pub mod model;
pub mod pptx;
pub mod render;
pub mod session;
pub mod style;
pub mod units;
pub mod xml;

// Re-exports
pub use container::{OoxmlContainer, Relationship, Relationships};
pub use detect::{detect_from_bytes, detect_from_path, PresentationKind};
pub use error::{Error, Result};
pub use model::{
    AnimationNode, Behavior, Condition, Keyframe, Metadata, Presentation, Sequence, Slide,
    SlideFailure, SlideSize, TimeNode, TimeValue,
};
pub use pptx::PptxConverter;
pub use render::{ConvertOptions, ImageLoader, ImageSource};

use std::path::Path;

/// Convert a presentation file.
///
/// The package is checked to be a presentation first; Word and Excel
/// packages are rejected with [`Error::UnsupportedFormat`].
///
/// # Example
///
/// ```no_run
/// use unslide::convert_file;
///
/// let presentation = convert_file("slides.pptx")?;
/// println!("Slides: {}", presentation.slides.len());
/// # Ok::<(), unslide::Error>(())
/// ```
pub fn convert_file(path: impl AsRef<Path>) -> Result<Presentation> {
    convert_file_with_options(path, ConvertOptions::default())
}

/// Convert a presentation file with options.
pub fn convert_file_with_options(path: impl AsRef<Path>, options: ConvertOptions) -> Result<Presentation> {
    let path = path.as_ref();
    detect_from_path(path)?;
    Ok(PptxConverter::open(path)?.with_options(options).convert())
}

/// Convert a presentation from bytes.
///
/// # Example
///
/// ```no_run
/// use unslide::convert_bytes;
///
/// let data = std::fs::read("slides.pptx")?;
/// let presentation = convert_bytes(&data)?;
/// # Ok::<(), unslide::Error>(())
/// ```
pub fn convert_bytes(data: &[u8]) -> Result<Presentation> {
    convert_bytes_with_options(data, ConvertOptions::default())
}

/// Convert a presentation from bytes with options.
pub fn convert_bytes_with_options(data: &[u8], options: ConvertOptions) -> Result<Presentation> {
    detect_from_bytes(data)?;
    Ok(PptxConverter::from_bytes(data.to_vec())?
        .with_options(options)
        .convert())
}

/// Convert a presentation file without blocking the async runtime.
///
/// The file is read with Tokio and the conversion itself runs on the
/// blocking thread pool.
#[cfg(feature = "async")]
pub async fn convert_file_async(path: impl AsRef<Path>, options: ConvertOptions) -> Result<Presentation> {
    let data = tokio::fs::read(path.as_ref()).await?;
    convert_bytes_async(data, options).await
}

/// Convert presentation bytes on the blocking thread pool.
#[cfg(feature = "async")]
pub async fn convert_bytes_async(data: Vec<u8>, options: ConvertOptions) -> Result<Presentation> {
    tokio::task::spawn_blocking(move || convert_bytes_with_options(&data, options))
        .await
        .map_err(std::io::Error::other)?
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::pptx::fixtures::Deck;

    const BOX: &str = r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Box"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr><a:prstGeom prst="rect"/></p:spPr></p:sp>"#;

    #[test]
    fn test_convert_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.pptx");
        std::fs::write(&path, Deck::new().slide(BOX).slide(BOX).build()).unwrap();

        assert_eq!(detect_from_path(&path).unwrap(), PresentationKind::Presentation);
        let presentation = convert_file(&path).unwrap();
        let converter = PptxConverter::open(&path).unwrap();
        assert_eq!(converter.slide_count(), 2);
        assert_eq!(presentation.slides.len(), 2);
        assert!(presentation.is_complete());
    }

    #[test]
    fn test_convert_bytes() {
        let presentation = convert_bytes(&Deck::new().slide(BOX).build()).unwrap();
        assert_eq!(presentation.slides.len(), 1);
        assert!(presentation.slides[0].html.contains("_name=\"Box\""));
    }

    #[test]
    fn test_rejects_non_zip() {
        assert!(matches!(convert_bytes(b"plain text"), Err(Error::UnknownFormat)));
    }
}
