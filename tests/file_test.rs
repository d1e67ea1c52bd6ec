//! Conversion from files on disk.

mod common;

use common::{rect, DeckBuilder};
use std::fs;
use unslide::{convert_file, detect_from_path, Error, PptxConverter, PresentationKind};

const BLUE: &str = r#"<a:solidFill><a:srgbClr val="0000FF"/></a:solidFill>"#;

fn write_deck(dir: &tempfile::TempDir, name: &str, slides: usize) -> std::path::PathBuf {
    let deck = (0..slides).fold(DeckBuilder::new(), |deck, i| {
        deck.slide(&rect(2, &format!("Box {}", i), BLUE))
    });
    let path = dir.path().join(name);
    fs::write(&path, deck.build()).unwrap();
    path
}

#[test]
fn test_convert_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_deck(&dir, "deck.pptx", 3);

    assert_eq!(detect_from_path(&path).unwrap(), PresentationKind::Presentation);
    let presentation = convert_file(&path).unwrap();
    assert_eq!(presentation.slides.len(), 3);
    assert!(presentation.slides[2].html.contains("_name=\"Box 2\""));
}

#[test]
fn test_single_slide_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_deck(&dir, "deck.pptx", 2);

    let converter = PptxConverter::open(&path).unwrap();
    assert_eq!(converter.slide_count(), 2);
    let slide = converter.convert_slide(1).unwrap();
    assert_eq!(slide.index, 1);
    assert!(slide.html.contains(r##"fill="#0000ff""##));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = convert_file(dir.path().join("absent.pptx"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[cfg(feature = "async")]
#[tokio::test]
async fn test_convert_file_async() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_deck(&dir, "deck.pptx", 2);

    let presentation = unslide::convert_file_async(&path, unslide::ConvertOptions::default())
        .await
        .unwrap();
    assert_eq!(presentation.slides.len(), 2);
}
