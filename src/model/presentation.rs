//! Presentation and slide output structures.

use super::AnimationNode;
use serde::{Deserialize, Serialize};

/// Presentation metadata extracted from docProps/core.xml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Presentation title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Author/creator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Creation date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,

    /// Last modification date (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,

    /// Last modified by
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<String>,

    /// Number of slides
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_count: Option<u32>,
}

/// Slide dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideSize {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl SlideSize {
    /// Create a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A converted slide.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Slide {
    /// Slide index (0-based, presentation order)
    pub index: usize,

    /// Slide size in pixels
    pub size: SlideSize,

    /// Background CSS value
    pub background: String,

    /// Rendered markup: one `<section>` holding master, layout and slide layers
    pub html: String,

    /// Animation timeline roots in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub animation: Vec<AnimationNode>,

    /// Speaker notes rendered to HTML
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Slide {
    /// Create an empty slide with the given index.
    pub fn new(index: usize, size: SlideSize) -> Self {
        Self {
            index,
            size,
            ..Default::default()
        }
    }
}

/// A slide that could not be converted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideFailure {
    /// Slide index (0-based)
    pub index: usize,
    /// Error description
    pub message: String,
}

/// A converted presentation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Presentation {
    /// Slide size in pixels
    pub size: SlideSize,

    /// Presentation metadata
    pub metadata: Metadata,

    /// Converted slides in presentation order
    pub slides: Vec<Slide>,

    /// Slides that failed to convert
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<SlideFailure>,
}

impl Presentation {
    /// Create an empty presentation.
    pub fn new(size: SlideSize) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Whether every slide converted.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Look up a converted slide by its index.
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.iter().find(|s| s.index == index)
    }
}
