//! Output rendering for converted presentations.
//!
//! Slides already carry their HTML; this module assembles pages, serializes
//! the model to JSON and renders speaker notes.
//!
//! # Example
//!
//! ```no_run
//! use unslide::{convert_file, render::*};
//!
//! let presentation = convert_file("deck.pptx")?;
//!
//! // Standalone HTML page
//! let html = to_html_page(&presentation);
//!
//! // JSON with slide markup and animation timelines
//! let json = to_json(&presentation, JsonFormat::Pretty)?;
//! # Ok::<(), unslide::Error>(())
//! ```

pub mod html;
mod json;
mod markdown;
mod options;

pub use html::{escape_attr, escape_html, to_html_page};
pub use json::{to_json, to_json_default, JsonFormat};
pub use markdown::markdown_to_html;
pub use options::{ConvertOptions, DataUriLoader, ImageFilter, ImageLoader, ImageSource};
