//! PPTX (PowerPoint) presentation converter.
//!
//! Each slide is rendered in three passes stacked master-first: the master's
//! shapes, the layout's shapes, then the slide's own. Placeholders on the
//! slide inherit position, alignment and text style from the layout and
//! master placeholders they match.

mod background;
mod context;
mod image;
mod link;
mod node;
mod notes;
mod parser;
mod placeholder;
mod shapes;
mod text;

#[cfg(test)]
pub(crate) mod fixtures;

pub use background::{slide_background, DEFAULT_BACKGROUND};
pub use context::{DefaultTextStyle, DocumentContext, PartScope, RenderContext};
pub use link::Link;
pub use node::{ShapeKind, ShapeNode};
pub use notes::{notes_html, notes_text};
pub use parser::PptxConverter;
pub use placeholder::PlaceholderIndex;
pub use shapes::{render_node, render_tree};
pub use text::{render_text_body, TextBody};
