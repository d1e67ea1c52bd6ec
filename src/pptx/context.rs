//! Per-conversion and per-part state shared by the shape renderers.

use super::placeholder::PlaceholderIndex;
use crate::container::{OoxmlContainer, Relationships};
use crate::model::SlideSize;
use crate::render::ConvertOptions;
use crate::session::RenderSession;
use crate::style::{find_color, Theme};
use crate::xml::XmlNode;

/// Document-wide default run properties from
/// `p:defaultTextStyle/a:defPPr/a:defRPr`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultTextStyle {
    pub color: Option<String>,
    /// Raw `sz` in hundredths of a point
    pub size: Option<String>,
    pub bold: Option<String>,
    pub italic: Option<String>,
    pub underline: Option<String>,
}

impl DefaultTextStyle {
    /// Read the defaults from the `p:presentation` root.
    pub fn from_presentation(root: &XmlNode, theme: &Theme) -> Self {
        let Some(def) = root.find(&["p:defaultTextStyle", "a:defPPr", "a:defRPr"]) else {
            return Self::default();
        };
        let owned = |key: &str| def.attr(key).map(str::to_string);
        Self {
            color: def
                .child("a:solidFill")
                .and_then(|fill| find_color(fill, theme, None)),
            size: owned("sz"),
            bold: owned("b"),
            italic: owned("i"),
            underline: owned("u"),
        }
    }
}

/// Immutable state for one conversion: theme, slide size, text defaults and
/// options.
#[derive(Debug, Clone, Default)]
pub struct DocumentContext {
    pub theme: Theme,
    pub size: SlideSize,
    pub default_text: DefaultTextStyle,
    pub options: ConvertOptions,
}

/// What one walk over a shape tree (slide, layout or master) can see.
#[derive(Debug, Clone, Copy)]
pub struct PartScope<'a> {
    /// Package handle for embedded images
    pub container: &'a OoxmlContainer,
    /// Relationships of the part being walked
    pub rels: &'a Relationships,
    /// Placeholders of the layout behind this part
    pub layout: Option<&'a PlaceholderIndex<'a>>,
    /// Placeholders of the master behind this part
    pub master: Option<&'a PlaceholderIndex<'a>>,
    /// Master `p:txStyles`
    pub text_styles: Option<&'a XmlNode>,
    /// Layout and master walks draw geometry only
    pub is_master: bool,
}

/// Everything a shape renderer reads. Cheap to copy; nothing in it is mutated
/// except the session's id counter.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub doc: &'a DocumentContext,
    pub session: &'a RenderSession,
    pub part: PartScope<'a>,
}

impl<'a> RenderContext<'a> {
    pub fn theme(&self) -> &'a Theme {
        &self.doc.theme
    }
}
