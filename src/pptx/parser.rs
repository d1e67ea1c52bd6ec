//! PPTX conversion driver.

use super::background::slide_background;
use super::context::{DefaultTextStyle, DocumentContext, PartScope, RenderContext};
use super::notes::notes_html;
use super::placeholder::PlaceholderIndex;
use super::shapes::render_tree;
use crate::animation::parse_timing;
use crate::container::{OoxmlContainer, Relationships};
use crate::error::{Error, Result};
use crate::model::{Metadata, Presentation, Slide, SlideFailure, SlideSize};
use crate::render::ConvertOptions;
use crate::session::RenderSession;
use crate::style::Theme;
use crate::units::{emu_to_px, fmt_num};
use crate::xml::XmlNode;
use log::{debug, warn};
use std::path::Path;

/// Main part used when the package relationships do not name one.
const DEFAULT_PRESENTATION_PART: &str = "ppt/presentation.xml";

/// Office's default 16:9 slide, used when `p:sldSz` is absent.
const DEFAULT_SIZE: SlideSize = SlideSize {
    width: 1280.0,
    height: 720.0,
};

/// A slide part with its relationships.
struct Part {
    path: String,
    root: XmlNode,
    rels: Relationships,
}

impl Part {
    fn read(container: &OoxmlContainer, path: String) -> Result<Self> {
        let root = container.read_tree(&path)?;
        let rels = container.read_relationships(&path)?;
        Ok(Self { path, root, rels })
    }

    /// The part this one depends on through a relationship of `kind`.
    fn related(&self, container: &OoxmlContainer, kind: &str) -> Result<Part> {
        let path = self
            .rels
            .target_of_kind(kind)
            .ok_or_else(|| Error::MissingComponent(format!("{} of {}", kind, self.path)))?;
        Part::read(container, path)
    }

    fn shows_master_shapes(&self) -> bool {
        self.root.attr("showMasterSp") != Some("0")
    }
}

/// Converter for PPTX (PowerPoint) presentations.
///
/// Opening reads the presentation part, theme and slide list; each slide is
/// then converted independently.
pub struct PptxConverter {
    container: OoxmlContainer,
    context: DocumentContext,
    slides: Vec<String>,
    metadata: Metadata,
    session: RenderSession,
}

impl PptxConverter {
    /// Open a PPTX file for conversion.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let container = OoxmlContainer::open(path)?;
        Self::from_container(container)
    }

    /// Create a converter from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = OoxmlContainer::from_bytes(data)?;
        Self::from_container(container)
    }

    /// Create a converter from an opened package.
    pub fn from_container(container: OoxmlContainer) -> Result<Self> {
        let package_rels = container.read_relationships("")?;
        let main = package_rels
            .target_of_kind("officeDocument")
            .unwrap_or_else(|| DEFAULT_PRESENTATION_PART.to_string());
        let presentation = container.read_tree(&main)?;
        let rels = container.read_relationships(&main)?;

        let theme_path = rels
            .target_of_kind("theme")
            .ok_or_else(|| Error::MissingComponent("theme relationship".to_string()))?;
        let theme = Theme::new(container.read_tree(&theme_path)?);

        let slides = Self::slide_list(&presentation, &rels);
        let size = Self::slide_size(&presentation)?;
        let default_text = DefaultTextStyle::from_presentation(&presentation, &theme);

        let mut metadata = container.parse_core_metadata()?;
        metadata.slide_count = Some(slides.len() as u32);
        debug!("{}: {} slides, {}x{}px", main, slides.len(), size.width, size.height);

        Ok(Self {
            container,
            context: DocumentContext {
                theme,
                size,
                default_text,
                options: ConvertOptions::default(),
            },
            slides,
            metadata,
            session: RenderSession::new(),
        })
    }

    /// Replace the conversion options.
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.context.options = options;
        self
    }

    /// Slide part paths in presentation order.
    fn slide_list(presentation: &XmlNode, rels: &Relationships) -> Vec<String> {
        let Some(list) = presentation.child("p:sldIdLst") else {
            return Vec::new();
        };
        list.children_named("p:sldId")
            .filter_map(|entry| {
                let id = entry.attr("r:id")?;
                match rels.get(id) {
                    Some(rel) => Some(rels.resolve(rel)),
                    None => {
                        warn!("slide relationship {} not found", id);
                        None
                    }
                }
            })
            .collect()
    }

    fn slide_size(presentation: &XmlNode) -> Result<SlideSize> {
        match presentation.child("p:sldSz") {
            Some(size) => Ok(SlideSize::new(
                emu_to_px(size.attr("cx"))?,
                emu_to_px(size.attr("cy"))?,
            )),
            None => {
                warn!("presentation has no slide size, assuming {}x{}", DEFAULT_SIZE.width, DEFAULT_SIZE.height);
                Ok(DEFAULT_SIZE)
            }
        }
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slide part paths in presentation order.
    pub fn slide_paths(&self) -> &[String] {
        &self.slides
    }

    /// Document metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Slide size in pixels.
    pub fn size(&self) -> SlideSize {
        self.context.size
    }

    /// Get a reference to the package.
    pub fn container(&self) -> &OoxmlContainer {
        &self.container
    }

    /// Convert every slide. Slides that fail are recorded in
    /// [`Presentation::failures`] and the rest of the deck still converts.
    pub fn convert(&self) -> Presentation {
        let mut presentation = Presentation::new(self.context.size);
        presentation.metadata = self.metadata.clone();

        for index in 0..self.slides.len() {
            match self.convert_slide(index) {
                Ok(slide) => presentation.slides.push(slide),
                Err(e) => {
                    warn!("slide {} failed: {}", index + 1, e);
                    presentation.failures.push(SlideFailure {
                        index,
                        message: e.to_string(),
                    });
                }
            }
        }
        presentation
    }

    /// Convert one slide (zero-based).
    pub fn convert_slide(&self, index: usize) -> Result<Slide> {
        let path = self
            .slides
            .get(index)
            .ok_or_else(|| Error::ResourceNotFound(format!("slide {}", index)))?;
        let slide = Part::read(&self.container, path.clone())?;
        let layout = slide.related(&self.container, "slideLayout")?;
        let master = layout.related(&self.container, "slideMaster")?;
        debug!("converting {} ({}, {})", slide.path, layout.path, master.path);

        let layout_index = PlaceholderIndex::build(&layout.root);
        let master_index = PlaceholderIndex::build(&master.root);
        let text_styles = master.root.child("p:txStyles");

        let slide_html = self.render_part(
            &slide,
            PartScope {
                container: &self.container,
                rels: &slide.rels,
                layout: Some(&layout_index),
                master: Some(&master_index),
                text_styles,
                is_master: false,
            },
        )?;

        let show_layout = slide.shows_master_shapes();
        let show_master = show_layout && layout.shows_master_shapes();
        let layout_html = if show_layout {
            self.render_part(
                &layout,
                PartScope {
                    container: &self.container,
                    rels: &layout.rels,
                    layout: None,
                    master: Some(&master_index),
                    text_styles,
                    is_master: true,
                },
            )?
        } else {
            String::new()
        };
        let master_html = if show_master {
            self.render_part(
                &master,
                PartScope {
                    container: &self.container,
                    rels: &master.rels,
                    layout: None,
                    master: None,
                    text_styles: None,
                    is_master: true,
                },
            )?
        } else {
            String::new()
        };

        let size = self.context.size;
        let background = slide_background([&slide.root, &layout.root, &master.root], &self.context.theme);
        let html = format!(
            r#"<section style="width: {}px; height: {}px; background: {};">{}{}{}</section>"#,
            fmt_num(size.width),
            fmt_num(size.height),
            background,
            master_html,
            layout_html,
            slide_html
        );

        Ok(Slide {
            index,
            size,
            background,
            html,
            animation: parse_timing(slide.root.child("p:timing"))?,
            notes: self.notes(&slide.rels),
        })
    }

    fn render_part(&self, part: &Part, scope: PartScope<'_>) -> Result<String> {
        let Some(tree) = part.root.find(&["p:cSld", "p:spTree"]) else {
            return Ok(String::new());
        };
        let ctx = RenderContext {
            doc: &self.context,
            session: &self.session,
            part: scope,
        };
        render_tree(tree, &ctx)
    }

    /// Rendered speaker notes. Unreadable notes are skipped with a warning.
    fn notes(&self, rels: &Relationships) -> Option<String> {
        let path = rels.target_of_kind("notesSlide")?;
        match self.container.read_tree(&path) {
            Ok(root) => Some(notes_html(&root)).filter(|html| !html.is_empty()),
            Err(e) => {
                warn!("cannot read notes {}: {}", path, e);
                None
            }
        }
    }
}
