//! Speaker notes.

use crate::render::markdown_to_html;
use crate::xml::XmlNode;

/// Plain text of a notes slide: run texts joined per paragraph, paragraphs
/// joined by newlines, shapes concatenated.
pub fn notes_text(root: &XmlNode) -> String {
    let Some(tree) = root.find(&["p:cSld", "p:spTree"]) else {
        return String::new();
    };

    tree.children_named("p:sp")
        .filter_map(|sp| sp.child("p:txBody"))
        .map(|body| {
            body.children_named("a:p")
                .map(|p| {
                    p.children
                        .iter()
                        .filter(|r| matches!(r.name.as_str(), "a:r" | "a:fld"))
                        .map(|r| match r.child("a:t") {
                            Some(t) => t.text(),
                            None => " ",
                        })
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect()
}

/// Notes rendered to HTML.
pub fn notes_html(root: &XmlNode) -> String {
    markdown_to_html(&notes_text(root))
}
