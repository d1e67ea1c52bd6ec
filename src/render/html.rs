//! Standalone HTML page assembly.

use crate::model::Presentation;

/// Stylesheet for the classes emitted by the slide renderer.
const STYLESHEET: &str = "\
body { margin: 0; background: #e5e5e5; font-family: sans-serif; }
section { position: relative; overflow: hidden; margin: 24px auto; box-shadow: 0 2px 8px rgba(0,0,0,.25); }
.block { position: absolute; box-sizing: border-box; }
.block.content { display: flex; flex-direction: column; }
.block.content.v-up { justify-content: flex-start; }
.block.content.v-mid { justify-content: center; }
.block.content.v-down { justify-content: flex-end; }
.block.has-link { cursor: pointer; }
.drawing { position: absolute; top: 0; left: 0; overflow: visible; }
.text-block { position: relative; }
.h-left { text-align: left; }
.h-mid { text-align: center; }
.h-right { text-align: right; }
aside.notes { max-width: 960px; margin: 0 auto 32px; }
";

/// Escape text content for HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Escape an attribute value. Single quotes survive so inline scripts stay
/// readable.
pub fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

/// Render a converted presentation as a self-contained HTML page.
///
/// Slides are stacked vertically; speaker notes follow their slide.
pub fn to_html_page(presentation: &Presentation) -> String {
    let title = presentation
        .metadata
        .title
        .as_deref()
        .unwrap_or("Presentation");

    let mut body = String::new();
    for slide in &presentation.slides {
        body.push_str(&format!("<div class=\"slide\" id=\"slide-{}\">", slide.index));
        body.push_str(&slide.html);
        if let Some(notes) = slide.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            body.push_str("<aside class=\"notes\">");
            body.push_str(notes);
            body.push_str("</aside>");
        }
        body.push_str("</div>\n");
    }
    for failure in &presentation.failures {
        body.push_str(&format!(
            "<!-- slide {} failed: {} -->\n",
            failure.index,
            escape_html(&failure.message).replace("--", "- -")
        ));
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        STYLESHEET,
        body
    )
}
