//! Markdown to HTML for speaker notes.
//!
//! Notes are rendered as CommonMark with tables and strikethrough. Raw HTML
//! typed into a note is shown as text, never passed through.

use pulldown_cmark::{html, Event, Options, Parser};

/// Render Markdown source to HTML.
pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let events = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}
