//! JSON renderer implementation.

use crate::error::Result;
use crate::model::Presentation;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Convert a presentation to JSON.
pub fn to_json(presentation: &Presentation, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Compact => serde_json::to_string(presentation)?,
        JsonFormat::Pretty => serde_json::to_string_pretty(presentation)?,
    };
    Ok(json)
}

/// Convert a presentation to JSON with default formatting.
pub fn to_json_default(presentation: &Presentation) -> Result<String> {
    to_json(presentation, JsonFormat::Pretty)
}
