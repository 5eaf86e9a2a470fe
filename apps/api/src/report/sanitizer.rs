//! Response Sanitizer — turns the model's fenced JSON text into a clean report tree.
//!
//! Cleaning is heuristic: a single leading/trailing code fence is removed.
//! Prose around the fence, or several fenced blocks, will fail to parse.

use serde_json::Value;

use crate::errors::AppError;

/// Key of the presentation hint the prompt asks for and the API never returns.
pub const ICON_KEY: &str = "icon";

/// Strips one leading ```` ```json ```` (or bare ```` ``` ````) marker and one
/// trailing ```` ``` ```` marker. Text without fences comes back trimmed only.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}

/// Removes every `icon` field at every depth. Sibling keys keep their order
/// and array elements keep their positions.
pub fn strip_icons(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(key, _)| key != ICON_KEY)
                .map(|(key, child)| (key, strip_icons(child)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_icons).collect()),
        scalar => scalar,
    }
}

/// Fence-strip, parse, and remove icons. Unparseable text is a
/// `MalformedPayload` error; no partial report is produced.
pub fn sanitize_report(raw: &str) -> Result<Value, AppError> {
    let parsed: Value =
        serde_json::from_str(strip_json_fences(raw)).map_err(AppError::MalformedPayload)?;
    Ok(strip_icons(parsed))
}
