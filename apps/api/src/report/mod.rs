// Destiny report pipeline: render prompt → one model call → sanitize → envelope.
// All model calls go through llm_client::ModelClient.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod renderer;
pub mod sanitizer;

use serde::Serialize;
use serde_json::Value;

/// Which prompt variant is sent, and therefore which report shape comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    /// Nested JSON report, sanitized before returning.
    Structured,
    /// Free-prose reading relayed as the `analysis` field.
    Narrative,
}

/// Flat report for the narrative style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NarrativeReport {
    pub name: String,
    pub gender: String,
    pub analysis: String,
    pub reasoning: Option<String>,
}

/// The only artifact the API exposes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Structured(Value),
    Narrative(NarrativeReport),
}

/// Uniform success envelope: `{code, message, data}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            code: 200,
            message: message.into(),
            data,
        }
    }
}
