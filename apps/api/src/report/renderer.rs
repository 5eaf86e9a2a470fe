//! Prompt Renderer — fills the report templates with the caller's details.

use crate::models::user::UserInfo;
use crate::report::prompts::{
    NARRATIVE_REPORT_TEMPLATE, PERSONA_TAXONOMY, STRUCTURED_REPORT_TEMPLATE,
};
use crate::report::ReportStyle;

/// Shown to the model when the caller did not supply an MBTI type.
pub const UNKNOWN_MBTI: &str = "unknown";

/// Renders the prompt for `style`. Pure formatting, cannot fail.
pub fn render_prompt(user: &UserInfo, style: ReportStyle) -> String {
    let template = match style {
        ReportStyle::Structured => STRUCTURED_REPORT_TEMPLATE,
        ReportStyle::Narrative => NARRATIVE_REPORT_TEMPLATE,
    };

    let mbti = user
        .mbti
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(UNKNOWN_MBTI);
    let birth_datetime = user.birth_datetime();
    let anonymous = user.anonymous.to_string();

    fill_placeholders(
        template,
        &[
            ("name", user.display_name()),
            ("gender", user.gender.as_str()),
            ("birth_datetime", birth_datetime.as_str()),
            ("birth_place", user.birth_place.as_str()),
            ("mbti", mbti),
            ("anonymous", anonymous.as_str()),
            ("persona_taxonomy", PERSONA_TAXONOMY),
        ],
    )
}

/// Single-pass `{key}` substitution. Substituted values are never re-scanned,
/// so user input that happens to contain `{gender}` stays literal. Braces that
/// do not name a known key (the JSON schema) are copied through.
fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];

        let hit = values.iter().find_map(|(key, value)| {
            tail.strip_prefix(key)
                .and_then(|after| after.strip_prefix('}'))
                .map(|after| (*value, after))
        });

        match hit {
            Some((value, after)) => {
                out.push_str(value);
                rest = after;
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}
