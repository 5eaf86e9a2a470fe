use serde::Deserialize;

/// Name used in place of the real one when the user asks to stay anonymous.
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// Birth and demographic details submitted by the caller. Lives for one request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub name: String,
    pub gender: String,
    pub birth_date: String,
    pub birth_time: String,
    pub birth_place: String,
    #[serde(default)]
    pub anonymous: bool,
    #[serde(default)]
    pub mbti: Option<String>,
}

impl UserInfo {
    /// The name the report is written for.
    pub fn display_name(&self) -> &str {
        if self.anonymous {
            ANONYMOUS_NAME
        } else {
            &self.name
        }
    }

    /// Birth date and time as one string, e.g. `1990-01-01 08:00`.
    /// Both parts are kept exactly as submitted.
    pub fn birth_datetime(&self) -> String {
        format!("{} {}", self.birth_date, self.birth_time)
    }
}
