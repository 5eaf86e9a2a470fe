use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::report::ReportStyle;

const DEFAULT_MODEL_API_URL: &str = "https://api.deepseek.com/chat/completions";
/// Reasoning models can take many minutes on the long report prompt.
const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 1800;

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub model_api_key: String,
    pub model_api_url: String,
    pub model_timeout: Duration,
    pub report_style: ReportStyle,
    /// When set, CORS is restricted to this single origin.
    pub cors_allowed_origin: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            model_api_key: require_env("DEEPSEEK_API_KEY")?,
            model_api_url: std::env::var("MODEL_API_URL")
                .unwrap_or_else(|_| DEFAULT_MODEL_API_URL.to_string()),
            model_timeout: Duration::from_secs(
                std::env::var("MODEL_TIMEOUT_SECS")
                    .unwrap_or_else(|_| DEFAULT_MODEL_TIMEOUT_SECS.to_string())
                    .parse::<u64>()
                    .context("MODEL_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            report_style: parse_report_style(
                &std::env::var("REPORT_STYLE").unwrap_or_else(|_| "structured".to_string()),
            )?,
            cors_allowed_origin: std::env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_report_style(raw: &str) -> Result<ReportStyle> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "structured" => Ok(ReportStyle::Structured),
        "narrative" => Ok(ReportStyle::Narrative),
        other => bail!("REPORT_STYLE must be 'structured' or 'narrative', got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_style_accepts_known_values() {
        assert_eq!(
            parse_report_style("structured").unwrap(),
            ReportStyle::Structured
        );
        assert_eq!(
            parse_report_style(" Narrative ").unwrap(),
            ReportStyle::Narrative
        );
    }

    #[test]
    fn test_parse_report_style_rejects_unknown_value() {
        let err = parse_report_style("poetic").unwrap_err();
        assert!(err.to_string().contains("poetic"));
    }
}
