//! Report Generator — runs one report through the pipeline.
//!
//! Flow: render_prompt → ModelClient::complete → sanitize (structured) or
//!       wrap verbatim (narrative). One model call, no retries.

use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::ModelClient;
use crate::models::user::UserInfo;
use crate::report::renderer::render_prompt;
use crate::report::sanitizer::sanitize_report;
use crate::report::{NarrativeReport, Report, ReportStyle};

pub async fn generate_report(
    model: &dyn ModelClient,
    style: ReportStyle,
    user: &UserInfo,
) -> Result<Report, AppError> {
    let prompt = render_prompt(user, style);
    debug!("Rendered {:?} prompt ({} chars)", style, prompt.len());

    let reply = model.complete(&prompt).await?;

    if let Some(usage) = reply.usage {
        info!(
            "Report generated: style={:?}, total_tokens={}",
            style, usage.total_tokens
        );
    } else {
        info!("Report generated: style={:?}", style);
    }

    match style {
        ReportStyle::Structured => sanitize_report(&reply.content).map(Report::Structured),
        ReportStyle::Narrative => Ok(Report::Narrative(NarrativeReport {
            name: user.display_name().to_string(),
            gender: user.gender.clone(),
            analysis: reply.content,
            reasoning: reply.reasoning,
        })),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::llm_client::{LlmError, ModelReply, Usage};
    use crate::models::user::ANONYMOUS_NAME;

    /// Canned model that records every prompt it receives.
    pub(crate) struct StubModel {
        reply: Result<ModelReply, (u16, String)>,
        pub(crate) calls: AtomicUsize,
        pub(crate) prompts: Mutex<Vec<String>>,
    }

    impl StubModel {
        pub(crate) fn replying(content: &str) -> Self {
            Self {
                reply: Ok(ModelReply {
                    content: content.to_string(),
                    reasoning: Some("thinking...".to_string()),
                    usage: Some(Usage {
                        prompt_tokens: 10,
                        completion_tokens: 20,
                        total_tokens: 30,
                    }),
                }),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn failing(status: u16, message: &str) -> Self {
            Self {
                reply: Err((status, message.to_string())),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ModelClient for StubModel {
        async fn complete(&self, prompt: &str) -> Result<ModelReply, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(reply) => Ok(reply.clone()),
                Err((status, message)) => Err(LlmError::Api {
                    status: *status,
                    message: message.clone(),
                }),
            }
        }
    }

    fn user(anonymous: bool) -> UserInfo {
        UserInfo {
            name: "Li Hua".to_string(),
            gender: "female".to_string(),
            birth_date: "1990-01-01".to_string(),
            birth_time: "08:00".to_string(),
            birth_place: "Beijing".to_string(),
            anonymous,
            mbti: None,
        }
    }

    #[tokio::test]
    async fn test_structured_report_is_sanitized() {
        let model = StubModel::replying(concat!(
            "```json\n",
            r#"{"basicInfo":{"dayMaster":"X"},"keyConfigurations":[{"name":"A","icon":"fa-x"}]}"#,
            "\n```"
        ));

        let report = generate_report(&model, ReportStyle::Structured, &user(false))
            .await
            .unwrap();

        assert_eq!(
            report,
            Report::Structured(
                json!({"basicInfo": {"dayMaster": "X"}, "keyConfigurations": [{"name": "A"}]})
            )
        );
        assert_eq!(model.call_count(), 1);
    }

    #[tokio::test]
    async fn test_narrative_report_uses_anonymous_name() {
        let model = StubModel::replying("You are a morning dew.");

        let report = generate_report(&model, ReportStyle::Narrative, &user(true))
            .await
            .unwrap();

        assert_eq!(
            report,
            Report::Narrative(NarrativeReport {
                name: ANONYMOUS_NAME.to_string(),
                gender: "female".to_string(),
                analysis: "You are a morning dew.".to_string(),
                reasoning: Some("thinking...".to_string()),
            })
        );
        let prompts = model.prompts.lock().unwrap();
        assert!(!prompts[0].contains("Li Hua"));
    }

    #[tokio::test]
    async fn test_malformed_structured_reply_is_rejected() {
        let model = StubModel::replying("```json\n{\"basicInfo\": \n```");
        let err = generate_report(&model, ReportStyle::Structured, &user(false))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MalformedPayload(_)));
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates_without_retry() {
        let model = StubModel::failing(503, "Service Unavailable");
        let err = generate_report(&model, ReportStyle::Structured, &user(false))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Service Unavailable"));
        assert_eq!(model.call_count(), 1);
    }
}
