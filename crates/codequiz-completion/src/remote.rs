//! Remote next-line suggestion client
//!
//! Optional companion to the static catalog: posts the current buffer and
//! problem prompt to a suggestion service and maps the answer onto the
//! catalog's `Suggestion` shape. Failures are surfaced as errors, never
//! panics; callers fall back to the static catalog.

use serde::{Deserialize, Serialize};
use tracing::debug;

use codequiz_domain::Suggestion;

use crate::error::{CompletionError, CompletionResult};

/// Request body for the suggestion endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionRequest {
    /// Problem identifier.
    pub problem_id: u32,
    /// Current buffer content.
    pub current_code: String,
    /// Problem description used to steer the suggestion.
    pub problem_prompt: String,
}

/// Wire shape of the service's answer.
#[derive(Debug, Clone, Deserialize)]
struct RemoteSuggestion {
    label: String,
    detail: String,
    #[serde(rename = "insertText")]
    insert_text: String,
    #[serde(default)]
    explanation: String,
}

/// HTTP client for the `/ai/suggestion` endpoint.
pub struct RemoteSuggestionClient {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteSuggestionClient {
    /// Create a client against a service base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        RemoteSuggestionClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Ask the service for a next-line suggestion.
    pub async fn next_line_suggestion(
        &self,
        request: &SuggestionRequest,
    ) -> CompletionResult<Suggestion> {
        let url = format!("{}/ai/suggestion", self.base_url);
        let response = self.http.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::remote_status(status.as_u16(), body));
        }

        let remote: RemoteSuggestion = serde_json::from_slice(&response.bytes().await?)?;
        debug!(label = %remote.label, "remote suggestion received");

        let detail = if remote.explanation.is_empty() {
            remote.detail
        } else {
            // The service explains its suggestion; surface that where the
            // dropdown shows the detail tag.
            format!("{}: {}", remote.detail, remote.explanation)
        };

        Ok(Suggestion::new(remote.label, detail, remote.insert_text))
    }
}
