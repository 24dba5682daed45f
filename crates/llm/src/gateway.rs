//! Client for the dashboard's own `POST /api/askGemini` endpoint.
//!
//! Sends a data summary together with the fixed instructions of an analysis
//! kind and parses the model's answer as JSON. The parsed value is returned
//! as-is; callers apply their own per-field defaults.

use reqwest::StatusCode;
use salesdash_core::{
    parse_ai_json, preview, AnalysisKind, AskRequest, AI_RESPONSE_PREVIEW_CHARS,
};
use serde_json::Value;

use crate::error::GatewayError;

const FALLBACK_FAILURE_MESSAGE: &str = "API request failed";

#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GatewayClient {
    /// Creates a client posting to `endpoint`, the full URL of the ask route.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| GatewayError::ClientInit(e.to_string()))?;
        Ok(Self { client, endpoint: endpoint.into() })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Like [`Self::analyze`] but takes the kind as its wire tag.
    ///
    /// # Errors
    /// `UnsupportedRequestKind` for an unknown tag, before any request is
    /// sent; otherwise as [`Self::analyze`].
    pub async fn analyze_tagged(&self, tag: &str, summary: &str) -> Result<Value, GatewayError> {
        let kind = tag
            .parse::<AnalysisKind>()
            .map_err(|_| GatewayError::UnsupportedRequestKind(tag.to_owned()))?;
        self.analyze(kind, summary).await
    }

    /// Requests one analysis and parses the answer as JSON.
    ///
    /// # Errors
    /// `GatewayRequestFailed` on transport errors or a non-success status,
    /// `MalformedAiResponse` when the answer is neither fenced JSON nor JSON.
    pub async fn analyze(&self, kind: AnalysisKind, summary: &str) -> Result<Value, GatewayError> {
        let answer = self.ask(kind.instructions(), Some(summary)).await?;

        parse_ai_json(&answer).map_err(|source| {
            tracing::warn!(%kind, error = %source, "AI answer is not JSON");
            GatewayError::MalformedAiResponse {
                kind,
                preview: preview(&answer, AI_RESPONSE_PREVIEW_CHARS),
                source,
            }
        })
    }

    /// Posts a free-text question and returns the raw answer.
    ///
    /// # Errors
    /// `GatewayRequestFailed` on transport errors, a non-success status, or a
    /// body without an `answer` string.
    pub async fn ask(&self, question: &str, summary: Option<&str>) -> Result<String, GatewayError> {
        let request = AskRequest::new(question, summary.map(ToOwned::to_owned));

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::GatewayRequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::GatewayRequestFailed(e.to_string()))?;
        let json: Option<Value> = serde_json::from_str(&body).ok();

        if !status.is_success() {
            return Err(GatewayError::GatewayRequestFailed(failure_detail(status, json.as_ref())));
        }

        json.as_ref()
            .and_then(|v| v.get("answer"))
            .and_then(Value::as_str)
            .map(ToOwned::to_owned)
            .ok_or_else(|| {
                GatewayError::GatewayRequestFailed("response did not contain an answer".to_owned())
            })
    }
}

/// Server-supplied `details`, else `error`, else a fixed message.
fn failure_detail(status: StatusCode, body: Option<&Value>) -> String {
    let field = |name: &str| body.and_then(|b| b.get(name)).and_then(Value::as_str);
    match field("details").or_else(|| field("error")) {
        Some(message) => message.to_owned(),
        None => {
            tracing::debug!(%status, "gateway error without message");
            FALLBACK_FAILURE_MESSAGE.to_owned()
        },
    }
}
