//! Typed error enums for the LLM crate.

use salesdash_core::{AiJsonError, AnalysisKind};
use thiserror::Error;

/// Errors from the text-generation API.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("empty response: no candidates returned")]
    EmptyResponse,
    #[error("prompt blocked by the model: {0}")]
    Blocked(String),
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

/// Errors from calling the dashboard's own AI gateway endpoint.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The analysis tag is not one of the known kinds. No request was sent.
    #[error("Unsupported combined prompt type: {0}")]
    UnsupportedRequestKind(String),

    /// Transport failure or non-success status, with the server's detail
    /// message when it sent one.
    #[error("{0}")]
    GatewayRequestFailed(String),

    /// The answer arrived but was not parseable JSON.
    #[error(
        "AI returned non-JSON response for {kind} when JSON was expected. Response: {preview}..."
    )]
    MalformedAiResponse {
        kind: AnalysisKind,
        /// First characters of the raw answer
        preview: String,
        #[source]
        source: AiJsonError,
    },

    #[error("client initialization failed: {0}")]
    ClientInit(String),
}
