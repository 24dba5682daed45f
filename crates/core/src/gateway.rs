//! Request and response bodies of the `POST /api/askGemini` endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_data_summary: Option<String>,
}

impl AskRequest {
    #[must_use]
    pub fn new(user_input: impl Into<String>, summary: Option<String>) -> Self {
        Self { user_input: Some(user_input.into()), dashboard_data_summary: summary }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AskResponse {
    pub answer: String,
}

/// Error body. `error` is a stable message; `details` is diagnostic only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GatewayErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
