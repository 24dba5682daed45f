//! Shared constants for salesdash.
//!
//! Centralizes values that several crates must agree on.

/// Key under which the FAQ collection is persisted.
pub const FAQ_STORE_KEY: &str = "faqs";

/// Number of raw-answer characters kept in a `MalformedAiResponse` diagnostic.
pub const AI_RESPONSE_PREVIEW_CHARS: usize = 100;

/// Number of purchase amounts shown in the customer summary preview.
pub const RECENT_AMOUNTS_PREVIEW: usize = 5;

/// Default field delimiter for CSV export.
pub const DEFAULT_EXPORT_DELIMITER: char = ',';

/// Stable message returned to callers when the gateway input is missing.
pub const MISSING_INPUT_MESSAGE: &str = "User input is required";

/// Stable message returned to callers when the generation call fails.
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to process request with AI";

/// Placeholder used in prompts when no dashboard summary was supplied.
pub const NO_SUMMARY_PLACEHOLDER: &str = "No specific dashboard data provided for this query.";

/// Default port for the HTTP API.
pub const DEFAULT_PORT: u16 = 37780;
