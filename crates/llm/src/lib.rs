//! LLM access for salesdash
//!
//! - [`GeminiClient`]: one-shot calls to the Gemini `generateContent` API
//! - [`build_prompt`]: the templated prompt behind the ask endpoint
//! - [`GatewayClient`]: calls the ask endpoint and parses JSON answers

mod ai_types;
mod client;
mod error;
mod gateway;
mod prompt;

pub use client::{truncate, GeminiClient, TextGenerator, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::{GatewayError, LlmError};
pub use gateway::GatewayClient;
pub use prompt::{build_prompt, Guidance};
