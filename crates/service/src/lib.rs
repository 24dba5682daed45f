//! Service layer for salesdash
//!
//! Centralizes business logic between the HTTP/CLI front ends and storage/llm.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod analysis_service;
mod ask_service;
mod dashboard_service;
mod error;
mod faq_service;

pub use analysis_service::{AnalysisOutcome, AnalysisService};
pub use ask_service::AskService;
pub use dashboard_service::{DashboardService, DashboardSummaries};
pub use error::ServiceError;
pub use faq_service::FaqService;
