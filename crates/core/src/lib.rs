//! Core types and pure logic for salesdash
//!
//! Domain records, the customer query pipeline, CSV export, summary text
//! for AI prompts and the typed view of AI analysis results. Nothing in
//! this crate performs I/O.

mod analysis;
mod constants;
mod customer;
mod env_config;
mod error;
mod export;
mod faq;
mod gateway;
mod json_utils;
mod query;
#[cfg(test)]
mod query_tests;
mod sales;
pub mod sample_data;
mod summary;

pub use analysis::*;
pub use constants::*;
pub use customer::*;
pub use env_config::*;
pub use error::*;
pub use export::*;
pub use faq::*;
pub use gateway::*;
pub use json_utils::*;
pub use query::*;
pub use sales::*;
pub use summary::*;
