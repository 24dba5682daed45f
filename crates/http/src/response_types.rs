//! Response types (Serialize)

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FaqDeleteResponse {
    pub success: bool,
    pub id: String,
}
