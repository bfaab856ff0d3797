//! Request/response types for the playground registry API.
//!
//! These payloads are shared between handlers and `OpenAPI` generation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePlaygroundRequest {
    pub name: String,
    pub url_prefix: String,
    pub pygments_language: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatePlaygroundResponse {
    pub id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlaygroundResponse {
    pub id: String,
    pub name: String,
    pub pygments_language: String,
    pub url_prefix: String,
    pub created_at: String,
}

/// Error payload for validation and lookup failures.
///
/// `msg` carries the first failing message; `errors`, present only for
/// validation failures, maps each offending field to its messages.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}
