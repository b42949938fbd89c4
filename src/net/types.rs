//! Wire DTOs for the `/api/v1` backend.
//!
//! DESIGN
//! ======
//! These types mirror the server schema field-for-field so serde round-trips
//! stay lossless. The client never derives server-owned values (version
//! numbers, latency, token counts); it only renders them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by `/api/v1/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    pub email: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if available.
    pub picture: Option<String>,
    pub is_active: bool,
    pub is_admin: bool,
}

/// A registered LLM inference endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Unique model identifier (UUID string).
    pub id: String,
    /// Human-facing label shown in lists.
    pub name: String,
    /// Upstream model identifier sent to the endpoint, if distinct from `name`.
    pub model_name: Option<String>,
    pub endpoint_url: String,
    pub is_active: bool,
    /// Open-ended endpoint metadata. The trailing underscore is the backend's
    /// wire name (reserved-word workaround) and must be preserved.
    #[serde(rename = "metadata_", default)]
    pub metadata: Option<serde_json::Value>,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for registering a model endpoint. `api_key` is write-only; the
/// server never echoes it back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    pub endpoint_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(rename = "metadata_", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Partial update for a model endpoint; unset fields are omitted, not nulled.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(rename = "metadata_", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Paged model listing. Models paginate with `page`/`size`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelListResponse {
    pub items: Vec<Model>,
    pub total: u64,
    pub page: u32,
    pub size: u32,
}

/// Outcome of a server-side endpoint health probe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelHealthCheck {
    pub model_id: String,
    pub model_name: String,
    pub endpoint_url: String,
    pub is_healthy: bool,
    pub latency_ms: Option<f64>,
    pub error: Option<String>,
}

/// A named, versioned prompt template. `current_version` is server-owned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    /// Unique prompt identifier (UUID string).
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// System-instruction text of the current version.
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
    pub current_version: u32,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for creating a prompt template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PromptCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Partial update for a prompt template; content changes create a new version
/// server-side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Paged prompt listing. Prompts paginate with `skip`/`limit`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PromptListResponse {
    pub items: Vec<Prompt>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

/// Immutable snapshot of one prompt version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptVersion {
    pub id: String,
    pub version_number: u32,
    pub content: String,
    pub created_at: String,
}

/// Body of `POST /api/v1/prompts/{id}/rollback`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollbackRequest {
    pub version_number: u32,
}

/// Per-model outcome within a test run. Exactly one of `response` and `error`
/// is meaningful; latency and token counts are server-measured.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub id: String,
    pub model_id: String,
    pub model_name: String,
    /// Sampling parameters the run was executed with, echoed by the server.
    pub parameters: serde_json::Value,
    pub response: Option<String>,
    pub latency_ms: Option<f64>,
    pub token_count: Option<i64>,
    pub error: Option<String>,
    pub created_at: String,
}

/// One comparative execution of a user message across selected models.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestRun {
    pub id: String,
    pub user_id: String,
    pub prompt_template_id: Option<String>,
    pub user_message: String,
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub results: Vec<TestResult>,
    pub created_at: String,
    pub updated_at: String,
}

/// Lightweight test-run row for history lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRunSummary {
    pub id: String,
    pub user_message: String,
    pub system_prompt: Option<String>,
    pub prompt_template_id: Option<String>,
    pub result_count: u32,
    pub created_at: String,
}

/// Paged test-run listing. Test runs paginate with `skip`/`limit`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRunListResponse {
    pub items: Vec<TestRunSummary>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

/// Per-model sampling configuration submitted with a test run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelTestConfig {
    pub model_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
}

/// Body of `POST /api/v1/test-runs`. Optional fields are omitted when unset,
/// never serialized as null.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestRunCreate {
    pub user_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_template_id: Option<String>,
    pub models: Vec<ModelTestConfig>,
}
