//! Typed endpoint functions over [`crate::net::http`].
//!
//! DESIGN
//! ======
//! Path builders are plain functions so the exact URL shapes are unit-testable
//! without a browser. Pagination follows the server contract as-is: models use
//! `page`/`size`, prompts and test runs use `skip`/`limit`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{ApiError, Method, RequestOptions, request, request_empty};
use super::types::{
    Model, ModelCreate, ModelHealthCheck, ModelListResponse, ModelUpdate, Prompt, PromptCreate,
    PromptListResponse, PromptUpdate, PromptVersion, RollbackRequest, TestRun, TestRunCreate,
    TestRunListResponse, User,
};
use crate::util::config;

fn models_list_path(page: u32, size: u32, active_only: bool) -> String {
    format!("/api/v1/models?page={page}&size={size}&active_only={active_only}")
}

fn model_path(id: &str) -> String {
    format!("/api/v1/models/{id}")
}

fn model_health_path(id: &str) -> String {
    format!("/api/v1/models/{id}/health")
}

fn prompts_list_path(skip: u64, limit: u64, favorites_only: bool, tag: Option<&str>) -> String {
    let mut path =
        format!("/api/v1/prompts?skip={skip}&limit={limit}&favorites_only={favorites_only}");
    if let Some(tag) = tag {
        path.push_str("&tag=");
        path.push_str(&encode_query_component(tag));
    }
    path
}

fn prompt_path(id: &str) -> String {
    format!("/api/v1/prompts/{id}")
}

fn prompt_favorite_path(id: &str) -> String {
    format!("/api/v1/prompts/{id}/favorite")
}

fn prompt_versions_path(id: &str) -> String {
    format!("/api/v1/prompts/{id}/versions")
}

fn prompt_rollback_path(id: &str) -> String {
    format!("/api/v1/prompts/{id}/rollback")
}

fn test_runs_list_path(skip: u64, limit: u64) -> String {
    format!("/api/v1/test-runs?skip={skip}&limit={limit}")
}

fn test_run_path(id: &str) -> String {
    format!("/api/v1/test-runs/{id}")
}

/// Percent-encode a query component (RFC 3986 unreserved set kept verbatim).
fn encode_query_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(char::from(byte));
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}

fn json_body<T: serde::Serialize>(method: Method, body: &T) -> Result<RequestOptions, ApiError> {
    let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(RequestOptions::json(method, value))
}

// =============================================================
// Auth
// =============================================================

/// Fetch the current session's user from `GET /api/v1/auth/me`.
///
/// # Errors
///
/// `ApiError::Http` with status 401 when no session cookie is valid.
pub async fn fetch_me() -> Result<User, ApiError> {
    request("/api/v1/auth/me", RequestOptions::default()).await
}

/// Notify the server the session is over via `POST /api/v1/auth/logout`.
///
/// # Errors
///
/// Transport or HTTP failures; callers treat this as best-effort.
pub async fn logout() -> Result<(), ApiError> {
    request_empty("/api/v1/auth/logout", RequestOptions::method(Method::Post)).await
}

/// Absolute URL of the external authorization entry point. Login is a
/// full-page navigation handoff, not an in-app request.
pub fn google_login_url() -> String {
    config::api_url("/api/v1/auth/google/login")
}

// =============================================================
// Models
// =============================================================

/// List registered model endpoints.
///
/// # Errors
///
/// Any [`ApiError`] from the wrapper.
pub async fn list_models(
    page: u32,
    size: u32,
    active_only: bool,
) -> Result<ModelListResponse, ApiError> {
    request(&models_list_path(page, size, active_only), RequestOptions::default()).await
}

/// Register a model endpoint.
///
/// # Errors
///
/// Any [`ApiError`] from the wrapper.
pub async fn create_model(data: &ModelCreate) -> Result<Model, ApiError> {
    request("/api/v1/models", json_body(Method::Post, data)?).await
}

/// Update a model endpoint.
///
/// # Errors
///
/// Any [`ApiError`] from the wrapper.
pub async fn update_model(id: &str, data: &ModelUpdate) -> Result<Model, ApiError> {
    request(&model_path(id), json_body(Method::Put, data)?).await
}

/// Delete a model endpoint.
///
/// # Errors
///
/// Any [`ApiError`] from the wrapper.
pub async fn delete_model(id: &str) -> Result<(), ApiError> {
    request_empty(&model_path(id), RequestOptions::method(Method::Delete)).await
}

/// Ask the server to probe a model endpoint's health.
///
/// # Errors
///
/// Any [`ApiError`] from the wrapper.
pub async fn check_model_health(id: &str) -> Result<ModelHealthCheck, ApiError> {
    request(&model_health_path(id), RequestOptions::method(Method::Post)).await
}

// =============================================================
// Prompts
// =============================================================

/// List prompt templates with optional tag and favorites filters.
///
/// # Errors
///
/// Any [`ApiError`] from the wrapper.
pub async fn list_prompts(
    skip: u64,
    limit: u64,
    favorites_only: bool,
    tag: Option<&str>,
) -> Result<PromptListResponse, ApiError> {
    request(
        &prompts_list_path(skip, limit, favorites_only, tag),
        RequestOptions::default(),
    )
    .await
}

/// Create a prompt template.
///
/// # Errors
///
/// Any [`ApiError`] from the wrapper.
pub async fn create_prompt(data: &PromptCreate) -> Result<Prompt, ApiError> {
    request("/api/v1/prompts", json_body(Method::Post, data)?).await
}

/// Update a prompt template. Content changes version server-side.
///
/// # Errors
///
/// Any [`ApiError`] from the wrapper.
pub async fn update_prompt(id: &str, data: &PromptUpdate) -> Result<Prompt, ApiError> {
    request(&prompt_path(id), json_body(Method::Put, data)?).await
}

/// Delete a prompt template.
///
/// # Errors
///
/// Any [`ApiError`] from the wrapper.
pub async fn delete_prompt(id: &str) -> Result<(), ApiError> {
    request_empty(&prompt_path(id), RequestOptions::method(Method::Delete)).await
}

/// Toggle a prompt's favorite flag; returns the updated prompt.
///
/// # Errors
///
/// Any [`ApiError`] from the wrapper.
pub async fn toggle_prompt_favorite(id: &str) -> Result<Prompt, ApiError> {
    request(&prompt_favorite_path(id), RequestOptions::method(Method::Post)).await
}

/// List the immutable version history of a prompt.
///
/// # Errors
///
/// Any [`ApiError`] from the wrapper.
pub async fn list_prompt_versions(id: &str) -> Result<Vec<PromptVersion>, ApiError> {
    request(&prompt_versions_path(id), RequestOptions::default()).await
}

/// Roll a prompt back to `version_number`; the server creates a new current
/// version from that snapshot.
///
/// # Errors
///
/// Any [`ApiError`] from the wrapper.
pub async fn rollback_prompt(id: &str, version_number: u32) -> Result<Prompt, ApiError> {
    request(
        &prompt_rollback_path(id),
        json_body(Method::Post, &RollbackRequest { version_number })?,
    )
    .await
}

// =============================================================
// Test runs
// =============================================================

/// List past test runs, newest first.
///
/// # Errors
///
/// Any [`ApiError`] from the wrapper.
pub async fn list_test_runs(skip: u64, limit: u64) -> Result<TestRunListResponse, ApiError> {
    request(&test_runs_list_path(skip, limit), RequestOptions::default()).await
}

/// Execute a comparative test run; resolves once all model results are in.
///
/// # Errors
///
/// Any [`ApiError`] from the wrapper.
pub async fn create_test_run(data: &TestRunCreate) -> Result<TestRun, ApiError> {
    request("/api/v1/test-runs", json_body(Method::Post, data)?).await
}

/// Fetch one test run with its full per-model results.
///
/// # Errors
///
/// Any [`ApiError`] from the wrapper.
pub async fn fetch_test_run(id: &str) -> Result<TestRun, ApiError> {
    request(&test_run_path(id), RequestOptions::default()).await
}

/// Delete a test run.
///
/// # Errors
///
/// Any [`ApiError`] from the wrapper.
pub async fn delete_test_run(id: &str) -> Result<(), ApiError> {
    request_empty(&test_run_path(id), RequestOptions::method(Method::Delete)).await
}
