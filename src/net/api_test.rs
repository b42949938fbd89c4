use super::*;

// =============================================================
// Path builders
// =============================================================

#[test]
fn models_list_path_uses_page_size_pagination() {
    assert_eq!(
        models_list_path(2, 20, true),
        "/api/v1/models?page=2&size=20&active_only=true"
    );
}

#[test]
fn model_paths_format_expected_shapes() {
    assert_eq!(model_path("m1"), "/api/v1/models/m1");
    assert_eq!(model_health_path("m1"), "/api/v1/models/m1/health");
}

#[test]
fn prompts_list_path_uses_skip_limit_pagination() {
    assert_eq!(
        prompts_list_path(40, 20, false, None),
        "/api/v1/prompts?skip=40&limit=20&favorites_only=false"
    );
}

#[test]
fn prompts_list_path_appends_encoded_tag() {
    assert_eq!(
        prompts_list_path(0, 20, true, Some("code review")),
        "/api/v1/prompts?skip=0&limit=20&favorites_only=true&tag=code%20review"
    );
}

#[test]
fn prompt_paths_format_expected_shapes() {
    assert_eq!(prompt_path("p1"), "/api/v1/prompts/p1");
    assert_eq!(prompt_favorite_path("p1"), "/api/v1/prompts/p1/favorite");
    assert_eq!(prompt_versions_path("p1"), "/api/v1/prompts/p1/versions");
    assert_eq!(prompt_rollback_path("p1"), "/api/v1/prompts/p1/rollback");
}

#[test]
fn test_run_paths_format_expected_shapes() {
    assert_eq!(test_runs_list_path(0, 20), "/api/v1/test-runs?skip=0&limit=20");
    assert_eq!(test_run_path("t1"), "/api/v1/test-runs/t1");
}

// =============================================================
// Query encoding
// =============================================================

#[test]
fn encode_query_component_keeps_unreserved_characters() {
    assert_eq!(encode_query_component("summary-v1.2_~x"), "summary-v1.2_~x");
}

#[test]
fn encode_query_component_escapes_reserved_characters() {
    assert_eq!(encode_query_component("a&b=c"), "a%26b%3Dc");
    assert_eq!(encode_query_component("50%"), "50%25");
}

// =============================================================
// Request construction
// =============================================================

#[test]
fn json_body_serializes_rollback_request() {
    let options = json_body(Method::Post, &RollbackRequest { version_number: 7 }).unwrap();
    assert_eq!(options.method, Method::Post);
    assert_eq!(options.body, Some(serde_json::json!({ "version_number": 7 })));
}

#[test]
fn google_login_url_targets_external_authorization_endpoint() {
    assert!(google_login_url().ends_with("/api/v1/auth/google/login"));
}
