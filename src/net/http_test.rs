use super::*;

// =============================================================
// Refresh-retry phase machine
// =============================================================

#[test]
fn initial_401_asks_for_refresh() {
    assert_eq!(next_step(401, Phase::Initial), Step::Refresh);
}

#[test]
fn retried_401_fails_instead_of_refreshing_again() {
    // The second 401 must never loop back into another refresh.
    assert_eq!(next_step(401, Phase::Retried), Step::Fail);
}

#[test]
fn success_statuses_complete_in_both_phases() {
    for status in [200, 201, 204] {
        assert_eq!(next_step(status, Phase::Initial), Step::Done);
        assert_eq!(next_step(status, Phase::Retried), Step::Done);
    }
}

#[test]
fn non_401_errors_fail_without_refresh() {
    for status in [400, 403, 404, 422, 500, 503] {
        assert_eq!(next_step(status, Phase::Initial), Step::Fail);
        assert_eq!(next_step(status, Phase::Retried), Step::Fail);
    }
}

// =============================================================
// Body handling
// =============================================================

#[test]
fn no_content_detected_only_for_204() {
    assert!(is_no_content(204));
    assert!(!is_no_content(200));
    assert!(!is_no_content(201));
    assert!(!is_no_content(404));
}

// =============================================================
// Error message selection
// =============================================================

#[test]
fn error_message_prefers_server_detail() {
    let payload = serde_json::json!({ "detail": "Model not found" });
    assert_eq!(error_message(Some(&payload)), "Model not found");
}

#[test]
fn error_message_falls_back_when_detail_missing() {
    let payload = serde_json::json!({ "code": 42 });
    assert_eq!(error_message(Some(&payload)), GENERIC_FAILURE);
    assert_eq!(error_message(None), GENERIC_FAILURE);
}

#[test]
fn error_message_ignores_non_string_detail() {
    let payload = serde_json::json!({ "detail": { "nested": true } });
    assert_eq!(error_message(Some(&payload)), GENERIC_FAILURE);
}

// =============================================================
// Error display
// =============================================================

#[test]
fn api_error_display_includes_status_and_message() {
    let err = ApiError::Http {
        status: 404,
        message: "Prompt not found".to_owned(),
        detail: None,
    };
    assert_eq!(err.to_string(), "HTTP 404: Prompt not found");
}

#[test]
fn session_expired_display_is_stable() {
    assert_eq!(ApiError::SessionExpired.to_string(), "session expired");
}

// =============================================================
// Request options defaults
// =============================================================

#[test]
fn request_options_default_to_get_without_body() {
    let options = RequestOptions::default();
    assert_eq!(options.method, Method::Get);
    assert!(options.body.is_none());
    assert!(options.headers.is_empty());
}

#[test]
fn json_constructor_sets_method_and_body() {
    let options = RequestOptions::json(Method::Post, serde_json::json!({ "a": 1 }));
    assert_eq!(options.method, Method::Post);
    assert_eq!(options.body, Some(serde_json::json!({ "a": 1 })));
}
