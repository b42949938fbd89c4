use super::*;

#[test]
fn api_url_prefixes_endpoint_with_base() {
    // Default build has no MODELARENA_API_BASE, so same-origin paths pass through.
    assert_eq!(api_url("/api/v1/models"), format!("{}/api/v1/models", api_base()));
}

#[test]
fn api_url_keeps_endpoint_untouched_for_same_origin() {
    if api_base().is_empty() {
        assert_eq!(api_url("/api/v1/auth/me"), "/api/v1/auth/me");
    }
}
