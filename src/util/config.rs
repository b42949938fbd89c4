//! Compile-time configuration for the API origin.
//!
//! DESIGN
//! ======
//! The base URL is baked in at build time (`MODELARENA_API_BASE`); an unset
//! value means same-origin requests. Keeping this compile-time avoids any
//! runtime environment probing in the browser bundle.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL for all backend requests. Empty means same-origin.
pub fn api_base() -> &'static str {
    option_env!("MODELARENA_API_BASE").unwrap_or("")
}

/// Join the API base with an absolute endpoint path.
///
/// A trailing slash on the base is dropped so `https://api.example.com/`
/// plus `/api/v1/models` never produces a double slash.
pub fn api_url(endpoint: &str) -> String {
    let base = api_base();
    format!("{}{endpoint}", base.trim_end_matches('/'))
}
