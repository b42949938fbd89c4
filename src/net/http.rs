//! Single HTTP choke point for all backend calls.
//!
//! Client-side (hydrate): real HTTP via `gloo-net` with the session cookie
//! attached. Native/SSR builds: stubs returning a network error, since the
//! console only talks to the backend from the browser.
//!
//! DESIGN
//! ======
//! The 401 handling is an explicit two-phase machine: the initial response is
//! classified by [`next_step`], and a `Refresh` step may be taken only from
//! [`Phase::Initial`]. The retried response is classified under
//! [`Phase::Retried`], where no `Refresh` exists, so at most one refresh call
//! and one retry can ever happen per request. A failed refresh hard-navigates
//! to the login route; callers see [`ApiError::SessionExpired`] and must not
//! try to recover.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

#[cfg(feature = "hydrate")]
use crate::util::config;

/// Refresh endpoint called by the wrapper itself, never by pages.
pub(crate) const REFRESH_ENDPOINT: &str = "/api/v1/auth/refresh";
/// Route the browser is sent to when re-authentication fails.
pub(crate) const LOGIN_ROUTE: &str = "/login";
/// Fallback error message when the server supplies no `detail`.
pub(crate) const GENERIC_FAILURE: &str = "Request failed";
/// Message carried by errors from the post-refresh retry.
pub(crate) const RETRY_FAILURE: &str = "Request failed after token refresh";

/// Error taxonomy for backend calls.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// Non-2xx response. `message` is the server `detail` when present,
    /// `detail` keeps the raw error payload for diagnostics.
    Http {
        status: u16,
        message: String,
        detail: Option<Value>,
    },
    /// Transport-level failure (request never produced a response).
    Network(String),
    /// Response body could not be decoded into the expected type.
    Decode(String),
    /// 401 that survived the refresh attempt. Navigation to the login route
    /// has already been triggered when this is returned.
    SessionExpired,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http { status, message, .. } => write!(f, "HTTP {status}: {message}"),
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
            Self::SessionExpired => write!(f, "session expired"),
        }
    }
}

impl std::error::Error for ApiError {}

/// HTTP method for a wrapped request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

#[cfg(feature = "hydrate")]
impl Method {
    fn to_gloo(self) -> gloo_net::http::Method {
        match self {
            Self::Get => gloo_net::http::Method::GET,
            Self::Post => gloo_net::http::Method::POST,
            Self::Put => gloo_net::http::Method::PUT,
            Self::Delete => gloo_net::http::Method::DELETE,
        }
    }
}

/// Options bag for [`request`]; defaults to a bare GET.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    /// JSON request body, serialized as-is.
    pub body: Option<Value>,
    /// Extra headers merged over the JSON content-type default.
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn json(method: Method, body: Value) -> Self {
        Self {
            method,
            body: Some(body),
            headers: Vec::new(),
        }
    }
}

/// Which attempt of the original request a response belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    /// First attempt; a 401 here may still be refreshed.
    Initial,
    /// Post-refresh retry; no further refresh is available.
    Retried,
}

/// What to do with a response, decided purely from status and phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// 2xx: decode and return.
    Done,
    /// 401 on the initial attempt: refresh the session, then retry once.
    Refresh,
    /// Any other failure: surface an HTTP error.
    Fail,
}

/// Classify a response. `Refresh` is only reachable from `Phase::Initial`,
/// which is what bounds the wrapper to a single refresh and a single retry.
pub(crate) fn next_step(status: u16, phase: Phase) -> Step {
    let success = (200..300).contains(&status);
    match phase {
        Phase::Initial if status == 401 => Step::Refresh,
        _ if success => Step::Done,
        _ => Step::Fail,
    }
}

/// 204 responses carry no body and must never reach the JSON parser.
pub(crate) fn is_no_content(status: u16) -> bool {
    status == 204
}

/// Pick the human-readable message for an error payload: the server's
/// `detail` string when present, else a generic fallback.
pub(crate) fn error_message(detail: Option<&Value>) -> String {
    detail
        .and_then(|payload| payload.get("detail"))
        .and_then(Value::as_str)
        .map_or_else(|| GENERIC_FAILURE.to_owned(), ToOwned::to_owned)
}

/// Issue a request and decode the JSON response into `T`.
///
/// # Errors
///
/// Returns [`ApiError`] per the taxonomy above; see module docs for the
/// 401 refresh-retry behavior.
pub async fn request<T: DeserializeOwned>(
    endpoint: &str,
    options: RequestOptions,
) -> Result<T, ApiError> {
    let value = request_json(endpoint, options).await?;
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Issue a request whose success carries no meaningful body (DELETE, logout).
///
/// # Errors
///
/// Same as [`request`].
pub async fn request_empty(endpoint: &str, options: RequestOptions) -> Result<(), ApiError> {
    request_json(endpoint, options).await.map(|_| ())
}

/// Issue a request and return the raw JSON value (`Null` for 204).
///
/// # Errors
///
/// Same as [`request`].
pub async fn request_json(endpoint: &str, options: RequestOptions) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let first = send_raw(endpoint, &options).await?;
        match next_step(first.status(), Phase::Initial) {
            Step::Done => decode_body(first).await,
            Step::Fail => Err(http_error(first, None).await),
            Step::Refresh => {
                let refresh = send_raw(REFRESH_ENDPOINT, &RequestOptions::method(Method::Post)).await;
                match refresh {
                    Ok(resp) if resp.ok() => {
                        let retry = send_raw(endpoint, &options).await?;
                        match next_step(retry.status(), Phase::Retried) {
                            Step::Done => decode_body(retry).await,
                            _ => Err(http_error(retry, Some(RETRY_FAILURE)).await),
                        }
                    }
                    _ => {
                        redirect_to_login();
                        Err(ApiError::SessionExpired)
                    }
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, options);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
async fn send_raw(
    endpoint: &str,
    options: &RequestOptions,
) -> Result<gloo_net::http::Response, ApiError> {
    let url = config::api_url(endpoint);
    let mut builder = gloo_net::http::RequestBuilder::new(&url)
        .method(options.method.to_gloo())
        .credentials(web_sys::RequestCredentials::Include)
        .header("Content-Type", "application/json");
    for (name, value) in &options.headers {
        builder = builder.header(name, value);
    }
    let request = match &options.body {
        Some(body) => builder
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
    };
    request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn decode_body(resp: gloo_net::http::Response) -> Result<Value, ApiError> {
    if is_no_content(resp.status()) {
        return Ok(Value::Null);
    }
    resp.json::<Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn http_error(resp: gloo_net::http::Response, message_override: Option<&str>) -> ApiError {
    let status = resp.status();
    let detail = resp.json::<Value>().await.ok();
    let message = message_override.map_or_else(|| error_message(detail.as_ref()), ToOwned::to_owned);
    ApiError::Http {
        status,
        message,
        detail,
    }
}

#[cfg(feature = "hydrate")]
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(LOGIN_ROUTE);
    }
}
