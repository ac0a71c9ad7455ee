//! HTTP helpers for the JSON API with consistent timeouts and error handling.
//! Every call names the [`Realm`] it runs under; the matching bearer token is
//! read from the [`SessionStore`] immediately before the request and attached
//! when present. A 401 with a token-related message, or any 403, on a call
//! that carried a token clears that realm's session and forces the browser
//! back to that realm's login route.

use super::{
    config::AppConfig,
    errors::AppError,
    session::{Realm, SessionStore, force_login_redirect},
};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;
/// Message returned to callers when a session is rejected by the backend.
const SESSION_EXPIRED_MESSAGE: &str = "Session expired! Please login again.";

/// Fetches JSON under the given realm.
pub async fn get_json<T: DeserializeOwned>(
    session: SessionStore,
    realm: Realm,
    path: &str,
) -> Result<T, AppError> {
    let url = build_url(path);
    let token = session.token(realm);
    let sent_bearer = token.is_some();
    let response = send_with_timeout(|signal| {
        let mut builder = Request::get(&url).abort_signal(Some(signal));
        if let Some(token) = token.as_deref() {
            builder = builder.header("Authorization", &bearer_value(token));
        }
        builder
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(session, realm, sent_bearer, response).await
}

/// Posts JSON under the given realm and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    session: SessionStore,
    realm: Realm,
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    send_json(session, realm, Method::Post, path, body).await
}

/// Puts JSON under the given realm and parses a JSON response.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    session: SessionStore,
    realm: Realm,
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    send_json(session, realm, Method::Put, path, body).await
}

enum Method {
    Post,
    Put,
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    session: SessionStore,
    realm: Realm,
    method: Method,
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let url = build_url(path);
    let token = session.token(realm);
    let sent_bearer = token.is_some();
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        let mut builder = match method {
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
        }
        .header("Content-Type", "application/json")
        .abort_signal(Some(signal));

        if let Some(token) = token.as_deref() {
            builder = builder.header("Authorization", &bearer_value(token));
        }

        builder
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(session, realm, sent_bearer, response).await
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Percent-encodes a single query-string value. Kept dependency-free so path
/// builders stay testable on the host.
pub fn encode_query_component(value: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push('%');
                encoded.push(HEX[usize::from(byte >> 4)] as char);
                encoded.push(HEX[usize::from(byte & 0x0f)] as char);
            }
        }
    }
    encoded
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses, reacting to session rejections before surfacing
/// HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(
    session: SessionStore,
    realm: Realm,
    sent_bearer: bool,
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")));
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let (message, retry_after) = extract_error_body(&body);

    if sent_bearer && is_session_rejection(status, &message) {
        session.clear_realm(realm);
        force_login_redirect(realm);
        return Err(AppError::Session(SESSION_EXPIRED_MESSAGE.to_string()));
    }

    Err(AppError::Http {
        status,
        message: sanitize_body(message),
        retry_after,
    })
}

/// Error payload shape used by the backend. Both fields are optional; plain
/// text bodies fall through unchanged.
#[derive(Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    #[serde(rename = "retryAfterSeconds")]
    retry_after_seconds: Option<u32>,
}

fn extract_error_body(body: &str) -> (String, Option<u32>) {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => (
            parsed.message.unwrap_or_else(|| body.to_string()),
            parsed.retry_after_seconds,
        ),
        Err(_) => (body.to_string(), None),
    }
}

/// True when the response means the stored credential is no longer usable.
/// Any 403 qualifies; a 401 qualifies only when the message mentions the
/// token by some spelling, so credential mistakes keep their own message.
fn is_session_rejection(status: u16, message: &str) -> bool {
    if status == 403 {
        return true;
    }
    if status != 401 {
        return false;
    }
    let lowered = message.to_lowercase();
    lowered.contains("token") || lowered.contains("expired") || lowered.contains("invalid")
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        bearer_value, build_url_with_base, encode_query_component, extract_error_body,
        is_session_rejection, sanitize_body,
    };

    #[test]
    fn build_url_with_base_joins_and_trims_slashes() {
        assert_eq!(
            build_url_with_base("http://localhost:5000", "/api/auth/login"),
            "http://localhost:5000/api/auth/login"
        );
        assert_eq!(
            build_url_with_base("http://localhost:5000/", "api/auth/login"),
            "http://localhost:5000/api/auth/login"
        );
        assert_eq!(build_url_with_base("  ", "/api/auth/login"), "/api/auth/login");
    }

    #[test]
    fn bearer_value_prefixes_the_token() {
        assert_eq!(bearer_value("abc123"), "Bearer abc123");
    }

    #[test]
    fn session_rejection_requires_token_keyword_on_401() {
        assert!(is_session_rejection(401, "Token expired"));
        assert!(is_session_rejection(401, "jwt token malformed"));
        assert!(is_session_rejection(401, "Session EXPIRED"));
        assert!(is_session_rejection(401, "Invalid signature"));
        assert!(!is_session_rejection(401, "Wrong email or password"));
        assert!(!is_session_rejection(500, "token"));
    }

    #[test]
    fn session_rejection_always_fires_on_403() {
        assert!(is_session_rejection(403, ""));
        assert!(is_session_rejection(403, "Forbidden"));
        assert!(is_session_rejection(403, "Account suspended"));
    }

    #[test]
    fn extract_error_body_reads_message_and_cooldown() {
        let (message, retry_after) =
            extract_error_body(r#"{"message":"Please wait","retryAfterSeconds":25}"#);
        assert_eq!(message, "Please wait");
        assert_eq!(retry_after, Some(25));
    }

    #[test]
    fn extract_error_body_falls_back_to_raw_text() {
        let (message, retry_after) = extract_error_body("Bad Gateway");
        assert_eq!(message, "Bad Gateway");
        assert_eq!(retry_after, None);

        let (message, retry_after) = extract_error_body(r#"{"error":"nope"}"#);
        assert_eq!(message, r#"{"error":"nope"}"#);
        assert_eq!(retry_after, None);
    }

    #[test]
    fn sanitize_body_trims_truncates_and_defaults() {
        assert_eq!(sanitize_body("  ".to_string()), "Request failed.");
        assert_eq!(sanitize_body(" oops \n".to_string()), "oops");
        let long = "x".repeat(300);
        assert_eq!(sanitize_body(long).chars().count(), 200);
    }

    #[test]
    fn encode_query_component_escapes_reserved_characters() {
        assert_eq!(encode_query_component("plain"), "plain");
        assert_eq!(encode_query_component("a b"), "a%20b");
        assert_eq!(encode_query_component("a+b@c.io"), "a%2Bb%40c.io");
        assert_eq!(encode_query_component("café"), "caf%C3%A9");
    }
}
