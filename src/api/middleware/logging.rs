//! Request/response logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::info;

/// Log each request and its outcome with a request id.
///
/// Does not open its own span: `TraceLayer` already creates one per request.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = extract_path(&request);
    let request_id = extract_request_id(&request);
    let user_agent = request
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(|s| truncate_for_log(s, 120))
        .unwrap_or_default();

    info!(
        method = %method,
        path = %path,
        request_id = %request_id,
        user_agent = %user_agent,
        "Incoming request"
    );

    let response = next.run(request).await;

    info!(
        method = %method,
        path = %path,
        status = %response.status().as_u16(),
        duration_ms = %start.elapsed().as_millis(),
        request_id = %request_id,
        "Request completed"
    );

    response
}

fn extract_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn extract_request_id(request: &Request<Body>) -> String {
    request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

/// Truncate long strings for logging
pub fn truncate_for_log(s: &str, max_len: usize) -> String {
    match s.char_indices().nth(max_len) {
        None => s.to_string(),
        Some((cut, _)) => format!(
            "{}...[truncated {} chars]",
            &s[..cut],
            s.chars().count() - max_len
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_for_log() {
        assert_eq!(truncate_for_log("hello", 10), "hello");

        let truncated = truncate_for_log("hello world this is a very long string", 10);
        assert!(truncated.starts_with("hello worl"));
        assert!(truncated.contains("[truncated 28 chars]"));
    }

    #[test]
    fn test_truncate_for_log_exact_length() {
        assert_eq!(truncate_for_log("exactly10!", 10), "exactly10!");
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        let truncated = truncate_for_log("ทดสอบภาษาไทย", 3);
        assert!(truncated.starts_with("ทดส"));
    }

    #[test]
    fn test_request_id_header_is_used() {
        let request = Request::builder()
            .uri("/v1/predictions")
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();

        assert_eq!(extract_request_id(&request), "abc-123");
        assert_eq!(extract_path(&request), "/v1/predictions");
    }
}
