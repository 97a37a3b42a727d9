//! Health check endpoint for container orchestration.
//!
//! Returns 200 OK with a fixed JSON payload whenever the process can answer
//! HTTP. Method and path are not inspected.

use http::StatusCode;

use crate::config::HEALTH_BODY;

/// Health check handler.
///
/// The body is written as-is; no content type is set here, so the
/// framework default for a string body applies.
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, HEALTH_BODY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_fixed_payload() {
        let (status, body) = health().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"status":"healthy","service":"muchtodo-api"}"#);
    }

    #[tokio::test]
    async fn payload_is_stable() {
        let (_, first) = health().await;
        for _ in 0..10 {
            let (_, next) = health().await;
            assert_eq!(first.as_bytes(), next.as_bytes());
        }
    }
}
