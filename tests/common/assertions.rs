//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is a valid JPEG image with the right content type
pub fn assert_jpeg(response: &TestResponse) {
    assert_ok(response);
    assert!(
        response.is_jpeg(),
        "Expected JPEG image, got {} bytes starting with {:?}",
        response.body.len(),
        &response.body[..4.min(response.body.len())]
    );

    let content_type = response
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());
    assert_eq!(
        content_type,
        Some("image/jpeg"),
        "Expected Content-Type: image/jpeg"
    );
}

/// Assert response is a 400 with the given plain-text reason
pub fn assert_client_error(response: &TestResponse, reason: &str) {
    assert_status(response, StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), reason);
}
