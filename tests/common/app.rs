//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use inksaver::server::build_router;

/// Boundary string used by the multipart helper.
pub const BOUNDARY: &str = "inksaver-test-boundary";

/// Test application wrapping the production router
pub struct TestApp {
    router: axum::Router,
}

impl TestApp {
    /// Create a new test application with the default CORS origin
    pub fn new() -> Self {
        Self {
            router: build_router(None),
        }
    }

    /// Create a test application with an explicit CORS origin
    pub fn with_cors_origin(origin: &str) -> Self {
        Self {
            router: build_router(Some(origin)),
        }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make an OPTIONS request with custom headers (CORS preflight)
    pub async fn options_with_headers(&self, path: &str, headers: &[(&str, &str)]) -> TestResponse {
        let mut builder = Request::options(path);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }

    /// POST a multipart form with a single file part
    pub async fn post_file(&self, path: &str, field_name: &str, payload: &[u8]) -> TestResponse {
        let body = multipart_body(field_name, "upload.png", "image/png", payload);
        self.post_multipart(path, body).await
    }

    /// POST a pre-built multipart body
    pub async fn post_multipart(&self, path: &str, body: Vec<u8>) -> TestResponse {
        let request = Request::post(path)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        self.request(request).await
    }

    /// POST a raw body with an explicit content type
    pub async fn post_raw(&self, path: &str, content_type: &str, body: Vec<u8>) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", content_type)
            .body(Body::from(body))
            .unwrap();
        self.request(request).await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a multipart/form-data body with one part, using [`BOUNDARY`].
pub fn multipart_body(
    field_name: &str,
    filename: &str,
    content_type: &str,
    payload: &[u8],
) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{filename}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(payload);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Get raw body bytes
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Check if response body starts with the JPEG SOI marker
    pub fn is_jpeg(&self) -> bool {
        self.body.len() > 2 && self.body[0] == 0xFF && self.body[1] == 0xD8
    }
}
