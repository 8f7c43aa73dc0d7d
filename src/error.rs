use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors of the decode -> binarize -> encode pipeline.
///
/// The transform itself cannot fail; every failure happens at the codec
/// boundary.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("empty input, no image bytes supplied")]
    EmptyInput,

    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("decoded image has zero area: {width}x{height}")]
    ZeroArea { width: u32, height: u32 },

    #[error("JPEG encode error: {0}")]
    Encode(image::ImageError),
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Upload field missing or zero length. The message string is part of
    /// the upstream contract and must not change.
    #[error("No file uploaded.")]
    NoFileUploaded,

    /// Bytes did not parse as a supported raster format. Contract string,
    /// see above.
    #[error("Could not decode image.")]
    CouldNotDecode,

    #[error("Malformed multipart request: {0}")]
    Multipart(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ProcessError> for ApiError {
    fn from(e: ProcessError) -> Self {
        match e {
            ProcessError::EmptyInput => ApiError::NoFileUploaded,
            ProcessError::Decode(_) | ProcessError::ZeroArea { .. } => ApiError::CouldNotDecode,
            ProcessError::Encode(e) => ApiError::Internal(format!("JPEG encode failed: {e}")),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            // Client errors carry plain-text reasons; the frontend displays
            // these strings verbatim.
            ApiError::NoFileUploaded | ApiError::CouldNotDecode | ApiError::Multipart(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            ApiError::Internal(_) => {
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = Json(json!({
                    "status": status.as_u16(),
                    "error": self.to_string(),
                }));
                (status, body).into_response()
            }
        }
    }
}
