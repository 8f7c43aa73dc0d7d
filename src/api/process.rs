use axum::{
    extract::{Multipart, Query},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use ink_threshold::ThresholdParams;

use crate::error::ApiError;
use crate::processing;

/// Query parameters for document processing
#[derive(Debug, Default, Deserialize)]
pub struct ProcessQuery {
    /// Luma cutoff 0-255. Out-of-range values are clamped rather than
    /// rejected; the upstream contract never defined a validation error.
    #[serde(default)]
    pub threshold: Option<i64>,
    #[serde(default)]
    pub invert: Option<bool>,
}

impl ProcessQuery {
    /// Resolve the query into classifier parameters, applying the
    /// documented defaults (threshold 120, no inversion).
    pub fn threshold_params(&self) -> ThresholdParams {
        let defaults = ThresholdParams::default();
        ThresholdParams {
            threshold: self
                .threshold
                .map(|t| t.clamp(0, 255) as u8)
                .unwrap_or(defaults.threshold),
            invert: self.invert.unwrap_or(defaults.invert),
        }
    }
}

/// Convert an uploaded document photo to black-and-white
///
/// Accepts a multipart upload with a `file` field and returns the binarized
/// document as a quality-80 JPEG.
#[utoipa::path(
    post,
    path = "/api/document/process",
    params(
        ("threshold" = Option<i64>, Query, description = "Luma cutoff 0-255 (default 120); values outside the range are clamped"),
        ("invert" = Option<bool>, Query, description = "Treat dark regions as background, for dark-mode sources (default false)"),
    ),
    responses(
        (status = 200, description = "Binarized document as JPEG", body = Vec<u8>, content_type = "image/jpeg"),
        (status = 400, description = "No file uploaded, or the file could not be decoded", body = String, content_type = "text/plain"),
    ),
    tag = "Document"
)]
pub async fn handle_process(
    Query(query): Query<ProcessQuery>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let params = query.threshold_params();

    // First field named "file" wins; anything else in the form is ignored.
    let mut file_bytes = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Multipart(e.to_string()))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::Multipart(e.to_string()))?;
            file_bytes = Some(bytes);
            break;
        }
    }

    let bytes = file_bytes.ok_or(ApiError::NoFileUploaded)?;
    tracing::debug!(
        len = bytes.len(),
        threshold = params.threshold,
        invert = params.invert,
        "processing document upload"
    );

    let jpeg = processing::process_document(&bytes, params)?;

    Ok(([(header::CONTENT_TYPE, "image/jpeg")], jpeg).into_response())
}
