//! Upload API errors
//!
//! Every error renders as `{"detail": "<message>"}`.

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request carried no `file` part
    #[error("Field required: file")]
    MissingFile,

    /// Request body is not usable multipart form data
    #[error("{0}")]
    NotMultipart(String),

    #[error("File must be an ADIF file (.adi or .adif)")]
    InvalidFileType,

    #[error("File encoding is not supported. Please provide a UTF-8 encoded file")]
    UnsupportedEncoding,

    /// Failure while reading the multipart stream (including size limits)
    #[error(transparent)]
    Upload(#[from] MultipartError),

    /// Record parsing or classification failed
    #[error("An error occurred while processing the file: {0}")]
    Processing(#[from] adif_common::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFile | ApiError::NotMultipart(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidFileType | ApiError::UnsupportedEncoding => StatusCode::BAD_REQUEST,
            ApiError::Upload(err) => err.status(),
            ApiError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ApiError::Upload(err) => err.body_text(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            error!("Upload failed: {}", detail);
        } else {
            warn!("Upload rejected ({}): {}", status.as_u16(), detail);
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
