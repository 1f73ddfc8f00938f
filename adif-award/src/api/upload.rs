//! ADIF upload endpoint
//!
//! POST /upload_adif/ with a multipart `file` field. Validation failures are
//! answered at this boundary and never reach the service.

use axum::{
    body::Bytes,
    extract::{
        multipart::{Multipart, MultipartRejection},
        State,
    },
    Json,
};
use tracing::info;

use super::error::ApiError;
use crate::service::{AdifService, AwardSummary};
use crate::AppState;

/// Multipart field carrying the log file
pub const FILE_FIELD: &str = "file";

struct UploadedFile {
    filename: Option<String>,
    bytes: Bytes,
}

/// POST /upload_adif/
///
/// Returns `{unique_addresses, award_tier, callsign}` for the uploaded log.
pub async fn upload_adif(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AwardSummary>, ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::NotMultipart(e.body_text()))?;

    let upload = read_file_field(&mut multipart)
        .await?
        .ok_or(ApiError::MissingFile)?;

    if !AdifService::is_valid_adif_file(upload.filename.as_deref()) {
        return Err(ApiError::InvalidFileType);
    }

    let content =
        std::str::from_utf8(&upload.bytes).map_err(|_| ApiError::UnsupportedEncoding)?;

    let summary = state.service.process_adif_content(content)?;

    info!(
        "Processed {} ({} bytes): {} unique, tier {}",
        upload.filename.as_deref().unwrap_or_default(),
        upload.bytes.len(),
        summary.unique_addresses,
        summary.award_tier
    );

    Ok(Json(summary))
}

/// Read the first `file` part, skipping any other fields
async fn read_file_field(multipart: &mut Multipart) -> Result<Option<UploadedFile>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let bytes = field.bytes().await?;
        return Ok(Some(UploadedFile { filename, bytes }));
    }

    Ok(None)
}
