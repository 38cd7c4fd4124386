use crate::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response body.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks. Does not touch the filesystem.
#[axum::debug_handler]
pub(crate) async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Filedemo REST API is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/write",
    responses(
        (status = 200, description = "File written", body = String, content_type = "text/plain"),
        (status = 500, description = "File could not be written", body = String, content_type = "text/plain")
    )
)]
/// Write the demo content to the configured file
///
/// Creates missing parent directories and overwrites any existing file.
///
/// # Returns
/// * `Ok(String)` - `File written successfully to: <absolute path>`
/// * `Err((StatusCode, String))` - `Error writing file: <message>`
///
/// # Errors
/// Returns `500 Internal Server Error` if:
/// - a parent directory cannot be created, or
/// - the file cannot be written (including when a directory occupies the path).
#[axum::debug_handler]
pub(crate) async fn write(
    State(state): State<AppState>,
) -> Result<String, (StatusCode, String)> {
    match state.files.write_demo_content() {
        Ok(path) => {
            tracing::info!("Wrote demo file to {}", path.display());
            Ok(format!("File written successfully to: {}", path.display()))
        }
        Err(e) => {
            tracing::error!("Write file error: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error writing file: {e}"),
            ))
        }
    }
}

#[utoipa::path(
    get,
    path = "/download",
    responses(
        (status = 200, description = "File contents as an attachment"),
        (status = 404, description = "File does not exist"),
        (status = 500, description = "File could not be read")
    )
)]
/// Download the configured file as an attachment
///
/// The whole file is read into memory. The `Content-Disposition` header names the final
/// segment of the resolved path.
///
/// # Errors
/// Returns, with an empty body:
/// - `404 Not Found` if nothing exists at the path, or
/// - `500 Internal Server Error` if the path exists but cannot be read.
#[axum::debug_handler]
pub(crate) async fn download(State(state): State<AppState>) -> Result<Response, StatusCode> {
    match state.files.read_for_download() {
        Ok(file) => {
            tracing::info!("Serving {} ({} bytes)", file.file_name, file.content.len());
            let disposition = file.content_disposition();
            Ok((
                [
                    (header::CONTENT_TYPE, "application/octet-stream".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                file.content,
            )
                .into_response())
        }
        Err(e) if e.is_not_found() => {
            tracing::warn!("Download requested but {}", e);
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            tracing::error!("Download file error: {:?}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
