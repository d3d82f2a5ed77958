//! Multipart uploads and the file path echo (`GET /files/{*file_path}`,
//! plus `GET /files/` for the empty path).
//!
//! Both upload endpoints read the repeated `files` field and ignore any
//! other form field.

use axum::{
    extract::{Multipart, Path},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::http::response::ApiError;
use crate::http::server::AppState;

const FILES_FIELD: &str = "files";

#[derive(Debug, Serialize)]
pub struct FileSizes {
    pub file_sizes: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub struct FileNames {
    pub filenames: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct FilePath {
    pub file_path: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/files/", post(create_files).get(read_root_file))
        .route("/uploadfiles/", post(create_upload_files))
        .route("/files/{*file_path}", get(read_file))
}

/// Byte length of every uploaded file, in upload order.
pub async fn create_files(mut multipart: Multipart) -> Result<Json<FileSizes>, ApiError> {
    let mut file_sizes = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILES_FIELD) {
            continue;
        }
        let data = field.bytes().await?;
        file_sizes.push(data.len());
    }
    tracing::debug!(files = file_sizes.len(), "Files received");
    Ok(Json(FileSizes { file_sizes }))
}

/// Client-supplied filename of every uploaded file.
pub async fn create_upload_files(mut multipart: Multipart) -> Result<Json<FileNames>, ApiError> {
    let mut filenames = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILES_FIELD) {
            continue;
        }
        filenames.push(field.file_name().unwrap_or_default().to_string());
    }
    tracing::debug!(files = filenames.len(), "Upload files received");
    Ok(Json(FileNames { filenames }))
}

/// `/files/` with nothing after it: the path is empty.
pub async fn read_root_file() -> Json<FilePath> {
    Json(FilePath {
        file_path: String::new(),
    })
}

pub async fn read_file(Path(file_path): Path<String>) -> Json<FilePath> {
    Json(FilePath { file_path })
}
