//! Request body limits.
//!
//! axum's per-extractor default limit is replaced by one limit for the whole
//! body, so JSON, forms and multipart uploads share `security.max_body_size`.
//! Bodies declaring a larger `Content-Length` get 413 before any handler runs.

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::limit::RequestBodyLimitLayer;

pub fn apply_body_limit(router: Router, max_body_size: usize) -> Router {
    router
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_size))
}
