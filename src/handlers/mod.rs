//! Endpoint handlers, grouped by area.
//!
//! Each area exposes a `router()` that the server merges into one
//! [`axum::Router`]. Handlers receive already-validated input through the
//! extractors in `http::extract` and return JSON (or HTML for `/`).

pub mod auth;
pub mod files;
pub mod images;
pub mod items;
pub mod ml;
pub mod portal;
pub mod root;
pub mod users;

use axum::Router;

use crate::http::server::AppState;

/// All endpoints of the API.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(root::router())
        .merge(images::router())
        .merge(files::router())
        .merge(portal::router())
        .merge(auth::router())
        .merge(items::router())
        .merge(users::router())
        .merge(ml::router())
}
