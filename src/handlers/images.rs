use axum::{routing::post, Json, Router};

use crate::http::extract::ValidJson;
use crate::http::server::AppState;
use crate::models::Image;

pub fn router() -> Router<AppState> {
    Router::new().route("/images/multiple/", post(create_multiple_images))
}

/// Echo a validated list of images.
pub async fn create_multiple_images(ValidJson(images): ValidJson<Vec<Image>>) -> Json<Vec<Image>> {
    tracing::debug!(count = images.len(), "Images received");
    Json(images)
}
