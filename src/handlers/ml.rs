use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::http::extract::ValidPath;
use crate::http::server::AppState;
use crate::models::ModelName;

#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub model_name: ModelName,
    pub message: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/models/{model_name}", get(get_model))
}

pub async fn get_model(ValidPath(model_name): ValidPath<ModelName>) -> Json<ModelInfo> {
    Json(ModelInfo {
        model_name,
        message: model_name.message(),
    })
}
