use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::extract::ValidForm;
use crate::http::server::AppState;
use crate::models::Validate;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl Validate for LoginForm {}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub username: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/login/", post(login))
}

/// Accepts any credentials; only the username is returned.
pub async fn login(ValidForm(form): ValidForm<LoginForm>) -> Json<LoginResponse> {
    tracing::info!(username = %form.username, "Login");
    Json(LoginResponse {
        username: form.username,
    })
}
