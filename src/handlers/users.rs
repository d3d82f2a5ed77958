use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::http::extract::{ValidJson, ValidPath};
use crate::http::server::AppState;
use crate::models::{UserIn, UserOut};

#[derive(Debug, Serialize)]
pub struct UserRef {
    pub user_id: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user/", post(create_user))
        .route("/users/me", get(read_user_me))
        .route("/users/{user_id}", get(read_user))
}

pub async fn create_user(ValidJson(user): ValidJson<UserIn>) -> Json<UserOut> {
    tracing::info!(username = %user.username, "User created");
    Json(user.into())
}

pub async fn read_user_me() -> Json<UserRef> {
    Json(UserRef {
        user_id: "the current user".to_string(),
    })
}

pub async fn read_user(ValidPath(user_id): ValidPath<String>) -> Json<UserRef> {
    Json(UserRef { user_id })
}
