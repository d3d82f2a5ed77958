//! The deprecated portal endpoint.

use axum::{
    http::{HeaderName, HeaderValue},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::json;

use crate::http::extract::ValidQuery;
use crate::http::server::AppState;
use crate::models::Validate;

pub const PORTAL_TARGET: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

const DEPRECATION: HeaderName = HeaderName::from_static("deprecation");

#[derive(Debug, Default, Deserialize)]
pub struct PortalQuery {
    #[serde(default, deserialize_with = "query_bool")]
    pub teleport: bool,
}

impl Validate for PortalQuery {}

/// Query-string booleans: true/false, 1/0, yes/no, on/off.
fn query_bool<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(d)?;
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(D::Error::custom(format!(
            "Input should be a valid boolean, unable to interpret input `{raw}`"
        ))),
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/portal", get(get_portal))
}

pub async fn get_portal(ValidQuery(query): ValidQuery<PortalQuery>) -> Response {
    let response = if query.teleport {
        Redirect::temporary(PORTAL_TARGET).into_response()
    } else {
        Json(json!({ "message": "Here's your interdimensional portal." })).into_response()
    };
    ([(DEPRECATION, HeaderValue::from_static("true"))], response).into_response()
}
