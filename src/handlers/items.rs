//! Item endpoints.
//!
//! `GET /items/{item_id}` checks existence against the fixed name list,
//! `PATCH` addresses the item list by position, and `PUT` writes snapshots
//! keyed by an arbitrary integer id.

use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::{header, HeaderMap},
    routing::get,
    Json, Router,
};
use cookie::Cookie;
use serde::{Deserialize, Serialize};

use crate::http::extract::{ValidJson, ValidPath, ValidQuery};
use crate::http::response::{ApiError, FieldError};
use crate::http::server::AppState;
use crate::models::{Item, ItemPatch, User, Validate};

const MAX_ITEM_ID: i64 = 1000;
const MAX_SIZE: f64 = 10.5;
const ADS_COOKIE: &str = "ads_id";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items/", get(read_items).post(create_item))
        .route(
            "/items/{item_id}",
            get(read_item).put(update_item).patch(patch_item),
        )
}

/// Value of the `ads_id` cookie, if the client sent one.
fn ads_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == ADS_COOKIE)
        .map(|cookie| cookie.value_trimmed().to_owned())
}

pub async fn read_items(State(state): State<AppState>, headers: HeaderMap) -> Json<Vec<Item>> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok());
    tracing::debug!(ads_id = ?ads_id(&headers), user_agent = ?user_agent, "Listing items");
    Json(state.catalog.items().await)
}

/// An item as returned by `POST /items/`.
#[derive(Debug, Serialize)]
pub struct CreatedItem {
    #[serde(flatten)]
    pub item: Item,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_with_tax: Option<f64>,
}

pub async fn create_item(ValidJson(item): ValidJson<Item>) -> Json<CreatedItem> {
    let price_with_tax = item.price_with_tax();
    Json(CreatedItem {
        item,
        price_with_tax,
    })
}

/// Body of `PUT /items/{item_id}`: every part is embedded under its name.
#[derive(Debug, Deserialize)]
pub struct ItemUpdate {
    pub item: Item,
    #[serde(default)]
    pub importance: i64,
    #[serde(default)]
    pub user: Option<User>,
}

impl Validate for ItemUpdate {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors: Vec<FieldError> = self
            .item
            .validate()
            .into_iter()
            .map(|e| e.within(["item"]))
            .collect();
        errors.extend(self.user.validate().into_iter().map(|e| e.within(["user"])));
        errors
    }
}

pub async fn update_item(
    State(state): State<AppState>,
    ValidPath(item_id): ValidPath<i64>,
    ValidJson(update): ValidJson<ItemUpdate>,
) -> Json<BTreeMap<i64, Item>> {
    tracing::debug!(
        item_id,
        importance = update.importance,
        user = ?update.user.as_ref().map(|u| u.username.as_str()),
        "Storing item snapshot"
    );
    Json(state.catalog.put_snapshot(item_id, update.item))
}

pub async fn patch_item(
    State(state): State<AppState>,
    ValidPath(index): ValidPath<usize>,
    ValidJson(patch): ValidJson<ItemPatch>,
) -> Result<Json<Item>, ApiError> {
    state
        .catalog
        .patch_item(index, patch)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound("Item not found"))
}

#[derive(Debug, Deserialize)]
pub struct ItemPath {
    pub item_id: i64,
}

impl Validate for ItemPath {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.item_id < 0 {
            errors.push(FieldError::new(
                ["item_id"],
                "Input should be greater than or equal to 0",
                "greater_than_equal",
            ));
        }
        if self.item_id > MAX_ITEM_ID {
            errors.push(FieldError::new(
                ["item_id"],
                format!("Input should be less than or equal to {MAX_ITEM_ID}"),
                "less_than_equal",
            ));
        }
        errors
    }
}

#[derive(Debug, Deserialize)]
pub struct ItemQuery {
    pub q: String,
    pub size: f64,
}

impl Validate for ItemQuery {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.size.is_nan() || self.size <= 0.0 {
            errors.push(FieldError::new(
                ["size"],
                "Input should be greater than 0",
                "greater_than",
            ));
        }
        if self.size.is_nan() || self.size >= MAX_SIZE {
            errors.push(FieldError::new(
                ["size"],
                format!("Input should be less than {MAX_SIZE}"),
                "less_than",
            ));
        }
        errors
    }
}

#[derive(Debug, Serialize)]
pub struct ItemLookup {
    pub item_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

pub async fn read_item(
    State(state): State<AppState>,
    ValidPath(path): ValidPath<ItemPath>,
    ValidQuery(query): ValidQuery<ItemQuery>,
) -> Result<Json<ItemLookup>, ApiError> {
    let Some(name) = state.catalog.item_name(path.item_id) else {
        tracing::debug!(item_id = path.item_id, "Item not found");
        return Err(ApiError::NotFound("Item not found"));
    };
    tracing::debug!(item_id = path.item_id, name, "Item found");
    Ok(Json(ItemLookup {
        item_id: path.item_id,
        q: Some(query.q).filter(|q| !q.is_empty()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn finds_ads_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("session=abc; ads_id=42; theme=dark"),
        );
        assert_eq!(ads_id(&headers).as_deref(), Some("42"));
    }

    #[test]
    fn quoted_ads_cookie_is_unquoted() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static(r#"ads_id="42""#));
        assert_eq!(ads_id(&headers).as_deref(), Some("42"));
    }

    #[test]
    fn missing_ads_cookie() {
        let mut headers = HeaderMap::new();
        assert_eq!(ads_id(&headers), None);
        headers.insert(header::COOKIE, HeaderValue::from_static("session=abc"));
        assert_eq!(ads_id(&headers), None);
    }

    #[test]
    fn size_bounds_are_exclusive() {
        let query = |size| ItemQuery {
            q: String::new(),
            size,
        };
        assert!(query(0.5).validate().is_empty());
        assert_eq!(query(0.0).validate()[0].kind, "greater_than");
        assert_eq!(query(10.5).validate()[0].kind, "less_than");
        assert_eq!(query(f64::NAN).validate().len(), 2);
    }

    #[test]
    fn item_id_bounds_are_inclusive() {
        assert!(ItemPath { item_id: 0 }.validate().is_empty());
        assert!(ItemPath { item_id: 1000 }.validate().is_empty());
        assert_eq!(ItemPath { item_id: 1001 }.validate()[0].kind, "less_than_equal");
        assert_eq!(ItemPath { item_id: -1 }.validate()[0].kind, "greater_than_equal");
    }
}
