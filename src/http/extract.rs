//! Validating extractors.
//!
//! Thin wrappers over axum's `Json`, `Query`, `Path` and `Form` that turn
//! rejections into [`ApiError::Validation`] and then run the model's own
//! [`Validate`] checks, prefixing each error location with where the input
//! came from (`body`, `query`, `path`).

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::http::response::ApiError;
use crate::models::Validate;

fn check<T: Validate>(value: &T, source: &str) -> Result<(), ApiError> {
    let errors = value.validate();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(
            errors.into_iter().map(|e| e.within([source])).collect(),
        ))
    }
}

/// JSON body, deserialized and validated.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        check(&value, "body")?;
        Ok(Self(value))
    }
}

/// URL-encoded form body, deserialized and validated.
#[derive(Debug, Clone)]
pub struct ValidForm<T>(pub T);

impl<S, T> FromRequest<S> for ValidForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state).await?;
        check(&value, "body")?;
        Ok(Self(value))
    }
}

/// Query string, deserialized and validated.
#[derive(Debug, Clone)]
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        check(&value, "query")?;
        Ok(Self(value))
    }
}

/// Path parameters, deserialized and validated.
#[derive(Debug, Clone)]
pub struct ValidPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        check(&value, "path")?;
        Ok(Self(value))
    }
}
