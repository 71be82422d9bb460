//! Request extractors
//!
//! Wrap axum's `Json` and `Path` so that any rejection (bad syntax, wrong
//! content type, non-integer id) becomes `400 {"msg":"bad request"}`.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::Json;
use http::request::Parts;
use serde::de::DeserializeOwned;
use shared::error::AppError;

/// JSON body extractor
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::warn!(error = %rejection.body_text(), "Failed to decode request body");
                Err(AppError::bad_request())
            }
        }
    }
}

/// Integer `{id}` path parameter
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i32>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => {
                tracing::warn!(error = %rejection.body_text(), "Failed to decode path id");
                Err(AppError::bad_request())
            }
        }
    }
}
