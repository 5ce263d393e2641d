//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::PostId;

/// Extract and validate a post id from path
pub struct ValidPostId(pub PostId);

impl<S> FromRequestParts<S> for ValidPostId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidId { raw: String::new() })?;

        let id = raw
            .parse::<PostId>()
            .map_err(|_| ApiError::InvalidId { raw })?;

        Ok(Self(id))
    }
}
