//! API error types with IntoResponse
//!
//! Errors become short plain-text responses. Store and template failures
//! are logged with their cause; the client only sees a fixed message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::repos::StoreError;

/// Body of every 404 for a post id with no row behind it
pub const NOT_FOUND_MESSAGE: &str = "Post not found";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Path id is not an integer (400)
    InvalidId { raw: String },

    /// No post with this id (404)
    NotFound,

    /// Store call failed (500, logged)
    Store {
        message: &'static str,
        source: StoreError,
    },

    /// Template failed to render (500, logged)
    Render(minijinja::Error),
}

impl ApiError {
    /// Wrap a store failure with the message the client should see.
    ///
    /// ```ignore
    /// let posts = store.list().await.map_err(ApiError::store("Error fetching posts"))?;
    /// ```
    pub fn store(message: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Store { message, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidId { raw } => {
                tracing::debug!(id = %raw, "rejected malformed post id");
                (StatusCode::BAD_REQUEST, "Invalid post id").into_response()
            }
            Self::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
            Self::Store { message, source } => {
                // Log the actual error, return generic message
                tracing::error!(error = %source, "{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
            Self::Render(e) => {
                tracing::error!(error = %e, "Template render failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

impl From<minijinja::Error> for ApiError {
    fn from(e: minijinja::Error) -> Self {
        Self::Render(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn not_found_is_404_with_fixed_body() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(response).await, "Post not found");
    }

    #[tokio::test]
    async fn invalid_id_is_400() {
        let response = ApiError::InvalidId { raw: "abc".into() }.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn store_error_hides_cause() {
        let err = ApiError::store("Error fetching posts")(StoreError::Unavailable(
            "password authentication failed".into(),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_text(response).await;
        assert_eq!(body, "Error fetching posts");
        assert!(!body.contains("password"));
    }
}
