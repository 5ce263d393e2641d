//! Post endpoints
//!
//! Each handler issues at most one store call. Writes answer with a 302
//! back to the listing; update and delete of a missing id are no-ops.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::ValidPostId;
use crate::http::server::AppState;
use crate::models::PostForm;

/// 302 Found pointing at the post listing
fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/home")]).into_response()
}

/// GET /home - list every post
async fn list_posts(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let posts = state
        .store
        .list()
        .await
        .map_err(ApiError::store("Error fetching posts"))?;

    Ok(Html(state.templates.home(&posts)?))
}

/// GET /create - empty post form
async fn create_form(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.templates.create_form()?))
}

/// POST /create - insert a post
async fn create_post(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PostForm>,
) -> Result<Response, ApiError> {
    let id = state
        .store
        .create(form.into())
        .await
        .map_err(ApiError::store("Error creating posts"))?;

    tracing::info!(%id, "Created post");
    Ok(redirect_home())
}

/// GET /blogDetails/{id} - show one post
async fn post_details(
    State(state): State<Arc<AppState>>,
    ValidPostId(id): ValidPostId,
) -> Result<Html<String>, ApiError> {
    let post = state
        .store
        .get(id)
        .await
        .map_err(ApiError::store("Error fetching posts"))?
        .ok_or(ApiError::NotFound)?;

    Ok(Html(state.templates.details(&post)?))
}

/// GET /edit/{id} - form pre-filled with the post
async fn edit_form(
    State(state): State<Arc<AppState>>,
    ValidPostId(id): ValidPostId,
) -> Result<Html<String>, ApiError> {
    let post = state
        .store
        .get(id)
        .await
        .map_err(ApiError::store("Error fetching post for editing"))?
        .ok_or(ApiError::NotFound)?;

    Ok(Html(state.templates.edit_form(&post)?))
}

/// POST /edit/{id} - overwrite title, description and author
async fn update_post(
    State(state): State<Arc<AppState>>,
    ValidPostId(id): ValidPostId,
    Form(form): Form<PostForm>,
) -> Result<Response, ApiError> {
    let updated = state
        .store
        .update(id, form.into())
        .await
        .map_err(ApiError::store("Error updating post"))?;

    tracing::debug!(%id, rows = updated, "Updated post");
    Ok(redirect_home())
}

/// POST /delete/{id} - remove a post
async fn delete_post(
    State(state): State<Arc<AppState>>,
    ValidPostId(id): ValidPostId,
) -> Result<Response, ApiError> {
    let deleted = state
        .store
        .delete(id)
        .await
        .map_err(ApiError::store("Error deleting post"))?;

    tracing::debug!(%id, rows = deleted, "Deleted post");
    Ok(redirect_home())
}

/// Post routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/home", get(list_posts))
        .route("/create", get(create_form).post(create_post))
        .route("/blogDetails/{id}", get(post_details))
        .route("/edit/{id}", get(edit_form).post(update_post))
        .route("/delete/{id}", post(delete_post))
}
