//! Landing page

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::get, Router};

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET / - landing page
async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    Ok(Html(state.templates.index()?))
}

/// Page routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}
