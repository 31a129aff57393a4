//! # REST API for the Family Tree View

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use chrono::Local;
use tracing::info;

use super::error_response;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/tree", get(get_family_tree))
}

/// Session members grouped into generation sections of display cards
pub async fn get_family_tree(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/tree");

    let today = Local::now().date_naive();
    let result = state
        .session_service
        .with_session(|session| Ok(state.tree_view.render_tree(&session.members, today)));

    match result {
        Ok(tree) => {
            info!("Rendered {} generations", tree.generations.len());
            (StatusCode::OK, Json(tree)).into_response()
        }
        Err(e) => error_response(e),
    }
}
