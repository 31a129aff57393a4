//! # REST API for Family Members
//!
//! Endpoints for listing the signed-in user's members, adding new ones, and
//! reading a single member's detail view.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use chrono::Local;
use tracing::info;

use super::{error_response, extract};
use super::mappers::member_mapper::FamilyMemberMapper;
use crate::AppState;
use shared::{AddMemberRequest, AddMemberResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/members", get(list_members).post(add_member))
        .route("/members/:member_id", get(get_member_detail))
}

/// Members loaded into the active session, in insertion order
pub async fn list_members(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/members");

    match state.session_service.require_session() {
        Ok(session) => (StatusCode::OK, Json(FamilyMemberMapper::to_member_list_dto(session.members))).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn add_member(
    State(state): State<AppState>,
    payload: Result<Json<AddMemberRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match extract(payload) {
        Ok(json) => json,
        Err(e) => return error_response(e),
    };
    info!("POST /api/members - request: {:?}", request);

    match state
        .session_service
        .add_member(FamilyMemberMapper::to_add_command(request))
    {
        Ok(member) => {
            let response = AddMemberResponse {
                member: FamilyMemberMapper::to_dto(member),
                success_message: "Family member added successfully".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

pub async fn get_member_detail(
    State(state): State<AppState>,
    path: Result<Path<u32>, PathRejection>,
) -> impl IntoResponse {
    let Path(member_id) = match extract(path) {
        Ok(path) => path,
        Err(e) => return error_response(e),
    };
    info!("GET /api/members/{}", member_id);

    let today = Local::now().date_naive();
    let result = state.session_service.with_session(|session| {
        let member = state.member_store.get_member(session.user_id(), member_id)?;
        let links = state.member_store.resolve_links(&member)?;
        Ok(state.tree_view.render_detail(&member, &links, today))
    });

    match result {
        Ok(detail) => (StatusCode::OK, Json(detail)).into_response(),
        Err(e) => error_response(e),
    }
}
