//! # REST API for Authentication
//!
//! Mock sign-in: plaintext credentials and one active session per process.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tracing::info;

use super::{error_response, extract};
use super::mappers::user_mapper::UserMapper;
use crate::AppState;
use shared::{AuthResponse, LoginRequest, LogoutResponse, RegisterRequest, SessionResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(get_session))
}

/// Create an account and sign in as it
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match extract(payload) {
        Ok(json) => json,
        Err(e) => return error_response(e),
    };
    info!("POST /api/auth/register - email: {}", request.email);

    match state.session_service.register(UserMapper::to_register_command(request)) {
        Ok(user) => {
            let response = AuthResponse {
                user: UserMapper::to_dto(user),
                success_message: "Registration successful".to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match extract(payload) {
        Ok(json) => json,
        Err(e) => return error_response(e),
    };
    info!("POST /api/auth/login - email: {}", request.email);

    match state.session_service.login(UserMapper::to_login_command(request)) {
        Ok(user) => {
            let response = AuthResponse {
                user: UserMapper::to_dto(user),
                success_message: "Signed in".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/auth/logout");

    match state.session_service.logout() {
        Ok(()) => {
            let response = LogoutResponse {
                success_message: "Signed out".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// The signed-in user, or `null` when nobody is signed in
pub async fn get_session(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/auth/session");

    match state.session_service.current_session() {
        Ok(session) => {
            let response = match session {
                Some(session) => SessionResponse {
                    member_count: session.members.len(),
                    user: Some(UserMapper::to_dto(session.user)),
                },
                None => SessionResponse {
                    user: None,
                    member_count: 0,
                },
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}
