//! # Family Tree Backend
//!
//! Non-UI logic for the family tree application.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (any frontend speaking the shared DTOs)
//!     ↓
//! IO Layer (REST API, mappers)
//!     ↓
//! Domain Layer (sessions, member store, view rendering)
//!     ↓
//! Storage Layer (in-memory collections)
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{FamilyMemberStore, FamilyTreeViewService, SessionService};
use crate::storage::{FamilyMemberStorage, InMemoryConnection, UserStorage};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub session_service: SessionService,
    pub member_store: FamilyMemberStore,
    pub tree_view: FamilyTreeViewService,
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up storage (seed_demo_data={})", config.seed_demo_data);
    let conn = if config.seed_demo_data {
        Arc::new(InMemoryConnection::with_seed_data()?)
    } else {
        Arc::new(InMemoryConnection::new())
    };

    info!(
        "Storage ready with {} users and {} family members",
        conn.list_users()?.len(),
        conn.count_members()?
    );

    info!("Setting up domain model");
    let member_store = FamilyMemberStore::new(conn.clone());
    let session_service = SessionService::new(conn, member_store.clone());
    let tree_view = FamilyTreeViewService::new(config.age_policy, config.avatar.clone());

    Ok(AppState {
        session_service,
        member_store,
        tree_view,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Result<Router> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", config.cors_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Ok(Router::new()
        .nest("/api", io::rest::router())
        .layer(cors)
        .with_state(app_state))
}
