//! # Domain Module
//!
//! Business logic for the family tree: accounts and the active session,
//! the per-user member store, generation grouping, and the view rendering
//! that turns members into cards and detail views.
//!
//! ## Module Organization
//!
//! - **session_service**: register, login, logout and the single active session
//! - **member_store**: per-user loading, adding, and weak-reference lookup
//! - **generation**: grouping members by generation
//! - **family_tree_view**: card and detail rendering
//! - **age** / **avatar**: age calculation and photo URL helpers
//!
//! ## Business Rules
//!
//! - A user only ever sees members they own
//! - New members need a name and a date of birth; the caller picks the generation
//! - Member IDs are unique across all users
//! - Parent and spouse links are plain IDs and are never validated

pub mod age;
pub mod avatar;
pub mod commands;
pub mod family_tree_view;
pub mod generation;
pub mod member_store;
pub mod models;
pub mod session_service;

pub use family_tree_view::FamilyTreeViewService;
pub use member_store::{FamilyMemberStore, MemberLinks};
pub use session_service::SessionService;
