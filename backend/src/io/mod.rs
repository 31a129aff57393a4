//! # IO Module
//!
//! Interface layer exposing the domain to clients. Only the REST API exists
//! today; handlers translate `shared` DTOs into domain commands and back.

pub mod rest;
