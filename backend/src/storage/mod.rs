//! # Storage Module
//!
//! Holds the user accounts and the full family-member collection.
//!
//! The domain layer only talks to the [`traits`] interfaces, so the in-memory
//! connection used today can be replaced by a persistent backend without
//! touching the services.

pub mod memory;
pub mod traits;

pub use memory::InMemoryConnection;
pub use traits::{FamilyMemberStorage, UserStorage};
