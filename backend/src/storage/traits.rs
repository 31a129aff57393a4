//! # Storage Traits
//!
//! Storage abstractions used by the domain services. All operations are
//! synchronous.

use anyhow::Result;

use crate::domain::models::family_member::FamilyMember as DomainFamilyMember;
use crate::domain::models::user::User as DomainUser;

/// Trait defining the interface for user account storage
pub trait UserStorage: Send + Sync {
    /// Store a new user. Fails if the ID is already taken.
    fn store_user(&self, user: &DomainUser) -> Result<()>;

    /// Find a user by exact, case-sensitive email
    fn find_user_by_email(&self, email: &str) -> Result<Option<DomainUser>>;

    /// List all users in registration order
    fn list_users(&self) -> Result<Vec<DomainUser>>;

    /// Highest user ID currently stored, if any user exists
    fn max_user_id(&self) -> Result<Option<u32>>;
}

/// Trait defining the interface for family member storage
pub trait FamilyMemberStorage: Send + Sync {
    /// Append a new member to the collection. Fails if the ID is already taken.
    fn store_member(&self, member: &DomainFamilyMember) -> Result<()>;

    /// Retrieve a member by ID regardless of owner
    fn get_member(&self, member_id: u32) -> Result<Option<DomainFamilyMember>>;

    /// List members owned by a user, in insertion order
    fn list_members_for_owner(&self, owner_user_id: u32) -> Result<Vec<DomainFamilyMember>>;

    /// Total number of members across all owners
    fn count_members(&self) -> Result<usize>;

    /// Highest member ID currently stored, if any member exists
    fn max_member_id(&self) -> Result<Option<u32>>;
}
