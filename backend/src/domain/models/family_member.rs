//! backend/src/domain/models/family_member.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Domain model for a person in a family tree.
///
/// `parent_id` and `spouse_id` are weak references: they name another
/// member's ID but are never dereferenced implicitly and carry no ownership.
/// Nothing checks that `generation` agrees with the parent link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: u32,
    pub owner_user_id: u32,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub description: String,
    pub profile_photo_url: String,
    pub photos: Vec<String>,
    pub parent_id: Option<u32>,
    pub spouse_id: Option<u32>,
    pub generation: u32,
}

impl FamilyMember {
    pub fn is_owned_by(&self, user_id: u32) -> bool {
        self.owner_user_id == user_id
    }
}
