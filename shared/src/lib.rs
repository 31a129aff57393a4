use serde::{Deserialize, Serialize};

/// A registered account, as exposed to clients. The password never leaves the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub name: String,
}

/// A person in a user's family tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: u32,
    /// ID of the user who owns this member
    pub owner_user_id: u32,
    pub full_name: String,
    /// Date of birth (YYYY-MM-DD)
    pub date_of_birth: String,
    pub description: String,
    /// Profile photo URL, empty when none was supplied
    pub profile_photo_url: String,
    /// Gallery photo URLs in display order
    pub photos: Vec<String>,
    /// Weak reference to another member's ID
    pub parent_id: Option<u32>,
    /// Weak reference to another member's ID
    pub spouse_id: Option<u32>,
    /// Tree depth tier, 0 for the oldest generation
    pub generation: u32,
}

/// Absent fields deserialize as empty and are reported as missing by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub success_message: String,
}

/// The currently signed-in user, if any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user: Option<User>,
    /// Number of members loaded into the session
    pub member_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success_message: String,
}

/// Request to add a member to the signed-in user's tree.
/// Only `full_name` and `date_of_birth` are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddMemberRequest {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub profile_photo_url: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub parent_id: Option<u32>,
    #[serde(default)]
    pub spouse_id: Option<u32>,
    #[serde(default)]
    pub generation: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddMemberResponse {
    pub member: FamilyMember,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberListResponse {
    pub members: Vec<FamilyMember>,
}

/// Display card for one member inside a generation section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberCard {
    pub id: u32,
    pub full_name: String,
    /// Profile photo, or a generated placeholder avatar
    pub photo_url: String,
    pub age: i32,
    /// "Age N", absent when the age is zero
    pub age_label: Option<String>,
    pub description: String,
}

/// A titled section holding every member of one generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSection {
    pub generation: u32,
    /// "Generation N", offset by one from `generation`
    pub title: String,
    pub members: Vec<MemberCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyTreeResponse {
    /// Sections in ascending generation order
    pub generations: Vec<GenerationSection>,
    /// True when the user has no members and the empty state should be shown
    pub is_empty: bool,
}

/// A resolved parent or spouse reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberLink {
    pub id: u32,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDetailResponse {
    pub id: u32,
    pub full_name: String,
    pub photo_url: String,
    pub date_of_birth: String,
    /// Human-readable date of birth, with the age label appended when present
    pub date_of_birth_label: String,
    pub age: i32,
    pub age_label: Option<String>,
    pub description: String,
    pub generation: u32,
    /// Gallery photos; `None` when the member has no photos and the gallery is hidden
    pub gallery: Option<Vec<String>>,
    pub parent: Option<MemberLink>,
    pub spouse: Option<MemberLink>,
}

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error kind, e.g. "missing_field"
    pub error: String,
    pub message: String,
}
