//! backend/src/domain/models/session.rs

use super::family_member::FamilyMember;
use super::user::User;

/// The signed-in user together with the members loaded for them.
///
/// A session is built at login/registration and dropped at logout, which
/// also discards the loaded member list.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: User,
    pub members: Vec<FamilyMember>,
}

impl Session {
    pub fn new(user: User, members: Vec<FamilyMember>) -> Self {
        Self { user, members }
    }

    pub fn user_id(&self) -> u32 {
        self.user.id
    }
}
