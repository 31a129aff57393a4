use anyhow::{anyhow, Result};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;

use super::seed;
use crate::domain::models::family_member::FamilyMember as DomainFamilyMember;
use crate::domain::models::user::User as DomainUser;
use crate::storage::traits::{FamilyMemberStorage, UserStorage};

/// InMemoryConnection holds every user and family member for the lifetime of
/// the process. Clones share the same underlying collections.
#[derive(Clone, Default)]
pub struct InMemoryConnection {
    users: Arc<RwLock<Vec<DomainUser>>>,
    members: Arc<RwLock<Vec<DomainFamilyMember>>>,
}

impl InMemoryConnection {
    /// Create an empty connection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a connection pre-populated with the demo account and its family
    pub fn with_seed_data() -> Result<Self> {
        let users = seed::demo_users();
        let members = seed::demo_members()?;
        info!("Seeding {} users and {} family members", users.len(), members.len());

        Ok(Self {
            users: Arc::new(RwLock::new(users)),
            members: Arc::new(RwLock::new(members)),
        })
    }

    fn read_users(&self) -> Result<RwLockReadGuard<'_, Vec<DomainUser>>> {
        self.users.read().map_err(|_| anyhow!("User storage lock poisoned"))
    }

    fn write_users(&self) -> Result<RwLockWriteGuard<'_, Vec<DomainUser>>> {
        self.users.write().map_err(|_| anyhow!("User storage lock poisoned"))
    }

    fn read_members(&self) -> Result<RwLockReadGuard<'_, Vec<DomainFamilyMember>>> {
        self.members.read().map_err(|_| anyhow!("Member storage lock poisoned"))
    }

    fn write_members(&self) -> Result<RwLockWriteGuard<'_, Vec<DomainFamilyMember>>> {
        self.members.write().map_err(|_| anyhow!("Member storage lock poisoned"))
    }
}

impl UserStorage for InMemoryConnection {
    fn store_user(&self, user: &DomainUser) -> Result<()> {
        let mut users = self.write_users()?;
        if users.iter().any(|u| u.id == user.id) {
            return Err(anyhow!("User ID {} already exists", user.id));
        }
        users.push(user.clone());
        Ok(())
    }

    fn find_user_by_email(&self, email: &str) -> Result<Option<DomainUser>> {
        Ok(self.read_users()?.iter().find(|u| u.email == email).cloned())
    }

    fn list_users(&self) -> Result<Vec<DomainUser>> {
        Ok(self.read_users()?.clone())
    }

    fn max_user_id(&self) -> Result<Option<u32>> {
        Ok(self.read_users()?.iter().map(|u| u.id).max())
    }
}

impl FamilyMemberStorage for InMemoryConnection {
    fn store_member(&self, member: &DomainFamilyMember) -> Result<()> {
        let mut members = self.write_members()?;
        if members.iter().any(|m| m.id == member.id) {
            return Err(anyhow!("Family member ID {} already exists", member.id));
        }
        members.push(member.clone());
        Ok(())
    }

    fn get_member(&self, member_id: u32) -> Result<Option<DomainFamilyMember>> {
        Ok(self.read_members()?.iter().find(|m| m.id == member_id).cloned())
    }

    fn list_members_for_owner(&self, owner_user_id: u32) -> Result<Vec<DomainFamilyMember>> {
        Ok(self
            .read_members()?
            .iter()
            .filter(|m| m.is_owned_by(owner_user_id))
            .cloned()
            .collect())
    }

    fn count_members(&self) -> Result<usize> {
        Ok(self.read_members()?.len())
    }

    fn max_member_id(&self) -> Result<Option<u32>> {
        Ok(self.read_members()?.iter().map(|m| m.id).max())
    }
}
