use anyhow::Context;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::member::AddMemberCommand;
use crate::domain::models::family_member::FamilyMember;
use crate::domain::models::session::Session;
use crate::error::{FamilyTreeError, Result};
use crate::storage::traits::FamilyMemberStorage;

/// Resolved weak references of a member. Either side is `None` when the
/// member has no link or the linked ID does not resolve for the same owner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberLinks {
    pub parent: Option<FamilyMember>,
    pub spouse: Option<FamilyMember>,
}

/// Store for family members, scoped per owning user
#[derive(Clone)]
pub struct FamilyMemberStore {
    db: Arc<dyn FamilyMemberStorage>,
}

impl FamilyMemberStore {
    pub fn new(db: Arc<dyn FamilyMemberStorage>) -> Self {
        Self { db }
    }

    /// All members owned by `user_id`, in insertion order. Empty when the
    /// user owns none.
    pub fn load_for_user(&self, user_id: u32) -> Result<Vec<FamilyMember>> {
        let members = self.db.list_members_for_owner(user_id)?;
        info!("Loaded {} family members for user {}", members.len(), user_id);
        Ok(members)
    }

    /// Add a member to the session user's tree.
    ///
    /// The new member is appended to the global collection and to the
    /// session's loaded list. Nothing is written when validation fails.
    pub fn add(&self, session: &mut Session, command: AddMemberCommand) -> Result<FamilyMember> {
        info!(
            "Adding family member: name={}, date_of_birth={}, generation={}",
            command.full_name, command.date_of_birth, command.generation
        );

        let date_of_birth = Self::validate_add_command(&command)?;
        let id = self.next_member_id()?;

        let member = FamilyMember {
            id,
            owner_user_id: session.user_id(),
            full_name: command.full_name.trim().to_string(),
            date_of_birth,
            description: command.description.unwrap_or_default(),
            profile_photo_url: command.profile_photo_url.unwrap_or_default(),
            photos: command.photos,
            parent_id: command.parent_id,
            spouse_id: command.spouse_id,
            generation: command.generation,
        };

        self.db
            .store_member(&member)
            .context("Failed to store family member")?;
        session.members.push(member.clone());

        info!("Added family member: {} with ID: {}", member.full_name, member.id);
        Ok(member)
    }

    /// Explicit lookup for a weak reference. Members owned by someone else
    /// are treated as absent.
    pub fn find_member(&self, owner_user_id: u32, member_id: u32) -> Result<Option<FamilyMember>> {
        let member = self
            .db
            .get_member(member_id)?
            .filter(|m| m.is_owned_by(owner_user_id));
        Ok(member)
    }

    /// Like [`find_member`](Self::find_member) but fails with `NotFound`
    pub fn get_member(&self, owner_user_id: u32, member_id: u32) -> Result<FamilyMember> {
        self.find_member(owner_user_id, member_id)?.ok_or_else(|| {
            warn!("Family member {} not found for user {}", member_id, owner_user_id);
            FamilyTreeError::NotFound(member_id)
        })
    }

    /// Resolve the parent and spouse references of `member`
    pub fn resolve_links(&self, member: &FamilyMember) -> Result<MemberLinks> {
        let lookup = |id: Option<u32>| -> Result<Option<FamilyMember>> {
            match id {
                Some(id) => self.find_member(member.owner_user_id, id),
                None => Ok(None),
            }
        };

        Ok(MemberLinks {
            parent: lookup(member.parent_id)?,
            spouse: lookup(member.spouse_id)?,
        })
    }

    /// One past the highest ID in the whole collection
    fn next_member_id(&self) -> Result<u32> {
        Ok(self.db.max_member_id()?.map_or(1, |max| max + 1))
    }

    fn validate_add_command(command: &AddMemberCommand) -> Result<NaiveDate> {
        if command.full_name.trim().is_empty() {
            return Err(FamilyTreeError::MissingField("full_name"));
        }
        let date_of_birth = command.date_of_birth.trim();
        if date_of_birth.is_empty() {
            return Err(FamilyTreeError::MissingField("date_of_birth"));
        }

        NaiveDate::parse_from_str(date_of_birth, "%Y-%m-%d")
            .map_err(|_| FamilyTreeError::InvalidDate(date_of_birth.to_string()))
    }
}
