//! backend/src/io/rest/mappers/member_mapper.rs

use crate::domain::commands::member::AddMemberCommand;
use crate::domain::models::family_member::FamilyMember as DomainFamilyMember;
use shared::{AddMemberRequest, FamilyMember as SharedFamilyMember, MemberListResponse};

/// Mapper between shared family member DTOs and domain models.
pub struct FamilyMemberMapper;

impl FamilyMemberMapper {
    pub fn to_dto(domain: DomainFamilyMember) -> SharedFamilyMember {
        SharedFamilyMember {
            id: domain.id,
            owner_user_id: domain.owner_user_id,
            full_name: domain.full_name,
            date_of_birth: domain.date_of_birth.format("%Y-%m-%d").to_string(),
            description: domain.description,
            profile_photo_url: domain.profile_photo_url,
            photos: domain.photos,
            parent_id: domain.parent_id,
            spouse_id: domain.spouse_id,
            generation: domain.generation,
        }
    }

    pub fn to_member_list_dto(members: Vec<DomainFamilyMember>) -> MemberListResponse {
        MemberListResponse {
            members: members.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_add_command(request: AddMemberRequest) -> AddMemberCommand {
        AddMemberCommand {
            full_name: request.full_name,
            date_of_birth: request.date_of_birth,
            description: request.description,
            profile_photo_url: request.profile_photo_url,
            photos: request.photos,
            parent_id: request.parent_id,
            spouse_id: request.spouse_id,
            generation: request.generation,
        }
    }
}
