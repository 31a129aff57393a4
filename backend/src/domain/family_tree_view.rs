//! # Family Tree View
//!
//! Turns the loaded members into the display structures shown by a
//! frontend: one titled section per generation holding member cards, and a
//! detail view for a single member. Holds no state beyond its rendering
//! settings.

use chrono::NaiveDate;
use shared::{FamilyTreeResponse, GenerationSection, MemberCard, MemberDetailResponse, MemberLink};

use crate::domain::age::{age_label, AgePolicy};
use crate::domain::avatar::AvatarConfig;
use crate::domain::generation::{generation_title, group_by_generation};
use crate::domain::member_store::MemberLinks;
use crate::domain::models::family_member::FamilyMember;

#[derive(Debug, Clone, Default)]
pub struct FamilyTreeViewService {
    age_policy: AgePolicy,
    avatar: AvatarConfig,
}

impl FamilyTreeViewService {
    pub fn new(age_policy: AgePolicy, avatar: AvatarConfig) -> Self {
        Self { age_policy, avatar }
    }

    /// Render every generation in ascending order
    pub fn render_tree(&self, members: &[FamilyMember], today: NaiveDate) -> FamilyTreeResponse {
        let generations = group_by_generation(members)
            .into_iter()
            .map(|(generation, members)| GenerationSection {
                generation,
                title: generation_title(generation),
                members: members
                    .into_iter()
                    .map(|member| self.render_card(member, today))
                    .collect(),
            })
            .collect();

        FamilyTreeResponse {
            generations,
            is_empty: members.is_empty(),
        }
    }

    pub fn render_card(&self, member: &FamilyMember, today: NaiveDate) -> MemberCard {
        let age = self.age_policy.age(member.date_of_birth, today);

        MemberCard {
            id: member.id,
            full_name: member.full_name.clone(),
            photo_url: self.avatar.photo_url(member, self.avatar.card_size),
            age,
            age_label: age_label(age),
            description: member.description.clone(),
        }
    }

    pub fn render_detail(
        &self,
        member: &FamilyMember,
        links: &MemberLinks,
        today: NaiveDate,
    ) -> MemberDetailResponse {
        let age = self.age_policy.age(member.date_of_birth, today);
        let age_label = age_label(age);

        let formatted_dob = member.date_of_birth.format("%B %-d, %Y").to_string();
        let date_of_birth_label = match &age_label {
            Some(label) => format!("{} ({})", formatted_dob, label),
            None => formatted_dob,
        };

        let gallery = (!member.photos.is_empty()).then(|| member.photos.clone());

        MemberDetailResponse {
            id: member.id,
            full_name: member.full_name.clone(),
            photo_url: self.avatar.photo_url(member, self.avatar.detail_size),
            date_of_birth: member.date_of_birth.format("%Y-%m-%d").to_string(),
            date_of_birth_label,
            age,
            age_label,
            description: member.description.clone(),
            generation: member.generation,
            gallery,
            parent: links.parent.as_ref().map(to_link),
            spouse: links.spouse.as_ref().map(to_link),
        }
    }
}

fn to_link(member: &FamilyMember) -> MemberLink {
    MemberLink {
        id: member.id,
        full_name: member.full_name.clone(),
    }
}
