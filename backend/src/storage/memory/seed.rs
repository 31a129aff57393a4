//! Demo account and family used when `seed_demo_data` is enabled.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::domain::models::family_member::FamilyMember;
use crate::domain::models::user::User;

pub const DEMO_EMAIL: &str = "demo@family.com";
pub const DEMO_PASSWORD: &str = "demo123";

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow!("Invalid seed date {:04}-{:02}-{:02}", year, month, day))
}

pub fn demo_users() -> Vec<User> {
    vec![User {
        id: 1,
        email: DEMO_EMAIL.to_string(),
        password: DEMO_PASSWORD.to_string(),
        name: "Demo User".to_string(),
    }]
}

pub fn demo_members() -> Result<Vec<FamilyMember>> {
    Ok(vec![
        FamilyMember {
            id: 1,
            owner_user_id: 1,
            full_name: "John Smith".to_string(),
            date_of_birth: date(1950, 5, 15)?,
            description: "Loving father and grandfather. Worked as an engineer for 40 years and loved woodworking.".to_string(),
            profile_photo_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face".to_string(),
            photos: vec![
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=200&h=200&fit=crop".to_string(),
                "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=200&h=200&fit=crop".to_string(),
            ],
            parent_id: None,
            spouse_id: Some(2),
            generation: 0,
        },
        FamilyMember {
            id: 2,
            owner_user_id: 1,
            full_name: "Mary Smith".to_string(),
            date_of_birth: date(1952, 8, 22)?,
            description: "Devoted mother and teacher. Spent 35 years educating children and volunteering at the local library.".to_string(),
            profile_photo_url: "https://images.unsplash.com/photo-1494790108755-2616c3584f15?w=150&h=150&fit=crop&crop=face".to_string(),
            photos: vec![
                "https://images.unsplash.com/photo-1494790108755-2616c3584f15?w=200&h=200&fit=crop".to_string(),
            ],
            parent_id: None,
            spouse_id: Some(1),
            generation: 0,
        },
        FamilyMember {
            id: 3,
            owner_user_id: 1,
            full_name: "David Smith".to_string(),
            date_of_birth: date(1975, 3, 10)?,
            description: "Software developer and father of two. Loves hiking and photography.".to_string(),
            profile_photo_url: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=150&h=150&fit=crop&crop=face".to_string(),
            photos: Vec::new(),
            parent_id: Some(1),
            spouse_id: None,
            generation: 1,
        },
    ])
}
