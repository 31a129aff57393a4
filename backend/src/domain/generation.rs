//! Generation grouping for the family tree view.

use std::collections::BTreeMap;

use super::models::family_member::FamilyMember;

/// Group members by generation.
///
/// Keys come out in ascending order and each group keeps the order in which
/// its members appear in `members`. An empty input yields an empty map.
pub fn group_by_generation(members: &[FamilyMember]) -> BTreeMap<u32, Vec<&FamilyMember>> {
    let mut generations: BTreeMap<u32, Vec<&FamilyMember>> = BTreeMap::new();
    for member in members {
        generations.entry(member.generation).or_default().push(member);
    }
    generations
}

/// Display title for a generation, offset by one ("Generation 1" for 0)
pub fn generation_title(generation: u32) -> String {
    format!("Generation {}", u64::from(generation) + 1)
}
