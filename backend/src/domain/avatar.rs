//! Photo URL resolution, including the generated placeholder avatar used
//! when a member has no profile photo.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use super::models::family_member::FamilyMember;

/// Characters escaped when encoding a URI component. Matches the set left
/// untouched by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    pub base_url: String,
    /// Background colour as hex without '#'
    pub background: String,
    /// Foreground colour as hex without '#'
    pub color: String,
    /// Pixel size used on member cards
    pub card_size: u32,
    /// Pixel size used on the member detail view
    pub detail_size: u32,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ui-avatars.com/api/".to_string(),
            background: "6366f1".to_string(),
            color: "fff".to_string(),
            card_size: 120,
            detail_size: 300,
        }
    }
}

impl AvatarConfig {
    pub fn placeholder_url(&self, full_name: &str, size: u32) -> String {
        format!(
            "{}?name={}&size={}&background={}&color={}",
            self.base_url,
            utf8_percent_encode(full_name, URI_COMPONENT),
            size,
            self.background,
            self.color
        )
    }

    /// The member's profile photo, or a placeholder keyed by their name
    pub fn photo_url(&self, member: &FamilyMember, size: u32) -> String {
        if member.profile_photo_url.is_empty() {
            self.placeholder_url(&member.full_name, size)
        } else {
            member.profile_photo_url.clone()
        }
    }
}
