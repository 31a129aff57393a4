//! backend/src/domain/models/user.rs

use serde::{Deserialize, Serialize};

/// Domain model for a registered account.
/// Credentials are mock-only and kept in plaintext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub password: String,
    pub name: String,
}

impl User {
    /// Exact, case-sensitive credential comparison
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_credentials_is_exact() {
        let user = User {
            id: 1,
            email: "demo@family.com".to_string(),
            password: "demo123".to_string(),
            name: "Demo User".to_string(),
        };

        assert!(user.matches_credentials("demo@family.com", "demo123"));
        assert!(!user.matches_credentials("Demo@family.com", "demo123"));
        assert!(!user.matches_credentials("demo@family.com", "DEMO123"));
    }
}
