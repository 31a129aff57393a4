// backend/src/domain/commands.rs

//! Domain-level command types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the public DTOs defined in
//! the `shared` crate to these internal types.

pub mod session {
    /// Input for creating a new account.
    #[derive(Debug, Clone)]
    pub struct RegisterCommand {
        pub name: String,
        pub email: String,
        pub password: String,
    }

    /// Input for signing in.
    #[derive(Debug, Clone)]
    pub struct LoginCommand {
        pub email: String,
        pub password: String,
    }
}

pub mod member {
    /// Input for adding a family member. Optional fields fall back to
    /// empty values when absent.
    #[derive(Debug, Clone, Default)]
    pub struct AddMemberCommand {
        pub full_name: String,
        pub date_of_birth: String,
        pub description: Option<String>,
        pub profile_photo_url: Option<String>,
        pub photos: Vec<String>,
        pub parent_id: Option<u32>,
        pub spouse_id: Option<u32>,
        pub generation: u32,
    }
}
