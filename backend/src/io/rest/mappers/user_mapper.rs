//! backend/src/io/rest/mappers/user_mapper.rs

use crate::domain::commands::session::{LoginCommand, RegisterCommand};
use crate::domain::models::user::User as DomainUser;
use shared::{LoginRequest, RegisterRequest, User as SharedUser};

/// Mapper between shared user DTOs and domain models. The password is
/// dropped on the way out.
pub struct UserMapper;

impl UserMapper {
    pub fn to_dto(domain: DomainUser) -> SharedUser {
        SharedUser {
            id: domain.id,
            email: domain.email,
            name: domain.name,
        }
    }

    pub fn to_register_command(request: RegisterRequest) -> RegisterCommand {
        RegisterCommand {
            name: request.name,
            email: request.email,
            password: request.password,
        }
    }

    pub fn to_login_command(request: LoginRequest) -> LoginCommand {
        LoginCommand {
            email: request.email,
            password: request.password,
        }
    }
}
