pub mod family_member;
pub mod session;
pub mod user;
