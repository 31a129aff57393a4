pub mod member_mapper;
pub mod user_mapper;
