pub mod password;
pub mod principal;
pub mod user_entity;
pub mod user_info;
pub mod user_role;
