mod password;
mod user_entity;
mod user_role;
