pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::password::Password;
pub use models::principal::Principal;
pub use models::user_entity::UserEntity;
pub use models::user_info::UserInfo;
pub use models::user_role::UserRole;

#[cfg(test)]
mod tests;
