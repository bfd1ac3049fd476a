use ds_core::{UserEntity, UserRole};

use chrono::{DateTime, Utc};

/// Outward projection of an account. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserView {
    pub uid: u64,
    pub username: String,
    pub name: String,
    pub birthdate: DateTime<Utc>,
    pub role: UserRole,
}

impl From<UserEntity> for UserView {
    fn from(entity: UserEntity) -> Self {
        Self {
            uid: entity.uid,
            username: entity.info.username,
            name: entity.info.name,
            birthdate: entity.info.birthdate,
            role: entity.info.role,
        }
    }
}
