//! User profile data supplied at registration.

use crate::{Password, UserRole};

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    /// Unique login name, immutable after creation
    pub username: String,
    pub name: String,
    pub birthdate: DateTime<Utc>,
    pub role: UserRole,
    pub password: Password,
}

impl UserInfo {
    /// Create profile data for a regular (non-admin) account
    pub fn new(
        username: impl Into<String>,
        name: impl Into<String>,
        birthdate: DateTime<Utc>,
        password: impl Into<Password>,
    ) -> Self {
        Self {
            username: username.into(),
            name: name.into(),
            birthdate,
            role: UserRole::User,
            password: password.into(),
        }
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }
}
