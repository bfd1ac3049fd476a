use ds_core::Password;

use chrono::{DateTime, Utc};

/// Registration input, already decoded at the HTTP boundary
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub username: String,
    pub name: String,
    pub birthdate: DateTime<Utc>,
    pub password: Password,
}
