use ds_core::UserRole;
use ds_service::UserView;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Account view for JSON serialization
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub uid: u64,
    pub username: String,
    pub name: String,
    pub birthdate: DateTime<Utc>,
    pub role: UserRole,
}

impl From<UserView> for UserResponse {
    fn from(view: UserView) -> Self {
        Self {
            uid: view.uid,
            username: view.username,
            name: view.name,
            birthdate: view.birthdate,
            role: view.role,
        }
    }
}
