use ds_core::UserRole;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PromoteResponse {
    pub uid: u64,
    pub role: UserRole,
}
