use crate::{Principal, UserInfo, UserRole};

/// A registered account: store-assigned uid plus the owned profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntity {
    pub uid: u64,
    pub info: UserInfo,
}

impl UserEntity {
    pub fn new(uid: u64, info: UserInfo) -> Self {
        Self { uid, info }
    }

    pub fn username(&self) -> &str {
        &self.info.username
    }

    pub fn role(&self) -> UserRole {
        self.info.role
    }

    /// Identity of this account as seen by the access policy
    pub fn principal(&self) -> Principal {
        Principal {
            uid: self.uid,
            username: self.info.username.clone(),
            role: self.info.role,
        }
    }
}
