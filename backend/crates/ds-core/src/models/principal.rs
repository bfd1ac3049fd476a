use crate::UserRole;

/// Authenticated identity derived from request credentials.
///
/// The role is captured at authentication time; a promotion applied later
/// is visible from the next request on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub uid: u64,
    pub username: String,
    pub role: UserRole,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
