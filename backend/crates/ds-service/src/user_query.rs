use crate::{Result as ServiceErrorResult, ServiceError};

/// Selects exactly one account, either by uid or by username
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserQuery {
    ById(u64),
    ByUsername(String),
}

impl UserQuery {
    /// Build a query from optional identifying fields.
    ///
    /// Exactly one must be supplied. A present but empty username still
    /// counts as supplied, so `id=1&username=` is rejected as "both".
    #[track_caller]
    pub fn from_parts(id: Option<u64>, username: Option<String>) -> ServiceErrorResult<Self> {
        match (id, username) {
            (Some(uid), None) => Ok(Self::ById(uid)),
            (None, Some(username)) if username.is_empty() => Err(ServiceError::invalid_input(
                "username must not be empty",
                Some("username"),
            )),
            (None, Some(username)) => Ok(Self::ByUsername(username)),
            (Some(_), Some(_)) => Err(ServiceError::invalid_input(
                "exactly one of 'id' or 'username' must be given, got both",
                None,
            )),
            (None, None) => Err(ServiceError::invalid_input(
                "exactly one of 'id' or 'username' must be given, got neither",
                None,
            )),
        }
    }
}

impl std::fmt::Display for UserQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ById(uid) => write!(f, "id={uid}"),
            Self::ByUsername(username) => write!(f, "username={username}"),
        }
    }
}
