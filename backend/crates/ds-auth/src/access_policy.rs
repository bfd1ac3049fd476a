use ds_core::Principal;

/// Operation a principal attempts on a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ReadUser { target_uid: u64 },
    PromoteUser { target_uid: u64 },
}

impl Action {
    pub fn target_uid(&self) -> u64 {
        match self {
            Self::ReadUser { target_uid } | Self::PromoteUser { target_uid } => *target_uid,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadUser { target_uid } => write!(f, "read user {target_uid}"),
            Self::PromoteUser { target_uid } => write!(f, "promote user {target_uid}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Role-based rules for user operations.
///
/// Admins may do anything; regular users may only read their own account.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    pub fn new() -> Self {
        Self
    }

    pub fn authorize(&self, principal: &Principal, action: Action) -> Decision {
        let allowed = match action {
            Action::ReadUser { target_uid } => principal.is_admin() || principal.uid == target_uid,
            Action::PromoteUser { .. } => principal.is_admin(),
        };

        if allowed {
            Decision::Allow
        } else {
            Decision::Deny
        }
    }
}
