//! User registration, lookup and promotion.
//!
//! Composes the credential store, the auth gate and the access policy.
//! Handlers receive the service through shared state; nothing here is
//! global.

use crate::{
    AdminSeed, RegisterUser, RegistrationRules, Result as ServiceErrorResult, ServiceError,
    UserQuery, UserView,
};

use ds_auth::{AccessPolicy, Action, AuthGate};
use ds_core::{Password, Principal, UserInfo, UserRole};
use ds_store::CredentialStore;

use chrono::Utc;
use log::{debug, info, warn};

/// Basic credentials allow exactly one ':' between username and password,
/// so neither part may contain it.
const CREDENTIAL_SEPARATOR: char = ':';

#[derive(Debug, Clone)]
pub struct UserService {
    store: CredentialStore,
    gate: AuthGate,
    policy: AccessPolicy,
    rules: RegistrationRules,
}

impl UserService {
    pub fn new(store: CredentialStore, rules: RegistrationRules) -> Self {
        Self {
            gate: AuthGate::new(store.clone()),
            store,
            policy: AccessPolicy::new(),
            rules,
        }
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    pub fn user_count(&self) -> ServiceErrorResult<usize> {
        Ok(self.store.len()?)
    }

    /// Register a regular account. New accounts always start as `USER`.
    #[track_caller]
    pub fn register(&self, request: RegisterUser) -> ServiceErrorResult<UserView> {
        self.validate_username(&request.username)?;
        self.validate_password(&request.password)?;

        let info = UserInfo::new(
            request.username,
            request.name,
            request.birthdate,
            request.password,
        );
        let entity = self.store.register(info)?;

        info!("Registered user '{}' (uid {})", entity.username(), entity.uid);

        Ok(entity.into())
    }

    /// Create the initial administrator account.
    ///
    /// Goes through the same validation as `register`, then stores the
    /// account with the `ADMIN` role directly.
    #[track_caller]
    pub fn bootstrap_admin(&self, seed: AdminSeed) -> ServiceErrorResult<UserView> {
        self.validate_username(&seed.username)?;
        self.validate_password(&seed.password)?;

        let info = UserInfo::new(seed.username, seed.name, Utc::now(), seed.password)
            .with_role(UserRole::Admin);
        let entity = self.store.register(info)?;

        info!(
            "Bootstrapped admin '{}' (uid {})",
            entity.username(),
            entity.uid
        );

        Ok(entity.into())
    }

    /// Resolve a raw `Authorization` header value to a principal.
    /// `None` means the request carried no header at all.
    #[track_caller]
    pub fn authenticate(&self, header: Option<&str>) -> ServiceErrorResult<Principal> {
        let principal = self.gate.authenticate(header)?;
        debug!(
            "Authenticated '{}' (uid {}, {})",
            principal.username, principal.uid, principal.role
        );
        Ok(principal)
    }

    /// Look up one account on behalf of `principal`.
    ///
    /// A missing account is reported before the policy check, so a
    /// regular user can learn whether an id exists but not read it.
    #[track_caller]
    pub fn get(&self, principal: &Principal, query: UserQuery) -> ServiceErrorResult<UserView> {
        let entity = match &query {
            UserQuery::ById(uid) => self.store.get_by_id(*uid)?,
            UserQuery::ByUsername(username) => self.store.get_by_username(username)?,
        }
        .ok_or_else(|| ServiceError::not_found(format!("User with {} not found", query)))?;

        let action = Action::ReadUser {
            target_uid: entity.uid,
        };
        self.check(principal, action)?;

        Ok(entity.into())
    }

    /// Grant `ADMIN` to the account with `uid`. Idempotent.
    #[track_caller]
    pub fn promote(&self, principal: &Principal, uid: u64) -> ServiceErrorResult<()> {
        if self.store.get_by_id(uid)?.is_none() {
            return Err(ServiceError::not_found(format!("User {} not found", uid)));
        }

        self.check(principal, Action::PromoteUser { target_uid: uid })?;

        self.store.promote(uid)?;
        info!("User {} promoted to {} by '{}'", uid, UserRole::Admin, principal.username);

        Ok(())
    }

    #[track_caller]
    fn check(&self, principal: &Principal, action: Action) -> ServiceErrorResult<()> {
        if self.policy.authorize(principal, action).is_allowed() {
            return Ok(());
        }

        let scope = if action.target_uid() == principal.uid {
            "own account"
        } else {
            "another account"
        };
        warn!(
            "Denied '{}' ({}) attempting to {} ({})",
            principal.username, principal.role, action, scope
        );
        Err(ServiceError::forbidden(format!("Not permitted to {}", action)))
    }

    #[track_caller]
    fn validate_username(&self, username: &str) -> ServiceErrorResult<()> {
        if username.is_empty() {
            return Err(ServiceError::invalid_input(
                "username must not be empty",
                Some("username"),
            ));
        }

        if username.contains(CREDENTIAL_SEPARATOR) {
            return Err(ServiceError::invalid_input(
                "username must not contain ':'",
                Some("username"),
            ));
        }

        if username.chars().count() > self.rules.max_username_length {
            return Err(ServiceError::invalid_input(
                format!(
                    "username must be at most {} characters",
                    self.rules.max_username_length
                ),
                Some("username"),
            ));
        }

        Ok(())
    }

    #[track_caller]
    fn validate_password(&self, password: &Password) -> ServiceErrorResult<()> {
        if password.is_empty() {
            return Err(ServiceError::invalid_input(
                "password must not be empty",
                Some("password"),
            ));
        }

        if password.expose().contains(CREDENTIAL_SEPARATOR) {
            return Err(ServiceError::invalid_input(
                "password must not contain ':'",
                Some("password"),
            ));
        }

        if password.char_count() < self.rules.min_password_length {
            return Err(ServiceError::invalid_input(
                format!(
                    "password must be at least {} characters",
                    self.rules.min_password_length
                ),
                Some("password"),
            ));
        }

        Ok(())
    }
}
