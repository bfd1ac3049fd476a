use crate::error::Result as ServerErrorResult;

use ds_config::Config;
use ds_service::{AdminSeed, RegistrationRules, UserService};
use ds_store::CredentialStore;

use log::error;

/// Shared state handed to every handler.
///
/// The user service owns the credential store; clones share it.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
}

impl AppState {
    pub fn new(users: UserService) -> Self {
        Self { users }
    }

    /// Build a fresh in-memory directory from configuration, seeding the
    /// bootstrap admin when `auth.admin_password` is set.
    pub fn from_config(config: &Config) -> ServerErrorResult<Self> {
        let rules = RegistrationRules {
            min_password_length: config.validation.min_password_length,
            max_username_length: config.validation.max_username_length,
        };
        let users = UserService::new(CredentialStore::new(), rules);

        match config.auth.admin_password {
            Some(ref password) => {
                users.bootstrap_admin(AdminSeed {
                    username: config.auth.admin_username.clone(),
                    name: config.auth.admin_name.clone(),
                    password: password.as_str().into(),
                })?;
            }
            None => error!(
                "No admin password configured (auth.admin_password or DS_AUTH_ADMIN_PASSWORD); \
                 no user can be promoted. See config.example.toml"
            ),
        }

        Ok(Self::new(users))
    }
}
