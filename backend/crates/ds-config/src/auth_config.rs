use crate::{ConfigError, ConfigErrorResult, DEFAULT_ADMIN_NAME, DEFAULT_ADMIN_USERNAME};

use serde::Deserialize;

/// Initial administrator account.
///
/// The admin is only created when `admin_password` is set, either in
/// config.toml or through `DS_AUTH_ADMIN_PASSWORD`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub admin_username: String,
    pub admin_name: String,
    pub admin_password: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_username: String::from(DEFAULT_ADMIN_USERNAME),
            admin_name: String::from(DEFAULT_ADMIN_NAME),
            admin_password: None,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(ref password) = self.admin_password else {
            return Ok(());
        };

        if password.is_empty() {
            return Err(ConfigError::auth("auth.admin_password cannot be empty"));
        }

        if self.admin_username.is_empty() {
            return Err(ConfigError::auth(
                "auth.admin_username cannot be empty when auth.admin_password is set",
            ));
        }

        if self.admin_username.contains(':') || password.contains(':') {
            return Err(ConfigError::auth(
                "auth.admin_username and auth.admin_password cannot contain ':'",
            ));
        }

        Ok(())
    }

    pub fn admin_enabled(&self) -> bool {
        self.admin_password.is_some()
    }
}
