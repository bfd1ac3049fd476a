use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_USERNAME_LENGTH, DEFAULT_MIN_PASSWORD_LENGTH,
    MAX_MAX_USERNAME_LENGTH, MAX_MIN_PASSWORD_LENGTH, MIN_MAX_USERNAME_LENGTH,
    MIN_MIN_PASSWORD_LENGTH,
};

use serde::Deserialize;

/// Field limits applied to registration requests.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum password length in characters. Empty passwords are always rejected.
    pub min_password_length: usize,
    /// Maximum username length in characters
    pub max_username_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_username_length: DEFAULT_MAX_USERNAME_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_password_length < MIN_MIN_PASSWORD_LENGTH
            || self.min_password_length > MAX_MIN_PASSWORD_LENGTH
        {
            return Err(ConfigError::validation(format!(
                "validation.min_password_length must be {}-{}, got {}",
                MIN_MIN_PASSWORD_LENGTH, MAX_MIN_PASSWORD_LENGTH, self.min_password_length
            )));
        }

        if self.max_username_length < MIN_MAX_USERNAME_LENGTH
            || self.max_username_length > MAX_MAX_USERNAME_LENGTH
        {
            return Err(ConfigError::validation(format!(
                "validation.max_username_length must be {}-{}, got {}",
                MIN_MAX_USERNAME_LENGTH, MAX_MAX_USERNAME_LENGTH, self.max_username_length
            )));
        }

        Ok(())
    }
}
