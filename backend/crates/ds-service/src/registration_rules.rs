pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 1;
pub const DEFAULT_MAX_USERNAME_LENGTH: usize = 64;

/// Field limits applied when a new account is registered
#[derive(Debug, Clone, Copy)]
pub struct RegistrationRules {
    /// Minimum password length in characters (never below 1)
    pub min_password_length: usize,
    pub max_username_length: usize,
}

impl Default for RegistrationRules {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_username_length: DEFAULT_MAX_USERNAME_LENGTH,
        }
    }
}
