mod api;

use crate::AppState;

use ds_auth::BasicCredentials;
use ds_service::{AdminSeed, RegistrationRules, UserService};
use ds_store::CredentialStore;

pub(crate) const ADMIN_PASSWORD: &str = "superSecretAdminPassword123";

/// State with a fresh store holding only the bootstrap admin (uid 1)
pub(crate) fn create_test_state() -> AppState {
    let users = UserService::new(CredentialStore::new(), RegistrationRules::default());
    users
        .bootstrap_admin(AdminSeed {
            username: "admin".to_string(),
            name: "admin".to_string(),
            password: ADMIN_PASSWORD.into(),
        })
        .expect("Failed to seed admin");

    AppState::new(users)
}

pub(crate) fn basic_header(username: &str, password: &str) -> String {
    BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    }
    .to_header_value()
}
