
use crate::{AdminSeed, RegisterUser, RegistrationRules, UserService};

use ds_auth::BasicCredentials;
use ds_store::CredentialStore;

use chrono::{TimeZone, Utc};

pub(crate) const ADMIN_PASSWORD: &str = "superSecretAdminPassword123";

pub(crate) fn service() -> UserService {
    UserService::new(CredentialStore::new(), RegistrationRules::default())
}

pub(crate) fn service_with_admin() -> UserService {
    let service = service();
    service
        .bootstrap_admin(AdminSeed {
            username: "admin".to_string(),
            name: "admin".to_string(),
            password: ADMIN_PASSWORD.into(),
        })
        .unwrap();
    service
}

pub(crate) fn register_request(username: &str, password: &str) -> RegisterUser {
    RegisterUser {
        username: username.to_string(),
        name: username.to_string(),
        birthdate: Utc.with_ymd_and_hms(2000, 5, 17, 12, 0, 0).unwrap(),
        password: password.into(),
    }
}

pub(crate) fn header(username: &str, password: &str) -> String {
    BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    }
    .to_header_value()
}
