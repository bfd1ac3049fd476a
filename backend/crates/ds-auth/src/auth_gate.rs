use crate::{AuthError, BasicCredentials, Result as AuthErrorResult};

use ds_core::Principal;
use ds_store::CredentialStore;

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;

/// Resolves Basic credentials against the credential store.
#[derive(Debug, Clone)]
pub struct AuthGate {
    store: CredentialStore,
}

impl AuthGate {
    pub fn new(store: CredentialStore) -> Self {
        Self { store }
    }

    /// Authenticate a raw `Authorization` header value, if one was sent.
    ///
    /// Unknown usernames and wrong passwords produce the same
    /// `Unauthorized` error. Read-only.
    #[track_caller]
    pub fn authenticate(&self, header: Option<&str>) -> AuthErrorResult<Principal> {
        let header = header.ok_or_else(|| AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        })?;
        let credentials = BasicCredentials::parse(header)?;

        let entity = self
            .store
            .get_by_username(&credentials.username)
            .map_err(|source| AuthError::Store {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        match entity {
            Some(entity) if entity.info.password.matches(&credentials.password) => {
                Ok(entity.principal())
            }
            Some(_) => {
                debug!("Password mismatch for '{}'", credentials.username);
                Err(AuthError::Unauthorized {
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            None => {
                debug!("Unknown username '{}'", credentials.username);
                Err(AuthError::Unauthorized {
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }
}
