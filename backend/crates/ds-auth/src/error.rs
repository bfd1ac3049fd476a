use ds_store::StoreError;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Malformed credentials: {message} {location}")]
    MalformedCredentials {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid username or password {location}")]
    Unauthorized { location: ErrorLocation },

    #[error("Credential lookup failed: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
