use ds_auth::AuthError;
use ds_store::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Outcome of a rejected user operation. Every variant is deterministic;
/// none of them is worth retrying.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid input: {message} {location}")]
    InvalidInput {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Username already registered: {username} {location}")]
    DuplicateUsername {
        username: String,
        location: ErrorLocation,
    },

    #[error("Malformed credentials: {message} {location}")]
    MalformedCredentials {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ServiceError {
    #[track_caller]
    pub fn invalid_input<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        ServiceError::InvalidInput {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ServiceError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        ServiceError::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for ServiceError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateUsername { username, .. } => ServiceError::DuplicateUsername {
                username,
                location: ErrorLocation::from(Location::caller()),
            },
            StoreError::NotFound { uid, .. } => ServiceError::NotFound {
                message: format!("User {} not found", uid),
                location: ErrorLocation::from(Location::caller()),
            },
            StoreError::LockPoisoned { location } => {
                log::error!("Credential store lock poisoned {}", location);
                ServiceError::Internal {
                    message: "Credential store unavailable".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

impl From<AuthError> for ServiceError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MissingHeader { .. } => ServiceError::Unauthorized {
                message: "Missing authorization header".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::MalformedCredentials { message, .. } => {
                ServiceError::MalformedCredentials {
                    message,
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            AuthError::Unauthorized { .. } => ServiceError::Unauthorized {
                message: "Invalid username or password".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::Store { source, .. } => ServiceError::from(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
