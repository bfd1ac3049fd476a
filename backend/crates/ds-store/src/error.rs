use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Username already registered: {username} {location}")]
    DuplicateUsername {
        username: String,
        location: ErrorLocation,
    },

    #[error("User not found: uid {uid} {location}")]
    NotFound { uid: u64, location: ErrorLocation },

    #[error("Credential store lock poisoned {location}")]
    LockPoisoned { location: ErrorLocation },
}

pub type Result<T> = std::result::Result<T, StoreError>;
