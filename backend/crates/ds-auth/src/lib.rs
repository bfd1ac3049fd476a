pub mod access_policy;
pub mod auth_gate;
pub mod basic_credentials;
pub mod error;

pub use access_policy::{AccessPolicy, Action, Decision};
pub use auth_gate::AuthGate;
pub use basic_credentials::BasicCredentials;
pub use error::{AuthError, Result};
