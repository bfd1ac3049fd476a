//! HTTP Basic credential parsing.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use base64::prelude::*;
use error_location::ErrorLocation;

const SCHEME: &str = "Basic";
const SEPARATOR: char = ':';

/// Username/password pair decoded from `Authorization: Basic <base64>`.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    /// Decode a raw `Authorization` header value.
    ///
    /// The scheme name is matched case-insensitively. The decoded payload
    /// must contain exactly one `:`; anything else is malformed.
    #[track_caller]
    pub fn parse(header: &str) -> AuthErrorResult<Self> {
        let (scheme, encoded) = header.trim().split_once(' ').ok_or_else(|| {
            AuthError::MalformedCredentials {
                message: "expected '<scheme> <credentials>'".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        if !scheme.eq_ignore_ascii_case(SCHEME) {
            return Err(AuthError::MalformedCredentials {
                message: format!("unsupported authorization scheme '{scheme}'"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let decoded = BASE64_STANDARD
            .decode(encoded.trim().as_bytes())
            .map_err(|e| AuthError::MalformedCredentials {
                message: format!("invalid base64 encoding: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let decoded = String::from_utf8(decoded).map_err(|e| AuthError::MalformedCredentials {
            message: format!("invalid UTF-8 in credentials: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Self::split(&decoded)
    }

    #[track_caller]
    fn split(decoded: &str) -> AuthErrorResult<Self> {
        match decoded.split_once(SEPARATOR) {
            Some((username, password)) if !password.contains(SEPARATOR) => Ok(Self {
                username: username.to_string(),
                password: password.to_string(),
            }),
            _ => Err(AuthError::MalformedCredentials {
                message: "credentials must be in format 'username:password'".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Encode into a header value. Used by clients and tests.
    pub fn to_header_value(&self) -> String {
        let raw = format!("{}{}{}", self.username, SEPARATOR, self.password);
        format!("{} {}", SCHEME, BASE64_STANDARD.encode(raw))
    }
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"**********")
            .finish()
    }
}
