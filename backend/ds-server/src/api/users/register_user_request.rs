use crate::{ApiError, ApiResult};

use ds_service::RegisterUser;

use std::panic::Location;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use error_location::ErrorLocation;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    /// Unique login name (required)
    pub username: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// ISO-8601 date or date-time; naive values are taken as UTC (required)
    pub birthdate: String,

    /// Plaintext password; absent is treated as empty and rejected later
    #[serde(default)]
    pub password: String,
}

impl RegisterUserRequest {
    #[track_caller]
    pub fn into_register_user(self) -> ApiResult<RegisterUser> {
        let birthdate = parse_birthdate(&self.birthdate)?;

        Ok(RegisterUser {
            username: self.username,
            name: self.name,
            birthdate,
            password: self.password.into(),
        })
    }
}

/// Accepts `2000-05-17T12:00:00Z`, `2000-05-17T12:00:00.123456` and
/// `2000-05-17`.
#[track_caller]
fn parse_birthdate(raw: &str) -> ApiResult<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }

    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }

    Err(ApiError::Validation {
        message: format!("Invalid birthdate '{}': expected an ISO-8601 date", raw),
        field: Some("birthdate".to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}
