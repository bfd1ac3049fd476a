use crate::{ApiError, ApiResult, api::users::get_user_query::parse_uid};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

/// Query string of `POST /user-promote`
#[derive(Debug, Default, Deserialize)]
pub struct PromoteUserQuery {
    #[serde(default)]
    pub id: Option<String>,
}

impl PromoteUserQuery {
    #[track_caller]
    pub fn uid(&self) -> ApiResult<u64> {
        match self.id.as_deref() {
            Some(raw) if !raw.is_empty() => parse_uid(raw),
            _ => Err(ApiError::Validation {
                message: "Missing required query parameter 'id'".to_string(),
                field: Some("id".to_string()),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
