use crate::{ApiError, ApiResult};

use ds_service::UserQuery;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

/// Query string of `POST /user-get`
///
/// Both fields arrive as strings so a bad `id` is reported against the
/// field instead of as a generic query rejection.
#[derive(Debug, Default, Deserialize)]
pub struct GetUserQuery {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub username: Option<String>,
}

impl GetUserQuery {
    #[track_caller]
    pub fn into_user_query(self) -> ApiResult<UserQuery> {
        let id = self.id.as_deref().map(parse_uid).transpose()?;
        Ok(UserQuery::from_parts(id, self.username)?)
    }
}

/// Parse a uid query parameter, reporting failures against `id`
#[track_caller]
pub(crate) fn parse_uid(raw: &str) -> ApiResult<u64> {
    raw.trim().parse::<u64>().map_err(|e| ApiError::Validation {
        message: format!("Invalid id '{}': {}", raw, e),
        field: Some("id".to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}
