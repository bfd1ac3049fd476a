//! Axum extractors for REST API authentication

use crate::{ApiError, AppState};

use ds_core::Principal;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;

/// Resolves the `Authorization: Basic ...` header to a principal
///
/// Rejects with 401 when the header is absent, not ASCII, malformed,
/// or carries credentials that do not match a registered account.
pub struct Authenticated(pub Principal);

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .map(|value| value.to_str())
                .transpose()
                .map_err(|_| ApiError::Unauthorized {
                    message: "Authorization header is not valid ASCII".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let principal = state.users.authenticate(header)?;
            log::debug!(
                "Request authenticated as '{}' (uid {})",
                principal.username,
                principal.uid
            );

            Ok(Authenticated(principal))
        }
    }
}
