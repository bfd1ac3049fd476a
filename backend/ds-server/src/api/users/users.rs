//! User REST API handlers
//!
//! Registration is open; lookup and promotion require Basic credentials.

use crate::{
    ApiResult, AppState, Authenticated, GetUserQuery, PromoteResponse, PromoteUserQuery,
    RegisterUserRequest, UserResponse,
};

use ds_core::UserRole;

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};

// =============================================================================
// Handlers
// =============================================================================

/// POST /user-register
///
/// Register a new account with role USER
pub async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> ApiResult<Json<UserResponse>> {
    let Json(request) = payload?;
    log::debug!("Register request for username '{}'", request.username);

    let register = request.into_register_user()?;
    let view = state.users.register(register)?;

    Ok(Json(view.into()))
}

/// POST /user-get?id=N | ?username=X
///
/// Read one account. Admins may read any account, users only their own.
pub async fn get_user(
    State(state): State<AppState>,
    Authenticated(principal): Authenticated,
    query: Result<Query<GetUserQuery>, QueryRejection>,
) -> ApiResult<Json<UserResponse>> {
    let Query(query) = query?;
    let query = query.into_user_query()?;
    log::debug!("'{}' reading user {}", principal.username, query);

    let view = state.users.get(&principal, query)?;

    Ok(Json(view.into()))
}

/// POST /user-promote?id=N
///
/// Grant ADMIN to an account. Admin only.
pub async fn promote_user(
    State(state): State<AppState>,
    Authenticated(principal): Authenticated,
    query: Result<Query<PromoteUserQuery>, QueryRejection>,
) -> ApiResult<Json<PromoteResponse>> {
    let Query(query) = query?;
    let uid = query.uid()?;
    log::debug!("'{}' promoting user {}", principal.username, uid);

    state.users.promote(&principal, uid)?;

    Ok(Json(PromoteResponse {
        uid,
        role: UserRole::Admin,
    }))
}
