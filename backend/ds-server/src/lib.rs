pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::authenticated::Authenticated,
    users::{
        get_user_query::GetUserQuery,
        promote_response::PromoteResponse,
        promote_user_query::PromoteUserQuery,
        register_user_request::RegisterUserRequest,
        user_response::UserResponse,
        users::{get_user, promote_user, register_user},
    },
};
pub use app_state::AppState;
pub use error::{Result, ServerError};

pub use crate::routes::build_router;
