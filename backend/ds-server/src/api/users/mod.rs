pub mod get_user_query;
pub mod promote_response;
pub mod promote_user_query;
pub mod register_user_request;
pub mod user_response;
#[allow(clippy::module_inception)]
pub mod users;
