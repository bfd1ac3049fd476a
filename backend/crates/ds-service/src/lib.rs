pub mod admin_seed;
pub mod error;
pub mod register_user;
pub mod registration_rules;
pub mod user_query;
pub mod user_service;
pub mod user_view;

pub use admin_seed::AdminSeed;
pub use error::{Result, ServiceError};
pub use register_user::RegisterUser;
pub use registration_rules::RegistrationRules;
pub use user_query::UserQuery;
pub use user_service::UserService;
pub use user_view::UserView;

#[cfg(test)]
mod tests;
