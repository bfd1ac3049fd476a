mod error;
mod extractors;
mod queries;
mod register_user_request;
