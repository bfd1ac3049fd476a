use crate::ApiError;
use crate::api::error::WWW_AUTHENTICATE_BASIC;

use ds_service::ServiceError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::{StatusCode, header};
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "User with id=7 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User with id=7 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "password must not be empty".into(),
        field: Some("password".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "password");
}

#[tokio::test]
async fn test_unauthorized_returns_401_with_basic_challenge() {
    let error = ApiError::Unauthorized {
        message: "Invalid username or password".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        WWW_AUTHENTICATE_BASIC
    );

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_forbidden_returns_403_without_challenge() {
    let error = ApiError::Forbidden {
        message: "Not permitted to promote user 2".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_conflict_returns_409() {
    let error = ApiError::Conflict {
        message: "Username 'test' is already registered".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Credential store unavailable".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_invalid_input_converts_to_validation_keeping_field() {
    let error: ApiError =
        ServiceError::invalid_input("password must not be empty", Some("password")).into();

    match error {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("password")),
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn test_duplicate_username_converts_to_conflict() {
    let error: ApiError = ServiceError::DuplicateUsername {
        username: "test".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert_eq!(error.status(), StatusCode::CONFLICT);
}

#[test]
fn test_malformed_credentials_convert_to_unauthorized() {
    let error: ApiError = ServiceError::MalformedCredentials {
        message: "payload is not valid base64".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_service_statuses() {
    assert_eq!(
        ApiError::from(ServiceError::not_found("gone")).status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        ApiError::from(ServiceError::forbidden("no")).status(),
        StatusCode::FORBIDDEN
    );
}
