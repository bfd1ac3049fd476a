use crate::tests::{ADMIN_PASSWORD, basic_header, create_test_state};
use crate::{ApiError, Authenticated};

use ds_core::UserRole;

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{Request, header},
};

async fn extract(request: Request<Body>) -> Result<Authenticated, ApiError> {
    let state = create_test_state();
    let (mut parts, _body) = request.into_parts();
    Authenticated::from_request_parts(&mut parts, &state).await
}

#[tokio::test]
async fn test_extractor_with_valid_credentials() {
    let request = Request::builder()
        .header(header::AUTHORIZATION, basic_header("admin", ADMIN_PASSWORD))
        .body(Body::empty())
        .unwrap();

    let Authenticated(principal) = extract(request).await.unwrap();

    assert_eq!(principal.uid, 1);
    assert_eq!(principal.username, "admin");
    assert_eq!(principal.role, UserRole::Admin);
}

#[tokio::test]
async fn test_extractor_rejects_missing_header() {
    let request = Request::builder().body(Body::empty()).unwrap();

    let result = extract(request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_wrong_password() {
    let request = Request::builder()
        .header(header::AUTHORIZATION, basic_header("admin", "wrong-password"))
        .body(Body::empty())
        .unwrap();

    let result = extract(request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_non_basic_scheme() {
    let request = Request::builder()
        .header(header::AUTHORIZATION, "Bearer abc.def.ghi")
        .body(Body::empty())
        .unwrap();

    let result = extract(request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_non_ascii_header() {
    let value = http::HeaderValue::from_bytes(b"Basic \xff\xfe").unwrap();
    let request = Request::builder()
        .header(header::AUTHORIZATION, value)
        .body(Body::empty())
        .unwrap();

    let result = extract(request).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
