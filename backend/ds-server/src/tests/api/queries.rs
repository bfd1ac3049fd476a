use crate::{ApiError, GetUserQuery, PromoteUserQuery};

use ds_service::UserQuery;

fn field_of(error: ApiError) -> Option<String> {
    match error {
        ApiError::Validation { field, .. } => field,
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn test_get_query_by_id() {
    let query = GetUserQuery {
        id: Some("2".into()),
        username: None,
    };

    assert_eq!(query.into_user_query().unwrap(), UserQuery::ById(2));
}

#[test]
fn test_get_query_by_username() {
    let query = GetUserQuery {
        id: None,
        username: Some("test".into()),
    };

    assert_eq!(
        query.into_user_query().unwrap(),
        UserQuery::ByUsername("test".into())
    );
}

#[test]
fn test_get_query_with_both_is_rejected() {
    let query = GetUserQuery {
        id: Some("2".into()),
        username: Some("test".into()),
    };

    assert!(matches!(
        query.into_user_query(),
        Err(ApiError::Validation { .. })
    ));
}

#[test]
fn test_get_query_with_neither_is_rejected() {
    assert!(matches!(
        GetUserQuery::default().into_user_query(),
        Err(ApiError::Validation { .. })
    ));
}

#[test]
fn test_get_query_with_non_numeric_id_reports_id_field() {
    let query = GetUserQuery {
        id: Some("abc".into()),
        username: None,
    };

    let error = query.into_user_query().unwrap_err();
    assert_eq!(field_of(error).as_deref(), Some("id"));
}

#[test]
fn test_promote_query_parses_id() {
    let query = PromoteUserQuery {
        id: Some("2".into()),
    };

    assert_eq!(query.uid().unwrap(), 2);
}

#[test]
fn test_promote_query_requires_id() {
    let error = PromoteUserQuery::default().uid().unwrap_err();
    assert_eq!(field_of(error).as_deref(), Some("id"));

    let error = PromoteUserQuery {
        id: Some(String::new()),
    }
    .uid()
    .unwrap_err();
    assert_eq!(field_of(error).as_deref(), Some("id"));
}

#[test]
fn test_promote_query_rejects_negative_id() {
    let query = PromoteUserQuery {
        id: Some("-1".into()),
    };

    assert!(query.uid().is_err());
}

#[test]
fn test_get_query_with_id_and_empty_username_is_rejected() {
    let query = GetUserQuery {
        id: Some("2".into()),
        username: Some(String::new()),
    };

    let error = query.into_user_query().unwrap_err();
    assert_eq!(field_of(error), None);
}

#[test]
fn test_get_query_with_only_empty_username_reports_username_field() {
    let query = GetUserQuery {
        id: None,
        username: Some(String::new()),
    };

    let error = query.into_user_query().unwrap_err();
    assert_eq!(field_of(error).as_deref(), Some("username"));
}
