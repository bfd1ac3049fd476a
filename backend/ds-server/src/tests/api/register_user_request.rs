use crate::{ApiError, RegisterUserRequest};

use chrono::{TimeZone, Utc};

fn request(birthdate: &str) -> RegisterUserRequest {
    RegisterUserRequest {
        username: "test".into(),
        name: "Test User".into(),
        birthdate: birthdate.into(),
        password: "123456789".into(),
    }
}

#[test]
fn test_rfc3339_birthdate_is_normalized_to_utc() {
    let register = request("2000-05-17T14:00:00+02:00")
        .into_register_user()
        .unwrap();

    assert_eq!(
        register.birthdate,
        Utc.with_ymd_and_hms(2000, 5, 17, 12, 0, 0).unwrap()
    );
}

#[test]
fn test_naive_datetime_birthdate_is_taken_as_utc() {
    let register = request("2000-05-17T12:00:00.250000")
        .into_register_user()
        .unwrap();

    assert_eq!(
        register.birthdate.timestamp(),
        Utc.with_ymd_and_hms(2000, 5, 17, 12, 0, 0)
            .unwrap()
            .timestamp()
    );
}

#[test]
fn test_date_only_birthdate_is_midnight_utc() {
    let register = request("2000-05-17").into_register_user().unwrap();

    assert_eq!(
        register.birthdate,
        Utc.with_ymd_and_hms(2000, 5, 17, 0, 0, 0).unwrap()
    );
}

#[test]
fn test_invalid_birthdate_is_reported_against_field() {
    let result = request("17/05/2000").into_register_user();

    match result {
        Err(ApiError::Validation { field, .. }) => {
            assert_eq!(field.as_deref(), Some("birthdate"))
        }
        other => panic!("Expected Validation error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_fields_are_carried_over() {
    let register = request("2000-05-17").into_register_user().unwrap();

    assert_eq!(register.username, "test");
    assert_eq!(register.name, "Test User");
    assert!(register.password.matches("123456789"));
}

#[test]
fn test_missing_password_deserializes_as_empty() {
    let request: RegisterUserRequest = serde_json::from_str(
        r#"{"username": "test", "name": "Test", "birthdate": "2000-05-17"}"#,
    )
    .unwrap();

    assert!(request.password.is_empty());
}
