use crate::UserRole;

use std::str::FromStr;

#[test]
fn test_user_role_as_str() {
    assert_eq!(UserRole::User.as_str(), "USER");
    assert_eq!(UserRole::Admin.as_str(), "ADMIN");
}

#[test]
fn test_user_role_from_str() {
    assert_eq!(UserRole::from_str("USER").unwrap(), UserRole::User);
    assert_eq!(UserRole::from_str("ADMIN").unwrap(), UserRole::Admin);
    assert!(UserRole::from_str("admin").is_err());
    assert!(UserRole::from_str("root").is_err());
}

#[test]
fn test_user_role_default() {
    assert_eq!(UserRole::default(), UserRole::User);
}

#[test]
fn test_user_role_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"ADMIN\"");
    let role: UserRole = serde_json::from_str("\"USER\"").unwrap();
    assert_eq!(role, UserRole::User);
}
