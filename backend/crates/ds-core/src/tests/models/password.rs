use crate::Password;

#[test]
fn test_password_debug_and_display_are_redacted() {
    let password = Password::new("123456789");

    assert!(!format!("{:?}", password).contains("123456789"));
    assert!(!format!("{}", password).contains("123456789"));
}

#[test]
fn test_password_matches_exactly() {
    let password = Password::new("secret");

    assert!(password.matches("secret"));
    assert!(!password.matches("Secret"));
    assert!(!password.matches("secret "));
    assert!(!password.matches(""));
}

#[test]
fn test_password_char_count_counts_characters() {
    assert_eq!(Password::new("пароль").char_count(), 6);
    assert!(Password::default().is_empty());
}
