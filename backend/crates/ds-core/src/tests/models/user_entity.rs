use crate::{UserEntity, UserInfo, UserRole};

use chrono::Utc;

#[test]
fn test_new_user_info_has_user_role() {
    let info = UserInfo::new("test", "test", Utc::now(), "123456789");

    assert_eq!(info.role, UserRole::User);
    assert_eq!(info.password.expose(), "123456789");
}

#[test]
fn test_entity_principal_mirrors_entity() {
    let info = UserInfo::new("test", "Test User", Utc::now(), "123456789")
        .with_role(UserRole::Admin);
    let entity = UserEntity::new(7, info);

    let principal = entity.principal();

    assert_eq!(principal.uid, 7);
    assert_eq!(principal.username, "test");
    assert_eq!(principal.role, UserRole::Admin);
    assert!(principal.is_admin());
}
