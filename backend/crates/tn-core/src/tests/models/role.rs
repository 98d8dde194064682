use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Member.as_str(), "member");
}

#[test]
fn test_role_from_str_ignores_case() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("Admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("MEMBER").unwrap(), Role::Member);
}

#[test]
fn test_role_from_str_rejects_unknown() {
    let result = Role::from_str("owner");
    assert!(matches!(result, Err(CoreError::InvalidRole { .. })));
}

#[test]
fn test_role_default_is_member() {
    assert_eq!(Role::default(), Role::Member);
    assert!(!Role::default().is_admin());
}

#[test]
fn test_role_display_matches_db_string() {
    assert_eq!(Role::Admin.to_string(), "admin");
    assert_eq!(Role::Member.to_string(), "member");
}
