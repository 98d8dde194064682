use crate::{Plan, Tenant};

#[test]
fn test_tenant_new_starts_on_free_plan() {
    let tenant = Tenant::new("Acme".to_string(), "acme".to_string());

    assert_eq!(tenant.name, "Acme");
    assert_eq!(tenant.slug, "acme");
    assert_eq!(tenant.plan, Plan::Free);
}

#[test]
fn test_validate_slug() {
    assert!(Tenant::validate_slug("acme").is_ok());
    assert!(Tenant::validate_slug("globex-2").is_ok());
    assert!(Tenant::validate_slug("").is_err());
    assert!(Tenant::validate_slug("Acme").is_err());
    assert!(Tenant::validate_slug("acme/../x").is_err());
    assert!(Tenant::validate_slug(&"a".repeat(65)).is_err());
}
