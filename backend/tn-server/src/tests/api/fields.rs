use crate::ApiError;
use crate::api::fields::{required, required_email, required_secret};

use googletest::prelude::*;

#[test]
fn given_padded_value_when_required_then_trimmed() {
    let value = required(Some("  acme ".to_string()), "tenantSlug").unwrap();

    assert_that!(value, eq("acme"));
}

#[test]
fn given_blank_or_missing_value_when_required_then_validation_error_names_field() {
    for input in [None, Some(String::new()), Some("   ".to_string())] {
        let result = required(input, "title");

        match result {
            Err(ApiError::Validation { field, .. }) => {
                assert_that!(field, some(eq("title")));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}

#[test]
fn given_password_with_spaces_when_required_secret_then_kept_verbatim() {
    let value = required_secret(Some(" pass word ".to_string()), "password").unwrap();

    assert_that!(value, eq(" pass word "));
}

#[test]
fn given_mixed_case_email_when_required_email_then_lowercased() {
    let value = required_email(Some(" Admin@Acme.Test ".to_string())).unwrap();

    assert_that!(value, eq("admin@acme.test"));
}

#[test]
fn given_email_without_at_when_required_email_then_error() {
    let result = required_email(Some("admin.acme.test".to_string()));

    assert!(matches!(result, Err(ApiError::Validation { .. })));
}
