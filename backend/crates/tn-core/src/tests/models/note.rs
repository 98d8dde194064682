use crate::{CoreError, Note};

use uuid::Uuid;

#[test]
fn test_note_new() {
    let tenant_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();
    let note = Note::new(tenant_id, user_id, "Title".to_string(), "Body".to_string());

    assert_eq!(note.tenant_id, tenant_id);
    assert_eq!(note.user_id, user_id);
    assert_eq!(note.created_at, note.updated_at);
}

#[test]
fn test_validate_title_rejects_blank() {
    let result = Note::validate_title("   ");

    match result {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("title")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_validate_title_rejects_too_long() {
    let title = "x".repeat(crate::models::note::MAX_TITLE_LENGTH + 1);
    assert!(Note::validate_title(&title).is_err());
    assert!(Note::validate_title("Groceries").is_ok());
}
