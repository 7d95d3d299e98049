use super::*;

#[test]
fn test_invalid_repository_id_display() {
    let error = WebhookError::InvalidRepositoryId;
    assert_eq!(error.to_string(), "invalid repository id");
}

#[test]
fn test_invalid_company_id_display() {
    let error = WebhookError::InvalidCompanyId;
    assert_eq!(error.to_string(), "invalid company id");
}

#[test]
fn test_single_violation_display() {
    let mut errors = ValidationErrors::new();
    errors.add("url", "must be a valid URL");
    assert_eq!(errors.to_string(), "url: must be a valid URL.");
}

#[test]
fn test_multiple_violations_sorted_by_field() {
    let mut errors = ValidationErrors::new();
    errors.add("url", "must be a valid URL");
    errors.add("method", "must be a valid value");

    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors.to_string(),
        "method: must be a valid value; url: must be a valid URL."
    );
    // Insertion order is kept for inspection
    assert_eq!(errors.errors()[0].field, "url");
}

#[test]
fn test_empty_validation_errors() {
    let errors = ValidationErrors::default();
    assert!(errors.is_empty());
    assert_eq!(errors.to_string(), "");
    assert!(errors.get("url").is_none());
}

#[test]
fn test_validation_error_converts_transparently() {
    let mut errors = ValidationErrors::new();
    errors.add("method", "cannot be blank");

    let error: WebhookError = errors.clone().into();
    assert_eq!(error, WebhookError::Validation(errors));
    assert_eq!(error.to_string(), "method: cannot be blank.");
}

#[test]
fn test_field_error_display() {
    let error = FieldError {
        field: "url".to_string(),
        reason: "cannot be blank".to_string(),
    };
    assert_eq!(error.to_string(), "url: cannot be blank");
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebhookError>();
    assert_send_sync::<ValidationErrors>();
}
