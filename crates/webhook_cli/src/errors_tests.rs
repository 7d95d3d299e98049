use super::*;

#[test]
fn test_config_error_display() {
    let error = Error::Config("Missing field 'url'".to_string());
    assert_eq!(error.to_string(), "Configuration error: Missing field 'url'");
}

#[test]
fn test_invalid_webhooks_display() {
    let error = Error::InvalidWebhooks { count: 2 };
    assert_eq!(error.to_string(), "2 webhook(s) failed validation");
}

#[test]
fn test_webhook_error_conversion() {
    let error: Error = WebhookError::InvalidCompanyId.into();
    assert_eq!(error.to_string(), "Webhook error: invalid company id");
    assert!(matches!(
        error,
        Error::Webhook(WebhookError::InvalidCompanyId)
    ));
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
