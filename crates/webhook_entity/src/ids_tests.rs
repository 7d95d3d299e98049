//! Tests for WebhookId, CompanyId and RepositoryId

use super::*;
use uuid::Uuid;

#[test]
fn test_default_id_is_nil() {
    assert!(WebhookId::default().is_nil());
    assert_eq!(CompanyId::default(), CompanyId::nil());
    assert_eq!(RepositoryId::default().as_uuid(), &Uuid::nil());
}

#[test]
fn test_new_ids_are_unique() {
    let id1 = WebhookId::new();
    let id2 = WebhookId::new();
    assert_ne!(id1, id2);
    assert!(!id1.is_nil());
}

#[test]
fn test_id_from_uuid() {
    let uuid = Uuid::new_v4();
    let company_id = CompanyId::from_uuid(uuid);
    assert_eq!(company_id.as_uuid(), &uuid);
    assert_eq!(CompanyId::from(uuid), company_id);
}

#[test]
fn test_parse_valid_id() {
    let uuid = Uuid::new_v4();
    let parsed = RepositoryId::parse(&uuid.to_string()).expect("valid uuid should parse");
    assert_eq!(parsed.as_uuid(), &uuid);

    let from_str: RepositoryId = uuid.to_string().parse().expect("FromStr should agree");
    assert_eq!(from_str, parsed);
}

#[test]
fn test_parse_invalid_id() {
    assert!(RepositoryId::parse("invalid").is_err());
    assert!(CompanyId::parse("").is_err());
    assert!(WebhookId::parse("0f8fad5b-d9cb-469f-a165").is_err());
}

#[test]
fn test_display_is_hyphenated_uuid() {
    let uuid = Uuid::new_v4();
    assert_eq!(WebhookId::from_uuid(uuid).to_string(), uuid.to_string());
}

#[test]
fn test_serializes_as_plain_string() {
    let uuid = Uuid::new_v4();
    let json = serde_json::to_string(&CompanyId::from_uuid(uuid)).unwrap();
    assert_eq!(json, format!("\"{}\"", uuid));
}
