//! Unit tests for domain identifier types.

use crate::message::domain::{AppId, ChannelId, MessageId};
use rstest::rstest;

// ============================================================================
// MessageId tests
// ============================================================================

#[rstest]
fn message_id_new_creates_non_nil() {
    let id = MessageId::new();
    assert!(!id.as_ref().is_nil());
}

#[rstest]
fn message_id_default_creates_non_nil() {
    let id = MessageId::default();
    assert!(!id.as_ref().is_nil());
}

#[rstest]
fn message_id_different_ids_not_equal() {
    let id1 = MessageId::new();
    let id2 = MessageId::new();
    assert_ne!(id1, id2);
}

#[rstest]
fn message_id_from_uuid_preserves_value() {
    let uuid = uuid::Uuid::new_v4();
    let id = MessageId::from_uuid(uuid);
    assert_eq!(id.as_ref(), &uuid);
    assert_eq!(id.into_inner(), uuid);
}

#[rstest]
fn message_id_display() {
    let uuid =
        uuid::Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").expect("valid UUID string");
    let id = MessageId::from_uuid(uuid);
    assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
}

// ============================================================================
// ChannelId tests
// ============================================================================

#[rstest]
fn channel_id_new_creates_non_nil() {
    let id = ChannelId::new();
    assert!(!id.as_ref().is_nil());
}

#[rstest]
fn channel_id_different_ids_not_equal() {
    let id1 = ChannelId::new();
    let id2 = ChannelId::new();
    assert_ne!(id1, id2);
}

#[rstest]
fn channel_id_from_uuid_preserves_value() {
    let uuid = uuid::Uuid::new_v4();
    let id = ChannelId::from_uuid(uuid);
    assert_eq!(id.as_ref(), &uuid);
    assert_eq!(id.into_inner(), uuid);
}

// ============================================================================
// AppId tests
// ============================================================================

#[rstest]
fn app_id_new_creates_non_nil() {
    let id = AppId::new();
    assert!(!id.as_ref().is_nil());
}

#[rstest]
fn app_id_from_uuid_preserves_value() {
    let uuid = uuid::Uuid::new_v4();
    let id = AppId::from_uuid(uuid);
    assert_eq!(id.as_ref(), &uuid);
    assert_eq!(id.into_inner(), uuid);
}

#[rstest]
fn app_id_display_matches_uuid_encoding() {
    let uuid = uuid::Uuid::new_v4();
    let id = AppId::from_uuid(uuid);
    assert_eq!(id.to_string(), uuid.to_string());
}
