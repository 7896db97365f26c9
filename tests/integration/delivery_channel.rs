//! Delivery channel lifetime and ordering.

use chrono::{Duration as ChronoDuration, Utc};
use content_studio::delivery::{DeliveryChannel, NotificationDraft, Severity};
use content_studio::error::ApiError;
use std::time::Duration;

#[test]
fn notifications_expire_after_ttl() {
    let channel = DeliveryChannel::new(Duration::from_secs(5));
    let start = Utc::now();

    let first = channel.notify_at(NotificationDraft::for_error(&ApiError::QuotaExhausted), start);
    let second = channel.notify_at(
        NotificationDraft::for_error(&ApiError::Validation(
            "Please enter a topic for your content.".into(),
        )),
        start + ChronoDuration::seconds(3),
    );

    let active = channel.active_at(start + ChronoDuration::seconds(4));
    assert_eq!(
        active.iter().map(|n| n.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    let active = channel.active_at(start + ChronoDuration::seconds(6));
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, second.id);
    assert_eq!(active[0].severity, Severity::Warning);

    assert_eq!(channel.prune_expired(start + ChronoDuration::seconds(9)), 2);
    assert!(channel.is_empty());
}

#[test]
fn duplicates_are_kept_and_dismiss_is_targeted() {
    let channel = DeliveryChannel::default();
    let a = channel.notify(NotificationDraft::for_error(&ApiError::QuotaExhausted));
    let b = channel.notify(NotificationDraft::for_error(&ApiError::QuotaExhausted));

    assert_ne!(a.id, b.id);
    assert_eq!(a.title, b.title);
    assert_eq!(channel.len(), 2);

    assert!(channel.dismiss(a.id));
    assert!(!channel.dismiss(a.id));
    assert_eq!(channel.len(), 1);
}

#[test]
fn notification_serializes_for_the_endpoint() {
    let channel = DeliveryChannel::default();
    let n = channel.notify(NotificationDraft::for_error(&ApiError::QuotaExhausted));
    let value = serde_json::to_value(&n).unwrap();
    assert_eq!(value["severity"], "error");
    assert_eq!(value["title"], "No Credits");
    assert!(value.get("createdAt").is_some());
}
