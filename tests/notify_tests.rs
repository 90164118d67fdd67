// Host-side tests for the bounded notification queue.

use landing_core::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut q = NotificationQueue::new(4);
    let a = q.push("one", Severity::Info);
    let b = q.push("two", Severity::Success);
    assert!(b.id > a.id);
    assert!(a.evicted.is_empty() && b.evicted.is_empty());
    assert_eq!(q.len(), 2);
}

#[test]
fn queue_never_exceeds_cap_and_evicts_oldest_first() {
    let mut q = NotificationQueue::new(3);
    let ids: Vec<_> = (0..3).map(|i| q.push(format!("m{}", i), Severity::Info).id).collect();
    let fourth = q.push("m3", Severity::Error);
    assert_eq!(fourth.evicted, vec![ids[0]]);
    assert_eq!(q.len(), 3);
    assert!(!q.contains(ids[0]));
    for _ in 0..50 {
        q.push("spam", Severity::Info);
        assert!(q.len() <= q.cap());
    }
    let messages: Vec<_> = q.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(messages, vec!["spam", "spam", "spam"]);
}

#[test]
fn remove_is_idempotent() {
    let mut q = NotificationQueue::new(2);
    let id = q.push("bye", Severity::Info).id;
    assert_eq!(q.remove(id).map(|n| n.message), Some("bye".to_string()));
    assert_eq!(q.remove(id), None);
    assert!(q.is_empty());
}

#[test]
fn zero_cap_is_treated_as_one() {
    let mut q = NotificationQueue::new(0);
    assert_eq!(q.cap(), 1);
    let first = q.push("a", Severity::Info).id;
    let second = q.push("b", Severity::Info);
    assert_eq!(second.evicted, vec![first]);
}

#[test]
fn severity_colours_match_palette() {
    assert_eq!(Severity::Success.background(), "#10b981");
    assert_eq!(Severity::Error.background(), "#ef4444");
    assert_eq!(Severity::Info.background(), "#6366f1");
    assert_eq!(Severity::default(), Severity::Info);
    let css = Severity::Error.css_text();
    assert!(css.contains("position: fixed"));
    assert!(css.contains("background: #ef4444"));
    assert!(css.contains("slideInRight"));
    assert!(EXIT_ANIMATION.starts_with("slideOutRight"));
}
