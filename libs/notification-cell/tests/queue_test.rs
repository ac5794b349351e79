use std::time::Duration;

use notification_cell::models::Severity;
use notification_cell::services::queue::{NotificationQueue, AUTO_DISMISS_AFTER};

#[tokio::test(start_paused = true)]
async fn notification_present_until_auto_dismiss() {
    let queue = NotificationQueue::new();

    let id = queue.notify("Welcome back, Jane!", Severity::Success).await;

    let entries = queue.snapshot().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, id);
    assert_eq!(entries[0].severity, Severity::Success);

    tokio::time::sleep(AUTO_DISMISS_AFTER + Duration::from_millis(100)).await;

    assert!(queue.snapshot().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn dismiss_removes_entry_immediately() {
    let queue = NotificationQueue::new();

    let id = queue.notify("You have been logged out.", Severity::Info).await;
    queue.dismiss(id).await;

    assert!(queue.snapshot().await.is_empty());

    // The cancelled timer must not resurrect or double-remove the entry.
    tokio::time::sleep(AUTO_DISMISS_AFTER + Duration::from_secs(1)).await;
    assert!(queue.snapshot().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn dismissing_unknown_id_is_a_noop() {
    let queue = NotificationQueue::new();
    let id = queue.notify("first", Severity::Info).await;

    queue.dismiss(id).await;
    queue.dismiss(id).await;
    queue.dismiss(uuid::Uuid::new_v4()).await;

    assert!(queue.snapshot().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn entries_are_ordered_newest_first() {
    let queue = NotificationQueue::new();

    queue.notify("first", Severity::Info).await;
    queue.notify("second", Severity::Warning).await;
    queue.notify("third", Severity::Error).await;

    let messages: Vec<String> = queue
        .snapshot()
        .await
        .into_iter()
        .map(|n| n.message)
        .collect();
    assert_eq!(messages, vec!["third", "second", "first"]);
}

#[tokio::test(start_paused = true)]
async fn timers_expire_independently() {
    let queue = NotificationQueue::new();

    let early = queue.notify("early", Severity::Info).await;
    tokio::time::sleep(Duration::from_secs(3)).await;
    let late = queue.notify("late", Severity::Info).await;

    // 5.5s after the first notification: only the early one has expired.
    tokio::time::sleep(Duration::from_millis(2500)).await;
    let entries = queue.snapshot().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, late);
    assert!(entries.iter().all(|n| n.id != early));

    tokio::time::sleep(Duration::from_secs(3)).await;
    assert!(queue.snapshot().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn dismiss_cancels_only_its_own_timer() {
    let queue = NotificationQueue::new();

    let kept = queue.notify("kept", Severity::Info).await;
    let dropped = queue.notify("dropped", Severity::Info).await;

    queue.dismiss(dropped).await;

    let entries = queue.snapshot().await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, kept);

    // The surviving entry still expires on its own 5-second deadline.
    tokio::time::sleep(AUTO_DISMISS_AFTER + Duration::from_millis(100)).await;
    assert!(queue.snapshot().await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn subscribers_observe_every_change() {
    let queue = NotificationQueue::new();
    let rx = queue.subscribe();

    let id = queue.notify("observable", Severity::Success).await;
    assert_eq!(rx.borrow().len(), 1);

    queue.dismiss(id).await;
    assert!(rx.borrow().is_empty());
}
