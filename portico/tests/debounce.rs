//! Tests for the tokio-backed debouncer.

use std::time::Duration;

use portico::debounce::DebouncedTask;
use tokio::sync::mpsc;
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn test_only_latest_action_fires() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut debounce = DebouncedTask::new(Duration::from_millis(500));

    let first = tx.clone();
    debounce.schedule(move || {
        let _ = first.send("first");
    });
    sleep(Duration::from_millis(100)).await;

    let second = tx.clone();
    debounce.schedule(move || {
        let _ = second.send("second");
    });

    // 599ms after the first input, 499ms after the second.
    sleep(Duration::from_millis(499)).await;
    assert!(rx.try_recv().is_err());
    assert!(debounce.is_pending());

    // 500ms after the second input.
    sleep(Duration::from_millis(2)).await;
    assert_eq!(rx.try_recv().ok(), Some("second"));

    sleep(Duration::from_secs(5)).await;
    assert!(rx.try_recv().is_err());
    assert!(!debounce.is_pending());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_prevents_action() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut debounce = DebouncedTask::new(Duration::from_millis(500));
    debounce.schedule(move || {
        let _ = tx.send(());
    });
    debounce.cancel();
    sleep(Duration::from_secs(1)).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_pending_action() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    {
        let mut debounce = DebouncedTask::new(Duration::from_millis(500));
        debounce.schedule_async(async move {
            let _ = tx.send(());
        });
    }
    sleep(Duration::from_secs(1)).await;
    assert!(rx.try_recv().is_err());
}
