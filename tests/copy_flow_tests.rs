//! Copy flow tests over the in-memory clipboard and a real settings file.
//!
//! Exercises the same stack `main` wires together, minus argument parsing:
//! [`FileSettingsStore`] in a temp dir, [`MemoryClipboard`], the bridge,
//! and the [`CopyCode`] use case with a oneshot clear signal.

use std::sync::Arc;

use tempfile::TempDir;
use tokio::sync::oneshot;
use tokio::time::{advance, Duration};

use oc_app::{ClipboardBridge, CopyCode, CopyOutcome, SetClearDelay};
use oc_core::DEFAULT_CLEAR_DELAY_SECS;
use oc_infra::FileSettingsStore;
use oc_platform::MemoryClipboard;

fn settings_at(dir: &TempDir) -> Arc<FileSettingsStore> {
    Arc::new(FileSettingsStore::new(dir.path().join("settings.json")))
}

fn copy_stack(dir: &TempDir) -> (Arc<MemoryClipboard>, CopyCode) {
    let sink = Arc::new(MemoryClipboard::new());
    let bridge = Arc::new(ClipboardBridge::new(sink.clone()));
    (sink, CopyCode::new(bridge, settings_at(dir)))
}

/// The clear signal `main` waits on: the sender is consumed on a successful
/// clear, so a dropped-unconsumed sender shows up as a receive error.
fn clear_signal() -> (oneshot::Receiver<()>, impl FnOnce() + Send + 'static) {
    let (tx, rx) = oneshot::channel();
    (rx, move || {
        let _ = tx.send(());
    })
}

#[tokio::test(start_paused = true)]
async fn test_copy_flow_clears_after_stored_delay() {
    let dir = TempDir::new().unwrap();
    assert!(SetClearDelay::new(settings_at(&dir)).execute(15).await);

    let (sink, use_case) = copy_stack(&dir);
    let (rx, on_cleared) = clear_signal();

    let outcome = use_case
        .execute(
            "Use verification code 8742 to login to your account.",
            None,
            on_cleared,
        )
        .await;
    match outcome {
        CopyOutcome::Copied {
            code,
            clear_delay_secs,
        } => {
            assert_eq!(code.as_str(), "8742");
            assert_eq!(clear_delay_secs, 15);
        }
        other => panic!("expected a copy, got {:?}", other),
    }
    assert_eq!(sink.current(), "8742");

    // Let the scheduled clear task register its sleep before the clock moves.
    tokio::task::yield_now().await;
    advance(Duration::from_secs(15)).await;
    tokio::task::yield_now().await;

    assert_eq!(sink.current(), "");
    rx.await.expect("clear signal should have fired");
}

#[tokio::test(start_paused = true)]
async fn test_copy_flow_delay_override_beats_stored_value() {
    let dir = TempDir::new().unwrap();
    assert!(SetClearDelay::new(settings_at(&dir)).execute(60).await);

    let (sink, use_case) = copy_stack(&dir);
    let (rx, on_cleared) = clear_signal();

    let outcome = use_case
        .execute("Your PIN: 5931. Valid for 10 minutes.", Some(5), on_cleared)
        .await;
    match outcome {
        CopyOutcome::Copied {
            clear_delay_secs, ..
        } => assert_eq!(clear_delay_secs, 5),
        other => panic!("expected a copy, got {:?}", other),
    }

    tokio::task::yield_now().await;
    advance(Duration::from_secs(4)).await;
    tokio::task::yield_now().await;
    assert_eq!(sink.current(), "5931");

    advance(Duration::from_secs(1)).await;
    tokio::task::yield_now().await;
    assert_eq!(sink.current(), "");
    rx.await.expect("clear signal should have fired");
}

#[tokio::test(start_paused = true)]
async fn test_copy_flow_missing_settings_file_uses_default_delay() {
    let dir = TempDir::new().unwrap();

    let (sink, use_case) = copy_stack(&dir);
    let (_rx, on_cleared) = clear_signal();

    let outcome = use_case
        .execute("Your verification code is 48291.", None, on_cleared)
        .await;
    match outcome {
        CopyOutcome::Copied {
            clear_delay_secs, ..
        } => assert_eq!(clear_delay_secs, DEFAULT_CLEAR_DELAY_SECS),
        other => panic!("expected a copy, got {:?}", other),
    }
    assert_eq!(sink.current(), "48291");

    tokio::task::yield_now().await;
    advance(Duration::from_secs(u64::from(DEFAULT_CLEAR_DELAY_SECS))).await;
    tokio::task::yield_now().await;
    assert_eq!(sink.current(), "");
}

#[tokio::test]
async fn test_copy_flow_no_code_touches_nothing() {
    let dir = TempDir::new().unwrap();

    let (sink, use_case) = copy_stack(&dir);
    let (rx, on_cleared) = clear_signal();

    let outcome = use_case
        .execute(
            "Hello! Your order #12345 has been shipped. Track it here: example.com",
            None,
            on_cleared,
        )
        .await;
    assert_eq!(outcome, CopyOutcome::NoCode);
    assert_eq!(sink.current(), "");
    // Extraction failed before the settings store was ever consulted.
    assert!(!dir.path().join("settings.json").exists());
    assert!(rx.await.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_copy_flow_zero_delay_keeps_code() {
    let dir = TempDir::new().unwrap();
    assert!(SetClearDelay::new(settings_at(&dir)).execute(0).await);

    let (sink, use_case) = copy_stack(&dir);
    let (rx, on_cleared) = clear_signal();

    let outcome = use_case
        .execute(
            "Your OTP is 123456. Do not share this code with anyone.",
            None,
            on_cleared,
        )
        .await;
    match outcome {
        CopyOutcome::Copied {
            clear_delay_secs, ..
        } => assert_eq!(clear_delay_secs, 0),
        other => panic!("expected a copy, got {:?}", other),
    }
    assert_eq!(sink.current(), "123456");

    advance(Duration::from_secs(24 * 3600)).await;
    tokio::task::yield_now().await;

    assert_eq!(sink.current(), "123456");
    // No clear was scheduled, so the signal sender was dropped unconsumed.
    assert!(rx.await.is_err());
}
