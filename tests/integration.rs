// SPDX-License-Identifier: MPL-2.0
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;
use toast_queue::config::{self, ToastConfig};
use toast_queue::notifications::{
    CloseReason, ManualClock, ToastEvent, ToastOptions, ToastRuntime, ToastStore, Variant,
};

#[test]
fn saved_toast_closes_itself_after_three_seconds() {
    let clock = ManualClock::new();
    let mut store = ToastStore::with_clock(ToastConfig::default(), Arc::new(clock.clone()));
    let closes = Arc::new(AtomicUsize::new(0));
    let hook = {
        let closes = Arc::clone(&closes);
        move |_: &toast_queue::notifications::ToastItem| {
            closes.fetch_add(1, Ordering::SeqCst);
        }
    };

    let id = store
        .show(
            "Saved",
            ToastOptions::success()
                .duration_secs(3.0)
                .auto_close(true)
                .on_close(hook),
        )
        .expect("toast should be shown");
    assert_eq!(id.value(), 1);

    clock.advance(Duration::from_secs(3));
    store.tick();
    assert!(store.get(id).expect("still listed").is_closed());
    assert_eq!(closes.load(Ordering::SeqCst), 1);

    clock.advance(Duration::from_secs(1));
    store.tick();
    assert!(store.is_empty());
    assert_eq!(closes.load(Ordering::SeqCst), 1);
}

#[test]
fn config_file_defaults_flow_into_store() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let saved = ToastConfig {
        duration_secs: 8.0,
        auto_close: false,
        group: Some("editor".to_string()),
        ..ToastConfig::default()
    };
    config::save_to_path(&saved, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    let mut store = ToastStore::new(loaded);
    let id = store.warning("Unsaved changes").expect("toast should be shown");
    let toast = store.get(id).expect("toast should be tracked");

    assert_eq!(toast.variant(), Variant::Warning);
    assert_eq!(toast.group(), Some("editor"));
    assert!(!toast.auto_close());
    assert_eq!(toast.duration().secs(), 8.0);

    assert_eq!(store.hide_group("editor"), 1);
    assert_eq!(store.active_count(), 0);

    dir.close().expect("Failed to close temporary directory");
}

#[tokio::test(start_paused = true)]
async fn runtime_handles_are_shared_between_producers() {
    let (handle, task) = ToastRuntime::spawn(ToastConfig::default());
    let mut events = handle.subscribe();

    let producers: Vec<_> = (0..3)
        .map(|i| {
            let handle = handle.clone();
            tokio::spawn(async move {
                handle
                    .show(
                        format!("upload {i}"),
                        ToastOptions::info().group("uploads").auto_close(false),
                    )
                    .await
            })
        })
        .collect();
    for producer in producers {
        producer
            .await
            .expect("producer task panicked")
            .expect("runtime running")
            .expect("toast shown");
    }
    handle
        .show("keep me", ToastOptions::info().auto_close(false))
        .await
        .expect("runtime running");

    assert_eq!(handle.hide_group("uploads").await.expect("runtime running"), 3);

    let snapshot = handle.snapshot().await.expect("runtime running");
    assert_eq!(snapshot.len(), 4);
    let open: Vec<_> = snapshot.iter().filter(|t| !t.closed).collect();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].message, "keep me");

    let mut closed = 0;
    while closed < 3 {
        if let ToastEvent::Closed { reason, .. } = events.recv().await.expect("event stream open") {
            assert_eq!(reason, CloseReason::Dismissed);
            closed += 1;
        }
    }

    handle.shutdown().await.expect("runtime running");
    task.await.expect("runtime task panicked");
}

#[tokio::test(start_paused = true)]
async fn manual_toasts_survive_time_in_runtime() {
    let (handle, _task) = ToastRuntime::spawn(ToastConfig::default());
    let id = handle
        .show("sticky", ToastOptions::error().auto_close(false))
        .await
        .expect("runtime running")
        .expect("toast shown");

    tokio::time::sleep(Duration::from_secs(600)).await;

    let snapshot = handle.snapshot().await.expect("runtime running");
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, id);
    assert!(!snapshot[0].closed);

    assert!(handle.click(id).await.expect("runtime running"));
    assert!(handle.snapshot().await.expect("runtime running")[0].closed);
}

#[tokio::test(start_paused = true)]
async fn hide_before_deadline_cancels_auto_close() {
    let (handle, _task) = ToastRuntime::spawn(ToastConfig::default());
    let mut events = handle.subscribe();
    let id = handle
        .show("soon gone", ToastOptions::info().duration_secs(2.0))
        .await
        .expect("runtime running")
        .expect("toast shown");

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(handle.hide(id).await.expect("runtime running"));

    let mut reasons = Vec::new();
    loop {
        match events.recv().await.expect("event stream open") {
            ToastEvent::Closed { reason, .. } => reasons.push(reason),
            ToastEvent::Removed { .. } => break,
            ToastEvent::Shown(_) => {}
        }
    }
    assert_eq!(reasons, vec![CloseReason::Dismissed]);
}

#[tokio::test(start_paused = true)]
async fn lagging_subscriber_resyncs_after_manual_burst() {
    let (handle, task) = ToastRuntime::spawn(ToastConfig::default());
    let mut events = handle.subscribe();

    let mut pending = std::collections::HashSet::new();
    for i in 0..300 {
        let options = ToastOptions::info().auto_close(false);
        if let Some(id) = handle.show(format!("toast {i}"), options).await.unwrap() {
            pending.insert(id);
        }
    }
    assert_eq!(handle.hide_all().await.unwrap(), 300);

    let mut lagged = false;
    while !pending.is_empty() {
        match events.recv().await {
            Ok(ToastEvent::Removed { id }) => {
                pending.remove(&id);
            }
            Ok(_) => {}
            Err(tokio::sync::broadcast::error::RecvError::Lagged(_)) => {
                lagged = true;
                let tracked = handle.snapshot().await.unwrap();
                pending.retain(|id| tracked.iter().any(|toast| toast.id == *id));
            }
            Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
        }
    }

    assert!(lagged);
    assert!(pending.is_empty());
    assert!(handle.snapshot().await.unwrap().is_empty());
    handle.shutdown().await.unwrap();
    task.await.unwrap();
}
