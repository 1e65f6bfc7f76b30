//! Polling snapshot watches.
//!
//! The REST API has no streaming listen endpoint usable with api-key
//! auth, so live subscriptions are implemented by polling the collection
//! and emitting a snapshot whenever the materialized result changes.
//! Consumers see the same contract as a push listener: full snapshots,
//! never deltas.
//!
//! Error behavior matches the repository trait contracts: on a failed
//! poll the watch logs the error, emits its fallback snapshot and stops.
//! There is no automatic retry.

use std::future::Future;
use std::time::Duration;

use log::error;
use tokio::sync::watch;
use tripdeck_core::subscription::Subscription;

use crate::errors::StorageError;

/// Default interval between snapshot polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Spawn a polling producer and return the subscription it feeds.
///
/// `initial` is the snapshot visible before the first poll completes.
/// Unchanged poll results are deduplicated; subscribers only wake when
/// the snapshot actually differs. Dropping the returned subscription
/// aborts the poll task.
pub fn spawn_poll_watch<T, F, Fut>(
    initial: T,
    fallback: T,
    interval: Duration,
    fetch: F,
) -> Subscription<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, StorageError>> + Send,
{
    let (tx, rx) = watch::channel(initial);

    let producer = tokio::spawn(async move {
        loop {
            match fetch().await {
                Ok(snapshot) => {
                    tx.send_if_modified(|current| {
                        if *current == snapshot {
                            false
                        } else {
                            *current = snapshot;
                            true
                        }
                    });
                }
                Err(err) => {
                    error!("snapshot watch stopped: {err}");
                    let _ = tx.send(fallback);
                    break;
                }
            }
            tokio::time::sleep(interval).await;
        }
    });

    Subscription::new(rx, producer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn watch_emits_fetched_snapshots() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_fetch = calls.clone();

        let mut sub = spawn_poll_watch(
            Vec::new(),
            Vec::new(),
            Duration::from_millis(5),
            move || {
                let n = calls_in_fetch.fetch_add(1, Ordering::SeqCst);
                async move { Ok(vec![n.min(1)]) }
            },
        );

        assert!(sub.changed().await);
        assert_eq!(sub.current(), vec![0]);
        assert!(sub.changed().await);
        assert_eq!(sub.current(), vec![1]);

        // Later polls return the same snapshot; no further wakeups,
        // but the task keeps polling.
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(sub.current(), vec![1]);
        assert!(calls.load(Ordering::SeqCst) > 3);
    }

    #[tokio::test]
    async fn failed_poll_emits_fallback_and_stops() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_fetch = calls.clone();

        let mut sub = spawn_poll_watch(
            vec!["seed".to_string()],
            Vec::new(),
            Duration::from_millis(5),
            move || {
                calls_in_fetch.fetch_add(1, Ordering::SeqCst);
                async move {
                    Err::<Vec<String>, _>(StorageError::Api {
                        status: 403,
                        message: "denied".to_string(),
                    })
                }
            },
        );

        assert!(sub.changed().await);
        assert_eq!(sub.current(), Vec::<String>::new());

        // The producer is gone; no retry happens.
        assert!(!sub.changed().await);
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
