//! Snapshot subscription primitives.
//!
//! The remote store pushes full materialized snapshots (never deltas) into
//! a [`tokio::sync::watch`] channel; a [`Subscription`] is the consumer
//! half plus ownership of the producer task.
//!
//! Cancellation contract: dropping a [`Subscription`] (or the stream made
//! from it) aborts the producer task. No further snapshots are observed
//! after the drop returns.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::WatchStream;

/// Aborts the wrapped task when dropped.
pub struct TaskGuard(Option<JoinHandle<()>>);

impl TaskGuard {
    pub fn new(handle: JoinHandle<()>) -> Self {
        TaskGuard(Some(handle))
    }

    /// Guard that owns no task. Used by in-memory fakes in tests.
    pub fn noop() -> Self {
        TaskGuard(None)
    }
}

impl Drop for TaskGuard {
    fn drop(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.abort();
        }
    }
}

/// A live snapshot subscription.
///
/// Every emission replaces all prior state; consumers must not assume
/// incremental updates. The channel always holds a current value, so a
/// fresh subscriber can read state synchronously via [`current`](Self::current).
pub struct Subscription<T> {
    rx: watch::Receiver<T>,
    guard: TaskGuard,
}

impl<T: Clone + Send + Sync + 'static> Subscription<T> {
    /// Wrap a watch receiver together with the producer task feeding it.
    pub fn new(rx: watch::Receiver<T>, producer: JoinHandle<()>) -> Self {
        Subscription {
            rx,
            guard: TaskGuard::new(producer),
        }
    }

    /// Subscription without a producer task, fed externally. Test seam.
    pub fn from_receiver(rx: watch::Receiver<T>) -> Self {
        Subscription {
            rx,
            guard: TaskGuard::noop(),
        }
    }

    /// Clone of the most recent snapshot.
    pub fn current(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Wait for the next snapshot. Returns `false` once the producer is
    /// gone and no further emissions will occur.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// Convert into a [`Stream`] of snapshots. The stream yields the
    /// current snapshot first, then every subsequent change.
    pub fn into_stream(self) -> SubscriptionStream<T> {
        SubscriptionStream {
            inner: WatchStream::new(self.rx),
            _guard: self.guard,
        }
    }
}

/// Stream adapter for a [`Subscription`]. Dropping the stream cancels the
/// producer task, same as dropping the subscription itself.
pub struct SubscriptionStream<T> {
    inner: WatchStream<T>,
    _guard: TaskGuard,
}

impl<T: Clone + Send + Sync + 'static> Stream for SubscriptionStream<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
