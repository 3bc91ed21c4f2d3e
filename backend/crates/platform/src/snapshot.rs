//! Live Snapshot Feeds
//!
//! A [`SnapshotFeed`] holds the latest full result set of some query and
//! notifies every [`Subscription`] when it is replaced. Subscribers never see
//! deltas: each notification carries the whole current snapshot, and a slow
//! subscriber skips straight to the newest one.

use tokio::sync::watch;

/// Publisher side of a live query
#[derive(Debug)]
pub struct SnapshotFeed<T> {
    sender: watch::Sender<T>,
}

impl<T> SnapshotFeed<T>
where
    T: Clone,
{
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self { sender }
    }

    /// Replace the snapshot and wake all subscribers
    pub fn publish(&self, snapshot: T) {
        self.sender.send_replace(snapshot);
    }

    /// Copy of the latest snapshot
    pub fn current(&self) -> T {
        self.sender.borrow().clone()
    }

    /// Register a new subscriber; its first [`Subscription::next`] yields the current snapshot
    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            receiver: Some(self.sender.subscribe()),
            delivered_initial: false,
        }
    }

    /// Number of live (not cancelled, not dropped) subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Cancelable registration on a [`SnapshotFeed`]
///
/// Dropping the subscription cancels it.
#[derive(Debug)]
pub struct Subscription<T> {
    receiver: Option<watch::Receiver<T>>,
    delivered_initial: bool,
}

impl<T> Subscription<T>
where
    T: Clone,
{
    /// A subscription that is already cancelled
    pub fn closed() -> Self {
        Self {
            receiver: None,
            delivered_initial: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.receiver.is_some()
    }

    /// Latest snapshot without waiting, `None` once cancelled
    pub fn latest(&self) -> Option<T> {
        self.receiver.as_ref().map(|r| r.borrow().clone())
    }

    /// Wait for the next snapshot
    ///
    /// The first call returns the snapshot current at subscription time.
    /// Returns `None` after [`Self::cancel`] or when the feed is gone.
    pub async fn next(&mut self) -> Option<T> {
        if !self.delivered_initial {
            self.delivered_initial = true;
            return self.receiver.as_mut().map(|r| r.borrow_and_update().clone());
        }

        let changed = match self.receiver.as_mut() {
            Some(receiver) => receiver.changed().await.is_ok(),
            None => return None,
        };

        if !changed {
            self.receiver = None;
            return None;
        }

        self.receiver.as_mut().map(|r| r.borrow_and_update().clone())
    }

    /// Tear down the registration; no further snapshots are delivered
    pub fn cancel(&mut self) {
        self.receiver = None;
    }
}
