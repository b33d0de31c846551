//! Broadcast-backed change notifier.

use super::{ChangeEvent, Table};
use tokio::sync::broadcast::{
    self,
    error::{RecvError, TryRecvError},
};

/// Events buffered per subscriber before it is reported as lagged.
const DEFAULT_CAPACITY: usize = 64;

/// Publishes change events to every open subscription.
///
/// Cloning is cheap; all clones feed the same channel.
#[derive(Debug, Clone)]
pub struct ChangeNotifier {
    sender: broadcast::Sender<ChangeEvent>,
}

impl ChangeNotifier {
    /// Creates a notifier with the default buffer capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a notifier buffering up to `capacity` events per subscriber.
    ///
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publishes an event. Succeeds even when nobody is listening.
    pub fn publish(&self, event: ChangeEvent) {
        let delivered = self.sender.send(event).unwrap_or_default();
        tracing::trace!(
            table = %event.table(),
            kind = %event.kind(),
            delivered,
            "change published"
        );
    }

    /// Opens a subscription for the given tables.
    ///
    /// An empty table list subscribes to every table.
    #[must_use]
    pub fn subscribe(&self, tables: impl IntoIterator<Item = Table>) -> ChangeSubscription {
        ChangeSubscription {
            receiver: self.sender.subscribe(),
            tables: tables.into_iter().collect(),
        }
    }

    /// Returns the number of open subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Signal that a subscribed view must refetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// A subscribed table changed.
    Changed(ChangeEvent),
    /// The subscriber fell behind and missed this many events.
    Lagged(u64),
}

/// Receiving half of a [`ChangeNotifier`], filtered by table.
#[derive(Debug)]
pub struct ChangeSubscription {
    receiver: broadcast::Receiver<ChangeEvent>,
    tables: Vec<Table>,
}

impl ChangeSubscription {
    /// Waits for the next relevant notification.
    ///
    /// Returns `None` once every notifier has been dropped.
    pub async fn next(&mut self) -> Option<Notification> {
        loop {
            match self.receiver.recv().await {
                Ok(event) if self.accepts(event.table()) => {
                    return Some(Notification::Changed(event));
                }
                Ok(_) => {}
                Err(RecvError::Lagged(missed)) => return Some(Notification::Lagged(missed)),
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Returns the next relevant notification without waiting.
    pub fn try_next(&mut self) -> Option<Notification> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) if self.accepts(event.table()) => {
                    return Some(Notification::Changed(event));
                }
                Ok(_) => {}
                Err(TryRecvError::Lagged(missed)) => return Some(Notification::Lagged(missed)),
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }

    fn accepts(&self, table: Table) -> bool {
        self.tables.is_empty() || self.tables.contains(&table)
    }
}
