//! Realtime change notifications.
//!
//! Services publish a [`ChangeEvent`] after every successful mutation. Open
//! views hold a [`ChangeSubscription`] and refetch their data whenever it
//! yields a [`Notification`]; the payload only says which table moved, never
//! what the new rows are.

mod event;
mod notifier;

pub use event::{ChangeEvent, ChangeKind, Table};
pub use notifier::{ChangeNotifier, ChangeSubscription, Notification};
