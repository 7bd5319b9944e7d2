//! Fire-and-forget notification of state changes to other viewers.
//!
//! Services call [`Notifier::notify`] after each phase of a change. Delivery
//! is best effort: a notifier never fails the operation that triggered it.

use tokio::sync::broadcast;
use tracing::trace;

/// Sink for change events of type `E`.
pub trait Notifier<E>: Send + Sync {
    /// Publishes an event. Must not block.
    fn notify(&self, event: E);
}

/// Notifier that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl<E> Notifier<E> for NoopNotifier {
    fn notify(&self, _event: E) {}
}

/// Notifier fanning events out to any number of subscribers.
///
/// Slow subscribers lag and lose the oldest events; with no subscribers the
/// event is dropped.
#[derive(Debug, Clone)]
pub struct BroadcastNotifier<E> {
    sender: broadcast::Sender<E>,
}

impl<E> BroadcastNotifier<E>
where
    E: Clone,
{
    /// Creates a notifier buffering up to `capacity` events per subscriber.
    ///
    /// A `capacity` of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribes to events published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<E> {
        self.sender.subscribe()
    }
}

impl<E> Notifier<E> for BroadcastNotifier<E>
where
    E: Clone + Send + Sync + 'static,
{
    fn notify(&self, event: E) {
        if self.sender.send(event).is_err() {
            trace!("change event dropped: no subscribers");
        }
    }
}
