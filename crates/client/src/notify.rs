//! Notification sinks — where submission-failure messages go.

use tokio::sync::broadcast;

use sr_editor::Notifier;

/// Routes messages to the tracing subscriber.
///
/// The default sink when the embedding application has no toast surface of
/// its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!(message, "user notification");
    }
}

/// Fan-out sink: every message is broadcast to all current subscribers so
/// a UI shell can render toasts.
///
/// Lagging or absent subscribers are the channel's problem, not the
/// editor's; `notify` never blocks and never fails.
#[derive(Debug)]
pub struct BroadcastNotifier {
    tx: broadcast::Sender<String>,
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new(64)
    }
}

impl Notifier for BroadcastNotifier {
    fn notify(&self, message: &str) {
        let _ = self.tx.send(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn broadcast_reaches_subscriber() {
        let notifier = BroadcastNotifier::default();
        let mut rx = notifier.subscribe();

        notifier.notify("Could not save schedule: timeout");
        assert_eq!(
            rx.recv().await.unwrap(),
            "Could not save schedule: timeout"
        );
    }

    #[test]
    fn notify_without_subscribers_is_a_noop() {
        let notifier = BroadcastNotifier::default();
        notifier.notify("nobody is listening");
    }
}
