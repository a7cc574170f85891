//! Shutdown coordination for the prober.

use tokio::sync::broadcast;

/// Coordinator for stopping the probe loop.
///
/// Provides a broadcast channel that the prober (and anything else long-running) subscribes to.
#[derive(Debug, Clone)]
pub struct Shutdown {
    /// Broadcast channel sender. Dropping every clone closes the channel without firing it.
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a shutdown coordinator with no subscribers.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    ///
    /// Only receivers subscribed before `trigger` observe it.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Fire the shutdown signal. A no-op when nobody is subscribed.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Number of live subscribers.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
