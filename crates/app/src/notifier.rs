//! In-process notifier backed by a tokio broadcast channel.

use std::future::Future;

use tokio::sync::broadcast;

use energyhub_domain::error::EnergyHubError;
use energyhub_domain::energy_plan::Timestamp;

use crate::ports::Notifier;

/// An alert as seen by in-process subscribers.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub raised_at: Timestamp,
}

/// In-process notifier using a tokio [`broadcast`] channel.
///
/// Every alert is logged at `WARN`. Delivery succeeds even when there are no
/// active subscribers (the alert is then only logged).
pub struct InProcessNotifier {
    sender: broadcast::Sender<Alert>,
}

impl InProcessNotifier {
    /// Create a new notifier with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to alerts sent *after* this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Alert> {
        self.sender.subscribe()
    }
}

impl Notifier for InProcessNotifier {
    fn send_alert(
        &self,
        message: String,
    ) -> impl Future<Output = Result<(), EnergyHubError>> + Send {
        tracing::warn!(alert = %message, "energy alert");
        // Zero receivers is the only send failure.
        let _ = self.sender.send(Alert {
            message,
            raised_at: chrono::Utc::now(),
        });
        async { Ok(()) }
    }
}
