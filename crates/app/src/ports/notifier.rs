//! Notifier port — delivery of overload alerts.

use std::future::Future;

use energyhub_domain::error::EnergyHubError;

/// Sends human-readable alerts somewhere a person will see them.
pub trait Notifier {
    /// Deliver a single alert message.
    fn send_alert(
        &self,
        message: String,
    ) -> impl Future<Output = Result<(), EnergyHubError>> + Send;
}

impl<T: Notifier + Send + Sync> Notifier for std::sync::Arc<T> {
    fn send_alert(
        &self,
        message: String,
    ) -> impl Future<Output = Result<(), EnergyHubError>> + Send {
        (**self).send_alert(message)
    }
}
