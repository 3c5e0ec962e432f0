//! Notification port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::UserId;

/// Failure to deliver a notification.
///
/// Notifications are fire-and-forget: callers log this and move on,
/// never rolling back the operation that triggered the message.
#[derive(Debug, Clone, Error)]
pub enum NotifierError {
    #[error("notification delivery failed: {0}")]
    Delivery(String),
}

/// Port for delivering user-facing notifications (email, SMS, push).
///
/// The core only calls it and never inspects delivery state.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends a message to a user.
    async fn notify(&self, user_id: &UserId, message: &str) -> Result<(), NotifierError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifier_is_object_safe() {
        fn _accepts_dyn(_notifier: &dyn Notifier) {}
    }
}
