//! Notifier that writes messages to the log.
//!
//! Stands in for a real email/SMS/push channel in demos and
//! single-process deployments.

use async_trait::async_trait;
use tracing::info;

use crate::domain::foundation::UserId;
use crate::ports::{Notifier, NotifierError};

/// Logs every notification at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, user_id: &UserId, message: &str) -> Result<(), NotifierError> {
        info!(%user_id, message, "notification");
        Ok(())
    }
}
