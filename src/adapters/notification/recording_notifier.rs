//! Notifier that records messages in memory.
//!
//! Used by tests to assert which notifications an operation emitted,
//! and configurable to fail so the fire-and-forget contract can be
//! exercised.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::foundation::UserId;
use crate::ports::{Notifier, NotifierError};

/// Records every notification instead of delivering it.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(UserId, String)>>,
    fail_delivery: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose every delivery fails.
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_delivery: true,
        }
    }

    /// All recorded (recipient, message) pairs, in send order.
    pub fn sent(&self) -> Vec<(UserId, String)> {
        self.sent.lock().unwrap().clone()
    }

    /// Messages recorded for one recipient.
    pub fn sent_to(&self, user_id: &UserId) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| id == user_id)
            .map(|(_, msg)| msg.clone())
            .collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, user_id: &UserId, message: &str) -> Result<(), NotifierError> {
        if self.fail_delivery {
            return Err(NotifierError::Delivery("simulated outage".into()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((*user_id, message.to_string()));
        Ok(())
    }
}
