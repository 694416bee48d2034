//! Outbound notifications sent after a successful registration
//!
//! The service depends on the [`Notifier`] trait only, so a real mailer can
//! replace [`LogNotifier`] without touching the registration flow.

mod log_notifier;

pub use log_notifier::LogNotifier;

use async_trait::async_trait;
use thiserror::Error;

use crate::features::registrations::models::Submission;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("notification delivery failed: {message}")]
pub struct NotificationError {
    pub message: String,
}

impl NotificationError {
    #[cfg(test)]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Tell the registrant their submission was stored
    async fn notify_registration(&self, submission: &Submission) -> Result<(), NotificationError>;
}
