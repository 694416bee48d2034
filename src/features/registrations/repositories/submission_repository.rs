use async_trait::async_trait;
use thiserror::Error;

use crate::features::registrations::models::{NewSubmission, Submission};

/// Errors raised by submission storage adapters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionStoreError {
    /// The database could not be reached.
    #[error("submission store connection failed: {message}")]
    Connection { message: String },
    /// A statement failed or a row could not be decoded.
    #[error("submission store query failed: {message}")]
    Query { message: String },
}

impl SubmissionStoreError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Insert one submission; the identifier is assigned by storage.
    async fn insert(&self, submission: &NewSubmission) -> Result<Submission, SubmissionStoreError>;

    /// Every stored submission in storage order.
    async fn list_all(&self) -> Result<Vec<Submission>, SubmissionStoreError>;
}
