use async_trait::async_trait;
use tracing::info;

use crate::features::registrations::models::Submission;
use crate::modules::notification::{NotificationError, Notifier};

/// Notifier that only records the confirmation in the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify_registration(&self, submission: &Submission) -> Result<(), NotificationError> {
        info!(
            "Sending registration confirmation: id={}, email={}",
            submission.id, submission.email
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_log_notifier_always_succeeds() {
        let submission = Submission {
            id: 1,
            first_name: "Asha".to_string(),
            last_name: "Verma".to_string(),
            dob: NaiveDate::from_ymd_opt(2000, 5, 1).unwrap(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            cv_path: "uploads/cv.pdf".to_string(),
        };

        assert_eq!(LogNotifier.notify_registration(&submission).await, Ok(()));
    }
}
