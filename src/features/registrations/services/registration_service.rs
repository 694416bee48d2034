use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use crate::core::error::{AppError, Result};
use crate::features::registrations::dtos::{RegistrationForm, SubmissionView, UploadedFile};
use crate::features::registrations::models::{NewSubmission, Submission};
use crate::features::registrations::repositories::{SubmissionRepository, SubmissionStoreError};
use crate::features::registrations::validator;
use crate::modules::notification::Notifier;
use crate::modules::storage::LocalFileStore;

/// Service for candidate registrations
pub struct RegistrationService {
    repository: Arc<dyn SubmissionRepository>,
    store: Arc<LocalFileStore>,
    notifier: Arc<dyn Notifier>,
}

impl RegistrationService {
    pub fn new(
        repository: Arc<dyn SubmissionRepository>,
        store: Arc<LocalFileStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            repository,
            store,
            notifier,
        }
    }

    pub fn store(&self) -> &LocalFileStore {
        &self.store
    }

    /// Register a candidate as of the current time
    pub async fn register(
        &self,
        form: RegistrationForm,
        upload: Option<UploadedFile>,
    ) -> Result<Submission> {
        self.register_at(form, upload, Utc::now()).await
    }

    /// Register a candidate, evaluating the age check at `now`.
    ///
    /// Steps run in order and the first failure aborts the request. The
    /// uploaded file is already on disk when the insert or the notification
    /// fails; it is not removed.
    pub async fn register_at(
        &self,
        form: RegistrationForm,
        upload: Option<UploadedFile>,
        now: DateTime<Utc>,
    ) -> Result<Submission> {
        let upload = upload.ok_or(AppError::MissingUpload)?;
        let key = self.store.storage_key(&upload.file_name)?;

        let validated = validator::validate(&form, now)?;

        let stored = self.store.save(key, &upload.data).await?;
        debug!("CV stored under key {}", stored.key);

        let new_submission = NewSubmission {
            first_name: validated.first_name,
            last_name: validated.last_name,
            dob: validated.dob,
            email: validated.email,
            phone: validated.phone,
            cv_path: stored.path,
        };

        let submission = self
            .repository
            .insert(&new_submission)
            .await
            .map_err(|e| {
                error!("Failed to insert submission: {}", e);
                AppError::Persistence(e.to_string())
            })?;

        info!(
            "Submission stored: id={}, cv_path={}",
            submission.id, submission.cv_path
        );

        self.notifier
            .notify_registration(&submission)
            .await
            .map_err(|e| AppError::Notification(e.to_string()))?;

        Ok(submission)
    }

    /// Every stored submission, in storage order
    pub async fn list_all(&self) -> Result<Vec<Submission>> {
        self.repository.list_all().await.map_err(|e| match e {
            SubmissionStoreError::Connection { message } => AppError::Connection(message),
            SubmissionStoreError::Query { message } => AppError::Query(message),
        })
    }

    /// Every stored submission with the public URL of its CV
    pub async fn list_views(&self) -> Result<Vec<SubmissionView>> {
        let submissions = self.list_all().await?;
        Ok(submissions
            .into_iter()
            .map(|s| {
                let cv_url = self.store.public_url(&s.cv_path);
                SubmissionView::new(s, cv_url)
            })
            .collect())
    }
}
