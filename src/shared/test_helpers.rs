use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use tempfile::TempDir;

use crate::core::config::{UploadConfig, UploadNaming};
use crate::features::registrations::dtos::{RegistrationForm, UploadedFile};
use crate::features::registrations::models::{NewSubmission, Submission};
use crate::features::registrations::repositories::{SubmissionRepository, SubmissionStoreError};
use crate::features::registrations::routes;
use crate::features::registrations::RegistrationService;
use crate::modules::notification::{NotificationError, Notifier};
use crate::modules::storage::LocalFileStore;

/// A complete, valid registration with generated names and email
pub fn sample_form() -> RegistrationForm {
    RegistrationForm {
        first_name: FirstName().fake(),
        last_name: LastName().fake(),
        dob: "1995-08-15".to_string(),
        email: SafeEmail().fake(),
        phone: "+919876543210".to_string(),
    }
}

pub fn sample_upload(file_name: &str, data: &[u8]) -> UploadedFile {
    UploadedFile {
        file_name: file_name.to_string(),
        data: data.to_vec(),
    }
}

/// Submission storage kept in memory, with ids assigned on insert
#[derive(Default)]
pub struct InMemorySubmissionRepository {
    rows: Mutex<Vec<Submission>>,
    failure: Option<SubmissionStoreError>,
}

impl InMemorySubmissionRepository {
    /// Every call fails as a rejected statement
    pub fn failing() -> Self {
        Self {
            rows: Mutex::default(),
            failure: Some(SubmissionStoreError::query("relation \"users\" does not exist")),
        }
    }

    /// Every call fails as if the database were down
    pub fn unreachable() -> Self {
        Self {
            rows: Mutex::default(),
            failure: Some(SubmissionStoreError::connection("pool timed out")),
        }
    }

    pub fn rows(&self) -> Vec<Submission> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn insert(&self, submission: &NewSubmission) -> Result<Submission, SubmissionStoreError> {
        if let Some(e) = &self.failure {
            return Err(e.clone());
        }

        let mut rows = self.rows.lock().unwrap();
        let stored = Submission {
            id: rows.len() as i64 + 1,
            first_name: submission.first_name.clone(),
            last_name: submission.last_name.clone(),
            dob: submission.dob,
            email: submission.email.clone(),
            phone: submission.phone.clone(),
            cv_path: submission.cv_path.clone(),
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<Submission>, SubmissionStoreError> {
        if let Some(e) = &self.failure {
            return Err(e.clone());
        }
        Ok(self.rows())
    }
}

/// Notifier that counts deliveries
#[derive(Default)]
pub struct RecordingNotifier {
    sent: AtomicUsize,
}

impl RecordingNotifier {
    pub fn count(&self) -> usize {
        self.sent.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_registration(&self, _submission: &Submission) -> Result<(), NotificationError> {
        self.sent.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Notifier whose delivery always fails
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify_registration(&self, _submission: &Submission) -> Result<(), NotificationError> {
        Err(NotificationError::new("smtp relay refused connection"))
    }
}

/// Registration service wired to in-memory storage and a temporary upload directory
pub struct TestContext {
    pub service: Arc<RegistrationService>,
    pub repository: Arc<InMemorySubmissionRepository>,
    pub notifier: Arc<RecordingNotifier>,
    dir: TempDir,
}

impl TestContext {
    pub fn new(naming: UploadNaming) -> Self {
        Self::with_repository(naming, InMemorySubmissionRepository::default())
    }

    pub fn with_repository(naming: UploadNaming, repository: InMemorySubmissionRepository) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let repository = Arc::new(repository);
        let notifier = Arc::new(RecordingNotifier::default());
        let service = Arc::new(RegistrationService::new(
            repository.clone(),
            Arc::new(Self::store_in(dir.path(), naming)),
            notifier.clone(),
        ));

        Self {
            service,
            repository,
            notifier,
            dir,
        }
    }

    pub fn store_in(dir: &Path, naming: UploadNaming) -> LocalFileStore {
        LocalFileStore::new(&UploadConfig {
            dir: dir.to_string_lossy().into_owned(),
            naming,
            max_file_size: 1024 * 1024,
        })
    }

    pub fn upload_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn router(&self) -> Router {
        routes::routes(self.service.clone())
    }
}
