mod pg_submission_repository;
mod submission_repository;

pub use pg_submission_repository::PgSubmissionRepository;
pub use submission_repository::{SubmissionRepository, SubmissionStoreError};
