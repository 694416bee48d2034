use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::database::is_connection_error;
use crate::features::registrations::models::{NewSubmission, Submission};
use crate::features::registrations::repositories::{SubmissionRepository, SubmissionStoreError};

const INSERT_SUBMISSION: &str = r#"
    INSERT INTO users (first_name, last_name, dob, email, phone, cv_path)
    VALUES ($1, $2, $3, $4, $5, $6)
    RETURNING id, first_name, last_name, dob, email, phone, cv_path
"#;

const SELECT_ALL_SUBMISSIONS: &str = r#"
    SELECT id, first_name, last_name, dob, email, phone, cv_path
    FROM users
"#;

/// PostgreSQL-backed submission storage on the shared pool
pub struct PgSubmissionRepository {
    pool: PgPool,
}

impl PgSubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_sqlx_error(e: sqlx::Error) -> SubmissionStoreError {
    if is_connection_error(&e) {
        SubmissionStoreError::connection(e.to_string())
    } else {
        SubmissionStoreError::query(e.to_string())
    }
}

#[async_trait]
impl SubmissionRepository for PgSubmissionRepository {
    async fn insert(&self, submission: &NewSubmission) -> Result<Submission, SubmissionStoreError> {
        sqlx::query_as::<_, Submission>(INSERT_SUBMISSION)
        .bind(&submission.first_name)
        .bind(&submission.last_name)
        .bind(submission.dob)
        .bind(&submission.email)
        .bind(&submission.phone)
        .bind(&submission.cv_path)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn list_all(&self) -> Result<Vec<Submission>, SubmissionStoreError> {
        sqlx::query_as::<_, Submission>(SELECT_ALL_SUBMISSIONS)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }
}
