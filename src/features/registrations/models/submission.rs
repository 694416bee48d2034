use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// Database model for a stored registration (table `users`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Submission {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub email: String,
    pub phone: String,
    pub cv_path: String,
}

/// Validated registration ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub email: String,
    pub phone: String,
    pub cv_path: String,
}
