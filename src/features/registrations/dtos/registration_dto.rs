use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::features::registrations::models::Submission;

/// Text fields of the registration form, exactly as received.
/// Absent fields are left empty.
#[derive(Debug, Clone, Default, Validate)]
pub struct RegistrationForm {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(length(min = 1))]
    pub dob: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
}

impl RegistrationForm {
    /// Assign a multipart text field by name. Returns false for unknown names.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "first_name" => &mut self.first_name,
            "last_name" => &mut self.last_name,
            "dob" => &mut self.dob,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// Uploaded CV file
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// Registration request for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler reads the multipart body field by field.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct RegistrationFormDto {
    #[schema(example = "Asha")]
    pub first_name: String,
    #[schema(example = "Verma")]
    pub last_name: String,
    /// Date of birth, `YYYY-MM-DD`
    #[schema(example = "2000-05-01")]
    pub dob: String,
    #[schema(example = "asha@example.com")]
    pub email: String,
    /// Optional `+91` or `0` prefix, then ten digits starting with 6-9
    #[schema(example = "+919876543210")]
    pub phone: String,
    /// The CV document
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub cv: String,
}

/// One row of the listing page
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionView {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub email: String,
    pub phone: String,
    pub cv_path: String,
    pub cv_url: String,
}

impl SubmissionView {
    pub fn new(submission: Submission, cv_url: String) -> Self {
        Self {
            id: submission.id,
            first_name: submission.first_name,
            last_name: submission.last_name,
            dob: submission.dob,
            email: submission.email,
            phone: submission.phone,
            cv_path: submission.cv_path,
            cv_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_known_and_unknown_names() {
        let mut form = RegistrationForm::default();

        assert!(form.set_field("first_name", "Asha".to_string()));
        assert!(form.set_field("phone", "9876543210".to_string()));
        assert!(!form.set_field("middle_name", "K".to_string()));

        assert_eq!(form.first_name, "Asha");
        assert_eq!(form.phone, "9876543210");
        assert!(form.last_name.is_empty());
    }
}
