mod registration_dto;

pub use registration_dto::{RegistrationForm, RegistrationFormDto, SubmissionView, UploadedFile};
