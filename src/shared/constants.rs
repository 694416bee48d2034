/// Required text fields of the registration form, in form order
pub const REQUIRED_FIELDS: &[&str] = &["first_name", "last_name", "dob", "email", "phone"];

/// Multipart field carrying the CV document
pub const CV_FIELD: &str = "cv";

/// Minimum age in whole years to register
pub const MINIMUM_AGE_YEARS: i64 = 18;

/// Length of a year for the age check (365 days, leap days ignored)
pub const APPROX_SECONDS_PER_YEAR: i64 = 365 * 24 * 60 * 60;

/// URL prefix the upload directory is served under
pub const UPLOADS_ROUTE: &str = "/uploads";
