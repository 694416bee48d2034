//! Field checks for a registration form.
//!
//! Checks run in a fixed order and stop at the first failure:
//! required fields, date shape, minimum age, phone shape.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;
use validator::Validate;

use crate::features::registrations::dtos::RegistrationForm;
use crate::shared::constants::{APPROX_SECONDS_PER_YEAR, MINIMUM_AGE_YEARS, REQUIRED_FIELDS};
use crate::shared::validation::{DATE_REGEX, PHONE_REGEX};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Names of the empty required fields, in form order
    #[error("Please fill in all fields")]
    MissingField(Vec<String>),

    #[error("Invalid date format")]
    InvalidDate,

    #[error("Age should be at least 18 years")]
    Underage,

    #[error("Invalid phone number")]
    InvalidPhone,
}

/// Form fields that passed every check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRegistration {
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub email: String,
    pub phone: String,
}

pub fn validate(
    form: &RegistrationForm,
    now: DateTime<Utc>,
) -> Result<ValidatedRegistration, ValidationError> {
    if let Err(errors) = form.validate() {
        let mut missing: Vec<String> = errors.errors().keys().map(|k| k.to_string()).collect();
        missing.sort_by_key(|name| {
            REQUIRED_FIELDS
                .iter()
                .position(|field| *field == name.as_str())
                .unwrap_or(usize::MAX)
        });
        return Err(ValidationError::MissingField(missing));
    }

    let dob = parse_dob(&form.dob)?;

    if age_in_years(dob, now) < MINIMUM_AGE_YEARS {
        return Err(ValidationError::Underage);
    }

    if !PHONE_REGEX.is_match(&form.phone) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(ValidatedRegistration {
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        dob,
        email: form.email.clone(),
        phone: form.phone.clone(),
    })
}

/// Parse a strict `YYYY-MM-DD` calendar date
pub fn parse_dob(value: &str) -> Result<NaiveDate, ValidationError> {
    if !DATE_REGEX.is_match(value) {
        return Err(ValidationError::InvalidDate);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)
}

/// Whole years elapsed since midnight UTC on `dob`, counting every year as
/// 365 days. Leap days are ignored, so the result can turn over a few days
/// before the real birthday. Future dates give zero or less.
pub fn age_in_years(dob: NaiveDate, now: DateTime<Utc>) -> i64 {
    let born = dob.and_time(chrono::NaiveTime::MIN).and_utc();
    (now - born).num_seconds() / APPROX_SECONDS_PER_YEAR
}
