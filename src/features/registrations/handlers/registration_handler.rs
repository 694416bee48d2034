use std::sync::Arc;

use axum::{extract::State, response::Html};
use minijinja::context;
use tracing::debug;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppMultipart;
use crate::features::registrations::dtos::{RegistrationForm, RegistrationFormDto, UploadedFile};
use crate::features::registrations::services::RegistrationService;
use crate::shared::constants::CV_FIELD;
use crate::shared::templates::render_page;

/// Show the registration form
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Registration form page", body = String, content_type = "text/html"),
    ),
    tag = "registrations"
)]
pub async fn show_registration_form() -> Result<Html<String>> {
    let html = render_page("register.html", context! {})
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Html(html))
}

/// Register a candidate
///
/// Accepts multipart/form-data with the text fields `first_name`,
/// `last_name`, `dob` (`YYYY-MM-DD`), `email`, `phone` and the file field `cv`.
#[utoipa::path(
    post,
    path = "/register",
    request_body(
        content = RegistrationFormDto,
        content_type = "multipart/form-data",
        description = "Registration form with the CV document",
    ),
    responses(
        (status = 200, description = "Registration stored", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing CV, empty field, invalid date, underage or invalid phone", body = String, content_type = "text/plain"),
        (status = 500, description = "CV could not be written, row could not be stored or notification failed", body = String, content_type = "text/plain")
    ),
    tag = "registrations"
)]
pub async fn register(
    State(service): State<Arc<RegistrationService>>,
    AppMultipart(mut multipart): AppMultipart,
) -> Result<&'static str> {
    let max_file_size = service.store().max_file_size();
    let mut form = RegistrationForm::default();
    let mut upload: Option<UploadedFile> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        if field_name == CV_FIELD {
            let file_name = field.file_name().unwrap_or("").to_string();

            let data = field.bytes().await.map_err(|e| {
                debug!("Failed to read file bytes: {}", e);
                AppError::BadRequest(format!("Failed to read file data: {}", e))
            })?;

            // Browsers send an empty, unnamed part when no file was chosen
            if file_name.is_empty() {
                debug!("Ignoring cv part without a filename");
                continue;
            }

            if data.len() > max_file_size {
                return Err(AppError::BadRequest(format!(
                    "File too large. Maximum size is {} bytes ({} MB)",
                    max_file_size,
                    max_file_size / 1024 / 1024
                )));
            }

            upload = Some(UploadedFile {
                file_name,
                data: data.to_vec(),
            });
        } else {
            let text = field.text().await.map_err(|e| {
                AppError::BadRequest(format!("Failed to read {} field: {}", field_name, e))
            })?;

            if !form.set_field(&field_name, text) {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    service.register(form, upload).await?;

    Ok("Registration successful")
}

/// List every registration
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Registration listing page", body = String, content_type = "text/html"),
        (status = 500, description = "Registrations could not be fetched", body = String, content_type = "text/plain")
    ),
    tag = "registrations"
)]
pub async fn list_registrations(
    State(service): State<Arc<RegistrationService>>,
) -> Result<Html<String>> {
    let users = service.list_views().await?;

    let html = render_page("users.html", context! { users => users })
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(Html(html))
}
