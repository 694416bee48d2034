use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::features::registrations::handlers;
use crate::features::registrations::services::RegistrationService;
use crate::shared::constants::UPLOADS_ROUTE;

/// Create routes for the registrations feature
///
/// Note: every route is public. Uploaded CVs are served from the upload
/// directory under `/uploads`.
pub fn routes(service: Arc<RegistrationService>) -> Router {
    let upload_dir = service.store().root().to_path_buf();
    // Allow body size up to the file limit + buffer for the text fields and multipart overhead
    let body_limit = service.store().max_file_size() + 1024 * 1024;

    Router::new()
        .route("/", get(handlers::show_registration_form))
        .route(
            "/register",
            post(handlers::register).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/users", get(handlers::list_registrations))
        .nest_service(UPLOADS_ROUTE, ServeDir::new(upload_dir))
        .with_state(service)
}
