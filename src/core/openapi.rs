use utoipa::{Modify, OpenApi};

use crate::features::registrations::{
    dtos as registrations_dtos, handlers as registrations_handlers,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        registrations_handlers::show_registration_form,
        registrations_handlers::register,
        registrations_handlers::list_registrations,
    ),
    components(
        schemas(
            registrations_dtos::RegistrationFormDto,
        )
    ),
    tags(
        (name = "registrations", description = "Candidate registration form and listing (public)"),
    ),
    info(
        title = "Candidate Registry API",
        version = "0.1.0",
        description = "Candidate registration form and listing",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
