//! Template engine for the HTML pages.
//!
//! Page templates live in the top-level `templates/` directory and are
//! compiled into the binary, so rendering never touches the filesystem.

use minijinja::{Environment, Value};
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Templates bundled with the binary, by name
const PAGES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../../templates/layout.html")),
    ("register.html", include_str!("../../../templates/register.html")),
    ("users.html", include_str!("../../../templates/users.html")),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

/// Build the environment with every bundled page.
///
/// Names ending in `.html` are auto-escaped by minijinja.
fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();

    for (name, source) in PAGES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded template: {}", name);
        }
    }

    env
}

fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a page template with the given context.
///
/// # Example
/// ```ignore
/// use minijinja::context;
///
/// let html = render_page("users.html", context! { users => views })?;
/// ```
pub fn render_page(template_name: &str, ctx: Value) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_missing_template() {
        let result = render_page("definitely_not_a_real_template.html", context! {});
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
    }

    #[test]
    fn test_register_page_has_every_field() {
        let html = render_page("register.html", context! {}).unwrap();

        for field in ["first_name", "last_name", "dob", "email", "phone", "cv"] {
            assert!(html.contains(&format!("name=\"{}\"", field)), "missing {field}");
        }
        assert!(html.contains("multipart/form-data"));
    }

    #[test]
    fn test_users_page_escapes_values() {
        let users = vec![context! {
            first_name => "<script>",
            last_name => "Verma",
            dob => "2000-05-01",
            email => "asha@example.com",
            phone => "9876543210",
            cv_url => "/uploads/cv.pdf",
        }];

        let html = render_page("users.html", context! { users => users }).unwrap();

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("cv.pdf"));
    }

    #[test]
    fn test_users_page_empty_state() {
        let empty: Vec<Value> = Vec::new();
        let html = render_page("users.html", context! { users => empty }).unwrap();

        assert!(html.contains("No registrations yet"));
    }
}
