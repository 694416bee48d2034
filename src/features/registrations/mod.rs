//! Candidate registration feature.
//!
//! Accepts the registration form with a CV upload, validates and stores it,
//! and renders the list of stored registrations.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/` | No | Registration form |
//! | POST | `/register` | No | Register a candidate (multipart) |
//! | GET | `/users` | No | List registrations |
//! | GET | `/uploads/*` | No | Uploaded CV files |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod validator;

pub use repositories::PgSubmissionRepository;
pub use services::RegistrationService;
