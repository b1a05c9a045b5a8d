use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::registrations::handlers::{self, RegistrationState};
use crate::features::registrations::services::RegistrationService;
use crate::shared::templates::Templates;

/// Create routes for the registrations feature
pub fn routes(service: Arc<RegistrationService>, templates: Arc<Templates>) -> Router {
    Router::new()
        .route(
            "/registration-form",
            get(handlers::show_registration_form).post(handlers::submit_registration_form),
        )
        .with_state(RegistrationState { service, templates })
}
