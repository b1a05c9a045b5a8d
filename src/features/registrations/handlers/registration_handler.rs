use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::core::error::Result;
use crate::core::extractor::AppForm;
use crate::features::registrations::dtos::{
    ConfirmationView, RegistrationFormDto, RegistrationFormView,
};
use crate::features::registrations::models::ClientInfo;
use crate::features::registrations::services::{RegistrationOutcome, RegistrationService};
use crate::shared::constants::TRAINING_SESSIONS;
use crate::shared::templates::{Page, Templates};

/// Shared state of the registration routes
#[derive(Clone)]
pub struct RegistrationState {
    pub service: Arc<RegistrationService>,
    pub templates: Arc<Templates>,
}

/// Show the empty registration form
pub async fn show_registration_form(
    State(state): State<RegistrationState>,
) -> Result<Html<String>> {
    render_form(&state.templates, &ClientInfo::default(), &[])
}

/// Submit the registration form
///
/// Re-renders the form with the submitted values and an error list when a
/// required field is blank or missing, otherwise stores the registration and
/// shows the confirmation page.
pub async fn submit_registration_form(
    State(state): State<RegistrationState>,
    AppForm(dto): AppForm<RegistrationFormDto>,
) -> Result<Html<String>> {
    match state.service.register(dto).await {
        RegistrationOutcome::Confirmed(client) => {
            let html = state.templates.render(
                Page::TrainingConfirmed,
                ConfirmationView { name: &client.name },
            )?;
            Ok(Html(html))
        }
        RegistrationOutcome::Rejected { client, errors } => {
            render_form(&state.templates, &client, &errors)
        }
    }
}

fn render_form(
    templates: &Templates,
    client: &ClientInfo,
    errors: &[String],
) -> Result<Html<String>> {
    let html = templates.render(
        Page::RegistrationForm,
        RegistrationFormView {
            client,
            errors,
            sessions: &TRAINING_SESSIONS,
        },
    )?;
    Ok(Html(html))
}
