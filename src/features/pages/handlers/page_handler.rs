use std::sync::Arc;

use axum::{extract::State, response::Html};
use minijinja::context;

use crate::core::error::Result;
use crate::features::pages::dtos::ParticipantsView;
use crate::features::registrations::dtos::RegistrationFormView;
use crate::features::registrations::models::ClientInfo;
use crate::features::registrations::RegistrationService;
use crate::shared::templates::{Page, Templates};

#[derive(Clone)]
pub struct PagesState {
    pub service: Arc<RegistrationService>,
    pub templates: Arc<Templates>,
}

/// Landing page of the promotion
pub async fn main_page(State(state): State<PagesState>) -> Result<Html<String>> {
    Ok(Html(state.templates.render(Page::MainPage, context! {})?))
}

/// Everyone who signed up, in registration order
pub async fn participants(State(state): State<PagesState>) -> Result<Html<String>> {
    let participants = state.service.participants().await;
    tracing::debug!("Rendering {} participants", participants.len());

    let html = state
        .templates
        .render(Page::Participants, ParticipantsView { participants })?;
    Ok(Html(html))
}

/// Static rejection page, only reachable by direct navigation
pub async fn training_rejected(State(state): State<PagesState>) -> Result<Html<String>> {
    let client = ClientInfo::default();
    let html = state.templates.render(
        Page::TrainingRejected,
        RegistrationFormView {
            client: &client,
            errors: &[],
            sessions: &[],
        },
    )?;
    Ok(Html(html))
}
