use serde::Serialize;

use crate::features::registrations::models::ClientInfo;

/// Template context for the participants page
#[derive(Debug, Serialize)]
pub struct ParticipantsView {
    pub participants: Vec<ClientInfo>,
}
