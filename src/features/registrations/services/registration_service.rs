use std::sync::Arc;

use crate::features::registrations::dtos::RegistrationFormDto;
use crate::features::registrations::models::ClientInfo;
use crate::features::registrations::store::RegistrationStore;
use crate::features::registrations::validator::form_errors;

/// Result of a registration form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// Record was stored
    Confirmed(ClientInfo),
    /// Record was not stored; `client` holds what was submitted
    Rejected {
        client: ClientInfo,
        errors: Vec<String>,
    },
}

/// Service for accepting training registrations
pub struct RegistrationService {
    store: Arc<RegistrationStore>,
}

impl RegistrationService {
    pub fn new(store: Arc<RegistrationStore>) -> Self {
        Self { store }
    }

    /// Validate a submitted form and store it when every required field is filled.
    ///
    /// A required field absent from the body is reported as missing rather
    /// than blank; a missing `training` is stored as an empty string.
    pub async fn register(&self, dto: RegistrationFormDto) -> RegistrationOutcome {
        let missing = dto.missing_fields();
        let client = dto.into_client();
        let errors = form_errors(&client, &missing);

        if !errors.is_empty() {
            tracing::info!(
                "Registration rejected: name={:?}, errors={:?}",
                client.name,
                errors
            );
            return RegistrationOutcome::Rejected { client, errors };
        }

        self.store.append(client.clone()).await;
        tracing::info!(
            "Registration confirmed: name={:?}, training={:?}",
            client.name,
            client.training_date
        );

        RegistrationOutcome::Confirmed(client)
    }

    /// All confirmed registrations in submission order
    pub async fn participants(&self) -> Vec<ClientInfo> {
        self.store.list().await
    }
}
