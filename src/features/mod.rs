pub mod pages;
pub mod registrations;

use std::sync::Arc;

use axum::{http::StatusCode, http::Uri, routing::get, Router};

use crate::core::error::AppError;
use crate::features::registrations::{RegistrationService, RegistrationStore};
use crate::shared::templates::Templates;

/// All application routes backed by `store`
pub fn router(templates: Arc<Templates>, store: Arc<RegistrationStore>) -> Router {
    let registration_service = Arc::new(RegistrationService::new(store));

    Router::new()
        .merge(pages::routes::routes(
            Arc::clone(&registration_service),
            Arc::clone(&templates),
        ))
        .merge(registrations::routes::routes(registration_service, templates))
        .route("/health", get(health_check))
        .fallback(not_found)
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No page at {}", uri.path()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;

    use crate::features::registrations::RegistrationStore;
    use crate::shared::test_helpers::test_server;

    #[tokio::test]
    async fn test_health_check() {
        let server = test_server(Arc::new(RegistrationStore::new()));
        server.get("/health").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let server = test_server(Arc::new(RegistrationStore::new()));

        let response = server.get("/api/participants").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.text(), "No page at /api/participants");
    }
}
