use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::pages::handlers::{self, PagesState};
use crate::features::registrations::RegistrationService;
use crate::shared::templates::Templates;

/// Create routes for the static and read-only pages
pub fn routes(service: Arc<RegistrationService>, templates: Arc<Templates>) -> Router {
    Router::new()
        .route("/", get(handlers::main_page))
        .route("/participants", get(handlers::participants))
        .route("/training-rejected", get(handlers::training_rejected))
        .with_state(PagesState { service, templates })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::features::registrations::models::ClientInfo;
    use crate::features::registrations::RegistrationStore;
    use crate::shared::test_helpers::test_server;

    #[tokio::test]
    async fn test_main_page() {
        let server = test_server(Arc::new(RegistrationStore::new()));

        let response = server.get("/").await;

        response.assert_status_ok();
        assert!(response.text().contains(r#"href="/registration-form""#));
    }

    #[tokio::test]
    async fn test_participants_lists_store_in_order() {
        let store = Arc::new(RegistrationStore::with_sample_data());
        store
            .append(ClientInfo::new("Olga", "olga@example.com", "555", "13.08, Zumba", false))
            .await;
        let server = test_server(Arc::clone(&store));

        let response = server.get("/participants").await;

        response.assert_status_ok();
        let html = response.text();
        let positions: Vec<usize> = ["Anna", "Roma Sh.", "Mikhail Kapitanov", "Marusya", "Olga"]
            .iter()
            .map(|name| html.find(&format!("<td>{name}</td>")).expect(name))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_participants_shows_new_registration() {
        let store = Arc::new(RegistrationStore::new());
        let server = test_server(Arc::clone(&store));

        let before = server.get("/participants").await.text();
        assert!(before.contains("Nobody has signed up yet."));

        server
            .post("/registration-form")
            .form(&[
                ("name", "Liliya Svekla"),
                ("email", "l.svekla@gmail.com"),
                ("phone", "+12 (34) 99-21-1"),
                ("training", "13.08, Zumba"),
            ])
            .await
            .assert_status_ok();

        let after = server.get("/participants").await.text();
        assert!(after.contains("<td>Liliya Svekla</td>"));
        assert!(after.contains("<td>l.svekla@gmail.com</td>"));
        assert!(after.contains("<td>+12 (34) 99-21-1</td>"));
        assert!(after.contains("<td>13.08, Zumba</td>"));
        assert!(after.contains("<td>no</td>"));
    }

    #[tokio::test]
    async fn test_training_rejected_is_static() {
        let store = Arc::new(RegistrationStore::new());
        let server = test_server(Arc::clone(&store));

        let response = server.get("/training-rejected").await;

        response.assert_status_ok();
        assert!(response.text().contains("could not book your training"));
        assert_eq!(store.len().await, 0);
    }
}
