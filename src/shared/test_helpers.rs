#[cfg(test)]
use std::path::PathBuf;
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use axum::Router;
#[cfg(test)]
use axum_test::TestServer;

#[cfg(test)]
use crate::features::registrations::RegistrationStore;
#[cfg(test)]
use crate::shared::templates::Templates;

#[cfg(test)]
pub fn templates_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}

#[cfg(test)]
pub fn load_templates() -> Arc<Templates> {
    Arc::new(Templates::load(templates_dir()).expect("templates should load"))
}

/// Full application router backed by the given store
#[cfg(test)]
pub fn test_app(store: Arc<RegistrationStore>) -> Router {
    crate::features::router(load_templates(), store)
}

#[cfg(test)]
pub fn test_server(store: Arc<RegistrationStore>) -> TestServer {
    TestServer::new(test_app(store)).expect("test server should start")
}
