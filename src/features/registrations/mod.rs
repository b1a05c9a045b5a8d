//! Training registration form.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/registration-form` | Empty registration form |
//! | POST | `/registration-form` | Submit registration, confirm or show errors |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod validator;

pub use services::RegistrationService;
pub use store::RegistrationStore;
