pub mod registration_dto;

pub use registration_dto::{ConfirmationView, RegistrationFormDto, RegistrationFormView};
