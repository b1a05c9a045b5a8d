use serde::Serialize;
use validator::Validate;

/// One confirmed (or candidate) training registration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Validate)]
pub struct ClientInfo {
    #[validate(custom(function = "crate::features::registrations::validator::not_blank"))]
    pub name: String,

    #[validate(custom(function = "crate::features::registrations::validator::not_blank"))]
    pub email: String,

    #[validate(custom(function = "crate::features::registrations::validator::not_blank"))]
    pub phone: String,

    /// Chosen training session, free-form
    pub training_date: String,

    pub already_client: bool,
}

impl ClientInfo {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        training_date: impl Into<String>,
        already_client: bool,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            training_date: training_date.into(),
            already_client,
        }
    }
}
