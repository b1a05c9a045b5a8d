use serde::{Deserialize, Serialize};

use crate::features::registrations::models::ClientInfo;
use crate::features::registrations::validator::clean;

/// Raw body of the registration form.
///
/// Every field is optional so that a hand-crafted request missing a field is
/// reported back to the user instead of failing to deserialize.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationFormDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub training: Option<String>,
    #[serde(rename = "already-client")]
    pub already_client: Option<String>,
}

impl RegistrationFormDto {
    /// Required fields absent from the body, in field order.
    ///
    /// `training` is free-form and `already-client` is a checkbox that is
    /// omitted when unchecked, so neither is ever reported.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn into_client(self) -> ClientInfo {
        ClientInfo {
            name: self.name.as_deref().map(clean).unwrap_or_default().to_string(),
            email: self.email.as_deref().map(clean).unwrap_or_default().to_string(),
            phone: self.phone.as_deref().map(clean).unwrap_or_default().to_string(),
            training_date: self.training.unwrap_or_default(),
            already_client: self.already_client.as_deref() == Some("true"),
        }
    }
}

/// Template context for the registration form page
#[derive(Debug, Serialize)]
pub struct RegistrationFormView<'a> {
    pub client: &'a ClientInfo,
    pub errors: &'a [String],
    pub sessions: &'a [&'static str],
}

/// Template context for the confirmation page
#[derive(Debug, Serialize)]
pub struct ConfirmationView<'a> {
    pub name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> RegistrationFormDto {
        RegistrationFormDto {
            name: Some("Anna".to_string()),
            email: Some("anna@gmail.com".to_string()),
            phone: Some("+12 (34) 56-78-9".to_string()),
            training: Some("7.08, Bachata".to_string()),
            already_client: Some("true".to_string()),
        }
    }

    #[test]
    fn test_into_client_trims_contact_fields() {
        let dto = RegistrationFormDto {
            name: Some("  Anna  ".to_string()),
            email: Some("\tanna@gmail.com\n".to_string()),
            phone: Some(" 123 ".to_string()),
            training: Some(" 7.08, Bachata ".to_string()),
            ..complete_form()
        };

        let client = dto.into_client();
        assert_eq!(client.name, "Anna");
        assert_eq!(client.email, "anna@gmail.com");
        assert_eq!(client.phone, "123");
        assert_eq!(client.training_date, " 7.08, Bachata ");
    }

    #[test]
    fn test_already_client_requires_literal_true() {
        assert!(complete_form().into_client().already_client);

        for value in [Some("on"), Some("TRUE"), Some("1"), Some(""), None] {
            let dto = RegistrationFormDto {
                already_client: value.map(str::to_string),
                ..complete_form()
            };
            assert!(!dto.into_client().already_client, "{:?}", value);
        }
    }

    #[test]
    fn test_missing_fields() {
        assert!(complete_form().missing_fields().is_empty());

        let dto = RegistrationFormDto {
            email: None,
            ..complete_form()
        };
        assert_eq!(dto.missing_fields(), vec!["email"]);

        assert_eq!(
            RegistrationFormDto::default().missing_fields(),
            vec!["name", "email", "phone"]
        );
    }

    #[test]
    fn test_optional_fields_are_never_missing() {
        let dto = RegistrationFormDto {
            training: None,
            already_client: None,
            ..complete_form()
        };
        assert!(dto.missing_fields().is_empty());

        let client = dto.into_client();
        assert_eq!(client.training_date, "");
        assert!(!client.already_client);
    }

    #[test]
    fn test_empty_field_is_not_missing() {
        let dto = RegistrationFormDto {
            name: Some(String::new()),
            ..complete_form()
        };
        assert!(dto.missing_fields().is_empty());
    }
}
