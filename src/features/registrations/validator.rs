use validator::{Validate, ValidationError};

use crate::features::registrations::models::ClientInfo;
use crate::shared::constants::{
    EMAIL_MISSING, EMAIL_REQUIRED, NAME_MISSING, NAME_REQUIRED, PHONE_MISSING, PHONE_REQUIRED,
};

/// Characters stripped from both ends of submitted text fields
const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r'];

/// Required fields in the order their errors are reported, with the
/// message for a blank value and for a field absent from the form body
pub const REQUIRED_FIELDS: [(&str, &str, &str); 3] = [
    ("name", NAME_REQUIRED, NAME_MISSING),
    ("email", EMAIL_REQUIRED, EMAIL_MISSING),
    ("phone", PHONE_REQUIRED, PHONE_MISSING),
];

pub fn clean(value: &str) -> &str {
    value.trim_matches(TRIM_CHARS)
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if clean(value).is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Human-readable errors for every blank required field, ordered name, email, phone.
///
/// Only presence is checked; email and phone formats are accepted as typed.
pub fn validation_errors(client: &ClientInfo) -> Vec<String> {
    form_errors(client, &[])
}

/// Errors for a submitted form, one per required field in field order.
///
/// Fields listed in `missing` were absent from the form body and report that
/// instead of being blank.
pub fn form_errors(client: &ClientInfo, missing: &[&str]) -> Vec<String> {
    let blank = blank_fields(client);

    REQUIRED_FIELDS
        .iter()
        .filter_map(|(field, required, absent)| {
            if missing.contains(field) {
                Some(*absent)
            } else if blank.contains(field) {
                Some(*required)
            } else {
                None
            }
        })
        .map(str::to_string)
        .collect()
}

fn blank_fields(client: &ClientInfo) -> Vec<&'static str> {
    let Err(errors) = client.validate() else {
        return Vec::new();
    };

    let field_errors = errors.field_errors();
    REQUIRED_FIELDS
        .iter()
        .map(|(field, _, _)| *field)
        .filter(|field| field_errors.contains_key(*field))
        .collect()
}
