use serde_json::{Map, Value};

use super::rules::{filled, is_digits, required_message, scalar_text, string_max};
use super::FieldErrors;
use crate::db::models::client::NewClient;
use crate::error::{AppError, AppResult};

pub const PHONE_NUMERIC: &str = "Phone number must contain only numbers.";
pub const PHONE_DIGITS: &str = "Phone number must be between 7 and 15 digits.";

pub const PHONE_MIN_DIGITS: usize = 7;
pub const PHONE_MAX_DIGITS: usize = 15;

/// Input key and "required" message for one client attribute.
#[derive(Debug, Clone, Copy)]
pub struct ClientField {
    pub key: &'static str,
    pub required: Option<&'static str>,
}

impl ClientField {
    const fn plain(key: &'static str) -> Self {
        Self { key, required: None }
    }

    fn required_message(&self) -> String {
        self.required
            .map(str::to_string)
            .unwrap_or_else(|| required_message(self.key))
    }
}

/// The five client attributes under the keys a given form uses.
#[derive(Debug, Clone, Copy)]
pub struct ClientForm {
    pub name: ClientField,
    pub company: ClientField,
    pub address: ClientField,
    pub phone: ClientField,
    pub country: ClientField,
}

/// Inline client details on the project creation form.
pub const NEW_CLIENT_FORM: ClientForm = ClientForm {
    name: ClientField {
        key: "new_client_name",
        required: Some("New client name is required if adding a new client."),
    },
    company: ClientField {
        key: "new_client_company",
        required: Some("Client company is required if adding a new client."),
    },
    address: ClientField {
        key: "new_client_address",
        required: Some("Client address is required if adding a new client."),
    },
    phone: ClientField {
        key: "new_client_phone",
        required: Some("Client phone number is required if adding a new client."),
    },
    country: ClientField {
        key: "new_client_country",
        required: Some("Client country is required if adding a new client."),
    },
};

/// Standalone client creation.
pub const CLIENT_FORM: ClientForm = ClientForm {
    name: ClientField::plain("name"),
    company: ClientField::plain("company"),
    address: ClientField::plain("address"),
    phone: ClientField::plain("phone"),
    country: ClientField::plain("country"),
};

/// Checks the five client attributes of `form`.
///
/// When `required` is false, attributes that are not filled are skipped but
/// filled ones are still checked. Returns the client only if every attribute
/// is present and valid.
pub fn validate_client_fields(
    input: &Map<String, Value>,
    form: &ClientForm,
    required: bool,
    errors: &mut FieldErrors,
) -> Option<NewClient> {
    let name = text_field(input, &form.name, 255, required, errors);
    let company = text_field(input, &form.company, 255, required, errors);
    let address = text_field(input, &form.address, 255, required, errors);
    let phone = phone_field(input, &form.phone, required, errors);
    let country = text_field(input, &form.country, 100, required, errors);

    Some(NewClient {
        name: name?,
        company: company?,
        address: address?,
        phone: phone?,
        country: country?,
    })
}

pub fn validate_create_client(input: &Map<String, Value>) -> AppResult<NewClient> {
    let mut errors = FieldErrors::new();
    match validate_client_fields(input, &CLIENT_FORM, true, &mut errors) {
        Some(client) if errors.is_empty() => Ok(client),
        _ => Err(AppError::FieldValidation(errors)),
    }
}

fn text_field(
    input: &Map<String, Value>,
    field: &ClientField,
    max: usize,
    required: bool,
    errors: &mut FieldErrors,
) -> Option<String> {
    match filled(input, field.key) {
        Some(value) => string_max(errors, field.key, value, max),
        None => {
            if required {
                errors.add(field.key, field.required_message());
            }
            None
        }
    }
}

/// `numeric|digits_between:7,15`. Both rules are reported when both fail.
fn phone_field(
    input: &Map<String, Value>,
    field: &ClientField,
    required: bool,
    errors: &mut FieldErrors,
) -> Option<String> {
    let Some(value) = filled(input, field.key) else {
        if required {
            errors.add(field.key, field.required_message());
        }
        return None;
    };

    let text = scalar_text(value).unwrap_or_default();
    let numeric = is_digits(&text);
    if !numeric {
        errors.add(field.key, PHONE_NUMERIC);
    }
    let digits = text.chars().count();
    if !numeric || !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits) {
        errors.add(field.key, PHONE_DIGITS);
        return None;
    }
    Some(text)
}
