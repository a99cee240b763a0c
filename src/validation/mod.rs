pub mod client;
pub mod project;

use std::collections::BTreeMap;

use axum::{
    async_trait,
    extract::FromRequest,
    http::Request,
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Field name → messages, one message per violated rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one error.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn contains(&self, field: &str, message: &str) -> bool {
        self.get(field)
            .is_some_and(|messages| messages.iter().any(|m| m == message))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(value)` when no rule failed.
    pub fn into_result<T>(self, value: T) -> AppResult<T> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(AppError::FieldValidation(self))
        }
    }
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            let field = field.to_string();
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("The {} field is invalid.", rules::attribute(&field)));
                out.add(&field, message);
            }
        }
        out
    }
}

/// JSON body extractor that rejects malformed bodies with a 400.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S, axum::body::Body> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<axum::body::Body>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection, "Rejected request body");
            AppError::bad_request("Invalid JSON format")
        })?;
        Ok(JsonBody(value))
    }
}

/// Validated JSON extractor for typed request bodies.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S, axum::body::Body> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<axum::body::Body>, state: &S) -> Result<Self, Self::Rejection> {
        let JsonBody(value) = JsonBody::<T>::from_request(req, state).await?;

        value
            .validate()
            .map_err(|errors| AppError::FieldValidation(errors.into()))?;

        Ok(ValidatedJson(value))
    }
}

/// Rule primitives over untyped JSON input.
///
/// Absent, `null`, blank strings and empty arrays all count as "not filled";
/// a field that is not filled only ever reports its "required" message.
pub mod rules {
    use chrono::{DateTime, NaiveDate};
    use serde_json::{Map, Value};

    use super::FieldErrors;

    pub fn filled<'a>(input: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
        match input.get(field)? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::Array(items) if items.is_empty() => None,
            value => Some(value),
        }
    }

    /// Human-readable attribute name, `new_client_name` → `new client name`.
    pub fn attribute(field: &str) -> String {
        field.replace('_', " ")
    }

    pub fn required_message(field: &str) -> String {
        format!("The {} field is required.", attribute(field))
    }

    /// `string|max:N`. Returns the trimmed string on success.
    pub fn string_max(errors: &mut FieldErrors, field: &str, value: &Value, max: usize) -> Option<String> {
        let Value::String(raw) = value else {
            errors.add(field, format!("The {} field must be a string.", attribute(field)));
            return None;
        };
        let trimmed = raw.trim();
        if trimmed.chars().count() > max {
            errors.add(
                field,
                format!(
                    "The {} field must not be greater than {} characters.",
                    attribute(field),
                    max
                ),
            );
            return None;
        }
        Some(trimmed.to_string())
    }

    /// `in:a,b,...` against an already-parsed value.
    pub fn one_of<T>(errors: &mut FieldErrors, field: &str, parsed: Option<T>) -> Option<T> {
        if parsed.is_none() {
            errors.add(field, format!("The selected {} is invalid.", attribute(field)));
        }
        parsed
    }

    /// `date`: `YYYY-MM-DD`, or an RFC 3339 timestamp truncated to its date.
    pub fn date(errors: &mut FieldErrors, field: &str, value: &Value) -> Option<NaiveDate> {
        let parsed = value.as_str().map(str::trim).and_then(|s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
        });
        if parsed.is_none() {
            errors.add(field, format!("The {} field must be a valid date.", attribute(field)));
        }
        parsed
    }

    /// Text form of a scalar, used where numbers and strings are both accepted.
    pub fn scalar_text(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn is_digits(text: &str) -> bool {
        !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
    }

}
