use chrono::NaiveDate;
use serde_json::{Map, Value};

use super::client::{validate_client_fields, NEW_CLIENT_FORM};
use super::rules::{date, filled, one_of, scalar_text, string_max};
use super::FieldErrors;
use crate::db::enums::{ProjectStatus, ProjectType};
use crate::db::models::client::NewClient;
use crate::db::store::ClientDirectory;
use crate::error::{AppError, AppResult};

pub const PROJECT_NAME_REQUIRED: &str = "Project name is required.";
pub const PROJECT_TYPE_REQUIRED: &str = "Project type is required.";
pub const CLIENT_REQUIRED: &str = "Client selection is required for external projects.";
pub const CLIENT_INVALID: &str = "The selected client ID is invalid.";
pub const CLIENT_NAME_REQUIRED: &str = "Client name is required.";
pub const START_DATE_REQUIRED: &str = "Start date is required.";
pub const DEADLINE_REQUIRED: &str = "Deadline is required.";
pub const STATUS_REQUIRED: &str = "Status is required.";
pub const START_DATE_BEFORE_DEADLINE: &str = "The start date field must be a date before deadline.";
pub const DEADLINE_AFTER_START_DATE: &str = "The deadline field must be a date after start date.";

/// `client_id` value that asks for a client to be created from the
/// `new_client_*` fields.
pub const NEW_CLIENT_SENTINEL: &str = "new";

/// Which client, if any, a validated project is attached to.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientSelection {
    None,
    Existing(i64),
    New(NewClient),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProjectInput {
    pub project_name: String,
    pub project_type: ProjectType,
    pub client: ClientSelection,
    pub start_date: NaiveDate,
    pub deadline: NaiveDate,
    pub status: ProjectStatus,
}

/// What `client_id` refers to once it has passed its rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientRef {
    New,
    Existing(i64),
}

/// Existence rule for `client_id`: the sentinel passes, anything else must
/// name a stored client. `Ok(None)` means the rule failed.
pub fn client_reference_rule<D>(value: &Value, clients: &mut D) -> AppResult<Option<ClientRef>>
where
    D: ClientDirectory + ?Sized,
{
    if value.as_str().map(str::trim) == Some(NEW_CLIENT_SENTINEL) {
        return Ok(Some(ClientRef::New));
    }
    let Some(client_id) = scalar_text(value).and_then(|text| text.parse::<i64>().ok()) else {
        return Ok(None);
    };
    if clients.client_exists(client_id)? {
        Ok(Some(ClientRef::Existing(client_id)))
    } else {
        Ok(None)
    }
}

/// Validates a raw project creation request.
///
/// Every rule is evaluated and every failure collected before returning, so
/// the caller sees the complete error set in one response. The only store
/// access is the read-only client existence check through `clients`.
pub fn validate_create_project<D>(
    input: &Map<String, Value>,
    clients: &mut D,
) -> AppResult<CreateProjectInput>
where
    D: ClientDirectory + ?Sized,
{
    let mut errors = FieldErrors::new();

    let project_name = match filled(input, "project_name") {
        Some(value) => string_max(&mut errors, "project_name", value, 255),
        None => {
            errors.add("project_name", PROJECT_NAME_REQUIRED);
            None
        }
    };

    let project_type = match filled(input, "project_type") {
        Some(value) => {
            if !value.is_string() {
                errors.add("project_type", "The project type field must be a string.");
            }
            let parsed = value.as_str().and_then(|s| s.trim().parse::<ProjectType>().ok());
            one_of(&mut errors, "project_type", parsed)
        }
        None => {
            errors.add("project_type", PROJECT_TYPE_REQUIRED);
            None
        }
    };

    let client_ref = match filled(input, "client_id") {
        Some(value) => {
            let resolved = client_reference_rule(value, clients)?;
            if resolved.is_none() {
                errors.add("client_id", CLIENT_INVALID);
            }
            resolved
        }
        None => {
            if project_type == Some(ProjectType::External) {
                errors.add("client_id", CLIENT_REQUIRED);
            }
            None
        }
    };

    let new_client = validate_client_fields(
        input,
        &NEW_CLIENT_FORM,
        client_ref == Some(ClientRef::New),
        &mut errors,
    );

    let start_date = match filled(input, "start_date") {
        Some(value) => date(&mut errors, "start_date", value),
        None => {
            errors.add("start_date", START_DATE_REQUIRED);
            None
        }
    };

    let deadline = match filled(input, "deadline") {
        Some(value) => date(&mut errors, "deadline", value),
        None => {
            errors.add("deadline", DEADLINE_REQUIRED);
            None
        }
    };

    if let (Some(start), Some(end)) = (start_date, deadline) {
        if start >= end {
            errors.add("start_date", START_DATE_BEFORE_DEADLINE);
            errors.add("deadline", DEADLINE_AFTER_START_DATE);
        }
    }

    let status = match filled(input, "status") {
        Some(value) => {
            if !value.is_string() {
                errors.add("status", "The status field must be a string.");
            }
            let parsed = value.as_str().and_then(|s| s.parse::<ProjectStatus>().ok());
            one_of(&mut errors, "status", parsed)
        }
        None => {
            errors.add("status", STATUS_REQUIRED);
            None
        }
    };

    if !errors.is_empty() {
        return Err(AppError::FieldValidation(errors));
    }

    let client = match (project_type, client_ref, new_client) {
        (Some(ProjectType::External), Some(ClientRef::New), Some(details)) => {
            ClientSelection::New(details)
        }
        (Some(ProjectType::External), Some(ClientRef::Existing(id)), _) => {
            ClientSelection::Existing(id)
        }
        _ => ClientSelection::None,
    };

    match (project_name, project_type, start_date, deadline, status) {
        (Some(project_name), Some(project_type), Some(start_date), Some(deadline), Some(status)) => {
            Ok(CreateProjectInput {
                project_name,
                project_type,
                client,
                start_date,
                deadline,
                status,
            })
        }
        _ => Err(AppError::internal("project fields missing without validation errors")),
    }
}
