use crate::db::enums::{ProjectStatus, ProjectType};
use chrono::NaiveDate;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

// Project models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Project {
    pub id: i64,
    pub client_id: Option<i64>,
    pub client_name: Option<String>,
    pub project_name: String,
    pub start_date: NaiveDate,
    pub deadline: NaiveDate,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable, Clone, Debug, PartialEq)]
#[diesel(table_name = crate::schema::projects)]
pub struct NewProject {
    pub client_id: Option<i64>,
    pub client_name: Option<String>,
    pub project_name: String,
    pub start_date: NaiveDate,
    pub deadline: NaiveDate,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
}

/// Partial update. `None` leaves the column untouched.
#[derive(AsChangeset, Clone, Debug)]
#[diesel(table_name = crate::schema::projects)]
pub struct ProjectChanges {
    pub project_name: Option<String>,
    pub project_type: Option<ProjectType>,
    pub client_id: Option<i64>,
    pub client_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    pub status: Option<ProjectStatus>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl ProjectChanges {
    /// Applies the changes to an in-memory copy of the row.
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(name) = &self.project_name {
            project.project_name = name.clone();
        }
        if let Some(project_type) = self.project_type {
            project.project_type = project_type;
        }
        if let Some(client_id) = self.client_id {
            project.client_id = Some(client_id);
        }
        if let Some(client_name) = &self.client_name {
            project.client_name = Some(client_name.clone());
        }
        if let Some(start_date) = self.start_date {
            project.start_date = start_date;
        }
        if let Some(deadline) = self.deadline {
            project.deadline = deadline;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        project.updated_at = self.updated_at;
    }
}

// Project API DTOs
#[derive(Deserialize, Validate, Default, Debug)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = 255, message = "Project name must be between 1 and 255 characters."))]
    pub project_name: Option<String>,
    pub project_type: Option<ProjectType>,
    pub client_id: Option<i64>,
    #[validate(length(min = 1, max = 255, message = "Client name must be between 1 and 255 characters."))]
    pub client_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    pub status: Option<ProjectStatus>,
}

impl UpdateProjectRequest {
    pub fn into_changes(self, now: chrono::DateTime<chrono::Utc>) -> ProjectChanges {
        ProjectChanges {
            project_name: self.project_name.map(|s| s.trim().to_string()),
            project_type: self.project_type,
            client_id: self.client_id,
            client_name: self.client_name.map(|s| s.trim().to_string()),
            start_date: self.start_date,
            deadline: self.deadline,
            status: self.status,
            updated_at: now,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct ProjectListQuery {
    pub page: Option<i64>,
}

#[derive(Serialize)]
pub struct ProjectCreatedResponse {
    pub message: String,
    pub project: Project,
}
