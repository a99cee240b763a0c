use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::{
    db::enums::ProjectType,
    db::models::api::{Page, Pagination},
    db::models::project::{NewProject, Project, UpdateProjectRequest},
    db::store::ProjectStore,
    error::{AppError, AppResult},
    services::clients_service::ClientResolver,
    validation::project::{
        validate_create_project, CLIENT_INVALID, CLIENT_NAME_REQUIRED, CLIENT_REQUIRED,
        DEADLINE_AFTER_START_DATE, PROJECT_NAME_REQUIRED, START_DATE_BEFORE_DEADLINE,
    },
    validation::FieldErrors,
};

pub struct ProjectsService;

impl ProjectsService {
    /// Validate, resolve the client, persist.
    ///
    /// Client creation and the project insert share one transaction, so a
    /// failed project insert never leaves a client behind.
    pub fn create<S: ProjectStore>(store: &mut S, input: &Map<String, Value>) -> AppResult<Project> {
        let validated = match validate_create_project(input, store) {
            Ok(validated) => validated,
            Err(AppError::FieldValidation(errors)) => {
                warn!(fields = ?errors.fields().collect::<Vec<_>>(), "Project creation rejected");
                return Err(AppError::FieldValidation(errors));
            }
            Err(e) => return Err(e),
        };

        let project = store.atomically(|tx| {
            let client = ClientResolver::resolve(tx, &validated.client)?;
            let new_project = NewProject {
                client_id: client.client_id,
                client_name: client.client_name,
                project_name: validated.project_name.clone(),
                start_date: validated.start_date,
                deadline: validated.deadline,
                project_type: validated.project_type,
                status: validated.status,
            };
            tx.insert_project(&new_project)
        })?;

        info!(
            project_id = project.id,
            client_id = ?project.client_id,
            project_type = %project.project_type,
            "Project created"
        );
        Ok(project)
    }

    pub fn list<S: ProjectStore>(store: &mut S, page: Option<i64>, per_page: i64) -> AppResult<Page<Project>> {
        let page = page.unwrap_or(1).max(1);
        let (data, total) = store.page_projects(Pagination::offset(page, per_page), per_page)?;
        Ok(Page {
            data,
            pagination: Pagination::new(page, per_page, total),
        })
    }

    pub fn get<S: ProjectStore>(store: &mut S, project_id: i64) -> AppResult<Project> {
        store
            .find_project(project_id)?
            .ok_or_else(|| AppError::not_found("Project"))
    }

    /// Partial update of the editable columns.
    ///
    /// The merged row must still satisfy the schedule and client invariants.
    /// A changed `client_id` without an explicit `client_name` refreshes the
    /// denormalized name from the client.
    pub fn update<S: ProjectStore>(
        store: &mut S,
        project_id: i64,
        req: UpdateProjectRequest,
    ) -> AppResult<Project> {
        let Some(current) = store.find_project(project_id)? else {
            return Err(AppError::not_found("Project"));
        };

        let mut changes = req.into_changes(chrono::Utc::now());
        let mut errors = FieldErrors::new();

        // Length rules ran before trimming.
        if changes.project_name.as_deref().is_some_and(str::is_empty) {
            errors.add("project_name", PROJECT_NAME_REQUIRED);
        }
        if changes.client_name.as_deref().is_some_and(str::is_empty) {
            errors.add("client_name", CLIENT_NAME_REQUIRED);
        }

        if let Some(client_id) = changes.client_id {
            match store.find_client(client_id)? {
                Some(client) => {
                    if changes.client_name.is_none() {
                        changes.client_name = Some(client.name);
                    }
                }
                None => errors.add("client_id", CLIENT_INVALID),
            }
        }

        let mut merged = current;
        changes.apply_to(&mut merged);

        if merged.start_date >= merged.deadline {
            errors.add("start_date", START_DATE_BEFORE_DEADLINE);
            errors.add("deadline", DEADLINE_AFTER_START_DATE);
        }
        if merged.project_type == ProjectType::External && merged.client_id.is_none() {
            errors.add("client_id", CLIENT_REQUIRED);
        }
        errors.into_result(())?;

        let updated = store.update_project(project_id, &changes)?;
        info!(project_id, "Project updated");
        Ok(updated)
    }

    /// Removes the project row only; its client stays.
    pub fn delete<S: ProjectStore>(store: &mut S, project_id: i64) -> AppResult<()> {
        if store.find_project(project_id)?.is_none() {
            return Err(AppError::not_found("Project"));
        }
        store.delete_project(project_id)?;
        info!(project_id, "Project deleted");
        Ok(())
    }
}
