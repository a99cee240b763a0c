use chrono::NaiveDate;
use project_tracker::db::enums::{ProjectStatus, ProjectType};
use project_tracker::db::models::UpdateProjectRequest;
use project_tracker::error::AppError;
use project_tracker::services::{ClientsService, ProjectsService};
use project_tracker::validation::project::{
    CLIENT_INVALID, CLIENT_NAME_REQUIRED, CLIENT_REQUIRED, DEADLINE_AFTER_START_DATE,
    PROJECT_NAME_REQUIRED,
};
use serde_json::json;

use super::support::*;

fn seed_projects(store: &mut MemoryStore, count: usize) {
    for i in 0..count {
        let mut req = internal_request();
        req.insert("project_name".into(), json!(format!("Project {}", i + 1)));
        ProjectsService::create(store, &req).unwrap();
    }
}

#[test]
fn list_pages_in_insertion_order() {
    let mut store = MemoryStore::new();
    seed_projects(&mut store, 23);

    let first = ProjectsService::list(&mut store, None, 10).unwrap();
    assert_eq!(first.data.len(), 10);
    assert_eq!(first.data[0].project_name, "Project 1");
    assert_eq!(first.pagination.total, 23);
    assert_eq!(first.pagination.total_pages, 3);
    assert!(first.pagination.has_next);
    assert!(!first.pagination.has_prev);

    let last = ProjectsService::list(&mut store, Some(3), 10).unwrap();
    assert_eq!(last.data.len(), 3);
    assert_eq!(last.data[0].project_name, "Project 21");
    assert!(!last.pagination.has_next);

    let beyond = ProjectsService::list(&mut store, Some(9), 10).unwrap();
    assert!(beyond.data.is_empty());

    let clamped = ProjectsService::list(&mut store, Some(0), 10).unwrap();
    assert_eq!(clamped.pagination.page, 1);
}

#[test]
fn list_far_past_the_end_is_empty() {
    let mut store = MemoryStore::new();
    seed_projects(&mut store, 3);

    let page = ProjectsService::list(&mut store, Some(i64::MAX), 10).unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.pagination.page, i64::MAX);
    assert_eq!(page.pagination.total, 3);
    assert!(!page.pagination.has_next);
    assert!(page.pagination.has_prev);
}

#[test]
fn get_missing_project_is_not_found() {
    let mut store = MemoryStore::new();
    let err = ProjectsService::get(&mut store, 12).unwrap_err();
    assert!(matches!(err, AppError::NotFound { ref resource } if resource == "Project"));
}

#[test]
fn update_applies_partial_changes() {
    let mut store = MemoryStore::new();
    seed_projects(&mut store, 1);

    let req = UpdateProjectRequest {
        project_name: Some("  Renamed  ".to_string()),
        status: Some(ProjectStatus::OnHold),
        ..Default::default()
    };
    let updated = ProjectsService::update(&mut store, 1, req).unwrap();
    assert_eq!(updated.project_name, "Renamed");
    assert_eq!(updated.status, ProjectStatus::OnHold);
    assert_eq!(updated.start_date, NaiveDate::from_ymd_opt(2024, 11, 1).unwrap());
}

#[test]
fn update_rejects_blank_names() {
    let mut store = MemoryStore::new();
    seed_projects(&mut store, 1);

    let req = UpdateProjectRequest {
        project_name: Some("   ".to_string()),
        client_name: Some("  ".to_string()),
        ..Default::default()
    };
    let errors = field_errors(ProjectsService::update(&mut store, 1, req));
    assert!(errors.contains("project_name", PROJECT_NAME_REQUIRED));
    assert!(errors.contains("client_name", CLIENT_NAME_REQUIRED));

    let unchanged = ProjectsService::get(&mut store, 1).unwrap();
    assert_eq!(unchanged.project_name, "Project 1");
    assert_eq!(unchanged.client_name, None);
}

#[test]
fn update_keeps_schedule_order() {
    let mut store = MemoryStore::new();
    seed_projects(&mut store, 1);

    let req = UpdateProjectRequest {
        deadline: NaiveDate::from_ymd_opt(2024, 10, 1),
        ..Default::default()
    };
    let errors = field_errors(ProjectsService::update(&mut store, 1, req));
    assert!(errors.contains("deadline", DEADLINE_AFTER_START_DATE));

    let unchanged = ProjectsService::get(&mut store, 1).unwrap();
    assert_eq!(unchanged.deadline, NaiveDate::from_ymd_opt(2024, 12, 15).unwrap());
}

#[test]
fn update_to_external_needs_a_client() {
    let mut store = MemoryStore::new();
    seed_projects(&mut store, 1);

    let req = UpdateProjectRequest {
        project_type: Some(ProjectType::External),
        ..Default::default()
    };
    let errors = field_errors(ProjectsService::update(&mut store, 1, req));
    assert!(errors.contains("client_id", CLIENT_REQUIRED));

    let client = store.seed_client("Acme");
    let req = UpdateProjectRequest {
        project_type: Some(ProjectType::External),
        client_id: Some(client.id),
        ..Default::default()
    };
    let updated = ProjectsService::update(&mut store, 1, req).unwrap();
    assert_eq!(updated.client_id, Some(client.id));
    assert_eq!(updated.client_name.as_deref(), Some("Acme"));
}

#[test]
fn update_rejects_unknown_client() {
    let mut store = MemoryStore::new();
    seed_projects(&mut store, 1);

    let req = UpdateProjectRequest {
        client_id: Some(999),
        ..Default::default()
    };
    let errors = field_errors(ProjectsService::update(&mut store, 1, req));
    assert!(errors.contains("client_id", CLIENT_INVALID));
}

#[test]
fn update_missing_project_is_not_found() {
    let mut store = MemoryStore::new();
    let result = ProjectsService::update(&mut store, 5, UpdateProjectRequest::default());
    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[test]
fn delete_keeps_client() {
    let mut store = MemoryStore::new();
    let project = ProjectsService::create(&mut store, &new_client_request("0211234567")).unwrap();
    let client_id = project.client_id.unwrap();

    ProjectsService::delete(&mut store, project.id).unwrap();

    assert_eq!(store.project_count(), 0);
    assert_eq!(ClientsService::get(&mut store, client_id).unwrap().name, "Harbour Co");
    assert!(matches!(
        ProjectsService::delete(&mut store, project.id),
        Err(AppError::NotFound { .. })
    ));
}
