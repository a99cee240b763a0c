use project_tracker::db::enums::{ProjectStatus, ProjectType};
use project_tracker::error::AppError;
use project_tracker::services::{ClientsService, ProjectsService};
use project_tracker::validation::client::{PHONE_DIGITS, PHONE_NUMERIC};
use project_tracker::validation::project::{
    CLIENT_INVALID, DEADLINE_AFTER_START_DATE, START_DATE_BEFORE_DEADLINE,
};
use serde_json::json;

use super::support::*;

#[test]
fn internal_project_has_no_client() {
    let mut store = MemoryStore::new();
    let project = ProjectsService::create(&mut store, &internal_request()).unwrap();

    assert_eq!(project.project_type, ProjectType::Internal);
    assert_eq!(project.client_id, None);
    assert_eq!(project.client_name, None);
    assert_eq!(store.client_count(), 0);
}

#[test]
fn new_client_created_exactly_once() {
    let mut store = MemoryStore::new();
    let project = ProjectsService::create(&mut store, &new_client_request("1234567")).unwrap();

    assert_eq!(store.client_inserts, 1);
    assert_eq!(store.client_count(), 1);
    let client = ClientsService::list(&mut store).unwrap().remove(0);
    assert_eq!(project.client_id, Some(client.id));
    assert_eq!(project.client_name.as_deref(), Some("Harbour Co"));
    assert_eq!(client.company, "Harbour Holdings");
    assert_eq!(client.phone, "1234567");
}

#[test]
fn existing_client_reused_with_stored_name() {
    let mut store = MemoryStore::new();
    let client = store.seed_client("Acme");
    store.rename_client(client.id, "Acme Renamed");
    let inserts_before = store.client_inserts;

    let project = ProjectsService::create(&mut store, &external_request(json!(client.id))).unwrap();

    assert_eq!(store.client_inserts, inserts_before);
    assert_eq!(project.client_id, Some(client.id));
    assert_eq!(project.client_name.as_deref(), Some("Acme Renamed"));
}

#[test]
fn schedule_order_rejected_on_both_fields() {
    let mut store = MemoryStore::new();
    for deadline in ["2024-11-01", "2024-10-31"] {
        let mut req = internal_request();
        req.insert("deadline".into(), json!(deadline));
        let errors = field_errors(ProjectsService::create(&mut store, &req));
        assert!(errors.contains("start_date", START_DATE_BEFORE_DEADLINE));
        assert!(errors.contains("deadline", DEADLINE_AFTER_START_DATE));
    }
    assert_eq!(store.project_count(), 0);
}

#[test]
fn phone_number_boundaries() {
    let mut store = MemoryStore::new();

    let errors = field_errors(ProjectsService::create(&mut store, &new_client_request("12a4567")));
    assert!(errors.contains("new_client_phone", PHONE_NUMERIC));

    let errors = field_errors(ProjectsService::create(&mut store, &new_client_request("123456")));
    assert!(errors.contains("new_client_phone", PHONE_DIGITS));
    assert!(!errors.contains("new_client_phone", PHONE_NUMERIC));

    assert_eq!(store.client_count(), 0);
    assert!(ProjectsService::create(&mut store, &new_client_request("1234567")).is_ok());
    assert_eq!(store.client_count(), 1);
}

#[test]
fn status_normalized_before_insert() {
    let mut store = MemoryStore::new();
    let mut req = internal_request();
    req.insert("status".into(), json!("completed"));
    let project = ProjectsService::create(&mut store, &req).unwrap();
    assert_eq!(project.status, ProjectStatus::Completed);
    assert_eq!(
        serde_json::to_value(&project).unwrap()["status"],
        json!("Completed")
    );

    req.insert("status".into(), json!("IN PROGRESS"));
    let project = ProjectsService::create(&mut store, &req).unwrap();
    assert_eq!(project.status.as_str(), "In progress");
}

#[test]
fn failed_validation_persists_nothing() {
    let mut store = MemoryStore::new();
    let mut req = new_client_request("1234567");
    req.remove("project_name");

    let errors = field_errors(ProjectsService::create(&mut store, &req));
    assert!(errors.has("project_name"));
    assert_eq!(store.project_count(), 0);
    assert_eq!(store.client_count(), 0);
    assert!(matches!(
        ProjectsService::get(&mut store, 1),
        Err(AppError::NotFound { .. })
    ));
}

#[test]
fn all_violations_reported_together() {
    let mut store = MemoryStore::new();
    let req = object(json!({
        "project_type": "External",
        "client_id": 404,
        "start_date": "2024-12-01",
        "deadline": "2024-11-01",
        "status": "Someday",
    }));

    let errors = field_errors(ProjectsService::create(&mut store, &req));
    let fields: Vec<&str> = errors.fields().collect();
    assert_eq!(
        fields,
        vec!["client_id", "deadline", "project_name", "start_date", "status"]
    );
    assert!(errors.contains("client_id", CLIENT_INVALID));
}

#[test]
fn failed_project_insert_rolls_back_new_client() {
    let mut store = MemoryStore::new();
    store.fail_project_insert = true;

    let result = ProjectsService::create(&mut store, &new_client_request("1234567"));
    assert!(matches!(result, Err(AppError::Database(_))));
    assert_eq!(store.client_count(), 0);
    assert_eq!(store.project_count(), 0);
}

#[test]
fn client_removed_after_validation_is_an_integrity_failure() {
    let mut store = MemoryStore::new();
    store.vanishing_clients.insert(77);

    let result = ProjectsService::create(&mut store, &external_request(json!(77)));
    assert!(matches!(result, Err(AppError::Integrity { .. })));
    assert_eq!(store.project_count(), 0);
}
