// In-memory store with the same contract as the Postgres-backed one.

use std::collections::{BTreeMap, HashSet};

use chrono::Utc;
use project_tracker::db::models::{Client, NewClient, NewProject, Project, ProjectChanges};
use project_tracker::db::store::{ClientDirectory, ClientStore, ProjectStore};
use project_tracker::error::{AppError, AppResult};
use serde_json::{Map, Value, json};

#[derive(Clone, Default)]
struct Tables {
    clients: BTreeMap<i64, Client>,
    projects: BTreeMap<i64, Project>,
    next_client_id: i64,
    next_project_id: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Tables,
    /// Ids the existence check reports but lookups cannot find, simulating a
    /// client deleted between validation and resolution.
    pub vanishing_clients: HashSet<i64>,
    /// Makes the next project insert fail like a database error.
    pub fail_project_insert: bool,
    pub client_inserts: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_client(&mut self, name: &str) -> Client {
        self.insert_client(&NewClient {
            name: name.to_string(),
            company: format!("{} Ltd", name),
            address: "1 Queen St".to_string(),
            phone: "0211234567".to_string(),
            country: "New Zealand".to_string(),
        })
        .unwrap()
    }

    pub fn client_count(&self) -> usize {
        self.tables.clients.len()
    }

    pub fn project_count(&self) -> usize {
        self.tables.projects.len()
    }

    pub fn rename_client(&mut self, client_id: i64, name: &str) {
        if let Some(client) = self.tables.clients.get_mut(&client_id) {
            client.name = name.to_string();
        }
    }
}

impl ClientDirectory for MemoryStore {
    fn client_exists(&mut self, client_id: i64) -> AppResult<bool> {
        Ok(self.tables.clients.contains_key(&client_id) || self.vanishing_clients.contains(&client_id))
    }
}

impl ClientStore for MemoryStore {
    fn find_client(&mut self, client_id: i64) -> AppResult<Option<Client>> {
        Ok(self.tables.clients.get(&client_id).cloned())
    }

    fn insert_client(&mut self, new_client: &NewClient) -> AppResult<Client> {
        self.tables.next_client_id += 1;
        let now = Utc::now();
        let client = Client {
            id: self.tables.next_client_id,
            name: new_client.name.clone(),
            company: new_client.company.clone(),
            address: new_client.address.clone(),
            phone: new_client.phone.clone(),
            country: new_client.country.clone(),
            created_at: now,
            updated_at: now,
        };
        self.tables.clients.insert(client.id, client.clone());
        self.client_inserts += 1;
        Ok(client)
    }

    fn list_clients(&mut self) -> AppResult<Vec<Client>> {
        let mut clients: Vec<Client> = self.tables.clients.values().cloned().collect();
        clients.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(clients)
    }
}

impl ProjectStore for MemoryStore {
    fn insert_project(&mut self, new_project: &NewProject) -> AppResult<Project> {
        if self.fail_project_insert {
            return Err(AppError::Database(diesel::result::Error::RollbackTransaction));
        }
        if let Some(client_id) = new_project.client_id {
            if !self.tables.clients.contains_key(&client_id) {
                return Err(AppError::Database(diesel::result::Error::NotFound));
            }
        }
        self.tables.next_project_id += 1;
        let now = Utc::now();
        let project = Project {
            id: self.tables.next_project_id,
            client_id: new_project.client_id,
            client_name: new_project.client_name.clone(),
            project_name: new_project.project_name.clone(),
            start_date: new_project.start_date,
            deadline: new_project.deadline,
            project_type: new_project.project_type,
            status: new_project.status,
            created_at: now,
            updated_at: now,
        };
        self.tables.projects.insert(project.id, project.clone());
        Ok(project)
    }

    fn find_project(&mut self, project_id: i64) -> AppResult<Option<Project>> {
        Ok(self.tables.projects.get(&project_id).cloned())
    }

    fn page_projects(&mut self, offset: i64, limit: i64) -> AppResult<(Vec<Project>, i64)> {
        let total = self.tables.projects.len() as i64;
        let rows = self
            .tables
            .projects
            .values()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect();
        Ok((rows, total))
    }

    fn update_project(&mut self, project_id: i64, changes: &ProjectChanges) -> AppResult<Project> {
        let project = self
            .tables
            .projects
            .get_mut(&project_id)
            .ok_or(AppError::Database(diesel::result::Error::NotFound))?;
        changes.apply_to(project);
        Ok(project.clone())
    }

    fn delete_project(&mut self, project_id: i64) -> AppResult<usize> {
        Ok(usize::from(self.tables.projects.remove(&project_id).is_some()))
    }

    fn atomically<T, F>(&mut self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Self) -> AppResult<T>,
    {
        let snapshot = self.tables.clone();
        let inserts = self.client_inserts;
        let result = f(self);
        if result.is_err() {
            self.tables = snapshot;
            self.client_inserts = inserts;
        }
        result
    }
}

pub fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

pub fn internal_request() -> Map<String, Value> {
    object(json!({
        "project_name": "Intranet refresh",
        "project_type": "Internal",
        "start_date": "2024-11-01",
        "deadline": "2024-12-15",
        "status": "Incoming",
    }))
}

pub fn external_request(client_id: Value) -> Map<String, Value> {
    let mut req = internal_request();
    req.insert("project_name".into(), json!("Harbour site rebuild"));
    req.insert("project_type".into(), json!("External"));
    req.insert("client_id".into(), client_id);
    req
}

pub fn new_client_request(phone: &str) -> Map<String, Value> {
    let mut req = external_request(json!("new"));
    req.insert("new_client_name".into(), json!("Harbour Co"));
    req.insert("new_client_company".into(), json!("Harbour Holdings"));
    req.insert("new_client_address".into(), json!("12 Quay St"));
    req.insert("new_client_phone".into(), json!(phone));
    req.insert("new_client_country".into(), json!("New Zealand"));
    req
}

pub fn field_errors<T: std::fmt::Debug>(result: AppResult<T>) -> project_tracker::validation::FieldErrors {
    match result {
        Err(AppError::FieldValidation(errors)) => errors,
        other => panic!("expected field errors, got {:?}", other),
    }
}
