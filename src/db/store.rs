//! Store seams for the project workflows.
//!
//! Services are written against these traits rather than `PgConnection`
//! directly, so the validation rules and the creation workflow take their
//! persistence dependency as an explicit argument. `PgConnection` is the
//! production implementation; tests plug in an in-memory one.

use diesel::prelude::*;

use crate::db::models::client::{Client, NewClient};
use crate::db::models::project::{NewProject, Project, ProjectChanges};
use crate::db::repositories::{ClientsRepo, ProjectsRepo};
use crate::error::AppResult;

/// Read-only view used by validation rules.
pub trait ClientDirectory {
    fn client_exists(&mut self, client_id: i64) -> AppResult<bool>;
}

pub trait ClientStore: ClientDirectory {
    fn find_client(&mut self, client_id: i64) -> AppResult<Option<Client>>;

    fn insert_client(&mut self, new_client: &NewClient) -> AppResult<Client>;

    fn list_clients(&mut self) -> AppResult<Vec<Client>>;
}

pub trait ProjectStore: ClientStore {
    fn insert_project(&mut self, new_project: &NewProject) -> AppResult<Project>;

    fn find_project(&mut self, project_id: i64) -> AppResult<Option<Project>>;

    /// Returns the rows at `offset..offset + limit` in insertion order and
    /// the total number of projects.
    fn page_projects(&mut self, offset: i64, limit: i64) -> AppResult<(Vec<Project>, i64)>;

    fn update_project(&mut self, project_id: i64, changes: &ProjectChanges) -> AppResult<Project>;

    /// Number of rows removed.
    fn delete_project(&mut self, project_id: i64) -> AppResult<usize>;

    /// Runs `f` in a transaction. Every write made through `self` inside `f`
    /// is rolled back when `f` returns an error.
    fn atomically<T, F>(&mut self, f: F) -> AppResult<T>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> AppResult<T>;
}

impl ClientDirectory for PgConnection {
    fn client_exists(&mut self, client_id: i64) -> AppResult<bool> {
        Ok(ClientsRepo::exists(self, client_id)?)
    }
}

impl ClientStore for PgConnection {
    fn find_client(&mut self, client_id: i64) -> AppResult<Option<Client>> {
        Ok(ClientsRepo::find_by_id(self, client_id)?)
    }

    fn insert_client(&mut self, new_client: &NewClient) -> AppResult<Client> {
        Ok(ClientsRepo::insert(self, new_client)?)
    }

    fn list_clients(&mut self) -> AppResult<Vec<Client>> {
        Ok(ClientsRepo::list_by_name(self)?)
    }
}

impl ProjectStore for PgConnection {
    fn insert_project(&mut self, new_project: &NewProject) -> AppResult<Project> {
        Ok(ProjectsRepo::insert(self, new_project)?)
    }

    fn find_project(&mut self, project_id: i64) -> AppResult<Option<Project>> {
        Ok(ProjectsRepo::find_by_id(self, project_id)?)
    }

    fn page_projects(&mut self, offset: i64, limit: i64) -> AppResult<(Vec<Project>, i64)> {
        Ok(ProjectsRepo::page(self, offset, limit)?)
    }

    fn update_project(&mut self, project_id: i64, changes: &ProjectChanges) -> AppResult<Project> {
        Ok(ProjectsRepo::update_fields(self, project_id, changes)?)
    }

    fn delete_project(&mut self, project_id: i64) -> AppResult<usize> {
        Ok(ProjectsRepo::delete_by_id(self, project_id)?)
    }

    fn atomically<T, F>(&mut self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Self) -> AppResult<T>,
    {
        self.transaction(f)
    }
}
