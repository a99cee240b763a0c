pub mod clients;
pub mod projects;

use crate::AppState;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use axum::{
    Router,
    routing::get,
};
use diesel::PgConnection;
use std::sync::Arc;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/projects",
            get(projects::get_projects).post(projects::create_project),
        )
        .route(
            "/projects/:project_id",
            get(projects::get_project)
                .put(projects::update_project)
                .patch(projects::update_project)
                .delete(projects::delete_project),
        )
        .route(
            "/clients",
            get(clients::get_clients).post(clients::create_client),
        )
        .route("/clients/:client_id", get(clients::get_client))
        .with_state(state)
}

/// Runs blocking diesel work on a pooled connection off the async runtime.
pub(crate) async fn with_conn<T, F>(pool: &DbPool, f: F) -> AppResult<T>
where
    T: Send + 'static,
    F: FnOnce(&mut PgConnection) -> AppResult<T> + Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get()?;
        f(&mut conn)
    })
    .await
    .map_err(|e| AppError::internal(format!("Blocking task failed: {}", e)))?
}

/// Identifiers arrive as path text; anything that is not an id matches no row.
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
