use crate::AppState;
use crate::db::models::{MessageResponse, ProjectCreatedResponse, ProjectListQuery, UpdateProjectRequest};
use crate::error::AppError;
use crate::routes::{parse_id, with_conn};
use crate::services::ProjectsService;
use crate::validation::{JsonBody, ValidatedJson};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Map, Value};
use std::sync::Arc;

pub async fn get_projects(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProjectListQuery>,
) -> impl IntoResponse {
    let per_page = state.config.projects_per_page;
    match with_conn(&state.db, move |conn| {
        ProjectsService::list(conn, params.page, per_page)
    })
    .await
    {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn get_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
) -> impl IntoResponse {
    let Some(project_id) = parse_id(&project_id) else {
        return AppError::not_found("Project").into_response();
    };

    match with_conn(&state.db, move |conn| ProjectsService::get(conn, project_id)).await {
        Ok(project) => (StatusCode::OK, Json(project)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn create_project(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<Map<String, Value>>,
) -> impl IntoResponse {
    match with_conn(&state.db, move |conn| ProjectsService::create(conn, &payload)).await {
        Ok(project) => {
            let response = ProjectCreatedResponse {
                message: "Project created successfully.".to_string(),
                project,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
    payload: Result<ValidatedJson<UpdateProjectRequest>, AppError>,
) -> impl IntoResponse {
    let Some(project_id) = parse_id(&project_id) else {
        return AppError::not_found("Project").into_response();
    };
    let payload = match payload {
        Ok(ValidatedJson(payload)) => payload,
        Err(err) => return err.into_response(),
    };

    match with_conn(&state.db, move |conn| {
        ProjectsService::update(conn, project_id, payload)
    })
    .await
    {
        Ok(project) => (StatusCode::OK, Json(project)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
) -> impl IntoResponse {
    let Some(project_id) = parse_id(&project_id) else {
        return AppError::not_found("Project").into_response();
    };

    match with_conn(&state.db, move |conn| ProjectsService::delete(conn, project_id)).await {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::new("Project deleted"))).into_response(),
        Err(err) => err.into_response(),
    }
}
