use crate::AppState;
use crate::db::models::Client;
use crate::error::AppError;
use crate::routes::{parse_id, with_conn};
use crate::services::ClientsService;
use crate::validation::JsonBody;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

#[derive(Serialize)]
pub struct ClientCreatedResponse {
    pub message: String,
    pub client: Client,
}

pub async fn get_clients(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match with_conn(&state.db, |conn| ClientsService::list(conn)).await {
        Ok(clients) => (StatusCode::OK, Json(clients)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn get_client(
    State(state): State<Arc<AppState>>,
    Path(client_id): Path<String>,
) -> impl IntoResponse {
    let Some(client_id) = parse_id(&client_id) else {
        return AppError::not_found("Client").into_response();
    };

    match with_conn(&state.db, move |conn| ClientsService::get(conn, client_id)).await {
        Ok(client) => (StatusCode::OK, Json(client)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn create_client(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<Map<String, Value>>,
) -> impl IntoResponse {
    match with_conn(&state.db, move |conn| ClientsService::create(conn, &payload)).await {
        Ok(client) => {
            let response = ClientCreatedResponse {
                message: "Client created successfully.".to_string(),
                client,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}
