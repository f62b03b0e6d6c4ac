//! Resource handlers: validate input, call the repository, map the outcome to status + envelope.

use crate::error::{AppError, Operation, RESOURCE_NOT_FOUND};
use crate::extractors::ResourcePayload;
use crate::response::{message_only, success_many, success_one};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::collections::HashMap;

pub async fn create(
    State(state): State<AppState>,
    ResourcePayload(body): ResourcePayload,
) -> Result<impl IntoResponse, AppError> {
    let new = RequestValidator::new_resource(&body)?;
    let row = state
        .resources
        .create(&new)
        .await
        .map_err(AppError::store(Operation::Create))?;
    tracing::info!(id = row.id, "resource created");
    Ok(success_one(StatusCode::CREATED, "Resource created successfully", row))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let filters = RequestValidator::filters(&params);
    let rows = state
        .resources
        .find_all(&filters)
        .await
        .map_err(AppError::store(Operation::List))?;
    Ok(success_many("Resources retrieved successfully", rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::id(&id_str)?;
    let row = state
        .resources
        .find_by_id(id)
        .await
        .map_err(AppError::store(Operation::Get))?
        .ok_or_else(|| AppError::NotFound(RESOURCE_NOT_FOUND.into()))?;
    Ok(success_one(StatusCode::OK, "Resource retrieved successfully", row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    ResourcePayload(body): ResourcePayload,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::id(&id_str)?;
    let changes = RequestValidator::changes(&body)?;
    let row = state
        .resources
        .update(id, &changes)
        .await
        .map_err(AppError::store(Operation::Update))?
        .ok_or_else(|| AppError::NotFound(RESOURCE_NOT_FOUND.into()))?;
    tracing::info!(id, "resource updated");
    Ok(success_one(StatusCode::OK, "Resource updated successfully", row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = RequestValidator::id(&id_str)?;
    let deleted = state
        .resources
        .delete(id)
        .await
        .map_err(AppError::store(Operation::Delete))?;
    if !deleted {
        return Err(AppError::NotFound(RESOURCE_NOT_FOUND.into()));
    }
    tracing::info!(id, "resource deleted");
    Ok(message_only("Resource deleted successfully"))
}
