//! Paste handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::Response,
    Json,
};

use pastepouch_core::paste::{CreatePasteRequest, Operation, UpdatePasteRequest};

use crate::{
    handlers::{dispatch::run_operation, AppError, RequestError},
    state::AppState,
};

/// Extract the numeric paste id from the path.
fn paste_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, RequestError> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!(%rejection, "Rejected paste id");
        RequestError::InvalidPasteId
    })
}

/// List all pastes (GET /selectPastes).
pub async fn select_pastes(State(state): State<AppState>) -> Result<Response, AppError> {
    run_operation(&state, Operation::SelectPastes).await
}

/// Read one paste (GET /readPaste/{id}). A missing id yields `[]`.
pub async fn read_paste(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let id = paste_id(path)?;
    run_operation(&state, Operation::ReadPaste { id }).await
}

/// Create a paste (POST /createPaste) from `{"userid", "content"}`.
pub async fn create_paste(
    State(state): State<AppState>,
    body: Result<Json<CreatePasteRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = body.map_err(|rejection| {
        tracing::debug!(%rejection, "Rejected createPaste body");
        RequestError::InvalidBody
    })?;

    run_operation(&state, payload.into_operation()).await
}

/// Delete a paste (DELETE /deletePaste/{id}).
pub async fn delete_paste(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let id = paste_id(path)?;
    run_operation(&state, Operation::DeletePaste { id }).await
}

/// Replace a paste's content (PUT /updatePaste/{id}) from `{"content"}`.
pub async fn update_paste(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdatePasteRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let id = paste_id(path)?;
    let Json(payload) = body.map_err(|rejection| {
        tracing::debug!(%rejection, "Rejected updatePaste body");
        RequestError::InvalidBody
    })?;

    run_operation(&state, payload.into_operation(id)).await
}

/// Count pastes (GET /getPasteCount).
pub async fn get_paste_count(State(state): State<AppState>) -> Result<Response, AppError> {
    run_operation(&state, Operation::GetPasteCount).await
}
