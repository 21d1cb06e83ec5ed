//! User handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Response,
    Json,
};

use pastepouch_core::paste::{CreateUserRequest, Operation};

use crate::{
    handlers::{dispatch::run_operation, AppError, RequestError},
    state::AppState,
};

/// List all users (GET /selectUsers).
pub async fn select_users(State(state): State<AppState>) -> Result<Response, AppError> {
    run_operation(&state, Operation::SelectUsers).await
}

/// Create a user (POST /createUser) from `{"name", "email"}`.
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = body.map_err(|rejection| {
        tracing::debug!(%rejection, "Rejected createUser body");
        RequestError::InvalidBody
    })?;

    run_operation(&state, payload.into_operation()).await
}

/// Count users (GET /getUserCount).
pub async fn get_user_count(State(state): State<AppState>) -> Result<Response, AppError> {
    run_operation(&state, Operation::GetUserCount).await
}
