//! Shared executor behind every route.

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use pastepouch_core::paste::{execute, Operation};
use pastepouch_core::projection::project;

use crate::{handlers::AppError, state::AppState};

/// Body returned by write operations.
pub const NO_ROWS_MESSAGE: &str = "No rows to return.";

/// Execute `operation` against the injected store and render the result.
///
/// Reads answer with the projected records as a JSON array; writes answer
/// with the fixed [`NO_ROWS_MESSAGE`] string.
pub async fn run_operation(state: &AppState, operation: Operation) -> Result<Response, AppError> {
    let name = operation.name();
    let is_write = operation.is_write();

    let result = execute(state.store.as_ref(), operation).await?;

    if is_write {
        tracing::info!(
            operation = name,
            rows_affected = result.rows_affected,
            "Write completed"
        );
        return Ok(Json(NO_ROWS_MESSAGE).into_response());
    }

    let records = project(&result, &state.types)?;
    tracing::debug!(operation = name, rows = records.len(), "Query completed");

    Ok(Json(records).into_response())
}
