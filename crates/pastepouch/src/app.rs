use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{
        pastes::{
            create_paste, delete_paste, get_paste_count, read_paste, select_pastes, update_paste,
        },
        users::{create_user, get_user_count, select_users},
    },
    state::AppState,
};

/// Browsers may cache a preflight answer for 12 hours.
const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, cors_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_LENGTH])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE);

    Router::new()
        // Reads
        .route("/selectUsers", get(select_users))
        .route("/selectPastes", get(select_pastes))
        .route("/readPaste/{id}", get(read_paste))
        .route("/getPasteCount", get(get_paste_count))
        .route("/getUserCount", get(get_user_count))
        // Writes
        .route("/createUser", post(create_user))
        .route("/createPaste", post(create_paste))
        .route("/deletePaste/{id}", delete(delete_paste))
        .route("/updatePaste/{id}", put(update_paste))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
