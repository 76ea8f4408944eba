//! HTTP routes for interrogation endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{self, InterrogationHandlers};

/// Creates the interrogation router with all endpoints.
pub fn interrogation_routes(state: InterrogationHandlers) -> Router {
    Router::new()
        .route("/:id", delete(handlers::delete))
        .route("/:id/state", get(handlers::get_state))
        .route("/:id/data", put(handlers::put_data))
        .route("/:id/page", put(handlers::put_page))
        .route("/:id/complete", post(handlers::complete))
        .route("/:id/validate", post(handlers::validate))
        .with_state(state)
}
