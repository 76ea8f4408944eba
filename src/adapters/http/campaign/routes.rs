//! HTTP routes for campaign endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_overview, CampaignHandlers};

pub fn campaign_routes(state: CampaignHandlers) -> Router {
    Router::new()
        .route("/:id/overview", get(get_overview))
        .with_state(state)
}
