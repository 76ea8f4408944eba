//! HTTP adapter for campaign endpoints.

mod handlers;
mod routes;

pub use handlers::{CampaignHandlers, CampaignOverviewResponse};
pub use routes::campaign_routes;
