//! HTTP handlers for campaign endpoints.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::{authorize, RequireAuth};
use crate::application::{GetCampaignOverviewHandler, GetCampaignOverviewQuery};
use crate::domain::foundation::{CampaignId, LogicalRole, RoleNames};
use crate::domain::interrogation::StateLabel;
use crate::domain::lookup::CampaignOverview;

#[derive(Clone)]
pub struct CampaignHandlers {
    overview_handler: Arc<GetCampaignOverviewHandler>,
    role_names: Arc<RoleNames>,
}

impl CampaignHandlers {
    pub fn new(overview_handler: Arc<GetCampaignOverviewHandler>, role_names: Arc<RoleNames>) -> Self {
        Self {
            overview_handler,
            role_names,
        }
    }
}

/// Overview plus per-label counts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignOverviewResponse {
    #[serde(flatten)]
    pub overview: CampaignOverview,
    pub state_counts: BTreeMap<StateLabel, usize>,
}

impl From<CampaignOverview> for CampaignOverviewResponse {
    fn from(overview: CampaignOverview) -> Self {
        Self {
            state_counts: overview.state_counts(),
            overview,
        }
    }
}

/// GET /api/campaigns/:id/overview - Designer view of a campaign
pub async fn get_overview(
    State(handlers): State<CampaignHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<Json<CampaignOverviewResponse>, ApiError> {
    authorize(&user, LogicalRole::Designer, &handlers.role_names)?;
    let campaign_id = id
        .parse::<CampaignId>()
        .map_err(|_| ApiError::bad_request("Invalid campaign ID"))?;

    let overview = handlers
        .overview_handler
        .handle(GetCampaignOverviewQuery { campaign_id })
        .await?;
    Ok(Json(overview.into()))
}
