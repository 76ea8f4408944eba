//! Campaign query handlers.

mod get_campaign_overview;

pub use get_campaign_overview::{
    CampaignOverviewError, GetCampaignOverviewHandler, GetCampaignOverviewQuery,
};
