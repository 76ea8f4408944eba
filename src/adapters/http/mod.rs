//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own HTTP adapter; `api_router` nests them under
//! `/api` behind the authentication middleware.

pub mod campaign;
pub mod error;
pub mod interrogation;
pub mod middleware;

pub use campaign::{campaign_routes, CampaignHandlers};
pub use error::{ApiError, ErrorResponse};
pub use interrogation::{interrogation_routes, InterrogationHandlers};

use std::sync::Arc;

use axum::http::HeaderMap;
use axum::Router;

use crate::application::GetCampaignOverviewHandler;
use crate::domain::foundation::{AuthenticatedUser, CommandMetadata, RoleNames};
use crate::ports::{
    DataCollectionService, InterrogationStateRepository, PayloadParsers,
    QuestionnaireDesignService, SessionValidator,
};

/// Header carrying an upstream correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Everything the REST API needs, wired once at startup.
#[derive(Clone)]
pub struct ApiDependencies {
    pub states: Arc<dyn InterrogationStateRepository>,
    pub data_collection: Arc<dyn DataCollectionService>,
    pub questionnaire_design: Arc<dyn QuestionnaireDesignService>,
    pub parsers: PayloadParsers,
    pub session_validator: Arc<dyn SessionValidator>,
    pub role_names: RoleNames,
}

/// Builds the `/api` router with authentication applied to every route.
pub fn api_router(deps: ApiDependencies) -> Router {
    let role_names = Arc::new(deps.role_names);

    let interrogations =
        InterrogationHandlers::new(deps.states.clone(), deps.parsers, role_names.clone());
    let campaigns = CampaignHandlers::new(
        Arc::new(GetCampaignOverviewHandler::new(
            deps.data_collection,
            deps.questionnaire_design,
            deps.states,
        )),
        role_names,
    );

    let api = Router::new()
        .nest("/interrogations", interrogation_routes(interrogations))
        .nest("/campaigns", campaign_routes(campaigns))
        .layer(axum::middleware::from_fn_with_state(
            deps.session_validator,
            middleware::auth_middleware,
        ));

    Router::new().nest("/api", api)
}

/// Command metadata for a request, reusing `x-request-id` when present.
pub(crate) fn request_metadata(user: &AuthenticatedUser, headers: &HeaderMap) -> CommandMetadata {
    let metadata = CommandMetadata::new(user.id.clone()).with_source("http");
    match headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
    {
        Some(id) => metadata.with_correlation_id(id),
        None => metadata,
    }
}
