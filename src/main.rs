//! survey-bridge server binary.
//!
//! Loads `SURVEY_BRIDGE__*` configuration, wires the adapters and serves the
//! REST API.

use std::error::Error;
use std::sync::Arc;

use axum::http::HeaderValue;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use survey_bridge::adapters::http::{api_router, ApiDependencies};
use survey_bridge::adapters::{
    default_parsers, HttpDataCollectionService, HttpQuestionnaireDesignService,
    InMemoryDataCollectionService, InMemoryInterrogationStateRepository,
    InMemoryQuestionnaireDesignService, MockSessionValidator,
};
use survey_bridge::config::AppConfig;
use survey_bridge::domain::foundation::UserId;
use survey_bridge::ports::{DataCollectionService, QuestionnaireDesignService, SessionValidator};

type BoxError = Box<dyn Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let (data_collection, questionnaire_design) = external_services(&config)?;
    let deps = ApiDependencies {
        states: Arc::new(InMemoryInterrogationStateRepository::new()),
        data_collection,
        questionnaire_design,
        parsers: default_parsers(),
        session_validator: session_validator(&config)?,
        role_names: config.auth.role_names(),
    };

    let app = api_router(deps).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config))
            .layer(TimeoutLayer::new(config.server.request_timeout())),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "survey-bridge listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let result = if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).try_init()
    };
    if let Err(e) = result {
        eprintln!("tracing already initialized: {}", e);
    }
}

type ExternalServices = (
    Arc<dyn DataCollectionService>,
    Arc<dyn QuestionnaireDesignService>,
);

fn external_services(config: &AppConfig) -> Result<ExternalServices, BoxError> {
    let services = &config.services;
    match (
        services.data_collection_url.as_deref(),
        services.questionnaire_design_url.as_deref(),
    ) {
        (Some(collection), Some(design)) => {
            let data_collection: Arc<dyn DataCollectionService> =
                Arc::new(HttpDataCollectionService::new(collection, services.timeout())?);
            let questionnaire_design: Arc<dyn QuestionnaireDesignService> =
                Arc::new(HttpQuestionnaireDesignService::new(design, services.timeout())?);
            Ok((data_collection, questionnaire_design))
        }
        _ if config.server.environment.is_development() => {
            tracing::warn!("Service URLs not configured; using empty in-memory services");
            let data_collection: Arc<dyn DataCollectionService> =
                Arc::new(InMemoryDataCollectionService::new());
            let questionnaire_design: Arc<dyn QuestionnaireDesignService> =
                Arc::new(InMemoryQuestionnaireDesignService::new());
            Ok((data_collection, questionnaire_design))
        }
        _ => Err("both service URLs are required outside development".into()),
    }
}

/// Only the static development validator ships with the binary; deployments
/// embed `api_router` with their own `SessionValidator`.
fn session_validator(config: &AppConfig) -> Result<Arc<dyn SessionValidator>, BoxError> {
    if !config.server.environment.is_development() {
        return Err(
            "no session validator available outside development; embed api_router with one".into(),
        );
    }
    let validator = match config.auth.dev_token.as_deref() {
        Some(token) => {
            tracing::warn!(roles = ?config.auth.dev_roles_list(), "Development token enabled");
            MockSessionValidator::new().with_roles(
                token,
                UserId::new("dev-user")?,
                config.auth.dev_roles_list(),
            )
        }
        None => MockSessionValidator::new(),
    };
    Ok(Arc::new(validator))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
