//! HTTP handlers for interrogation endpoints.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::{authorize, RequireAuth};
use crate::adapters::http::request_metadata;
use crate::application::{
    AdvancePageCommand, AdvancePageHandler, CompleteInterrogationCommand,
    CompleteInterrogationHandler, DeleteInterrogationCommand, DeleteInterrogationHandler,
    GetInterrogationStateHandler, GetInterrogationStateQuery, IngestInterrogationDataCommand,
    IngestInterrogationDataHandler, ValidateInterrogationCommand, ValidateInterrogationHandler,
};
use crate::domain::foundation::{InterrogationId, LogicalRole, RoleNames};
use crate::ports::{InterrogationStateRepository, PayloadParsers};

use super::dto::{ChangePageRequest, DataUploadResponse, StateCommandResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct InterrogationHandlers {
    ingest_handler: Arc<IngestInterrogationDataHandler>,
    advance_page_handler: Arc<AdvancePageHandler>,
    complete_handler: Arc<CompleteInterrogationHandler>,
    validate_handler: Arc<ValidateInterrogationHandler>,
    get_state_handler: Arc<GetInterrogationStateHandler>,
    delete_handler: Arc<DeleteInterrogationHandler>,
    role_names: Arc<RoleNames>,
}

impl InterrogationHandlers {
    pub fn new(
        repository: Arc<dyn InterrogationStateRepository>,
        parsers: PayloadParsers,
        role_names: Arc<RoleNames>,
    ) -> Self {
        Self {
            ingest_handler: Arc::new(IngestInterrogationDataHandler::new(
                repository.clone(),
                parsers,
            )),
            advance_page_handler: Arc::new(AdvancePageHandler::new(repository.clone())),
            complete_handler: Arc::new(CompleteInterrogationHandler::new(repository.clone())),
            validate_handler: Arc::new(ValidateInterrogationHandler::new(repository.clone())),
            get_state_handler: Arc::new(GetInterrogationStateHandler::new(repository.clone())),
            delete_handler: Arc::new(DeleteInterrogationHandler::new(repository)),
            role_names,
        }
    }
}

fn parse_id(raw: &str) -> Result<InterrogationId, ApiError> {
    raw.parse::<InterrogationId>()
        .map_err(|_| ApiError::bad_request("Invalid interrogation ID"))
}

/// A body counts as absent when it is empty and no length was announced.
fn body_bytes(headers: &HeaderMap, body: Bytes) -> Option<Vec<u8>> {
    let announced = headers.contains_key(header::CONTENT_LENGTH)
        || headers.contains_key(header::TRANSFER_ENCODING);
    if body.is_empty() && !announced {
        None
    } else {
        Some(body.to_vec())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/interrogations/:id/state - Current progress state
pub async fn get_state(
    State(handlers): State<InterrogationHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    authorize(&user, LogicalRole::Authenticated, &handlers.role_names)?;
    let query = GetInterrogationStateQuery {
        interrogation_id: parse_id(&id)?,
    };

    let state = handlers.get_state_handler.handle(query).await?;
    Ok((StatusCode::OK, Json(state)).into_response())
}

/// PUT /api/interrogations/:id/data - Upload answers as JSON or CSV
pub async fn put_data(
    State(handlers): State<InterrogationHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    authorize(&user, LogicalRole::Authenticated, &handlers.role_names)?;
    let interrogation_id = parse_id(&id)?;
    let cmd = IngestInterrogationDataCommand {
        interrogation_id: interrogation_id.clone(),
        payload: body_bytes(&headers, body),
    };

    let result = handlers
        .ingest_handler
        .handle(cmd, request_metadata(&user, &headers))
        .await?;
    Ok((
        StatusCode::OK,
        Json(DataUploadResponse::new(&interrogation_id, result)),
    )
        .into_response())
}

/// PUT /api/interrogations/:id/page - Record the current page
pub async fn put_page(
    State(handlers): State<InterrogationHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<ChangePageRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    authorize(&user, LogicalRole::Authenticated, &handlers.role_names)?;
    let interrogation_id = parse_id(&id)?;
    let Json(req) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let cmd = AdvancePageCommand::new(interrogation_id.clone(), req.page)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let result = handlers
        .advance_page_handler
        .handle(cmd, request_metadata(&user, &headers))
        .await?;
    Ok((
        StatusCode::OK,
        Json(StateCommandResponse::new(&interrogation_id, result)),
    )
        .into_response())
}

/// POST /api/interrogations/:id/complete - Respondent finished
pub async fn complete(
    State(handlers): State<InterrogationHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    authorize(&user, LogicalRole::Authenticated, &handlers.role_names)?;
    let interrogation_id = parse_id(&id)?;
    let cmd = CompleteInterrogationCommand {
        interrogation_id: interrogation_id.clone(),
    };

    let result = handlers
        .complete_handler
        .handle(cmd, request_metadata(&user, &headers))
        .await?;
    Ok((
        StatusCode::OK,
        Json(StateCommandResponse::new(&interrogation_id, result)),
    )
        .into_response())
}

/// POST /api/interrogations/:id/validate - Designer accepts the answers
pub async fn validate(
    State(handlers): State<InterrogationHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    authorize(&user, LogicalRole::Designer, &handlers.role_names)?;
    let interrogation_id = parse_id(&id)?;
    let cmd = ValidateInterrogationCommand {
        interrogation_id: interrogation_id.clone(),
    };

    let result = handlers
        .validate_handler
        .handle(cmd, request_metadata(&user, &headers))
        .await?;
    Ok((
        StatusCode::OK,
        Json(StateCommandResponse::new(&interrogation_id, result)),
    )
        .into_response())
}

/// DELETE /api/interrogations/:id - Drop state and answers
pub async fn delete(
    State(handlers): State<InterrogationHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    authorize(&user, LogicalRole::Administrator, &handlers.role_names)?;
    let cmd = DeleteInterrogationCommand {
        interrogation_id: parse_id(&id)?,
    };

    handlers
        .delete_handler
        .handle(cmd, request_metadata(&user, &headers))
        .await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_without_length_is_absent() {
        assert_eq!(body_bytes(&HeaderMap::new(), Bytes::new()), None);
    }

    #[test]
    fn empty_body_with_zero_length_is_present() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_LENGTH, "0".parse().unwrap());
        assert_eq!(body_bytes(&headers, Bytes::new()), Some(vec![]));
    }

    #[test]
    fn blank_path_id_is_rejected() {
        assert!(matches!(parse_id(" "), Err(ApiError::BadRequest(_))));
    }
}
