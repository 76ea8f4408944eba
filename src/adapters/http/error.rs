//! Error-to-response translation for the REST API.
//!
//! `ApiError::to_response_parts` is a pure function of the error value: it
//! computes status, message and details on every call and holds no state, so
//! concurrent requests cannot observe each other's status.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | BadRequest, InvalidPayload, UnparseablePayload | 400 |
//! | Unauthenticated | 401 |
//! | Forbidden | 403 |
//! | ResourceLookupError, interrogation NotFound | 404 |
//! | InvalidTransition, ConcurrentModification | 409 |
//! | anything else | 500 |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::CampaignOverviewError;
use crate::domain::foundation::{AuthorizationExpression, DomainError, ErrorCode};
use crate::domain::interrogation::InterrogationError;
use crate::domain::lookup::ResourceLookupError;

const GENERIC_INTERNAL_MESSAGE: &str = "An unexpected error occurred";

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    pub details: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            details: details.into(),
        }
    }
}

/// Every failure a REST handler can report.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Malformed path or body outside the domain checks.
    BadRequest(String),
    Unauthenticated,
    Forbidden(AuthorizationExpression),
    Interrogation(InterrogationError),
    Lookup(ResourceLookupError),
    /// Failure of an external service or of the store.
    Upstream(DomainError),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    /// Computes the status and body for this error.
    pub fn to_response_parts(&self) -> (StatusCode, ErrorResponse) {
        let (status, message, details) = match self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "Bad request".to_string(),
                msg.clone(),
            ),
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "Authentication required".to_string(),
                ErrorCode::Unauthorized.to_string(),
            ),
            ApiError::Forbidden(expr) => (
                StatusCode::FORBIDDEN,
                "Access denied".to_string(),
                format!("Requires {}", expr),
            ),
            ApiError::Lookup(err) => (StatusCode::NOT_FOUND, err.to_string(), err.searched_key()),
            ApiError::Interrogation(err) => interrogation_parts(err),
            ApiError::Upstream(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_INTERNAL_MESSAGE.to_string(),
                err.code.to_string(),
            ),
        };
        (status, ErrorResponse::new(status, message, details))
    }
}

fn interrogation_parts(err: &InterrogationError) -> (StatusCode, String, String) {
    let code = err.code().to_string();
    match err {
        InterrogationError::InvalidPayload(_) | InterrogationError::UnparseablePayload { .. } => {
            (StatusCode::BAD_REQUEST, err.message(), code)
        }
        InterrogationError::NotFound(id) => (StatusCode::NOT_FOUND, err.message(), id.to_string()),
        InterrogationError::InvalidTransition { .. }
        | InterrogationError::ConcurrentModification(_) => {
            (StatusCode::CONFLICT, err.message(), code)
        }
        InterrogationError::Infrastructure(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            GENERIC_INTERNAL_MESSAGE.to_string(),
            code,
        ),
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Unauthenticated => write!(f, "Authentication required"),
            ApiError::Forbidden(expr) => write!(f, "Forbidden: requires {}", expr),
            ApiError::Interrogation(e) => write!(f, "{}", e),
            ApiError::Lookup(e) => write!(f, "{}", e),
            ApiError::Upstream(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.to_response_parts();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }
        (status, Json(body)).into_response()
    }
}

impl From<InterrogationError> for ApiError {
    fn from(err: InterrogationError) -> Self {
        ApiError::Interrogation(err)
    }
}

impl From<ResourceLookupError> for ApiError {
    fn from(err: ResourceLookupError) -> Self {
        ApiError::Lookup(err)
    }
}

impl From<CampaignOverviewError> for ApiError {
    fn from(err: CampaignOverviewError) -> Self {
        match err {
            CampaignOverviewError::Lookup(e) => ApiError::Lookup(e),
            CampaignOverviewError::Upstream(e) => ApiError::Upstream(e),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Upstream(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CampaignId, InterrogationId, QuestionnaireId, SurveyUnitId};
    use crate::domain::ingestion::{FormatType, InvalidPayloadError};
    use crate::domain::interrogation::StateLabel;

    fn status_of(err: ApiError) -> StatusCode {
        err.to_response_parts().0
    }

    #[test]
    fn every_lookup_error_is_404_with_its_key() {
        let cases = [
            ResourceLookupError::CampaignNotFound(CampaignId::new("C1").unwrap()),
            ResourceLookupError::InterrogationsNotFound(
                SurveyUnitId::new("SU-1").unwrap().into(),
            ),
            ResourceLookupError::SurveyUnitsNotFound(CampaignId::new("C1").unwrap().into()),
            ResourceLookupError::QuestionnaireDocumentNotFound(
                QuestionnaireId::new("Q1").unwrap(),
            ),
        ];

        for err in cases {
            let key = err.searched_key();
            let (status, body) = ApiError::from(err).to_response_parts();
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body.status, 404);
            assert_eq!(body.details, key);
        }
    }

    #[test]
    fn payload_errors_are_400() {
        assert_eq!(
            status_of(InterrogationError::from(InvalidPayloadError::Missing).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(InterrogationError::unparseable(FormatType::Csv, "ragged row").into()),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn lifecycle_conflicts_are_409() {
        let id = InterrogationId::new("I-1").unwrap();
        assert_eq!(
            status_of(InterrogationError::invalid_transition(StateLabel::Validated, "complete").into()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(InterrogationError::ConcurrentModification(id).into()),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn auth_failures_are_401_and_403() {
        assert_eq!(status_of(ApiError::Unauthenticated), StatusCode::UNAUTHORIZED);
        let (status, body) =
            ApiError::Forbidden(AuthorizationExpression::HasRoleDesigner).to_response_parts();
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.details, "Requires has-role-designer");
    }

    #[test]
    fn internal_errors_do_not_leak_diagnostics() {
        let err = ApiError::Upstream(DomainError::new(
            ErrorCode::StorageError,
            "connection to 10.0.0.3:5432 refused",
        ));

        let (status, body) = err.to_response_parts();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, GENERIC_INTERNAL_MESSAGE);
        assert_eq!(body.details, "STORAGE_ERROR");
        assert!(!body.message.contains("10.0.0.3"));

        let (_, body) = ApiError::from(InterrogationError::infrastructure("disk /var/lib full"))
            .to_response_parts();
        assert!(!body.details.contains("/var/lib"));
    }

    #[test]
    fn translation_is_repeatable() {
        let err = ApiError::bad_request("Invalid interrogation id");
        assert_eq!(err.to_response_parts(), err.to_response_parts());
    }

    #[test]
    fn into_response_uses_computed_status() {
        let response = ApiError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
