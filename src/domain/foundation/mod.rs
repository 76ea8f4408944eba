//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, error types and the authorization
//! vocabulary used by every other domain module.

mod auth;
mod authorization;
mod command;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use auth::{prefixed_role, AuthError, AuthenticatedUser, ROLE_PREFIX};
pub use authorization::{AuthorizationExpression, LogicalRole, RoleNames, ROLE_MAPPING};
pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CampaignId, InterrogationId, QuestionnaireId, SurveyUnitId, UserId};
pub use state_machine::{StateMachine, TransitionRejected};
pub use timestamp::Timestamp;
