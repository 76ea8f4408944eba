//! Session validation port for bearer token validation.
//!
//! Provider-agnostic: any OIDC provider (Keycloak, Zitadel, ...) can sit
//! behind it. Implementations must validate issuer, audience and expiry, and
//! map the provider's role claim to `ROLE_<NAME>` strings on
//! `AuthenticatedUser`.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts user identity.
///
/// # Contract
///
/// - `AuthError::InvalidToken` for malformed or badly signed tokens
/// - `AuthError::TokenExpired` for expired tokens
/// - `AuthError::ServiceUnavailable` for transient provider errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a raw token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
