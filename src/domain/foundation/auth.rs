//! Authentication types for the domain layer.
//!
//! These types represent a caller whose token has already been validated by
//! the identity layer. Token validation itself happens behind the
//! `SessionValidator` port; the domain only sees the resulting identity and
//! the granted roles, each presented as `ROLE_<ROLE_NAME>`.

use super::UserId;
use thiserror::Error;

/// Prefix the identity layer puts in front of every granted role name.
pub const ROLE_PREFIX: &str = "ROLE_";

/// Authenticated caller extracted from a validated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the identity provider.
    pub id: UserId,

    /// Display name if available (`name` or `preferred_username` claim).
    pub display_name: Option<String>,

    /// Granted roles, already prefixed (`ROLE_ADMIN`, `ROLE_USER`, ...).
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    ///
    /// Role names missing the `ROLE_` prefix get it added, so callers can
    /// pass raw claim values.
    pub fn new<I, R>(id: UserId, display_name: Option<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        let roles = roles
            .into_iter()
            .map(|r| prefixed_role(&r.into()))
            .collect();
        Self {
            id,
            display_name,
            roles,
        }
    }

    /// Returns true if the user was granted the given role.
    ///
    /// Accepts either `ADMIN` or `ROLE_ADMIN`.
    pub fn has_role(&self, role: &str) -> bool {
        let wanted = prefixed_role(role);
        self.roles.iter().any(|r| *r == wanted)
    }

    /// Returns the display name, or the user id as fallback.
    pub fn display_name_or_id(&self) -> &str {
        self.display_name.as_deref().unwrap_or(self.id.as_str())
    }
}

/// Adds the `ROLE_` prefix to a role name unless it is already present.
pub fn prefixed_role(role: &str) -> String {
    if role.starts_with(ROLE_PREFIX) {
        role.to_string()
    } else {
        format!("{}{}", ROLE_PREFIX, role)
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The caller lacks the roles required for this action.
    #[error("Insufficient permissions")]
    InsufficientPermissions,

    /// The identity provider is unavailable (network, config, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if the caller should obtain a new token.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(roles: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("user-123").unwrap(),
            Some("Test User".to_string()),
            roles.iter().copied(),
        )
    }

    #[test]
    fn new_prefixes_raw_role_names() {
        let u = user(&["ADMIN", "ROLE_USER"]);
        assert_eq!(u.roles, vec!["ROLE_ADMIN".to_string(), "ROLE_USER".to_string()]);
    }

    #[test]
    fn has_role_accepts_prefixed_and_bare_names() {
        let u = user(&["INTERVIEWER"]);
        assert!(u.has_role("INTERVIEWER"));
        assert!(u.has_role("ROLE_INTERVIEWER"));
        assert!(!u.has_role("ADMIN"));
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let u = AuthenticatedUser::new(
            UserId::new("bob").unwrap(),
            None,
            Vec::<String>::new(),
        );
        assert_eq!(u.display_name_or_id(), "bob");
        assert_eq!(user(&[]).display_name_or_id(), "Test User");
    }

    #[test]
    fn auth_error_service_unavailable_displays_message() {
        let err = AuthError::service_unavailable("Connection refused");
        assert_eq!(format!("{}", err), "Auth service unavailable: Connection refused");
    }

    #[test]
    fn auth_error_requires_reauthentication_for_token_errors() {
        assert!(AuthError::InvalidToken.requires_reauthentication());
        assert!(AuthError::TokenExpired.requires_reauthentication());
        assert!(!AuthError::InsufficientPermissions.requires_reauthentication());
        assert!(!AuthError::service_unavailable("").requires_reauthentication());
    }
}
