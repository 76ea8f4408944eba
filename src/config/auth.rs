//! Authorization configuration

use serde::Deserialize;

use crate::domain::foundation::RoleNames;

use super::error::ValidationError;
use super::server::Environment;

/// Role names granted by the identity provider, plus the optional static
/// token used by the development profile.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_admin_role")]
    pub admin_role: String,

    #[serde(default = "default_user_role")]
    pub user_role: String,

    #[serde(default = "default_designer_role")]
    pub designer_role: String,

    /// Bearer token accepted in development.
    pub dev_token: Option<String>,

    /// Roles granted to the development token (comma-separated).
    #[serde(default = "default_dev_roles")]
    pub dev_roles: String,
}

impl AuthConfig {
    pub fn role_names(&self) -> RoleNames {
        RoleNames {
            admin: self.admin_role.clone(),
            user: self.user_role.clone(),
            designer: self.designer_role.clone(),
        }
    }

    pub fn dev_roles_list(&self) -> Vec<String> {
        self.dev_roles
            .split(',')
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .collect()
    }

    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let names = [&self.admin_role, &self.user_role, &self.designer_role];
        if names.iter().any(|n| n.trim().is_empty()) {
            return Err(ValidationError::InvalidRoleNames);
        }
        if names[0] == names[1] || names[0] == names[2] || names[1] == names[2] {
            return Err(ValidationError::InvalidRoleNames);
        }
        if self.dev_token.is_some() && !environment.is_development() {
            return Err(ValidationError::DevTokenOutsideDevelopment);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_role: default_admin_role(),
            user_role: default_user_role(),
            designer_role: default_designer_role(),
            dev_token: None,
            dev_roles: default_dev_roles(),
        }
    }
}

fn default_admin_role() -> String {
    "ADMIN".to_string()
}

fn default_user_role() -> String {
    "USER".to_string()
}

fn default_designer_role() -> String {
    "DESIGNER".to_string()
}

fn default_dev_roles() -> String {
    "ADMIN".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_role_names_default() {
        assert_eq!(AuthConfig::default().role_names(), RoleNames::default());
    }

    #[test]
    fn test_duplicate_role_names_are_rejected() {
        let config = AuthConfig {
            designer_role: "ADMIN".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidRoleNames)
        );
    }

    #[test]
    fn test_blank_role_name_is_rejected() {
        let config = AuthConfig {
            user_role: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate(&Environment::Development).is_err());
    }

    #[test]
    fn test_dev_token_only_in_development() {
        let config = AuthConfig {
            dev_token: Some("local".to_string()),
            ..Default::default()
        };
        assert!(config.validate(&Environment::Development).is_ok());
        assert_eq!(
            config.validate(&Environment::Staging),
            Err(ValidationError::DevTokenOutsideDevelopment)
        );
    }

    #[test]
    fn test_dev_roles_parsing() {
        let config = AuthConfig {
            dev_roles: "DESIGNER, USER".to_string(),
            ..Default::default()
        };
        assert_eq!(config.dev_roles_list(), vec!["DESIGNER", "USER"]);
    }
}
