//! Logical roles and the authorization expressions guarding endpoints.
//!
//! The UI knows three logical roles. Each maps to exactly one expression that
//! the access-control layer evaluates against the caller's granted roles:
//!
//! | Logical role  | Expression             |
//! |---------------|------------------------|
//! | Administrator | `has-admin-privileges` |
//! | Authenticated | `has-any-role`         |
//! | Designer      | `has-role-designer`    |
//!
//! The table is plain data; concrete role names (`ADMIN`, `USER`, ...) come
//! from configuration through [`RoleNames`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::auth::prefixed_role;
use super::AuthenticatedUser;

/// UI-facing logical role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalRole {
    Administrator,
    Authenticated,
    Designer,
}

/// Authorization expression understood by the access-control layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthorizationExpression {
    HasAdminPrivileges,
    HasAnyRole,
    HasRoleDesigner,
}

/// The complete role table, in declaration order.
pub const ROLE_MAPPING: [(LogicalRole, AuthorizationExpression); 3] = [
    (
        LogicalRole::Administrator,
        AuthorizationExpression::HasAdminPrivileges,
    ),
    (LogicalRole::Authenticated, AuthorizationExpression::HasAnyRole),
    (LogicalRole::Designer, AuthorizationExpression::HasRoleDesigner),
];

impl LogicalRole {
    /// All logical roles.
    pub const ALL: [LogicalRole; 3] = [
        LogicalRole::Administrator,
        LogicalRole::Authenticated,
        LogicalRole::Designer,
    ];

    /// Returns the expression guarding this role.
    pub const fn expression(self) -> AuthorizationExpression {
        match self {
            LogicalRole::Administrator => AuthorizationExpression::HasAdminPrivileges,
            LogicalRole::Authenticated => AuthorizationExpression::HasAnyRole,
            LogicalRole::Designer => AuthorizationExpression::HasRoleDesigner,
        }
    }
}

impl AuthorizationExpression {
    /// Returns the expression string.
    pub const fn as_str(self) -> &'static str {
        match self {
            AuthorizationExpression::HasAdminPrivileges => "has-admin-privileges",
            AuthorizationExpression::HasAnyRole => "has-any-role",
            AuthorizationExpression::HasRoleDesigner => "has-role-designer",
        }
    }

    /// Evaluates the expression against a set of granted `ROLE_*` names.
    pub fn is_satisfied_by<S: AsRef<str>>(self, granted: &[S], names: &RoleNames) -> bool {
        let has = |role: &str| {
            let wanted = prefixed_role(role);
            granted.iter().any(|g| {
                let g: &str = g.as_ref();
                g == wanted
            })
        };

        match self {
            AuthorizationExpression::HasAdminPrivileges => has(&names.admin),
            AuthorizationExpression::HasAnyRole => {
                has(&names.admin) || has(&names.user) || has(&names.designer)
            }
            AuthorizationExpression::HasRoleDesigner => has(&names.designer) || has(&names.admin),
        }
    }

    /// Evaluates the expression for an authenticated caller.
    pub fn allows(self, user: &AuthenticatedUser, names: &RoleNames) -> bool {
        self.is_satisfied_by(user.roles.as_slice(), names)
    }
}

impl fmt::Display for AuthorizationExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete role names granted by the identity provider, without prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleNames {
    pub admin: String,
    pub user: String,
    pub designer: String,
}

impl Default for RoleNames {
    fn default() -> Self {
        Self {
            admin: "ADMIN".to_string(),
            user: "USER".to_string(),
            designer: "DESIGNER".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn mapping_is_total_and_closed() {
        assert_eq!(ROLE_MAPPING.len(), LogicalRole::ALL.len());
        for role in LogicalRole::ALL {
            let matches: Vec<_> = ROLE_MAPPING.iter().filter(|(r, _)| *r == role).collect();
            assert_eq!(matches.len(), 1, "{:?} must map exactly once", role);
            assert_eq!(matches[0].1, role.expression());
            assert!(!role.expression().as_str().is_empty());
        }
    }

    #[test]
    fn expressions_are_distinct() {
        let expressions: HashSet<_> = ROLE_MAPPING.iter().map(|(_, e)| e.as_str()).collect();
        assert_eq!(expressions.len(), 3);
    }

    #[test]
    fn expression_strings_match_access_layer_vocabulary() {
        assert_eq!(
            LogicalRole::Administrator.expression().to_string(),
            "has-admin-privileges"
        );
        assert_eq!(LogicalRole::Authenticated.expression().to_string(), "has-any-role");
        assert_eq!(LogicalRole::Designer.expression().to_string(), "has-role-designer");
    }

    #[test]
    fn expression_serializes_as_kebab_case() {
        let json = serde_json::to_string(&AuthorizationExpression::HasRoleDesigner).unwrap();
        assert_eq!(json, "\"has-role-designer\"");
    }

    #[test]
    fn admin_privileges_require_admin_role() {
        let names = RoleNames::default();
        let expr = AuthorizationExpression::HasAdminPrivileges;
        assert!(expr.is_satisfied_by(&["ROLE_ADMIN"], &names));
        assert!(!expr.is_satisfied_by(&["ROLE_USER", "ROLE_DESIGNER"], &names));
        assert!(!expr.is_satisfied_by(&["ADMIN"], &names));
    }

    #[test]
    fn any_role_accepts_each_configured_role_only() {
        let names = RoleNames::default();
        let expr = AuthorizationExpression::HasAnyRole;
        assert!(expr.is_satisfied_by(&["ROLE_USER"], &names));
        assert!(expr.is_satisfied_by(&["ROLE_DESIGNER"], &names));
        assert!(expr.is_satisfied_by(&["ROLE_ADMIN"], &names));
        assert!(!expr.is_satisfied_by(&["ROLE_GUEST"], &names));
        assert!(!expr.is_satisfied_by::<&str>(&[], &names));
    }

    #[test]
    fn designer_role_is_also_granted_to_admins() {
        let names = RoleNames::default();
        let expr = AuthorizationExpression::HasRoleDesigner;
        assert!(expr.is_satisfied_by(&["ROLE_DESIGNER"], &names));
        assert!(expr.is_satisfied_by(&["ROLE_ADMIN"], &names));
        assert!(!expr.is_satisfied_by(&["ROLE_USER"], &names));
    }

    #[test]
    fn custom_role_names_are_honoured() {
        let names = RoleNames {
            admin: "SUPERVISOR".to_string(),
            user: "RESPONDENT".to_string(),
            designer: "INTERVIEWER".to_string(),
        };
        let user = AuthenticatedUser::new(
            crate::domain::foundation::UserId::new("u").unwrap(),
            None,
            ["INTERVIEWER"],
        );
        assert!(AuthorizationExpression::HasRoleDesigner.allows(&user, &names));
        assert!(!AuthorizationExpression::HasAdminPrivileges.allows(&user, &names));
    }
}
