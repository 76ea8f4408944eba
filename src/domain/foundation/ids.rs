//! Strongly-typed identifier value objects.
//!
//! Identifiers issued by the external services (campaigns, survey units,
//! questionnaires) are opaque strings such as `SIMPSONS2020X00`, so every id
//! here wraps a non-empty `String` rather than a UUID.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Declares a non-empty string identifier with the usual conversions.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates the identifier, returning error if empty or blank.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

string_id!(
    /// User identifier (subject claim from the identity provider).
    UserId,
    "user_id"
);

string_id!(
    /// Identifier of a campaign, a batch of interrogations deployed together.
    CampaignId,
    "campaign_id"
);

string_id!(
    /// Identifier of one respondent's interrogation.
    InterrogationId,
    "interrogation_id"
);

string_id!(
    /// Identifier of a survey unit (the sampled respondent entity).
    SurveyUnitId,
    "survey_unit_id"
);

string_id!(
    /// Identifier of a questionnaire-design document.
    QuestionnaireId,
    "questionnaire_id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_non_empty_id() {
        let id = CampaignId::new("SIMPSONS2020X00").unwrap();
        assert_eq!(id.as_str(), "SIMPSONS2020X00");
        assert_eq!(id.to_string(), "SIMPSONS2020X00");
    }

    #[test]
    fn new_rejects_empty_and_blank_ids() {
        assert!(InterrogationId::new("").is_err());
        assert!(InterrogationId::new("   ").is_err());
    }

    #[test]
    fn empty_id_error_names_the_field() {
        let err = SurveyUnitId::new("").unwrap_err();
        assert_eq!(err.to_string(), "Field 'survey_unit_id' cannot be empty");
    }

    #[test]
    fn parses_from_str() {
        let id: QuestionnaireId = "lqnr-2024".parse().unwrap();
        assert_eq!(id.as_str(), "lqnr-2024");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = UserId::new("user-123").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"user-123\"");
    }

    #[test]
    fn deserialization_rejects_empty_string() {
        let result: Result<CampaignId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
