//! Lookups against the external questionnaire-design and data-collection
//! services, and the errors raised when they come back empty.

mod errors;
mod models;
mod overview;

pub use errors::{ResourceKey, ResourceLookupError};
pub use models::{Campaign, InterrogationSummary, QuestionnaireDocument, SurveyUnit};
pub use overview::{CampaignOverview, InterrogationProgress, QuestionnaireSummary};
