//! Campaign overview read model for designers.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::foundation::{InterrogationId, QuestionnaireId, SurveyUnitId};
use crate::domain::interrogation::{InterrogationState, StateLabel};

use super::{Campaign, InterrogationSummary, QuestionnaireDocument};

/// Questionnaire deployed in a campaign, without its body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireSummary {
    pub id: QuestionnaireId,
    pub label: String,
}

impl From<&QuestionnaireDocument> for QuestionnaireSummary {
    fn from(doc: &QuestionnaireDocument) -> Self {
        Self {
            id: doc.id.clone(),
            label: doc.label.clone(),
        }
    }
}

/// Progress of one interrogation within a campaign.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterrogationProgress {
    pub id: InterrogationId,
    pub survey_unit_id: SurveyUnitId,
    pub questionnaire_id: QuestionnaireId,
    pub state: StateLabel,
    pub current_page: Option<String>,
}

impl InterrogationProgress {
    /// Combines a registered interrogation with its stored state, if any.
    pub fn new(summary: InterrogationSummary, state: Option<&InterrogationState>) -> Self {
        Self {
            id: summary.id,
            survey_unit_id: summary.survey_unit_id,
            questionnaire_id: summary.questionnaire_id,
            state: state.map(InterrogationState::state).unwrap_or_default(),
            current_page: state.and_then(|s| s.current_page().map(str::to_string)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignOverview {
    pub campaign: Campaign,
    pub questionnaires: Vec<QuestionnaireSummary>,
    pub survey_unit_count: usize,
    pub interrogations: Vec<InterrogationProgress>,
}

impl CampaignOverview {
    /// Interrogation count per label. Labels with no interrogation are
    /// reported as zero.
    pub fn state_counts(&self) -> BTreeMap<StateLabel, usize> {
        let mut counts: BTreeMap<StateLabel, usize> =
            StateLabel::ALL.iter().map(|label| (*label, 0)).collect();
        for progress in &self.interrogations {
            *counts.entry(progress.state).or_default() += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CampaignId, Timestamp};

    fn summary(id: &str) -> InterrogationSummary {
        InterrogationSummary {
            id: InterrogationId::new(id).unwrap(),
            survey_unit_id: SurveyUnitId::new(format!("SU-{}", id)).unwrap(),
            questionnaire_id: QuestionnaireId::new("Q1").unwrap(),
        }
    }

    #[test]
    fn progress_without_stored_state_is_not_started() {
        let progress = InterrogationProgress::new(summary("1"), None);
        assert_eq!(progress.state, StateLabel::NotStarted);
        assert_eq!(progress.current_page, None);
    }

    #[test]
    fn state_counts_cover_every_label() {
        let started = InterrogationState::initial()
            .advance_page("2", Timestamp::now())
            .unwrap();
        let overview = CampaignOverview {
            campaign: Campaign {
                id: CampaignId::new("C1").unwrap(),
                label: "Campaign".into(),
                questionnaire_ids: vec![],
            },
            questionnaires: vec![],
            survey_unit_count: 2,
            interrogations: vec![
                InterrogationProgress::new(summary("1"), Some(&started)),
                InterrogationProgress::new(summary("2"), None),
            ],
        };

        let counts = overview.state_counts();
        assert_eq!(counts[&StateLabel::InProgress], 1);
        assert_eq!(counts[&StateLabel::NotStarted], 1);
        assert_eq!(counts[&StateLabel::Validated], 0);
        assert_eq!(counts.len(), 4);
    }
}
