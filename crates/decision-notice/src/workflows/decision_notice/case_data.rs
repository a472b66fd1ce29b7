use serde::{Deserialize, Serialize};

/// Yes/No answer as stored on the case record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    #[serde(alias = "yes", alias = "YES")]
    Yes,
    #[serde(alias = "no", alias = "NO")]
    No,
}

impl YesNo {
    pub fn from_bool(value: bool) -> Self {
        if value {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

pub(crate) fn is_yes(value: Option<YesNo>) -> bool {
    value == Some(YesNo::Yes)
}

/// Read-only snapshot of the case fields consumed by the adjudication engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseData {
    #[serde(default)]
    pub case_id: Option<String>,
    #[serde(default)]
    pub benefit_code: Option<String>,
    #[serde(default)]
    pub final_decision: FinalDecisionData,
    #[serde(default)]
    pub pip: PipCaseData,
    #[serde(default)]
    pub esa: EsaCaseData,
}

impl CaseData {
    pub fn case_reference(&self) -> &str {
        self.case_id.as_deref().unwrap_or("unknown")
    }
}

/// Benefit-agnostic answers from the write-final-decision journey.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinalDecisionData {
    pub generate_notice: Option<YesNo>,
    pub is_descriptor_flow: Option<YesNo>,
    pub allowed_or_refused: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub end_date_type: Option<String>,
}

/// Personal Independence Payment answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipCaseData {
    pub daily_living_award: Option<String>,
    pub mobility_award: Option<String>,
    pub compared_to_dwp_daily_living: Option<String>,
    pub compared_to_dwp_mobility: Option<String>,
    pub daily_living_activities: Option<Vec<String>>,
    pub mobility_activities: Option<Vec<String>>,
    pub preparing_food: Option<String>,
    pub taking_nutrition: Option<String>,
    pub managing_therapy: Option<String>,
    pub washing_and_bathing: Option<String>,
    pub managing_toilet_needs: Option<String>,
    pub dressing_and_undressing: Option<String>,
    pub communicating: Option<String>,
    pub reading_understanding: Option<String>,
    pub engaging_with_others: Option<String>,
    pub budgeting_decisions: Option<String>,
    pub planning_and_following: Option<String>,
    pub moving_around: Option<String>,
}

/// Employment and Support Allowance answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EsaCaseData {
    pub wca_appeal: Option<YesNo>,
    pub support_group_only_appeal: Option<YesNo>,
    pub regulation29_applies: Option<YesNo>,
    pub regulation35_applies: Option<YesNo>,
    pub schedule3_selections: Option<Vec<String>>,
    pub dwp_reassess_the_award: Option<String>,
    pub physical_disabilities_activities: Option<Vec<String>>,
    pub mental_assessment_activities: Option<Vec<String>>,
    pub mobilising_unaided: Option<String>,
    pub standing_and_sitting: Option<String>,
    pub reaching: Option<String>,
    pub picking_up_moving_or_transferring: Option<String>,
    pub manual_dexterity: Option<String>,
    pub making_self_understood: Option<String>,
    pub communication: Option<String>,
    pub navigation: Option<String>,
    pub loss_of_control: Option<String>,
    pub consciousness: Option<String>,
    pub learning_tasks: Option<String>,
    pub awareness_of_hazards: Option<String>,
    pub personal_action: Option<String>,
    pub coping_with_change: Option<String>,
    pub getting_about: Option<String>,
    pub social_engagement: Option<String>,
    pub appropriateness_of_behaviour: Option<String>,
}

impl EsaCaseData {
    /// A missing WCA flag is read as "not a WCA appeal".
    pub fn is_wca_appeal(&self) -> bool {
        is_yes(self.wca_appeal)
    }

    pub fn schedule3_is_empty(&self) -> bool {
        self.schedule3_selections
            .as_ref()
            .map(|selections| selections.is_empty())
            .unwrap_or(true)
    }
}
