use std::sync::OnceLock;

use serde::Serialize;

use crate::workflows::decision_notice::activity::ActivityDomain;
use crate::workflows::decision_notice::case_data::{CaseData, YesNo};
use crate::workflows::decision_notice::conditions::{
    AllowedOrRefused, FieldCondition, FieldValue, StringListPredicate, YesNoPredicate,
};
use crate::workflows::decision_notice::errors::AdjudicationError;
use crate::workflows::decision_notice::matrix::{
    CompositeCondition, ConditionKind, ConditionMatrix,
};
use crate::workflows::decision_notice::points::PointsGate;

use super::activities::EsaActivityType;

/// Rows of the ESA decision matrix, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EsaOutcomeCondition {
    RefusedNonSupportGroupOnly,
    RefusedSupportGroupOnlyLowPoints,
    RefusedSupportGroupOnlyHighPoints,
    AllowedNonSupportGroupOnlyHighPoints,
    AllowedNonSupportGroupOnlyLowPoints,
    AllowedSupportGroupOnlySchedule3Selected,
    AllowedSupportGroupOnlySchedule3NotSelected,
    AllowedSupportGroupOnlySchedule3Unspecified,
    NonWcaAppealAllowed,
    NonWcaAppealRefused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EsaScenario {
    #[serde(rename = "SCENARIO_1")]
    Scenario1,
    #[serde(rename = "SCENARIO_2")]
    Scenario2,
    #[serde(rename = "SCENARIO_3")]
    Scenario3,
    #[serde(rename = "SCENARIO_4")]
    Scenario4,
    #[serde(rename = "SCENARIO_5")]
    Scenario5,
    #[serde(rename = "SCENARIO_6")]
    Scenario6,
    #[serde(rename = "SCENARIO_7")]
    Scenario7,
    #[serde(rename = "SCENARIO_8")]
    Scenario8,
    #[serde(rename = "SCENARIO_9")]
    Scenario9,
    #[serde(rename = "SCENARIO_10")]
    Scenario10,
    #[serde(rename = "SCENARIO_12")]
    Scenario12,
}

impl EsaOutcomeCondition {
    pub const ALL: [EsaOutcomeCondition; 10] = [
        EsaOutcomeCondition::RefusedNonSupportGroupOnly,
        EsaOutcomeCondition::RefusedSupportGroupOnlyLowPoints,
        EsaOutcomeCondition::RefusedSupportGroupOnlyHighPoints,
        EsaOutcomeCondition::AllowedNonSupportGroupOnlyHighPoints,
        EsaOutcomeCondition::AllowedNonSupportGroupOnlyLowPoints,
        EsaOutcomeCondition::AllowedSupportGroupOnlySchedule3Selected,
        EsaOutcomeCondition::AllowedSupportGroupOnlySchedule3NotSelected,
        EsaOutcomeCondition::AllowedSupportGroupOnlySchedule3Unspecified,
        EsaOutcomeCondition::NonWcaAppealAllowed,
        EsaOutcomeCondition::NonWcaAppealRefused,
    ];

    pub fn outcome(self) -> AllowedOrRefused {
        use EsaOutcomeCondition::*;
        match self {
            RefusedNonSupportGroupOnly
            | RefusedSupportGroupOnlyLowPoints
            | RefusedSupportGroupOnlyHighPoints
            | NonWcaAppealRefused => AllowedOrRefused::Refused,
            _ => AllowedOrRefused::Allowed,
        }
    }

    fn build(self) -> CompositeCondition<EsaOutcomeCondition> {
        use EsaOutcomeCondition::*;
        use StringListPredicate as List;
        use YesNoPredicate::{False, NotTrue, True, Unspecified};

        let allowed_or_refused = FieldCondition::allowed_or_refused(self.outcome()).displayed(true);
        match self {
            RefusedNonSupportGroupOnly => CompositeCondition::new(
                self,
                vec![
                    allowed_or_refused,
                    wca_appeal(True, false),
                    support_group_only(NotTrue, true),
                ],
            )
            .with_validation_points(PointsGate::LESS_THAN_FIFTEEN)
            .with_validation(vec![
                regulation_29(False),
                schedule_3(List::Unspecified),
                support_group_only(False, false),
                regulation_35(Unspecified),
            ]),
            RefusedSupportGroupOnlyLowPoints | RefusedSupportGroupOnlyHighPoints => {
                let gate = if self == RefusedSupportGroupOnlyLowPoints {
                    PointsGate::LESS_THAN_FIFTEEN
                } else {
                    PointsGate::FIFTEEN_OR_MORE
                };
                CompositeCondition::new(
                    self,
                    vec![
                        allowed_or_refused,
                        wca_appeal(True, false),
                        support_group_only(True, true),
                    ],
                )
                .with_points_gate(Some(gate))
                .with_validation(vec![
                    regulation_29(Unspecified),
                    schedule_3(List::Empty),
                    regulation_35(False),
                ])
            }
            AllowedNonSupportGroupOnlyHighPoints => CompositeCondition::new(
                self,
                vec![
                    allowed_or_refused,
                    wca_appeal(True, false),
                    support_group_only(NotTrue, true),
                ],
            )
            .with_points_gate(Some(PointsGate::FIFTEEN_OR_MORE))
            .with_validation(vec![support_group_only(False, false)]),
            AllowedNonSupportGroupOnlyLowPoints => CompositeCondition::new(
                self,
                vec![
                    allowed_or_refused,
                    wca_appeal(True, false),
                    support_group_only(NotTrue, true),
                ],
            )
            .with_points_gate(Some(PointsGate::LESS_THAN_FIFTEEN))
            .with_validation(vec![support_group_only(False, false), regulation_29(True)]),
            AllowedSupportGroupOnlySchedule3Selected => CompositeCondition::new(
                self,
                vec![
                    allowed_or_refused,
                    wca_appeal(True, false),
                    support_group_only(True, true),
                    schedule_3(List::NotEmpty),
                ],
            )
            .with_validation(vec![regulation_29(Unspecified)]),
            AllowedSupportGroupOnlySchedule3NotSelected => CompositeCondition::new(
                self,
                vec![
                    allowed_or_refused,
                    wca_appeal(True, false),
                    support_group_only(True, true),
                    schedule_3(List::Empty),
                ],
            )
            .with_validation(vec![regulation_29(Unspecified), regulation_35(True)]),
            AllowedSupportGroupOnlySchedule3Unspecified => CompositeCondition::new(
                self,
                vec![
                    allowed_or_refused,
                    wca_appeal(True, true),
                    support_group_only(True, true),
                    schedule_3(List::Unspecified),
                ],
            )
            .with_validation(vec![regulation_29(Unspecified), regulation_35(True)]),
            NonWcaAppealAllowed | NonWcaAppealRefused => {
                CompositeCondition::new(self, vec![allowed_or_refused, wca_appeal(False, true)])
                    .with_validation(vec![dwp_reassess_the_award(Unspecified)])
            }
        }
    }

    /// Template scenario for a selected row.
    pub fn scenario(self, case: &CaseData) -> Result<EsaScenario, AdjudicationError> {
        use EsaOutcomeCondition::*;

        let regulation_35_is = |predicate| regulation_35(predicate).is_satisfied(case);
        let schedule_3_empty = case.esa.schedule3_is_empty();

        let scenario = match self {
            RefusedNonSupportGroupOnly => Some(EsaScenario::Scenario1),
            RefusedSupportGroupOnlyLowPoints | RefusedSupportGroupOnlyHighPoints => {
                Some(EsaScenario::Scenario2)
            }
            AllowedSupportGroupOnlySchedule3NotSelected
                if regulation_35_is(YesNoPredicate::True) =>
            {
                Some(EsaScenario::Scenario3)
            }
            AllowedSupportGroupOnlySchedule3NotSelected
                if regulation_35_is(YesNoPredicate::Unspecified) =>
            {
                Some(EsaScenario::Scenario4)
            }
            AllowedSupportGroupOnlySchedule3Selected => Some(EsaScenario::Scenario4),
            AllowedNonSupportGroupOnlyHighPoints if schedule_3_empty => {
                if regulation_35_is(YesNoPredicate::True) {
                    Some(EsaScenario::Scenario12)
                } else {
                    Some(EsaScenario::Scenario5)
                }
            }
            AllowedNonSupportGroupOnlyHighPoints => Some(EsaScenario::Scenario6),
            AllowedNonSupportGroupOnlyLowPoints if !schedule_3_empty => {
                Some(EsaScenario::Scenario9)
            }
            AllowedNonSupportGroupOnlyLowPoints if regulation_35_is(YesNoPredicate::False) => {
                Some(EsaScenario::Scenario7)
            }
            AllowedNonSupportGroupOnlyLowPoints if regulation_35_is(YesNoPredicate::True) => {
                Some(EsaScenario::Scenario8)
            }
            NonWcaAppealAllowed | NonWcaAppealRefused => Some(EsaScenario::Scenario10),
            _ => None,
        };

        scenario.ok_or(AdjudicationError::ScenarioUnresolved {
            benefit: "ESA",
            condition: self.name(),
        })
    }
}

impl ConditionKind for EsaOutcomeCondition {
    fn name(self) -> &'static str {
        use EsaOutcomeCondition::*;
        match self {
            RefusedNonSupportGroupOnly => "REFUSED_NON_SUPPORT_GROUP_ONLY",
            RefusedSupportGroupOnlyLowPoints => "REFUSED_SUPPORT_GROUP_ONLY_LOW_POINTS",
            RefusedSupportGroupOnlyHighPoints => "REFUSED_SUPPORT_GROUP_ONLY_HIGH_POINTS",
            AllowedNonSupportGroupOnlyHighPoints => "ALLOWED_NON_SUPPORT_GROUP_ONLY_HIGH_POINTS",
            AllowedNonSupportGroupOnlyLowPoints => "ALLOWED_NON_SUPPORT_GROUP_ONLY_LOW_POINTS",
            AllowedSupportGroupOnlySchedule3Selected => {
                "ALLOWED_SUPPORT_GROUP_ONLY_SCHEDULE_3_SELECTED"
            }
            AllowedSupportGroupOnlySchedule3NotSelected => {
                "ALLOWED_SUPPORT_GROUP_ONLY_SCHEDULE_3_NOT_SELECTED"
            }
            AllowedSupportGroupOnlySchedule3Unspecified => {
                "ALLOWED_SUPPORT_GROUP_ONLY_SCHEDULE_3_UNSPECIFIED"
            }
            NonWcaAppealAllowed => "NON_WCA_APPEAL_ALLOWED",
            NonWcaAppealRefused => "NON_WCA_APPEAL_REFUSED",
        }
    }
}

pub(super) fn wca_appeal(predicate: YesNoPredicate, display: bool) -> FieldCondition {
    FieldCondition::yes_no("Wca Appeal", predicate, |case| {
        FieldValue::YesNo(YesNo::from_bool(case.esa.is_wca_appeal()))
    })
    .displayed(display)
}

pub(super) fn support_group_only(predicate: YesNoPredicate, display: bool) -> FieldCondition {
    FieldCondition::yes_no("Support Group Only Appeal", predicate, |case| {
        FieldValue::yes_no(case.esa.support_group_only_appeal)
    })
    .displayed(display)
}

pub(crate) fn regulation_29(predicate: YesNoPredicate) -> FieldCondition {
    FieldCondition::yes_no("Regulation 29", predicate, |case| {
        FieldValue::yes_no(case.esa.regulation29_applies)
    })
}

pub(crate) fn regulation_35(predicate: YesNoPredicate) -> FieldCondition {
    FieldCondition::yes_no("Regulation 35", predicate, |case| {
        FieldValue::yes_no(case.esa.regulation35_applies)
    })
}

pub(super) fn schedule_3(predicate: StringListPredicate) -> FieldCondition {
    FieldCondition::string_list("Schedule 3 Activities", predicate, |case| {
        FieldValue::list(case.esa.schedule3_selections.as_deref())
    })
}

/// Any non-blank reassessment answer counts as "Yes".
pub(super) fn dwp_reassess_the_award(predicate: YesNoPredicate) -> FieldCondition {
    FieldCondition::yes_no("'When should DWP reassess the award?'", predicate, |case| {
        match case.esa.dwp_reassess_the_award.as_deref() {
            None => FieldValue::Missing,
            Some(value) => FieldValue::YesNo(YesNo::from_bool(!value.trim().is_empty())),
        }
    })
}

/// Selected physical and mental assessment question keys.
pub fn answer_keys(case: &CaseData) -> Vec<String> {
    EsaActivityType::ALL
        .iter()
        .filter_map(|activity| activity.selected_question_keys(case))
        .flatten()
        .cloned()
        .collect()
}

fn diagnostics(case: &CaseData) -> String {
    let esa = &case.esa;
    format!(
        "allowedOrRefused={}:wcaAppeal={}:supportGroupOnly={:?}:regulation29={:?}:\
         schedule3={:?}:regulation35={:?}",
        case.final_decision
            .allowed_or_refused
            .as_deref()
            .unwrap_or("null"),
        esa.is_wca_appeal(),
        esa.support_group_only_appeal,
        esa.regulation29_applies,
        esa.schedule3_selections,
        esa.regulation35_applies,
    )
}

/// The ESA matrix, built on first use.
pub fn esa_matrix() -> &'static ConditionMatrix<EsaOutcomeCondition> {
    static MATRIX: OnceLock<ConditionMatrix<EsaOutcomeCondition>> = OnceLock::new();
    MATRIX.get_or_init(|| {
        let conditions = EsaOutcomeCondition::ALL
            .iter()
            .map(|&kind| kind.build())
            .collect();
        ConditionMatrix::new("ESA", conditions, answer_keys, diagnostics)
    })
}
