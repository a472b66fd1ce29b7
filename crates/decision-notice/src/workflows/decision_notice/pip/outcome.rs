use std::sync::OnceLock;

use serde::Serialize;

use crate::workflows::decision_notice::activity::ActivityDomain;
use crate::workflows::decision_notice::case_data::{is_yes, CaseData, YesNo};
use crate::workflows::decision_notice::conditions::{
    AllowedOrRefused, AwardConsidered, ComparedToDwp, FieldCheck, FieldCondition, FieldValue,
    YesNoPredicate,
};
use crate::workflows::decision_notice::errors::AdjudicationError;
use crate::workflows::decision_notice::matrix::{CompositeCondition, ConditionKind, ConditionMatrix};
use crate::workflows::decision_notice::points::AwardType;

use super::activities::PipActivityType;

/// Rows of the PIP decision matrix, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PipOutcomeCondition {
    RefusedNotConsideredNotConsidered,
    AllowedNotConsideredNotConsidered,
    RefusedNotConsideredLower,
    RefusedNotConsideredSame,
    AllowedNotConsideredHigher,
    RefusedLowerNotConsidered,
    RefusedLowerLower,
    RefusedLowerSame,
    AllowedLowerHigher,
    RefusedSameNotConsidered,
    RefusedSameLower,
    RefusedSameSame,
    AllowedSameHigher,
    AllowedHigherNotConsidered,
    AllowedHigherLower,
    AllowedHigherSame,
    AllowedHigherHigher,
}

/// Template variant for the PIP decision notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PipScenario {
    NonDescriptor,
    NoAwardNoAward,
    NoAwardAward,
    AwardNoAward,
    AwardAward,
    NoAwardNotConsidered,
    AwardNotConsidered,
    NotConsideredNoAward,
    NotConsideredAward,
}

struct RowShape {
    outcome: AllowedOrRefused,
    descriptor_flow: bool,
    daily_living: ComparedToDwp,
    mobility: ComparedToDwp,
}

impl PipOutcomeCondition {
    pub const ALL: [PipOutcomeCondition; 17] = [
        PipOutcomeCondition::RefusedNotConsideredNotConsidered,
        PipOutcomeCondition::AllowedNotConsideredNotConsidered,
        PipOutcomeCondition::RefusedNotConsideredLower,
        PipOutcomeCondition::RefusedNotConsideredSame,
        PipOutcomeCondition::AllowedNotConsideredHigher,
        PipOutcomeCondition::RefusedLowerNotConsidered,
        PipOutcomeCondition::RefusedLowerLower,
        PipOutcomeCondition::RefusedLowerSame,
        PipOutcomeCondition::AllowedLowerHigher,
        PipOutcomeCondition::RefusedSameNotConsidered,
        PipOutcomeCondition::RefusedSameLower,
        PipOutcomeCondition::RefusedSameSame,
        PipOutcomeCondition::AllowedSameHigher,
        PipOutcomeCondition::AllowedHigherNotConsidered,
        PipOutcomeCondition::AllowedHigherLower,
        PipOutcomeCondition::AllowedHigherSame,
        PipOutcomeCondition::AllowedHigherHigher,
    ];

    fn shape(self) -> RowShape {
        use AllowedOrRefused::{Allowed, Refused};
        use ComparedToDwp::{Higher, Lower, NotConsidered, Same};
        use PipOutcomeCondition::*;

        let (outcome, descriptor_flow, daily_living, mobility) = match self {
            RefusedNotConsideredNotConsidered => (Refused, false, NotConsidered, NotConsidered),
            AllowedNotConsideredNotConsidered => (Allowed, false, NotConsidered, NotConsidered),
            RefusedNotConsideredLower => (Refused, true, NotConsidered, Lower),
            RefusedNotConsideredSame => (Refused, true, NotConsidered, Same),
            AllowedNotConsideredHigher => (Allowed, true, NotConsidered, Higher),
            RefusedLowerNotConsidered => (Refused, true, Lower, NotConsidered),
            RefusedLowerLower => (Refused, true, Lower, Lower),
            RefusedLowerSame => (Refused, true, Lower, Same),
            AllowedLowerHigher => (Allowed, true, Lower, Higher),
            RefusedSameNotConsidered => (Refused, true, Same, NotConsidered),
            RefusedSameLower => (Refused, true, Same, Lower),
            RefusedSameSame => (Refused, true, Same, Same),
            AllowedSameHigher => (Allowed, true, Same, Higher),
            AllowedHigherNotConsidered => (Allowed, true, Higher, NotConsidered),
            AllowedHigherLower => (Allowed, true, Higher, Lower),
            AllowedHigherSame => (Allowed, true, Higher, Same),
            AllowedHigherHigher => (Allowed, true, Higher, Higher),
        };

        RowShape {
            outcome,
            descriptor_flow,
            daily_living,
            mobility,
        }
    }

    /// Appeal outcome implied by the row.
    pub fn outcome(self) -> AllowedOrRefused {
        self.shape().outcome
    }

    pub fn is_daily_living_considered(self) -> bool {
        self.shape().daily_living != ComparedToDwp::NotConsidered
    }

    pub fn is_mobility_considered(self) -> bool {
        self.shape().mobility != ComparedToDwp::NotConsidered
    }

    fn primary_conditions(self) -> Vec<FieldCondition> {
        let shape = self.shape();
        let mut primary = vec![descriptor_flow(shape.descriptor_flow)];
        // Only the non-descriptor rows check the appeal outcome directly.
        if !shape.descriptor_flow {
            primary.push(FieldCondition::allowed_or_refused(shape.outcome));
        }

        let daily_living = shape.daily_living != ComparedToDwp::NotConsidered;
        let mobility = shape.mobility != ComparedToDwp::NotConsidered;
        if daily_living || mobility {
            primary.push(award(PipActivityType::DailyLiving, considered(daily_living)));
            primary.push(award(PipActivityType::Mobility, considered(mobility)));
            if daily_living {
                primary.push(compared_to_dwp(PipActivityType::DailyLiving, shape.daily_living));
            }
            if mobility {
                primary.push(compared_to_dwp(PipActivityType::Mobility, shape.mobility));
            }
        }
        primary
    }

    /// Template scenario for a selected row.
    pub fn scenario(self, case: &CaseData) -> Result<PipScenario, AdjudicationError> {
        if !self.shape().descriptor_flow {
            return Ok(PipScenario::NonDescriptor);
        }

        let no_award = |activity: PipActivityType| {
            activity.award_type_code(case) == Some(AwardType::NoAward.code())
        };
        let daily_living_no_award = no_award(PipActivityType::DailyLiving);
        let mobility_no_award = no_award(PipActivityType::Mobility);

        let scenario = match (self.is_daily_living_considered(), self.is_mobility_considered()) {
            (true, true) => match (daily_living_no_award, mobility_no_award) {
                (true, true) => PipScenario::NoAwardNoAward,
                (true, false) => PipScenario::NoAwardAward,
                (false, true) => PipScenario::AwardNoAward,
                (false, false) => PipScenario::AwardAward,
            },
            (true, false) if daily_living_no_award => PipScenario::NoAwardNotConsidered,
            (true, false) => PipScenario::AwardNotConsidered,
            (false, true) if mobility_no_award => PipScenario::NotConsideredNoAward,
            (false, true) => PipScenario::NotConsideredAward,
            (false, false) => {
                return Err(AdjudicationError::ScenarioUnresolved {
                    benefit: "PIP",
                    condition: self.name(),
                })
            }
        };
        Ok(scenario)
    }
}

impl ConditionKind for PipOutcomeCondition {
    fn name(self) -> &'static str {
        use PipOutcomeCondition::*;
        match self {
            RefusedNotConsideredNotConsidered => "REFUSED_NOT_CONSIDERED_NOT_CONSIDERED",
            AllowedNotConsideredNotConsidered => "ALLOWED_NOT_CONSIDERED_NOT_CONSIDERED",
            RefusedNotConsideredLower => "REFUSED_NOT_CONSIDERED_LOWER",
            RefusedNotConsideredSame => "REFUSED_NOT_CONSIDERED_SAME",
            AllowedNotConsideredHigher => "ALLOWED_NOT_CONSIDERED_HIGHER",
            RefusedLowerNotConsidered => "REFUSED_LOWER_NOT_CONSIDERED",
            RefusedLowerLower => "REFUSED_LOWER_LOWER",
            RefusedLowerSame => "REFUSED_LOWER_SAME",
            AllowedLowerHigher => "ALLOWED_LOWER_HIGHER",
            RefusedSameNotConsidered => "REFUSED_SAME_NOT_CONSIDERED",
            RefusedSameLower => "REFUSED_SAME_LOWER",
            RefusedSameSame => "REFUSED_SAME_SAME",
            AllowedSameHigher => "ALLOWED_SAME_HIGHER",
            AllowedHigherNotConsidered => "ALLOWED_HIGHER_NOT_CONSIDERED",
            AllowedHigherLower => "ALLOWED_HIGHER_LOWER",
            AllowedHigherSame => "ALLOWED_HIGHER_SAME",
            AllowedHigherHigher => "ALLOWED_HIGHER_HIGHER",
        }
    }
}

fn considered(flag: bool) -> AwardConsidered {
    if flag {
        AwardConsidered::Considered
    } else {
        AwardConsidered::NotConsidered
    }
}

fn descriptor_flow(expected: bool) -> FieldCondition {
    let predicate = if expected {
        YesNoPredicate::True
    } else {
        YesNoPredicate::False
    };
    // An unanswered descriptor-flow question is read as "No".
    FieldCondition::yes_no("Descriptor Flow", predicate, |case| {
        FieldValue::YesNo(YesNo::from_bool(is_yes(case.final_decision.is_descriptor_flow)))
    })
}

fn award(activity: PipActivityType, expected: AwardConsidered) -> FieldCondition {
    let extract = match activity {
        PipActivityType::DailyLiving => daily_living_award,
        PipActivityType::Mobility => mobility_award,
    };
    FieldCondition::new("Award Type", FieldCheck::Award(expected), extract)
        .for_activity(activity.display_name())
}

fn compared_to_dwp(activity: PipActivityType, expected: ComparedToDwp) -> FieldCondition {
    let extract = match activity {
        PipActivityType::DailyLiving => daily_living_compared,
        PipActivityType::Mobility => mobility_compared,
    };
    FieldCondition::new("Compared to DWP", FieldCheck::ComparedToDwp(expected), extract)
        .for_activity(activity.display_name())
}

fn daily_living_award(case: &CaseData) -> FieldValue {
    FieldValue::text(case.pip.daily_living_award.as_deref())
}

fn mobility_award(case: &CaseData) -> FieldValue {
    FieldValue::text(case.pip.mobility_award.as_deref())
}

fn daily_living_compared(case: &CaseData) -> FieldValue {
    FieldValue::text(case.pip.compared_to_dwp_daily_living.as_deref())
}

fn mobility_compared(case: &CaseData) -> FieldValue {
    FieldValue::text(case.pip.compared_to_dwp_mobility.as_deref())
}

/// Selected daily-living and mobility question keys.
pub fn answer_keys(case: &CaseData) -> Vec<String> {
    PipActivityType::ALL
        .iter()
        .filter_map(|activity| activity.selected_question_keys(case))
        .flatten()
        .cloned()
        .collect()
}

fn diagnostics(case: &CaseData) -> String {
    let text = |value: &Option<String>| value.clone().unwrap_or_else(|| "null".to_string());
    format!(
        "descriptorFlow={:?}:allowedOrRefused={}:dailyLiving={}:mobility={}:\
         comparedToDwpDailyLiving={}:comparedToDwpMobility={}",
        case.final_decision.is_descriptor_flow,
        text(&case.final_decision.allowed_or_refused),
        text(&case.pip.daily_living_award),
        text(&case.pip.mobility_award),
        text(&case.pip.compared_to_dwp_daily_living),
        text(&case.pip.compared_to_dwp_mobility),
    )
}

/// The PIP matrix, built on first use.
pub fn pip_matrix() -> &'static ConditionMatrix<PipOutcomeCondition> {
    static MATRIX: OnceLock<ConditionMatrix<PipOutcomeCondition>> = OnceLock::new();
    MATRIX.get_or_init(|| {
        let conditions = PipOutcomeCondition::ALL
            .iter()
            .map(|&kind| CompositeCondition::new(kind, kind.primary_conditions()))
            .collect();
        ConditionMatrix::new("PIP", conditions, answer_keys, diagnostics)
    })
}
