use std::sync::OnceLock;

use serde::Serialize;

use crate::workflows::decision_notice::case_data::CaseData;
use crate::workflows::decision_notice::conditions::{
    FieldCondition, StringListPredicate, YesNoPredicate,
};
use crate::workflows::decision_notice::matrix::{
    CompositeCondition, ConditionKind, ConditionMatrix,
};
use crate::workflows::decision_notice::points::PointsGate;

use super::outcome::{
    answer_keys, dwp_reassess_the_award, regulation_29, regulation_35, schedule_3,
    support_group_only, wca_appeal,
};

/// Rate of ESA awarded by a regulations row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EsaAwardRate {
    NoAward,
    LowerRate,
    HigherRate,
}

impl EsaAwardRate {
    pub const fn code(self) -> &'static str {
        match self {
            EsaAwardRate::NoAward => "noAward",
            EsaAwardRate::LowerRate => "lowerRate",
            EsaAwardRate::HigherRate => "higherRate",
        }
    }

    /// Wording used in the notice, e.g. "lower rate".
    pub const fn label(self) -> &'static str {
        match self {
            EsaAwardRate::NoAward => "no award",
            EsaAwardRate::LowerRate => "lower rate",
            EsaAwardRate::HigherRate => "higher rate",
        }
    }

    pub const fn is_entitled(self) -> bool {
        matches!(self, EsaAwardRate::LowerRate | EsaAwardRate::HigherRate)
    }
}

/// Entitlement lines of an ESA notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EsaEntitlement {
    pub award_rate: Option<&'static str>,
    pub is_entitled: bool,
}

impl EsaEntitlement {
    /// Only WCA appeals carry an award rate.
    pub fn for_case(case: &CaseData, condition: EsaRegulationsCondition) -> Self {
        let rate = condition.award_rate().filter(|_| case.esa.is_wca_appeal());
        Self {
            award_rate: rate.map(EsaAwardRate::label),
            is_entitled: rate.map_or(false, EsaAwardRate::is_entitled),
        }
    }
}

/// Points, regulation 29, regulation 35 and Schedule 3 combinations, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EsaRegulationsCondition {
    LowPointsRegulation29Unspecified,
    LowPointsRegulation29DoesNotApply,
    LowPointsRegulation29AppliesRegulation35Unspecified,
    LowPointsRegulation29AppliesRegulation35DoesNotApply,
    LowPointsRegulation29AppliesRegulation35Applies,
    SupportGroupOnlyRegulation35Unspecified,
    SupportGroupOnlyRegulation35DoesNotApply,
    SupportGroupOnlyRegulation35Applies,
    HighPointsRegulation35Unspecified,
    HighPointsRegulation35DoesNotApply,
    HighPointsRegulation35Applies,
    NonWcaAppeal,
}

impl EsaRegulationsCondition {
    pub const ALL: [EsaRegulationsCondition; 12] = [
        EsaRegulationsCondition::LowPointsRegulation29Unspecified,
        EsaRegulationsCondition::LowPointsRegulation29DoesNotApply,
        EsaRegulationsCondition::LowPointsRegulation29AppliesRegulation35Unspecified,
        EsaRegulationsCondition::LowPointsRegulation29AppliesRegulation35DoesNotApply,
        EsaRegulationsCondition::LowPointsRegulation29AppliesRegulation35Applies,
        EsaRegulationsCondition::SupportGroupOnlyRegulation35Unspecified,
        EsaRegulationsCondition::SupportGroupOnlyRegulation35DoesNotApply,
        EsaRegulationsCondition::SupportGroupOnlyRegulation35Applies,
        EsaRegulationsCondition::HighPointsRegulation35Unspecified,
        EsaRegulationsCondition::HighPointsRegulation35DoesNotApply,
        EsaRegulationsCondition::HighPointsRegulation35Applies,
        EsaRegulationsCondition::NonWcaAppeal,
    ];

    pub fn award_rate(self) -> Option<EsaAwardRate> {
        use EsaRegulationsCondition::*;
        match self {
            LowPointsRegulation29Unspecified | NonWcaAppeal => None,
            LowPointsRegulation29DoesNotApply => Some(EsaAwardRate::NoAward),
            LowPointsRegulation29AppliesRegulation35DoesNotApply
            | SupportGroupOnlyRegulation35DoesNotApply
            | HighPointsRegulation35DoesNotApply => Some(EsaAwardRate::LowerRate),
            LowPointsRegulation29AppliesRegulation35Unspecified
            | LowPointsRegulation29AppliesRegulation35Applies
            | SupportGroupOnlyRegulation35Unspecified
            | SupportGroupOnlyRegulation35Applies
            | HighPointsRegulation35Unspecified
            | HighPointsRegulation35Applies => Some(EsaAwardRate::HigherRate),
        }
    }

    fn build(self) -> CompositeCondition<EsaRegulationsCondition> {
        use EsaRegulationsCondition::*;
        use StringListPredicate as List;
        use YesNoPredicate::{False, NotTrue, Specified, True, Unspecified};

        let low_points = |primary: Vec<FieldCondition>| {
            CompositeCondition::new(self, primary)
                .with_points_gate(Some(PointsGate::LESS_THAN_FIFTEEN))
        };
        let high_points = |regulation_35_answer| {
            CompositeCondition::new(
                self,
                vec![wca_appeal(True, false), shown_regulation_35(regulation_35_answer)],
            )
            .with_points_gate(Some(PointsGate::FIFTEEN_OR_MORE))
        };
        let not_support_group = || support_group_only(NotTrue, true);

        match self {
            LowPointsRegulation29Unspecified => low_points(vec![
                wca_appeal(True, false),
                not_support_group(),
                regulation_29(Unspecified),
            ])
            .with_validation(vec![regulation_29(Specified)]),
            LowPointsRegulation29DoesNotApply => low_points(vec![
                wca_appeal(True, false),
                not_support_group(),
                shown_regulation_29(False),
            ])
            .with_validation(vec![regulation_35(Unspecified), schedule_3(List::Unspecified)]),
            LowPointsRegulation29AppliesRegulation35Unspecified => low_points(vec![
                wca_appeal(True, false),
                not_support_group(),
                shown_regulation_29(True),
                shown_regulation_35(Unspecified),
            ])
            .with_validation(vec![schedule_3(List::NotEmpty)]),
            LowPointsRegulation29AppliesRegulation35DoesNotApply
            | LowPointsRegulation29AppliesRegulation35Applies => {
                let regulation_35_answer = match self {
                    LowPointsRegulation29AppliesRegulation35Applies => True,
                    _ => False,
                };
                low_points(vec![
                    wca_appeal(True, false),
                    not_support_group(),
                    shown_regulation_29(True),
                    shown_regulation_35(regulation_35_answer),
                ])
                .with_validation(vec![schedule_3(List::Empty)])
            }
            SupportGroupOnlyRegulation35Unspecified => low_points(vec![
                wca_appeal(True, false),
                support_group_only(True, true),
                shown_regulation_35(Unspecified),
            ])
            .show_points_gate(false)
            .with_validation(vec![schedule_3(List::NotEmpty), regulation_29(Unspecified)]),
            SupportGroupOnlyRegulation35DoesNotApply | SupportGroupOnlyRegulation35Applies => {
                let regulation_35_answer = match self {
                    SupportGroupOnlyRegulation35Applies => True,
                    _ => False,
                };
                low_points(vec![
                    wca_appeal(True, false),
                    support_group_only(True, true),
                    shown_regulation_35(regulation_35_answer),
                ])
                .show_points_gate(false)
                .with_validation(vec![schedule_3(List::Empty), regulation_29(Unspecified)])
            }
            HighPointsRegulation35Unspecified => high_points(Unspecified).with_validation(vec![
                regulation_29(Unspecified),
                not_support_group(),
                schedule_3(List::NotEmpty),
            ]),
            HighPointsRegulation35DoesNotApply => high_points(False).with_validation(vec![
                regulation_29(Unspecified),
                not_support_group(),
                schedule_3(List::Empty),
            ]),
            HighPointsRegulation35Applies => high_points(True).with_validation(vec![
                regulation_29(Unspecified),
                not_support_group(),
                schedule_3(List::Empty),
            ]),
            NonWcaAppeal => low_points(vec![wca_appeal(False, false)])
                .show_points_gate(false)
                .with_validation(vec![dwp_reassess_the_award(Unspecified)]),
        }
    }
}

impl ConditionKind for EsaRegulationsCondition {
    fn name(self) -> &'static str {
        use EsaRegulationsCondition::*;
        match self {
            LowPointsRegulation29Unspecified => "LOW_POINTS_REGULATION_29_UNSPECIFIED",
            LowPointsRegulation29DoesNotApply => "LOW_POINTS_REGULATION_29_DOES_NOT_APPLY",
            LowPointsRegulation29AppliesRegulation35Unspecified => {
                "LOW_POINTS_REGULATION_29_DOES_APPLY_REGULATION_35_UNSPECIFIED_NON_SUPPORT_GROUP_ONLY"
            }
            LowPointsRegulation29AppliesRegulation35DoesNotApply => {
                "LOW_POINTS_REGULATION_29_DOES_APPLY_REGULATION_35_DOES_NOT_APPLY_NON_SUPPORT_GROUP_ONLY"
            }
            LowPointsRegulation29AppliesRegulation35Applies => {
                "LOW_POINTS_REGULATION_29_DOES_APPLY_REGULATION_35_DOES_APPLY_NON_SUPPORT_GROUP_ONLY"
            }
            SupportGroupOnlyRegulation35Unspecified => {
                "LOW_POINTS_SCHEDULE2_AND_REG_29_SKIPPED_REGULATION_35_UNSPECIFIED_SUPPORT_GROUP_ONLY"
            }
            SupportGroupOnlyRegulation35DoesNotApply => {
                "LOW_POINTS_SCHEDULE2_AND_REG_29_SKIPPED_REGULATION_35_DOES_NOT_APPLY_SUPPORT_GROUP_ONLY"
            }
            SupportGroupOnlyRegulation35Applies => {
                "LOW_POINTS_SCHEDULE2_AND_REG_29_SKIPPED_REGULATION_35_DOES_APPLY_SUPPORT_GROUP_ONLY"
            }
            HighPointsRegulation35Unspecified => "HIGH_POINTS_REGULATION_35_UNSPECIFIED",
            HighPointsRegulation35DoesNotApply => "HIGH_POINTS_REGULATION_35_DOES_NOT_APPLY",
            HighPointsRegulation35Applies => "HIGH_POINTS_REGULATION_35_DOES_APPLY",
            NonWcaAppeal => "NON_WCA_APPEAL",
        }
    }
}

fn shown_regulation_29(predicate: YesNoPredicate) -> FieldCondition {
    regulation_29(predicate).displayed(true)
}

fn shown_regulation_35(predicate: YesNoPredicate) -> FieldCondition {
    regulation_35(predicate).displayed(true)
}

fn diagnostics(case: &CaseData) -> String {
    let esa = &case.esa;
    format!(
        "regulation29={:?}:schedule3={:?}:regulation35={:?}",
        esa.regulation29_applies, esa.schedule3_selections, esa.regulation35_applies,
    )
}

/// The ESA points and regulations matrix, built on first use.
pub fn esa_regulations_matrix() -> &'static ConditionMatrix<EsaRegulationsCondition> {
    static MATRIX: OnceLock<ConditionMatrix<EsaRegulationsCondition>> = OnceLock::new();
    MATRIX.get_or_init(|| {
        let conditions = EsaRegulationsCondition::ALL
            .iter()
            .map(|&kind| kind.build())
            .collect();
        ConditionMatrix::new("ESA", conditions, answer_keys, diagnostics)
    })
}
