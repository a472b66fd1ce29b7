use crate::workflows::decision_notice::answers::QuestionService;
use crate::workflows::decision_notice::case_data::CaseData;
use crate::workflows::decision_notice::points::{PointsCondition, PointsRange, ScoredAward};

use super::activities::PipActivityType;

pub type PipPointsCondition = PointsCondition<PipActivityType>;

/// Statutory thresholds: under 8 is no award, 8 to 11 standard rate, 12 or more enhanced.
pub static PIP_POINTS_CONDITIONS: [PipPointsCondition; 6] = [
    PointsCondition::new(
        ScoredAward::NoAward,
        PipActivityType::DailyLiving,
        PointsRange::at_most(7),
    ),
    PointsCondition::new(
        ScoredAward::StandardRate,
        PipActivityType::DailyLiving,
        PointsRange::between(8, 11),
    ),
    PointsCondition::new(
        ScoredAward::EnhancedRate,
        PipActivityType::DailyLiving,
        PointsRange::at_least(12),
    ),
    PointsCondition::new(
        ScoredAward::NoAward,
        PipActivityType::Mobility,
        PointsRange::at_most(7),
    ),
    PointsCondition::new(
        ScoredAward::StandardRate,
        PipActivityType::Mobility,
        PointsRange::between(8, 11),
    ),
    PointsCondition::new(
        ScoredAward::EnhancedRate,
        PipActivityType::Mobility,
        PointsRange::at_least(12),
    ),
];

pub fn conditions_for(
    activity: PipActivityType,
) -> impl Iterator<Item = &'static PipPointsCondition> {
    PIP_POINTS_CONDITIONS
        .iter()
        .filter(move |condition| condition.activity() == activity)
}

/// Points errors for every condition matching a declared award, in table order.
pub fn points_errors(questions: &dyn QuestionService, case: &CaseData) -> Vec<String> {
    PIP_POINTS_CONDITIONS
        .iter()
        .filter(|condition| condition.is_applicable(case))
        .filter_map(|condition| condition.optional_error_message(questions, case))
        .collect()
}
