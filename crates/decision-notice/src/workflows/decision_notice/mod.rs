//! Decision-notice adjudication: answer catalogs, points thresholds, and the ordered
//! condition matrices that pick one notice scenario per case.
//!
//! Every registry here is built once and shared read-only. Case data is borrowed for a
//! single evaluation and never retained.

pub mod activity;
pub mod answers;
pub mod case_data;
pub mod conditions;
pub mod errors;
pub mod esa;
pub mod matrix;
pub mod pip;
pub mod points;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use activity::{ActivityDomain, ActivityQuestion};
pub use answers::{
    ActivityAnswer, DescriptorQuestionService, DescriptorTable, DescriptorTableError,
    QuestionService,
};
pub use case_data::{CaseData, EsaCaseData, FinalDecisionData, PipCaseData, YesNo};
pub use conditions::{
    AllowedOrRefused, AwardConsidered, ComparedToDwp, FieldCheck, FieldCondition, FieldValue,
    StringListPredicate, YesNoPredicate,
};
pub use errors::AdjudicationError;
pub use matrix::{
    compose_error, join_grammatically, CompositeCondition, ConditionKind, ConditionMatrix,
};
pub use points::{
    standard_error_message, total_points, AwardType, PointsCondition, PointsGate, PointsRange,
    ScoredAward,
};
pub use router::decision_notice_router;
pub use service::{
    ActivityListing, ActivityPointsSummary, Benefit, DecisionNoticeService, DecisionOutcome,
    QuestionListing, Scenario, ScoredDescriptor,
};
pub use validation::ValidationReport;
