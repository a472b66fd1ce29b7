use super::points::AwardType;

/// Failures raised by the adjudication engine.
///
/// User-correctable problems never surface here: they are reported as validation messages.
/// Everything below indicates a configuration or coverage defect and aborts the operation.
#[derive(Debug, thiserror::Error)]
pub enum AdjudicationError {
    #[error("unknown activity question key '{0}'")]
    UnknownQuestionKey(String),
    #[error("award type {0:?} has no points threshold")]
    UnscoredAwardType(AwardType),
    #[error("no {benefit} decision notice condition matched case {case_id} ({detail})")]
    NoConditionMatched {
        benefit: &'static str,
        case_id: String,
        detail: String,
    },
    #[error("{benefit} condition {condition} does not resolve to a scenario")]
    ScenarioUnresolved {
        benefit: &'static str,
        condition: &'static str,
    },
    #[error("case {0} has not requested a generated decision notice")]
    NoticeNotRequested(String),
    #[error("unsupported benefit type '{0}'")]
    UnsupportedBenefit(String),
    #[error("decision notice failed validation: {}", .0.join("; "))]
    Validation(Vec<String>),
}
