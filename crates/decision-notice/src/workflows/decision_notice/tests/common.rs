use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::decision_notice::answers::{
    ActivityAnswer, DescriptorQuestionService, DescriptorTable, QuestionService,
};
use crate::workflows::decision_notice::case_data::{CaseData, YesNo};
use crate::workflows::decision_notice::esa::EsaActivityQuestion;
use crate::workflows::decision_notice::pip::PipActivityQuestion;
use crate::workflows::decision_notice::{decision_notice_router, DecisionNoticeService};

pub(super) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn pip_questions() -> DescriptorQuestionService<PipActivityQuestion> {
    DescriptorQuestionService::new(DescriptorTable::pip().expect("embedded PIP table parses"))
}

pub(super) fn esa_questions() -> DescriptorQuestionService<EsaActivityQuestion> {
    DescriptorQuestionService::new(DescriptorTable::esa().expect("embedded ESA table parses"))
}

pub(super) fn decision_service() -> DecisionNoticeService {
    DecisionNoticeService::with_embedded_tables().expect("embedded tables parse")
}

pub(super) fn router() -> axum::Router {
    decision_notice_router(Arc::new(decision_service()))
}

fn base_case(benefit: &str) -> CaseData {
    let mut case = CaseData {
        case_id: Some("1234".to_string()),
        benefit_code: Some(benefit.to_string()),
        ..CaseData::default()
    };
    case.final_decision.generate_notice = Some(YesNo::Yes);
    case
}

/// Non-descriptor PIP decision with the given outcome.
pub(super) fn pip_non_descriptor_case(allowed_or_refused: &str) -> CaseData {
    let mut case = base_case("PIP");
    case.final_decision.is_descriptor_flow = Some(YesNo::No);
    case.final_decision.allowed_or_refused = Some(allowed_or_refused.to_string());
    case
}

/// Descriptor-flow PIP decision. `None` leaves the award or comparison unanswered.
pub(super) fn pip_descriptor_case(
    daily_living: (&str, Option<&str>),
    mobility: (&str, Option<&str>),
) -> CaseData {
    let mut case = base_case("PIP");
    case.final_decision.is_descriptor_flow = Some(YesNo::Yes);
    case.pip.daily_living_award = Some(daily_living.0.to_string());
    case.pip.compared_to_dwp_daily_living = daily_living.1.map(str::to_string);
    case.pip.mobility_award = Some(mobility.0.to_string());
    case.pip.compared_to_dwp_mobility = mobility.1.map(str::to_string);
    case
}

/// WCA appeal scored on a single mobilising descriptor.
pub(super) fn esa_case(allowed_or_refused: &str, mobilising_code: &str) -> CaseData {
    let mut case = base_case("ESA");
    case.final_decision.allowed_or_refused = Some(allowed_or_refused.to_string());
    case.esa.wca_appeal = Some(YesNo::Yes);
    case.esa.physical_disabilities_activities = Some(strings(&["mobilisingUnaided"]));
    case.esa.mental_assessment_activities = Some(Vec::new());
    case.esa.mobilising_unaided = Some(mobilising_code.to_string());
    case
}

/// Scores every key at a fixed value, whatever the case holds.
pub(super) struct FlatPoints(pub(super) u32);

impl QuestionService for FlatPoints {
    fn answer_for_question_key(
        &self,
        _case: &CaseData,
        question_key: &str,
    ) -> Option<ActivityAnswer> {
        Some(ActivityAnswer {
            code: format!("{question_key}1a"),
            points: self.0,
            number: "1".to_string(),
            letter: "a".to_string(),
            text: "Flat".to_string(),
        })
    }
}

pub(super) async fn json_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let value = serde_json::from_slice(&bytes).expect("body is json");
    (status, value)
}
