use crate::infra::{load_case, print_json};
use clap::Args;
use decision_notice::config::AppConfig;
use decision_notice::error::AppError;
use decision_notice::workflows::decision_notice::{
    ActivityListing, AdjudicationError, Benefit, CaseData, DecisionNoticeService, DecisionOutcome,
    ValidationReport, YesNo,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Case data JSON file, in the camelCase shape the HTTP API accepts
    #[arg(long)]
    pub(crate) case: PathBuf,
    /// Only run the mid-journey validation checks
    #[arg(long)]
    pub(crate) validate_only: bool,
}

#[derive(Args, Debug)]
pub(crate) struct QuestionsArgs {
    /// Benefit code, e.g. PIP or ESA
    #[arg(long)]
    pub(crate) benefit: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EvaluationReport {
    pub(crate) case_id: String,
    pub(crate) validation: ValidationReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) outcome: Option<DecisionOutcome>,
}

#[derive(Debug, Serialize)]
struct QuestionCatalog {
    benefit: Benefit,
    activities: Vec<ActivityListing>,
}

fn service() -> Result<DecisionNoticeService, AppError> {
    let config = AppConfig::load()?;
    Ok(DecisionNoticeService::from_config(&config.adjudication)?)
}

/// Validation always runs; the outcome is added once the case is valid and asks for a notice.
pub(crate) fn evaluate_case(
    service: &DecisionNoticeService,
    case: &CaseData,
    validate_only: bool,
) -> Result<EvaluationReport, AdjudicationError> {
    let validation = service.validate(case)?;
    let wants_outcome = !validate_only
        && validation.is_valid()
        && case.final_decision.generate_notice == Some(YesNo::Yes);
    let outcome = if wants_outcome {
        Some(service.outcome(case)?)
    } else {
        None
    };

    Ok(EvaluationReport {
        case_id: case.case_reference().to_string(),
        validation,
        outcome,
    })
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let service = service()?;
    let case = load_case(&args.case)?;
    let report = evaluate_case(&service, &case, args.validate_only)?;
    print_json(&report)
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let benefit = Benefit::parse(&args.benefit)?;
    let service = service()?;
    print_json(&QuestionCatalog {
        benefit,
        activities: service.questions(benefit),
    })
}
