use serde::Serialize;
use tracing::info;

use crate::config::AdjudicationConfig;

use super::activity::{ActivityDomain, ActivityQuestion};
use super::answers::{
    ActivityAnswer, DescriptorQuestionService, DescriptorTable, DescriptorTableError,
    QuestionService,
};
use super::case_data::{is_yes, CaseData};
use super::errors::AdjudicationError;
use super::esa::{
    esa_matrix, esa_regulations_matrix, EsaActivityQuestion, EsaEntitlement, EsaScenario,
};
use super::matrix::ConditionKind;
use super::pip::{pip_matrix, PipActivityQuestion, PipScenario};
use super::validation::{self, ValidationReport};

/// Benefit types with a decision-notice matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Benefit {
    Pip,
    Esa,
}

impl Benefit {
    pub const fn code(self) -> &'static str {
        match self {
            Benefit::Pip => "PIP",
            Benefit::Esa => "ESA",
        }
    }

    pub fn parse(code: &str) -> Result<Self, AdjudicationError> {
        match code.trim().to_ascii_uppercase().as_str() {
            "PIP" => Ok(Benefit::Pip),
            "ESA" => Ok(Benefit::Esa),
            _ => Err(AdjudicationError::UnsupportedBenefit(code.to_string())),
        }
    }

    pub fn of_case(case: &CaseData) -> Result<Self, AdjudicationError> {
        Self::parse(case.benefit_code.as_deref().unwrap_or_default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Scenario {
    Pip(PipScenario),
    Esa(EsaScenario),
}

/// A resolved descriptor, as rendered in the notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredDescriptor {
    pub question_key: &'static str,
    pub label: &'static str,
    pub answer: ActivityAnswer,
}

/// Points total for one activity domain; drives "They score N points" sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPointsSummary {
    pub activity: &'static str,
    pub points: u32,
    pub descriptors: Vec<ScoredDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionOutcome {
    pub benefit: Benefit,
    pub condition: &'static str,
    pub scenario: Scenario,
    pub allowed_or_refused: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esa_entitlement: Option<EsaEntitlement>,
    pub activity_points: Vec<ActivityPointsSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionListing {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityListing {
    pub activity: &'static str,
    pub questions: Vec<QuestionListing>,
}

fn activity_points<Q: ActivityQuestion>(
    questions: &DescriptorQuestionService<Q>,
    case: &CaseData,
) -> Vec<ActivityPointsSummary> {
    <Q::Domain as ActivityDomain>::ALL
        .iter()
        .filter_map(|&activity| {
            let keys = activity.selected_question_keys(case)?;
            let descriptors: Vec<ScoredDescriptor> = keys
                .iter()
                .filter_map(|key| {
                    let question = Q::by_key(key).ok()?;
                    let answer = questions.answer_for_question_key(case, key)?;
                    Some(ScoredDescriptor {
                        question_key: question.key(),
                        label: question.label(),
                        answer,
                    })
                })
                .collect();
            Some(ActivityPointsSummary {
                activity: activity.display_name(),
                points: descriptors.iter().map(|descriptor| descriptor.answer.points).sum(),
                descriptors,
            })
        })
        .collect()
}

fn listing<Q: ActivityQuestion>() -> Vec<ActivityListing> {
    <Q::Domain as ActivityDomain>::ALL
        .iter()
        .map(|&activity| ActivityListing {
            activity: activity.display_name(),
            questions: Q::for_domain(activity)
                .into_iter()
                .map(|question| QuestionListing {
                    key: question.key(),
                    label: question.label(),
                })
                .collect(),
        })
        .collect()
}

/// Entry point composing validation, scenario selection, and points summaries.
#[derive(Debug, Clone)]
pub struct DecisionNoticeService {
    pip: DescriptorQuestionService<PipActivityQuestion>,
    esa: DescriptorQuestionService<EsaActivityQuestion>,
}

impl DecisionNoticeService {
    pub fn new(pip: DescriptorTable, esa: DescriptorTable) -> Self {
        Self {
            pip: DescriptorQuestionService::new(pip),
            esa: DescriptorQuestionService::new(esa),
        }
    }

    pub fn with_embedded_tables() -> Result<Self, DescriptorTableError> {
        Ok(Self::new(DescriptorTable::pip()?, DescriptorTable::esa()?))
    }

    /// Embedded tables unless the configuration points at replacements.
    pub fn from_config(config: &AdjudicationConfig) -> Result<Self, DescriptorTableError> {
        let pip = match &config.pip_descriptors {
            Some(path) => DescriptorTable::load(path)?,
            None => DescriptorTable::pip()?,
        };
        let esa = match &config.esa_descriptors {
            Some(path) => DescriptorTable::load(path)?,
            None => DescriptorTable::esa()?,
        };
        info!(
            pip_descriptors = pip.len(),
            esa_descriptors = esa.len(),
            "descriptor tables loaded"
        );
        Ok(Self::new(pip, esa))
    }

    pub fn question_service(&self, benefit: Benefit) -> &dyn QuestionService {
        match benefit {
            Benefit::Pip => &self.pip,
            Benefit::Esa => &self.esa,
        }
    }

    pub fn validate(&self, case: &CaseData) -> Result<ValidationReport, AdjudicationError> {
        let benefit = Benefit::of_case(case)?;
        let mut report = ValidationReport::default();
        report.errors.extend(validation::date_error(case));
        report.errors.extend(validation::pip_award_type_errors(case));
        report.suggested_end_date_type = validation::suggested_end_date_type(case);

        match benefit {
            Benefit::Pip => {
                report
                    .errors
                    .extend(super::pip::points::points_errors(&self.pip, case));
                report
                    .errors
                    .extend(pip_matrix().validation_error(&self.pip, case));
            }
            Benefit::Esa => {
                report.errors.extend(validation::esa_activity_error(case));
                report.show_regulation29_page =
                    Some(validation::show_regulation29_page(&self.esa, case));
                // Outcome rows are only checked once the points and regulations agree.
                let error = esa_regulations_matrix()
                    .validation_error(&self.esa, case)
                    .or_else(|| esa_matrix().validation_error(&self.esa, case));
                report.errors.extend(error);
            }
        }

        info!(
            case_id = case.case_reference(),
            benefit = benefit.code(),
            errors = report.errors.len(),
            "decision notice validated"
        );
        Ok(report)
    }

    /// Select the notice scenario for a valid case. Validation failures are returned, not logged.
    pub fn outcome(&self, case: &CaseData) -> Result<DecisionOutcome, AdjudicationError> {
        let benefit = Benefit::of_case(case)?;
        if !is_yes(case.final_decision.generate_notice) {
            return Err(AdjudicationError::NoticeNotRequested(
                case.case_reference().to_string(),
            ));
        }

        let report = self.validate(case)?;
        if !report.is_valid() {
            return Err(AdjudicationError::Validation(report.errors));
        }

        let outcome = match benefit {
            Benefit::Pip => {
                let condition = pip_matrix().select(&self.pip, case)?.kind();
                DecisionOutcome {
                    benefit,
                    condition: condition.name(),
                    scenario: Scenario::Pip(condition.scenario(case)?),
                    allowed_or_refused: condition.outcome().code(),
                    esa_entitlement: None,
                    activity_points: activity_points(&self.pip, case),
                }
            }
            Benefit::Esa => {
                let regulations = esa_regulations_matrix().select(&self.esa, case)?.kind();
                let condition = esa_matrix().select(&self.esa, case)?.kind();
                DecisionOutcome {
                    benefit,
                    condition: condition.name(),
                    scenario: Scenario::Esa(condition.scenario(case)?),
                    allowed_or_refused: condition.outcome().code(),
                    esa_entitlement: Some(EsaEntitlement::for_case(case, regulations)),
                    activity_points: activity_points(&self.esa, case),
                }
            }
        };

        info!(
            case_id = case.case_reference(),
            benefit = benefit.code(),
            condition = outcome.condition,
            "decision notice outcome resolved"
        );
        Ok(outcome)
    }

    pub fn questions(&self, benefit: Benefit) -> Vec<ActivityListing> {
        match benefit {
            Benefit::Pip => listing::<PipActivityQuestion>(),
            Benefit::Esa => listing::<EsaActivityQuestion>(),
        }
    }
}
