//! Consistency checks run while the caseworker is still editing the decision.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use super::activity::ActivityQuestion;
use super::answers::QuestionService;
use super::case_data::{is_yes, CaseData, YesNo};
use super::esa::EsaActivityQuestion;
use super::points::{AwardType, PointsGate};

pub const END_DATE_TYPE_NOT_APPLICABLE: &str = "na";

/// Errors for the caseworker plus values the caller may apply to the case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_end_date_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_regulation29_page: Option<YesNo>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

fn parse_date(case: &CaseData, field: &'static str, value: Option<&str>) -> Option<NaiveDate> {
    let value = value.map(str::trim).filter(|value| !value.is_empty())?;
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(error) => {
            warn!(
                case_id = case.case_reference(),
                field,
                value,
                %error,
                "skipping unparseable decision date"
            );
            None
        }
    }
}

/// The end date, when both dates are given, must fall after the start date.
pub fn date_error(case: &CaseData) -> Option<String> {
    let decision = &case.final_decision;
    let start = parse_date(case, "startDate", decision.start_date.as_deref())?;
    let end = parse_date(case, "endDate", decision.end_date.as_deref())?;
    if start < end {
        None
    } else {
        Some("Decision notice end date must be after decision notice start date".to_string())
    }
}

fn is_award(code: Option<&str>, award: AwardType) -> bool {
    code == Some(award.code())
}

fn is_no_award_or_not_considered(code: Option<&str>) -> bool {
    is_award(code, AwardType::NoAward) || is_award(code, AwardType::NotConsidered)
}

fn both_awards_answered(case: &CaseData) -> bool {
    case.pip.daily_living_award.is_some() && case.pip.mobility_award.is_some()
}

fn neither_domain_awarded(case: &CaseData) -> bool {
    is_no_award_or_not_considered(case.pip.daily_living_award.as_deref())
        && is_no_award_or_not_considered(case.pip.mobility_award.as_deref())
}

/// Award-type consistency rules for PIP, in reporting order.
pub fn pip_award_type_errors(case: &CaseData) -> Vec<String> {
    let pip = &case.pip;
    let daily_living = pip.daily_living_award.as_deref();
    let mobility = pip.mobility_award.as_deref();
    let mut errors = Vec::new();

    let both_no_award = daily_living
        .zip(mobility)
        .map_or(false, |(daily_living, mobility)| {
            daily_living.eq_ignore_ascii_case(AwardType::NoAward.code())
                && mobility.eq_ignore_ascii_case(AwardType::NoAward.code())
        });
    let activities_cleared = matches!(
        (&pip.daily_living_activities, &pip.mobility_activities),
        (Some(daily_living), Some(mobility)) if daily_living.is_empty() && mobility.is_empty()
    );
    if !both_no_award && activities_cleared {
        errors.push(
            "At least one activity must be selected unless there is no award".to_string(),
        );
    }

    let compared = |value: &Option<String>, expected: &str| value.as_deref() == Some(expected);
    if is_award(daily_living, AwardType::NoAward)
        && compared(&pip.compared_to_dwp_daily_living, "higher")
    {
        errors.push(
            "Daily living decision of No Award cannot be higher than DWP decision".to_string(),
        );
    }
    if is_award(mobility, AwardType::NoAward) && compared(&pip.compared_to_dwp_mobility, "higher") {
        errors.push("Mobility decision of No Award cannot be higher than DWP decision".to_string());
    }
    if is_award(daily_living, AwardType::EnhancedRate)
        && compared(&pip.compared_to_dwp_daily_living, "lower")
    {
        errors.push(
            "Daily living award at Enhanced Rate cannot be lower than DWP decision".to_string(),
        );
    }
    if is_award(mobility, AwardType::EnhancedRate)
        && compared(&pip.compared_to_dwp_mobility, "lower")
    {
        errors.push(
            "Mobility award at Enhanced Rate cannot be lower than DWP decision".to_string(),
        );
    }

    if is_award(daily_living, AwardType::NotConsidered)
        && is_award(mobility, AwardType::NotConsidered)
    {
        errors.push("At least one of Mobility or Daily Living must be considered".to_string());
    }

    if is_yes(case.final_decision.is_descriptor_flow) && both_awards_answered(case) {
        let end_date_type = case.final_decision.end_date_type.as_deref();
        if neither_domain_awarded(case) {
            if end_date_type.map_or(false, |value| value != END_DATE_TYPE_NOT_APPLICABLE) {
                errors.push(
                    "End date is not applicable for this decision - please specify 'N/A - No Award'."
                        .to_string(),
                );
            }
        } else if end_date_type == Some(END_DATE_TYPE_NOT_APPLICABLE) {
            errors.push(
                "An end date must be provided or set to Indefinite for this decision.".to_string(),
            );
        }
    }

    errors
}

/// `na` when a descriptor-flow decision awards nothing and no end-date type was chosen.
pub fn suggested_end_date_type(case: &CaseData) -> Option<String> {
    let decision = &case.final_decision;
    let suggest = decision.end_date_type.is_none()
        && is_yes(decision.is_descriptor_flow)
        && both_awards_answered(case)
        && neither_domain_awarded(case);
    suggest.then(|| END_DATE_TYPE_NOT_APPLICABLE.to_string())
}

/// Selection lists were answered but both left empty.
pub fn esa_activity_error(case: &CaseData) -> Option<String> {
    let physical = case.esa.physical_disabilities_activities.as_ref();
    let mental = case.esa.mental_assessment_activities.as_ref();
    if physical.is_none() && mental.is_none() {
        return None;
    }

    let empty = |list: Option<&Vec<String>>| list.map_or(true, |items| items.is_empty());
    (empty(physical) && empty(mental))
        .then(|| "At least one activity must be selected.".to_string())
}

/// The regulation 29 page is shown when the Schedule 2 total is under 15 points.
pub fn show_regulation29_page(questions: &dyn QuestionService, case: &CaseData) -> YesNo {
    let keys: Vec<String> = EsaActivityQuestion::ALL
        .iter()
        .map(|question| question.key().to_string())
        .collect();
    let points = questions.total_points(case, &keys);
    YesNo::from_bool(PointsGate::LESS_THAN_FIFTEEN.is_satisfied_by(points))
}
