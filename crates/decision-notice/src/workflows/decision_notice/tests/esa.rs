use super::common::*;
use crate::workflows::decision_notice::esa::outcome::answer_keys;
use crate::workflows::decision_notice::esa::{esa_matrix, EsaOutcomeCondition, EsaScenario};
use crate::workflows::decision_notice::{AdjudicationError, CaseData, YesNo};

fn selected(case: &CaseData) -> EsaOutcomeCondition {
    esa_matrix()
        .select(&esa_questions(), case)
        .expect("an ESA row matches")
        .kind()
}

fn scenario(case: &CaseData) -> EsaScenario {
    selected(case).scenario(case).expect("scenario resolves")
}

fn refused_low_points() -> CaseData {
    let mut case = esa_case("refused", "mobilisingUnaided1c");
    case.esa.support_group_only_appeal = Some(YesNo::No);
    case.esa.regulation29_applies = Some(YesNo::No);
    case
}

fn allowed_not_support_group(mobilising_code: &str) -> CaseData {
    let mut case = esa_case("allowed", mobilising_code);
    case.esa.support_group_only_appeal = Some(YesNo::No);
    case.esa.schedule3_selections = Some(Vec::new());
    case
}

fn allowed_support_group() -> CaseData {
    let mut case = esa_case("allowed", "mobilisingUnaided1f");
    case.esa.support_group_only_appeal = Some(YesNo::Yes);
    case
}

#[test]
fn matrix_keeps_declaration_order() {
    let kinds: Vec<_> = esa_matrix().conditions().iter().map(|row| row.kind()).collect();

    assert_eq!(kinds, EsaOutcomeCondition::ALL.to_vec());
    assert_eq!(esa_matrix().benefit(), "ESA");
}

#[test]
fn points_come_from_both_assessments() {
    let mut case = esa_case("allowed", "mobilisingUnaided1c");
    case.esa.mental_assessment_activities = Some(strings(&["learningTasks"]));
    case.esa.learning_tasks = Some("learningTasks11c".to_string());

    assert_eq!(
        answer_keys(&case),
        strings(&["mobilisingUnaided", "learningTasks"])
    );
    assert_eq!(esa_matrix().total_points(&esa_questions(), &case), 15);
}

#[test]
fn refusal_under_fifteen_points_is_scenario_1() {
    let case = refused_low_points();

    assert_eq!(selected(&case), EsaOutcomeCondition::RefusedNonSupportGroupOnly);
    assert_eq!(scenario(&case), EsaScenario::Scenario1);
}

#[test]
fn refusal_with_fifteen_points_reports_points_mismatch() {
    let mut case = refused_low_points();
    case.esa.mobilising_unaided = Some("mobilisingUnaided1a".to_string());

    assert!(esa_matrix().select(&esa_questions(), &case).is_err());
    assert_eq!(
        esa_matrix().validation_error(&esa_questions(), &case),
        Some(
            "You have specified that the appeal is refused and specified that Support Group Only \
             Appeal does not apply, but have awarded 15 points or more. Please review your \
             previous selection."
                .to_string()
        )
    );
}

#[test]
fn support_group_refusal_is_scenario_2() {
    let mut case = esa_case("refused", "mobilisingUnaided1c");
    case.esa.support_group_only_appeal = Some(YesNo::Yes);
    case.esa.schedule3_selections = Some(Vec::new());
    case.esa.regulation35_applies = Some(YesNo::No);

    assert_eq!(selected(&case), EsaOutcomeCondition::RefusedSupportGroupOnlyLowPoints);
    assert_eq!(scenario(&case), EsaScenario::Scenario2);

    case.esa.mobilising_unaided = Some("mobilisingUnaided1a".to_string());
    assert_eq!(selected(&case), EsaOutcomeCondition::RefusedSupportGroupOnlyHighPoints);
    assert_eq!(scenario(&case), EsaScenario::Scenario2);
}

#[test]
fn allowed_high_points_scenarios() {
    let mut case = allowed_not_support_group("mobilisingUnaided1a");
    assert_eq!(selected(&case), EsaOutcomeCondition::AllowedNonSupportGroupOnlyHighPoints);
    assert_eq!(scenario(&case), EsaScenario::Scenario5);

    case.esa.regulation35_applies = Some(YesNo::Yes);
    assert_eq!(scenario(&case), EsaScenario::Scenario12);

    case.esa.schedule3_selections = Some(strings(&["schedule3MobilisingUnaided"]));
    assert_eq!(scenario(&case), EsaScenario::Scenario6);
}

#[test]
fn allowed_low_points_scenarios() {
    let mut case = allowed_not_support_group("mobilisingUnaided1c");
    case.esa.regulation29_applies = Some(YesNo::Yes);
    case.esa.regulation35_applies = Some(YesNo::No);
    assert_eq!(selected(&case), EsaOutcomeCondition::AllowedNonSupportGroupOnlyLowPoints);
    assert_eq!(scenario(&case), EsaScenario::Scenario7);

    case.esa.regulation35_applies = Some(YesNo::Yes);
    assert_eq!(scenario(&case), EsaScenario::Scenario8);

    case.esa.schedule3_selections = Some(strings(&["schedule3MobilisingUnaided"]));
    assert_eq!(scenario(&case), EsaScenario::Scenario9);
}

#[test]
fn allowed_low_points_requires_regulation_29() {
    let case = allowed_not_support_group("mobilisingUnaided1c");

    assert_eq!(
        esa_matrix().validation_error(&esa_questions(), &case),
        Some(
            "You have awarded less than 15 points, specified that the appeal is allowed, and \
             specified that Support Group Only Appeal does not apply, but have a missing answer \
             for the Regulation 29 question. Please review your previous selection."
                .to_string()
        )
    );
}

#[test]
fn support_group_with_schedule_3_selected_is_scenario_4() {
    let mut case = allowed_support_group();
    case.esa.schedule3_selections = Some(strings(&["schedule3MobilisingUnaided"]));

    assert_eq!(
        selected(&case),
        EsaOutcomeCondition::AllowedSupportGroupOnlySchedule3Selected
    );
    assert_eq!(scenario(&case), EsaScenario::Scenario4);
}

#[test]
fn support_group_without_schedule_3_uses_regulation_35() {
    let mut case = allowed_support_group();
    case.esa.schedule3_selections = Some(Vec::new());
    case.esa.regulation35_applies = Some(YesNo::Yes);

    assert_eq!(
        selected(&case),
        EsaOutcomeCondition::AllowedSupportGroupOnlySchedule3NotSelected
    );
    assert_eq!(scenario(&case), EsaScenario::Scenario3);
}

#[test]
fn support_group_without_regulation_35_answer_is_invalid() {
    let mut case = allowed_support_group();
    case.esa.schedule3_selections = Some(Vec::new());

    assert_eq!(
        esa_matrix().validation_error(&esa_questions(), &case),
        Some(
            "You have specified that the appeal is allowed and specified that Support Group Only \
             Appeal applies, but have a missing answer for the Regulation 35 question. Please \
             review your previous selection."
                .to_string()
        )
    );
}

#[test]
fn unspecified_schedule_3_has_no_scenario() {
    let mut case = allowed_support_group();
    case.esa.regulation35_applies = Some(YesNo::Yes);

    let kind = selected(&case);
    assert_eq!(kind, EsaOutcomeCondition::AllowedSupportGroupOnlySchedule3Unspecified);
    match kind.scenario(&case) {
        Err(AdjudicationError::ScenarioUnresolved { benefit, condition }) => {
            assert_eq!(benefit, "ESA");
            assert_eq!(condition, "ALLOWED_SUPPORT_GROUP_ONLY_SCHEDULE_3_UNSPECIFIED");
        }
        other => panic!("expected unresolved scenario, got {other:?}"),
    }
}

#[test]
fn non_wca_appeal_is_scenario_10() {
    let mut case = esa_case("allowed", "mobilisingUnaided1f");
    case.esa.wca_appeal = Some(YesNo::No);

    assert_eq!(selected(&case), EsaOutcomeCondition::NonWcaAppealAllowed);
    assert_eq!(scenario(&case), EsaScenario::Scenario10);

    case.final_decision.allowed_or_refused = Some("refused".to_string());
    assert_eq!(selected(&case), EsaOutcomeCondition::NonWcaAppealRefused);
}

#[test]
fn non_wca_appeal_rejects_reassessment_answer() {
    let mut case = esa_case("allowed", "mobilisingUnaided1f");
    case.esa.wca_appeal = None;
    case.esa.dwp_reassess_the_award = Some(" ".to_string());

    assert_eq!(
        esa_matrix().validation_error(&esa_questions(), &case),
        Some(
            "You have specified that the appeal is allowed and specified that Wca Appeal does not \
             apply, but have submitted an unexpected answer for the 'When should DWP reassess the \
             award?' question. Please review your previous selection."
                .to_string()
        )
    );
}

#[test]
fn scenarios_serialize_with_numbers() {
    assert_eq!(
        serde_json::to_value(EsaScenario::Scenario12).expect("serializes"),
        serde_json::json!("SCENARIO_12")
    );
}
