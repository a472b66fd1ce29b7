use super::common::*;
use crate::workflows::decision_notice::pip::outcome::answer_keys;
use crate::workflows::decision_notice::pip::{pip_matrix, PipOutcomeCondition, PipScenario};
use crate::workflows::decision_notice::{
    AdjudicationError, AllowedOrRefused, ConditionKind, YesNo,
};

fn selected(case: &crate::workflows::decision_notice::CaseData) -> PipOutcomeCondition {
    pip_matrix()
        .select(&pip_questions(), case)
        .expect("a PIP row matches")
        .kind()
}

#[test]
fn matrix_keeps_declaration_order() {
    let kinds: Vec<_> = pip_matrix().conditions().iter().map(|row| row.kind()).collect();

    assert_eq!(kinds, PipOutcomeCondition::ALL.to_vec());
    assert_eq!(pip_matrix().benefit(), "PIP");
}

#[test]
fn non_descriptor_rows_check_outcome_only() {
    let matrix = pip_matrix();
    let primary_len = |kind| matrix.get(kind).expect("row registered").primary().len();

    assert_eq!(primary_len(PipOutcomeCondition::RefusedNotConsideredNotConsidered), 2);
    assert_eq!(primary_len(PipOutcomeCondition::AllowedNotConsideredNotConsidered), 2);
    assert_eq!(primary_len(PipOutcomeCondition::RefusedLowerNotConsidered), 4);
    assert_eq!(primary_len(PipOutcomeCondition::AllowedHigherHigher), 5);
}

#[test]
fn non_descriptor_refusal_selects_first_row() {
    let case = pip_non_descriptor_case("refused");
    let kind = selected(&case);

    assert_eq!(kind, PipOutcomeCondition::RefusedNotConsideredNotConsidered);
    assert_eq!(kind.scenario(&case).expect("scenario"), PipScenario::NonDescriptor);
    assert_eq!(kind.outcome(), AllowedOrRefused::Refused);
}

#[test]
fn missing_descriptor_flow_reads_as_no() {
    let mut case = pip_non_descriptor_case("allowed");
    case.final_decision.is_descriptor_flow = None;

    assert_eq!(selected(&case), PipOutcomeCondition::AllowedNotConsideredNotConsidered);
}

#[test]
fn mobility_only_decision() {
    let case = pip_descriptor_case(("notConsidered", None), ("standardRate", Some("lower")));
    let kind = selected(&case);

    assert_eq!(kind, PipOutcomeCondition::RefusedNotConsideredLower);
    assert_eq!(kind.scenario(&case).expect("scenario"), PipScenario::NotConsideredAward);
    assert!(!kind.is_daily_living_considered());
    assert!(kind.is_mobility_considered());
}

#[test]
fn mixed_awards_pick_award_no_award_scenario() {
    let case = pip_descriptor_case(("enhancedRate", Some("higher")), ("noAward", Some("same")));
    let kind = selected(&case);

    assert_eq!(kind, PipOutcomeCondition::AllowedHigherSame);
    assert_eq!(kind.scenario(&case).expect("scenario"), PipScenario::AwardNoAward);
    assert_eq!(kind.name(), "ALLOWED_HIGHER_SAME");
}

#[test]
fn no_award_on_both_domains() {
    let case = pip_descriptor_case(("noAward", Some("same")), ("noAward", Some("same")));
    let kind = selected(&case);

    assert_eq!(kind, PipOutcomeCondition::RefusedSameSame);
    assert_eq!(kind.scenario(&case).expect("scenario"), PipScenario::NoAwardNoAward);
}

#[test]
fn daily_living_only_no_award() {
    let case = pip_descriptor_case(("noAward", Some("lower")), ("notConsidered", Some("")));
    let kind = selected(&case);

    assert_eq!(kind, PipOutcomeCondition::RefusedLowerNotConsidered);
    assert_eq!(kind.scenario(&case).expect("scenario"), PipScenario::NoAwardNotConsidered);
}

#[test]
fn considered_domain_without_comparison_matches_nothing() {
    let case = pip_descriptor_case(("standardRate", None), ("notConsidered", None));

    assert!(matches!(
        pip_matrix().select(&pip_questions(), &case),
        Err(AdjudicationError::NoConditionMatched { .. })
    ));
}

#[test]
fn missing_outcome_is_fatal_not_a_validation_error() {
    let mut case = pip_non_descriptor_case("allowed");
    case.final_decision.allowed_or_refused = None;
    let questions = pip_questions();

    match pip_matrix().select(&questions, &case) {
        Err(AdjudicationError::NoConditionMatched {
            benefit, case_id, ..
        }) => {
            assert_eq!(benefit, "PIP");
            assert_eq!(case_id, "1234");
        }
        other => panic!("expected no match, got {other:?}"),
    }
    assert_eq!(pip_matrix().validation_error(&questions, &case), None);
}

#[test]
fn unrequested_notice_matches_no_row() {
    let mut case = pip_non_descriptor_case("refused");
    case.final_decision.generate_notice = Some(YesNo::No);

    assert!(pip_matrix().select(&pip_questions(), &case).is_err());
}

#[test]
fn answer_keys_concatenate_both_domains() {
    let mut case = pip_descriptor_case(("standardRate", Some("same")), ("noAward", Some("same")));
    case.pip.daily_living_activities = Some(strings(&["preparingFood", "communicating"]));
    case.pip.mobility_activities = Some(strings(&["movingAround"]));

    assert_eq!(
        answer_keys(&case),
        strings(&["preparingFood", "communicating", "movingAround"])
    );
}

#[test]
fn scenarios_serialize_as_template_names() {
    assert_eq!(
        serde_json::to_value(PipScenario::NoAwardNotConsidered).expect("serializes"),
        serde_json::json!("NO_AWARD_NOT_CONSIDERED")
    );
    assert_eq!(
        serde_json::to_value(PipOutcomeCondition::AllowedSameHigher).expect("serializes"),
        serde_json::json!("ALLOWED_SAME_HIGHER")
    );
}
