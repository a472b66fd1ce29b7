use super::common::*;
use crate::workflows::decision_notice::{
    compose_error, join_grammatically, AdjudicationError, AllowedOrRefused, CaseData,
    CompositeCondition, ConditionKind, ConditionMatrix, FieldCondition, FieldValue, PointsGate,
    YesNo, YesNoPredicate,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    AllowedWithReg35,
    Allowed,
    Refused,
}

impl ConditionKind for Row {
    fn name(self) -> &'static str {
        match self {
            Row::AllowedWithReg35 => "ALLOWED_WITH_REG_35",
            Row::Allowed => "ALLOWED",
            Row::Refused => "REFUSED",
        }
    }
}

fn regulation_35(predicate: YesNoPredicate) -> FieldCondition {
    FieldCondition::yes_no("Regulation 35", predicate, |case: &CaseData| {
        FieldValue::yes_no(case.esa.regulation35_applies)
    })
}

fn mobilising_keys(case: &CaseData) -> Vec<String> {
    case.esa
        .physical_disabilities_activities
        .clone()
        .unwrap_or_default()
}

fn diagnostics(case: &CaseData) -> String {
    format!(
        "Allowed or Refused={}",
        case.final_decision.allowed_or_refused.as_deref().unwrap_or("null")
    )
}

fn matrix() -> ConditionMatrix<Row> {
    ConditionMatrix::new(
        "TEST",
        vec![
            CompositeCondition::new(
                Row::AllowedWithReg35,
                vec![FieldCondition::allowed_or_refused(AllowedOrRefused::Allowed).displayed(true)],
            )
            .with_points_gate(Some(PointsGate::FIFTEEN_OR_MORE))
            .with_validation(vec![regulation_35(YesNoPredicate::True)]),
            CompositeCondition::new(
                Row::Allowed,
                vec![FieldCondition::allowed_or_refused(AllowedOrRefused::Allowed)],
            ),
            CompositeCondition::new(
                Row::Refused,
                vec![FieldCondition::allowed_or_refused(AllowedOrRefused::Refused).displayed(true)],
            )
            .with_validation_points(PointsGate::LESS_THAN_FIFTEEN),
        ],
        mobilising_keys,
        diagnostics,
    )
}

#[test]
fn joins_with_oxford_comma() {
    assert_eq!(join_grammatically(&[]), "");
    assert_eq!(join_grammatically(&strings(&["a"])), "a");
    assert_eq!(join_grammatically(&strings(&["a", "b"])), "a and b");
    assert_eq!(join_grammatically(&strings(&["a", "b", "c"])), "a, b, and c");
}

#[test]
fn composes_prefix_and_failures() {
    assert_eq!(compose_error(&strings(&["x"]), &[]), None);
    assert_eq!(
        compose_error(&[], &strings(&["answered No for the Y question"])),
        Some(
            "You have answered No for the Y question. Please review your previous selection."
                .to_string()
        )
    );
    assert_eq!(
        compose_error(
            &strings(&["specified that the appeal is allowed", "specified that X applies"]),
            &strings(&["a missing answer for the Y question"])
        ),
        Some(
            "You have specified that the appeal is allowed and specified that X applies, but have \
             a missing answer for the Y question. Please review your previous selection."
                .to_string()
        )
    );
}

#[test]
fn first_satisfied_row_wins() {
    let questions = esa_questions();
    let mut case = esa_case("allowed", "mobilisingUnaided1a");
    case.esa.regulation35_applies = Some(YesNo::Yes);

    let matrix = matrix();
    let selected = matrix.select(&questions, &case).expect("row selected");
    assert_eq!(selected.kind(), Row::AllowedWithReg35);
}

#[test]
fn failing_validation_falls_through_to_later_row() {
    let questions = esa_questions();
    let case = esa_case("allowed", "mobilisingUnaided1a");

    let matrix = matrix();
    let selected = matrix.select(&questions, &case).expect("row selected");
    assert_eq!(selected.kind(), Row::Allowed);
    assert_eq!(matrix.validation_error(&questions, &case), None);
}

#[test]
fn points_gate_excludes_row_from_applicability() {
    let questions = esa_questions();
    let case = esa_case("allowed", "mobilisingUnaided1c");
    let matrix = matrix();

    assert_eq!(matrix.total_points(&questions, &case), 9);
    let first = matrix.get(Row::AllowedWithReg35).expect("row registered");
    assert!(!matrix.is_applicable(first, &questions, &case));
    assert_eq!(
        matrix.select(&questions, &case).map(|row| row.kind()).ok(),
        Some(Row::Allowed)
    );
}

#[test]
fn unmatched_case_reports_first_applicable_error() {
    let questions = esa_questions();
    let case = esa_case("refused", "mobilisingUnaided1a");
    let matrix = matrix();

    match matrix.select(&questions, &case) {
        Err(AdjudicationError::NoConditionMatched {
            benefit,
            case_id,
            detail,
        }) => {
            assert_eq!(benefit, "TEST");
            assert_eq!(case_id, "1234");
            assert_eq!(detail, "Allowed or Refused=refused");
        }
        other => panic!("expected no match, got {other:?}"),
    }
    assert_eq!(
        matrix.validation_error(&questions, &case),
        Some(
            "You have specified that the appeal is refused, but have awarded 15 points or more. \
             Please review your previous selection."
                .to_string()
        )
    );
}

#[test]
fn nothing_applies_without_notice_request() {
    let questions = esa_questions();
    let mut case = esa_case("allowed", "mobilisingUnaided1a");
    case.final_decision.generate_notice = Some(YesNo::No);
    let matrix = matrix();

    assert!(matrix
        .conditions()
        .iter()
        .all(|row| !matrix.is_applicable(row, &questions, &case)));
    assert!(matches!(
        matrix.select(&questions, &case),
        Err(AdjudicationError::NoConditionMatched { .. })
    ));
    assert_eq!(matrix.validation_error(&questions, &case), None);
}

#[test]
fn no_applicable_row_yields_no_validation_error() {
    let questions = esa_questions();
    let mut case = esa_case("allowed", "mobilisingUnaided1a");
    case.final_decision.allowed_or_refused = None;

    assert_eq!(matrix().validation_error(&questions, &case), None);
}

#[test]
fn selected_row_outlives_the_case() {
    let questions = esa_questions();
    let matrix = matrix();

    let selected = {
        let mut case = esa_case("allowed", "mobilisingUnaided1a");
        case.esa.regulation35_applies = Some(YesNo::Yes);
        matrix.select(&questions, &case).expect("row selected")
    };

    assert_eq!(selected.kind(), Row::AllowedWithReg35);
}

#[test]
fn hidden_points_gate_is_left_out_of_the_error() {
    let case = esa_case("allowed", "mobilisingUnaided1a");
    let row = |show| {
        CompositeCondition::new(
            Row::AllowedWithReg35,
            vec![FieldCondition::allowed_or_refused(AllowedOrRefused::Allowed).displayed(true)],
        )
        .with_points_gate(Some(PointsGate::FIFTEEN_OR_MORE))
        .show_points_gate(show)
        .with_validation(vec![regulation_35(YesNoPredicate::True)])
    };

    assert_eq!(
        row(true).error_message(&case, 15),
        Some(
            "You have awarded 15 points or more and specified that the appeal is allowed, but \
             have a missing answer for the Regulation 35 question. Please review your previous \
             selection."
                .to_string()
        )
    );
    assert_eq!(
        row(false).error_message(&case, 15),
        Some(
            "You have specified that the appeal is allowed, but have a missing answer for the \
             Regulation 35 question. Please review your previous selection."
                .to_string()
        )
    );
}
