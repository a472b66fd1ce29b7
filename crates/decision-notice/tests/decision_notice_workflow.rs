//! End-to-end behavior of the decision-notice facade and HTTP router, driven by case payloads
//! shaped the way the caseworker journey submits them.

mod common {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request};
    use axum::Router;
    use serde_json::Value;

    use decision_notice::workflows::decision_notice::{
        decision_notice_router, CaseData, DecisionNoticeService,
    };

    pub(super) fn service() -> DecisionNoticeService {
        DecisionNoticeService::with_embedded_tables().expect("embedded tables parse")
    }

    pub(super) fn router() -> Router {
        decision_notice_router(Arc::new(service()))
    }

    pub(super) fn case(value: Value) -> CaseData {
        serde_json::from_value(value).expect("case payload deserializes")
    }

    pub(super) fn post(uri: &str, body: &Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(body).expect("serializes")))
            .expect("request builds")
    }

    pub(super) fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{name}", std::process::id()));
        std::fs::write(&path, contents).expect("scratch file written");
        path
    }
}

use axum::http::StatusCode;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::*;
use decision_notice::config::AdjudicationConfig;
use decision_notice::workflows::decision_notice::{
    AdjudicationError, Benefit, DecisionNoticeService, DescriptorTableError, Scenario, YesNo,
};
use decision_notice::workflows::decision_notice::esa::EsaScenario;
use decision_notice::workflows::decision_notice::pip::PipScenario;

fn pip_enhanced_daily_living() -> Value {
    json!({
        "caseId": "1700000000000001",
        "benefitCode": "PIP",
        "finalDecision": {
            "generateNotice": "Yes",
            "isDescriptorFlow": "Yes",
            "startDate": "2024-01-01",
            "endDate": "2026-01-01",
            "endDateType": "setEndDate"
        },
        "pip": {
            "dailyLivingAward": "enhancedRate",
            "comparedToDwpDailyLiving": "higher",
            "mobilityAward": "standardRate",
            "comparedToDwpMobility": "same",
            "dailyLivingActivities": ["preparingFood", "takingNutrition"],
            "mobilityActivities": ["movingAround"],
            "preparingFood": "preparingFood1f",
            "takingNutrition": "takingNutrition2e",
            "movingAround": "movingAround12c"
        }
    })
}

fn esa_support_group_refusal() -> Value {
    json!({
        "caseId": "1700000000000002",
        "benefitCode": "esa",
        "finalDecision": {
            "generateNotice": "Yes",
            "allowedOrRefused": "refused"
        },
        "esa": {
            "wcaAppeal": "Yes",
            "supportGroupOnlyAppeal": "Yes",
            "regulation35Applies": "No",
            "schedule3Selections": [],
            "physicalDisabilitiesActivities": ["mobilisingUnaided", "reaching"],
            "mentalAssessmentActivities": [],
            "mobilisingUnaided": "mobilisingUnaided1c",
            "reaching": "reaching3d"
        }
    })
}

#[test]
fn pip_case_resolves_award_award_scenario_with_points() {
    let outcome = service()
        .outcome(&case(pip_enhanced_daily_living()))
        .expect("valid PIP case resolves");

    assert_eq!(outcome.benefit, Benefit::Pip);
    assert_eq!(outcome.condition, "ALLOWED_HIGHER_SAME");
    assert_eq!(outcome.scenario, Scenario::Pip(PipScenario::AwardAward));
    assert_eq!(outcome.allowed_or_refused, "allowed");

    let points: Vec<_> = outcome
        .activity_points
        .iter()
        .map(|summary| (summary.activity, summary.points))
        .collect();
    assert_eq!(points, vec![("Daily Living", 12), ("Mobility", 8)]);
    assert_eq!(
        outcome.activity_points[0].descriptors[0].answer.text,
        "Cannot prepare and cook food."
    );
}

#[test]
fn esa_case_accepts_lowercase_benefit_code() {
    let outcome = service()
        .outcome(&case(esa_support_group_refusal()))
        .expect("valid ESA case resolves");

    assert_eq!(outcome.benefit, Benefit::Esa);
    assert_eq!(outcome.condition, "REFUSED_SUPPORT_GROUP_ONLY_LOW_POINTS");
    assert_eq!(outcome.scenario, Scenario::Esa(EsaScenario::Scenario2));
    assert_eq!(outcome.activity_points[0].points, 9);
    assert!(outcome.activity_points[1].descriptors.is_empty());
    let entitlement = outcome.esa_entitlement.expect("ESA outcome carries entitlement");
    assert_eq!(entitlement.award_rate, Some("lower rate"));
}

#[test]
fn mismatched_points_block_the_outcome() {
    let mut payload = pip_enhanced_daily_living();
    payload["pip"]["takingNutrition"] = json!("takingNutrition2a");

    match service().outcome(&case(payload)) {
        Err(AdjudicationError::Validation(errors)) => assert_eq!(
            errors,
            vec!["You have previously selected an enhanced rate award for Daily Living. The \
                  points awarded don't match. Please review your previous selection."
                .to_string()]
        ),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn validation_report_flags_regulation_29_page() {
    let report = service()
        .validate(&case(esa_support_group_refusal()))
        .expect("ESA validates");

    assert!(report.is_valid());
    assert_eq!(report.show_regulation29_page, Some(YesNo::Yes));
}

#[test]
fn configured_descriptor_table_replaces_embedded_one() {
    let path = scratch_file(
        "pip-descriptors.json",
        r#"{
            "benefit": "PIP",
            "descriptors": [
                {"code": "preparingFood1f", "points": 12, "number": "1", "letter": "f", "text": "Cannot prepare food."}
            ]
        }"#,
    );
    let config = AdjudicationConfig {
        pip_descriptors: Some(path.clone()),
        esa_descriptors: None,
    };

    let service = DecisionNoticeService::from_config(&config).expect("tables load");
    let mut payload = pip_enhanced_daily_living();
    payload["pip"]["dailyLivingActivities"] = json!(["preparingFood"]);
    payload["pip"]["mobilityActivities"] = json!([]);
    let outcome = service.outcome(&case(payload)).expect("case resolves");

    assert_eq!(outcome.activity_points[0].points, 12);
    std::fs::remove_file(path).ok();
}

#[test]
fn missing_descriptor_file_is_reported() {
    let config = AdjudicationConfig {
        pip_descriptors: None,
        esa_descriptors: Some(std::env::temp_dir().join("no-such-esa-descriptors.json")),
    };

    assert!(matches!(
        DecisionNoticeService::from_config(&config),
        Err(DescriptorTableError::Io { .. })
    ));
}

#[tokio::test]
async fn router_serves_outcome_and_validation() {
    let response = router()
        .oneshot(post("/api/v1/decision-notice/outcome", &pip_enhanced_daily_living()))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let mut invalid = esa_support_group_refusal();
    invalid["esa"]["physicalDisabilitiesActivities"] = json!([]);
    let response = router()
        .oneshot(post("/api/v1/decision-notice/validate", &invalid))
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let body: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(body["errors"], json!(["At least one activity must be selected."]));
    assert_eq!(body["showRegulation29Page"], json!("Yes"));
}
