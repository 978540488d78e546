use super::common::*;
use serde_json::json;

use crate::classification::{
    assess, assess_payload, classify, AttributeKey, RiskTier, RuleGroup, ValidationError,
    RULE_TABLE,
};

#[test]
fn all_false_is_minimal_risk() {
    let verdict = classify(&blank_input());

    assert_eq!(verdict.tier, RiskTier::MinimalRisk);
    assert!(verdict.matched.is_empty());
    assert!(!verdict.is_prohibited());
}

#[test]
fn social_scoring_alone_is_prohibited() {
    let result = assess(&input_with(&[AttributeKey::ConductsSocialScoring]));

    assert_eq!(result.risk_category, RiskTier::Prohibited);
    assert!(result.is_prohibited);
    assert!(result
        .recommendations
        .iter()
        .any(|entry| entry.to_lowercase().contains("social scoring")));
}

#[test]
fn high_risk_domain_outranks_transparency() {
    let verdict = classify(&input_with(&[
        AttributeKey::UsedInEmployment,
        AttributeKey::InteractsWithHumans,
    ]));

    assert_eq!(verdict.tier, RiskTier::HighRisk);
    assert_eq!(verdict.matched, vec![AttributeKey::UsedInEmployment]);
}

#[test]
fn content_generation_alone_is_limited_risk() {
    let verdict = classify(&input_with(&[AttributeKey::GeneratesContent]));

    assert_eq!(verdict.tier, RiskTier::LimitedRisk);
    assert_eq!(verdict.matched, vec![AttributeKey::GeneratesContent]);
}

#[test]
fn any_prohibited_flag_dominates_every_other_answer() {
    for key in prohibited_keys() {
        let everything_else: Vec<AttributeKey> = AttributeKey::ordered()
            .into_iter()
            .filter(|other| other.group() != RuleGroup::ProhibitedPractices)
            .chain(std::iter::once(key))
            .collect();

        let result = assess(&input_with(&everything_else));

        assert_eq!(result.risk_category, RiskTier::Prohibited, "{key:?}");
        assert!(result.is_prohibited);
    }
}

#[test]
fn matched_set_reports_every_violation_in_table_order() {
    let verdict = classify(&input_with(&[
        AttributeKey::UsesPredictivePolicing,
        AttributeKey::UsesSubliminalTechniques,
        AttributeKey::UsedInJustice,
        AttributeKey::ConductsSocialScoring,
    ]));

    assert_eq!(verdict.tier, RiskTier::Prohibited);
    assert_eq!(
        verdict.matched,
        vec![
            AttributeKey::UsesSubliminalTechniques,
            AttributeKey::ConductsSocialScoring,
            AttributeKey::UsesPredictivePolicing,
        ]
    );
}

#[test]
fn name_and_purpose_never_change_the_tier() {
    let plain = crate::classification::AssessmentInput::new("A", "B")
        .expect("valid")
        .with_flag(AttributeKey::UsedInMigration, true);
    let loaded = crate::classification::AssessmentInput::new(
        "Social scoring engine",
        "Subliminal predictive policing with real-time biometric surveillance",
    )
    .expect("valid")
    .with_flag(AttributeKey::UsedInMigration, true);

    assert_eq!(classify(&plain), classify(&loaded));
}

#[test]
fn evaluation_is_deterministic() {
    let raw = payload_with(&[
        ("usedInEducation", json!(true)),
        ("usedInBiometrics", json!(true)),
        ("generatesContent", json!(true)),
    ]);

    let first = assess_payload(&raw).expect("valid payload");
    for _ in 0..10 {
        assert_eq!(assess_payload(&raw).expect("valid payload"), first);
    }
}

#[test]
fn prohibited_flag_tracks_the_tier() {
    for key in AttributeKey::ordered() {
        let result = assess(&input_with(&[key]));
        assert_eq!(
            result.is_prohibited,
            result.risk_category == RiskTier::Prohibited
        );
        assert_eq!(result.risk_category, key.group().tier());
        assert!(!result.recommendations.is_empty());
    }
}

#[test]
fn result_echoes_text_fields() {
    let result = assess_payload(&payload()).expect("valid payload");

    assert_eq!(result.system_name, "Customer Service Chatbot");
    assert_eq!(
        result.system_purpose,
        "AI-powered chatbot for handling customer service inquiries"
    );
}

#[test]
fn invalid_payload_produces_no_result() {
    let raw = payload_with(&[("systemName", json!(" "))]);

    assert_eq!(
        assess_payload(&raw),
        Err(ValidationError::MissingField {
            field: "systemName"
        })
    );
}

#[test]
fn decision_table_follows_declaration_order_and_groups() {
    let attributes: Vec<AttributeKey> = RULE_TABLE.iter().map(|rule| rule.attribute).collect();
    assert_eq!(attributes, AttributeKey::ordered().to_vec());

    for rule in RULE_TABLE.iter() {
        assert_eq!(rule.tier, rule.attribute.group().tier(), "{:?}", rule.attribute);
        assert!(!rule.recommendation.is_empty());
    }
}

#[test]
fn result_serializes_with_client_field_names() {
    let result = assess(&input_with(&[AttributeKey::UsedInEmployment]));

    let encoded = serde_json::to_value(&result).expect("serializes");

    assert_eq!(encoded["riskCategory"], json!("High-Risk"));
    assert_eq!(encoded["isProhibited"], json!(false));
    assert_eq!(encoded["systemName"], json!("Customer Service Chatbot"));
    assert!(encoded["recommendations"].is_array());
}

#[test]
fn tier_labels_match_client_vocabulary() {
    let labels: Vec<&str> = RiskTier::ordered().into_iter().map(RiskTier::label).collect();
    assert_eq!(
        labels,
        vec!["PROHIBITED", "High-Risk", "Limited Risk", "Minimal Risk"]
    );
    assert_eq!(RiskTier::from_label("Limited Risk"), Some(RiskTier::LimitedRisk));
    assert_eq!(RiskTier::from_label("limited"), None);
}
