use super::common::*;
use serde_json::{json, Value};

use crate::classification::{assess_payload, normalize, unrecognized_fields, AttributeKey, ValidationError};

#[test]
fn missing_flags_default_to_false() {
    let input = normalize(&payload()).expect("payload validates");

    assert_eq!(input.flags().count(), AttributeKey::COUNT);
    assert!(input.flags().all(|(_, answer)| !answer));
    assert_eq!(input.system_name(), "Customer Service Chatbot");
}

#[test]
fn null_flags_are_coerced_to_false() {
    let raw = payload_with(&[
        ("conductsSocialScoring", Value::Null),
        ("generatesContent", json!(true)),
    ]);

    let input = normalize(&raw).expect("payload validates");

    assert!(!input.flag(AttributeKey::ConductsSocialScoring));
    assert!(input.flag(AttributeKey::GeneratesContent));
}

#[test]
fn every_known_flag_is_read_from_its_wire_name() {
    for key in AttributeKey::ordered() {
        let raw = payload_with(&[(key.wire_name(), json!(true))]);
        let input = normalize(&raw).expect("payload validates");
        let set: Vec<AttributeKey> = input
            .flags()
            .filter(|(_, answer)| *answer)
            .map(|(key, _)| key)
            .collect();
        assert_eq!(set, vec![key]);
    }
}

#[test]
fn empty_system_name_is_missing() {
    let raw = payload_with(&[("systemName", json!(""))]);

    match normalize(&raw) {
        Err(ValidationError::MissingField { field }) => assert_eq!(field, "systemName"),
        other => panic!("expected missing systemName, got {other:?}"),
    }
}

#[test]
fn whitespace_only_purpose_is_missing() {
    let raw = payload_with(&[("systemPurpose", json!("   \t\n"))]);

    match normalize(&raw) {
        Err(ValidationError::MissingField { field }) => assert_eq!(field, "systemPurpose"),
        other => panic!("expected missing systemPurpose, got {other:?}"),
    }
}

#[test]
fn absent_purpose_is_missing() {
    let raw = json!({ "systemName": "Scorer" });

    assert_eq!(
        normalize(&raw),
        Err(ValidationError::MissingField {
            field: "systemPurpose"
        })
    );
}

#[test]
fn string_flag_is_invalid_type() {
    let raw = payload_with(&[("usedInEmployment", json!("yes"))]);

    match normalize(&raw) {
        Err(ValidationError::InvalidType { field, expected }) => {
            assert_eq!(field, "usedInEmployment");
            assert_eq!(expected, "boolean");
        }
        other => panic!("expected invalid type, got {other:?}"),
    }
}

#[test]
fn numeric_name_is_invalid_type() {
    let raw = payload_with(&[("systemName", json!(42))]);

    assert!(matches!(
        normalize(&raw),
        Err(ValidationError::InvalidType {
            field: "systemName",
            ..
        })
    ));
}

#[test]
fn non_object_payload_is_rejected() {
    let error = normalize(&json!(["systemName"])).expect_err("arrays are rejected");
    assert_eq!(error.field(), "payload");
}

#[test]
fn long_text_fields_are_accepted() {
    let purpose = "p".repeat(5_000);
    let raw = payload_with(&[("systemPurpose", json!(purpose))]);

    let input = normalize(&raw).expect("no upper bound on purpose text");

    assert_eq!(input.system_purpose().len(), 5_000);
}

#[test]
fn padded_text_fields_are_echoed_unchanged() {
    let raw = payload_with(&[
        ("systemName", json!("  Chatbot v2 ")),
        ("systemPurpose", json!("\tAnswers questions\n")),
    ]);

    let result = assess_payload(&raw).expect("payload validates");

    assert_eq!(result.system_name, "  Chatbot v2 ");
    assert_eq!(result.system_purpose, "\tAnswers questions\n");
}

#[test]
fn unknown_keys_are_ignored_but_reported() {
    let raw = payload_with(&[
        ("usesQuantumOracle", json!("definitely")),
        ("interactsWithHumans", json!(true)),
    ]);

    let input = normalize(&raw).expect("unknown keys do not fail validation");

    assert!(input.flag(AttributeKey::InteractsWithHumans));
    assert_eq!(unrecognized_fields(&raw), vec!["usesQuantumOracle".to_string()]);
    assert!(unrecognized_fields(&payload()).is_empty());
}
