use serde_json::{json, Value};

use crate::classification::{AssessmentInput, AttributeKey};

pub(super) fn blank_input() -> AssessmentInput {
    AssessmentInput::new("Customer Service Chatbot", "Answers customer questions")
        .expect("valid text fields")
}

pub(super) fn input_with(flags: &[AttributeKey]) -> AssessmentInput {
    flags
        .iter()
        .fold(blank_input(), |input, key| input.with_flag(*key, true))
}

pub(super) fn payload() -> Value {
    json!({
        "systemName": "Customer Service Chatbot",
        "systemPurpose": "AI-powered chatbot for handling customer service inquiries",
    })
}

pub(super) fn payload_with(entries: &[(&str, Value)]) -> Value {
    let mut payload = payload();
    let object = payload.as_object_mut().expect("payload is an object");
    for (key, value) in entries {
        object.insert((*key).to_string(), value.clone());
    }
    payload
}

pub(super) fn prohibited_keys() -> Vec<AttributeKey> {
    AttributeKey::ordered()[..7].to_vec()
}
