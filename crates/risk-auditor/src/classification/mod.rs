//! Risk classification engine: input normalization, the tiered decision table,
//! and recommendation composition.
//!
//! Every stage is a pure function of its arguments, so one evaluation per request
//! can run concurrently without coordination.

pub mod attributes;
pub mod input;
pub mod recommendations;
pub mod rules;

#[cfg(test)]
mod tests;

pub use attributes::{AttributeKey, RuleGroup};
pub use input::{normalize, unrecognized_fields, AssessmentInput, ValidationError};
pub use recommendations::compose;
pub use rules::{classify, RiskTier, Verdict, RULE_TABLE};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome returned to the questionnaire client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub system_name: String,
    pub system_purpose: String,
    pub risk_category: RiskTier,
    pub is_prohibited: bool,
    pub recommendations: Vec<String>,
}

/// Runs the rule engine and composer over a validated input.
pub fn assess(input: &AssessmentInput) -> ClassificationResult {
    let verdict = classify(input);
    let recommendations = compose(verdict.tier, &verdict.matched);

    ClassificationResult {
        system_name: input.system_name().to_string(),
        system_purpose: input.system_purpose().to_string(),
        risk_category: verdict.tier,
        is_prohibited: verdict.is_prohibited(),
        recommendations,
    }
}

/// Validates a raw request payload and classifies it.
pub fn assess_payload(raw: &Value) -> Result<ClassificationResult, ValidationError> {
    let input = normalize(raw)?;
    Ok(assess(&input))
}
