use super::attributes::AttributeKey;
use super::rules::{RiskTier, RULE_TABLE};

pub const PROHIBITED_LEAD: &str = "This use case may not be placed on the market, put into \
service, or used in the EU under Article 5 of the EU AI Act. Consult a legal expert \
specializing in AI regulation before continuing development.";

pub const HIGH_RISK_BASELINE: [&str; 5] = [
    "Establish, document and maintain a risk management system covering the whole lifecycle \
     of the AI system (Article 9).",
    "Draw up technical documentation demonstrating compliance before the system is placed on \
     the market and keep it up to date (Article 11).",
    "Design the system so that it can be effectively overseen by natural persons while in use \
     (Article 14).",
    "Complete the applicable conformity assessment procedure and affix the CE marking before \
     placing the system on the market (Article 43).",
    "Enable automatic recording of events (logs) over the system's lifetime to ensure \
     traceability (Article 12).",
];

pub const LIMITED_RISK_FALLBACK: &str = "Review the transparency obligations of Article 50 and \
disclose the use of AI to affected persons.";

pub const MINIMAL_RISK_BASELINE: &str = "No mandatory obligations apply under the EU AI Act. \
Consider adopting voluntary codes of conduct and basic transparency practices (Article 95).";

/// Builds the ordered recommendation list for a verdict.
///
/// Tailored entries always follow decision-table order regardless of the order of
/// `matched`; attributes outside `tier`'s group are ignored.
pub fn compose(tier: RiskTier, matched: &[AttributeKey]) -> Vec<String> {
    let tailored = RULE_TABLE
        .iter()
        .filter(|rule| rule.tier == tier && matched.contains(&rule.attribute))
        .map(|rule| rule.recommendation.to_string());

    match tier {
        RiskTier::Prohibited => std::iter::once(PROHIBITED_LEAD.to_string())
            .chain(tailored)
            .collect(),
        RiskTier::HighRisk => HIGH_RISK_BASELINE
            .iter()
            .map(|entry| entry.to_string())
            .chain(tailored)
            .collect(),
        RiskTier::LimitedRisk => {
            let entries: Vec<String> = tailored.collect();
            if entries.is_empty() {
                vec![LIMITED_RISK_FALLBACK.to_string()]
            } else {
                entries
            }
        }
        RiskTier::MinimalRisk => vec![MINIMAL_RISK_BASELINE.to_string()],
    }
}
