use super::attributes::AttributeKey;
use super::input::AssessmentInput;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk categories, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    #[serde(rename = "PROHIBITED")]
    Prohibited,
    #[serde(rename = "High-Risk")]
    HighRisk,
    #[serde(rename = "Limited Risk")]
    LimitedRisk,
    #[serde(rename = "Minimal Risk")]
    MinimalRisk,
}

impl RiskTier {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Prohibited,
            Self::HighRisk,
            Self::LimitedRisk,
            Self::MinimalRisk,
        ]
    }

    /// Display text carried in `riskCategory`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Prohibited => "PROHIBITED",
            Self::HighRisk => "High-Risk",
            Self::LimitedRisk => "Limited Risk",
            Self::MinimalRisk => "Minimal Risk",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|tier| tier.label() == label)
    }

    pub const fn is_prohibited(self) -> bool {
        matches!(self, Self::Prohibited)
    }

    pub const fn explanation(self) -> &'static str {
        match self {
            Self::Prohibited => {
                "This AI system falls under prohibited practices according to the EU AI Act. \
                 Consider consulting with a legal expert specializing in AI regulation."
            }
            Self::HighRisk => {
                "High-risk AI systems require substantial compliance measures under the EU AI Act, \
                 including risk assessments, technical documentation, and human oversight."
            }
            Self::LimitedRisk => {
                "Limited risk AI systems must meet specific transparency obligations, such as \
                 notifying users they are interacting with an AI system or that content is \
                 artificially generated."
            }
            Self::MinimalRisk => {
                "Minimal risk AI systems have few regulatory obligations under the EU AI Act, \
                 though voluntary codes of conduct are encouraged."
            }
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single row of the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub tier: RiskTier,
    pub attribute: AttributeKey,
    pub recommendation: &'static str,
}

const fn rule(tier: RiskTier, attribute: AttributeKey, recommendation: &'static str) -> Rule {
    Rule {
        tier,
        attribute,
        recommendation,
    }
}

/// Decision table evaluated top to bottom; the first tier with a matching row wins.
pub static RULE_TABLE: [Rule; AttributeKey::COUNT] = [
    rule(
        RiskTier::Prohibited,
        AttributeKey::UsesSubliminalTechniques,
        "Prohibited practice: subliminal, manipulative or deceptive techniques that materially \
         distort behaviour (Article 5(1)(a)). Remove these techniques before any deployment.",
    ),
    rule(
        RiskTier::Prohibited,
        AttributeKey::ExploitsVulnerabilities,
        "Prohibited practice: exploiting vulnerabilities due to age, disability or a specific \
         social or economic situation (Article 5(1)(b)). Redesign the system so it cannot target \
         these groups.",
    ),
    rule(
        RiskTier::Prohibited,
        AttributeKey::ConductsSocialScoring,
        "Prohibited practice: social scoring that leads to detrimental or unfavourable treatment \
         of people (Article 5(1)(c)). Discontinue the scoring use case.",
    ),
    rule(
        RiskTier::Prohibited,
        AttributeKey::UsesRealTimeBiometric,
        "Prohibited practice: real-time remote biometric identification in publicly accessible \
         spaces for law enforcement (Article 5(1)(h)). Only the narrow exceptions authorised \
         under national law may apply; obtain legal review before any use.",
    ),
    rule(
        RiskTier::Prohibited,
        AttributeKey::UsesEmotionRecognition,
        "Prohibited practice: emotion recognition in the workplace or in education institutions \
         (Article 5(1)(f)). Remove the capability unless it serves a medical or safety purpose.",
    ),
    rule(
        RiskTier::Prohibited,
        AttributeKey::CreatesFacialRecognitionDb,
        "Prohibited practice: creating or expanding facial recognition databases through \
         untargeted scraping of images from the internet or CCTV footage (Article 5(1)(e)). \
         Stop collection and delete the scraped data.",
    ),
    rule(
        RiskTier::Prohibited,
        AttributeKey::UsesPredictivePolicing,
        "Prohibited practice: predicting the risk of a person committing a criminal offence \
         based solely on profiling or personality traits (Article 5(1)(d)). Withdraw the \
         prediction feature.",
    ),
    rule(
        RiskTier::HighRisk,
        AttributeKey::UsedInBiometrics,
        "Biometrics (Annex III, point 1): involve a notified body in the conformity assessment \
         where harmonised standards are not fully applied, and test accuracy across demographic \
         groups.",
    ),
    rule(
        RiskTier::HighRisk,
        AttributeKey::UsedInCriticalInfrastructure,
        "Critical infrastructure (Annex III, point 2): assess safety impacts on the operation of \
         the infrastructure and define fail-safe fallback procedures.",
    ),
    rule(
        RiskTier::HighRisk,
        AttributeKey::UsedInEducation,
        "Education and vocational training (Annex III, point 3): monitor outcomes for bias \
         affecting access to education and give learners a way to contest decisions.",
    ),
    rule(
        RiskTier::HighRisk,
        AttributeKey::UsedInEmployment,
        "Employment and worker management (Annex III, point 4): inform workers' representatives \
         and affected workers before deployment and monitor for discriminatory outcomes.",
    ),
    rule(
        RiskTier::HighRisk,
        AttributeKey::UsedInEssentialServices,
        "Essential private and public services (Annex III, point 5): carry out a fundamental \
         rights impact assessment before deployment (Article 27) and explain decisions on access \
         to credit or benefits.",
    ),
    rule(
        RiskTier::HighRisk,
        AttributeKey::UsedInLawEnforcement,
        "Law enforcement (Annex III, point 6): register the system in the EU database and \
         document the legal basis for each deployment.",
    ),
    rule(
        RiskTier::HighRisk,
        AttributeKey::UsedInMigration,
        "Migration, asylum and border control (Annex III, point 7): ensure decisions affecting \
         individuals are reviewed by a competent authority and remain contestable.",
    ),
    rule(
        RiskTier::HighRisk,
        AttributeKey::UsedInJustice,
        "Administration of justice and democratic processes (Annex III, point 8): keep the \
         system in a supporting role so that final decisions remain human-driven.",
    ),
    rule(
        RiskTier::HighRisk,
        AttributeKey::IsSafetyComponent,
        "Safety component of a regulated product (Article 6(1), Annex I): integrate AI Act \
         requirements into the product's existing sectoral conformity assessment.",
    ),
    rule(
        RiskTier::LimitedRisk,
        AttributeKey::InteractsWithHumans,
        "Inform people that they are interacting with an AI system unless this is obvious from \
         the context (Article 50(1)).",
    ),
    rule(
        RiskTier::LimitedRisk,
        AttributeKey::GeneratesContent,
        "Mark AI-generated audio, image, video or text in a machine-readable format and disclose \
         deep fakes as artificially generated (Article 50(2) and 50(4)).",
    ),
    rule(
        RiskTier::LimitedRisk,
        AttributeKey::UsesEmotionOrBiometric,
        "Notify people exposed to emotion recognition or biometric categorisation of its \
         operation and process their personal data lawfully (Article 50(3)).",
    ),
];

/// Looks up the table row for an attribute. Rows follow `AttributeKey` declaration order.
pub fn rule_for(attribute: AttributeKey) -> &'static Rule {
    &RULE_TABLE[attribute as usize]
}

/// Tier assignment plus the attributes that decided it, in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub tier: RiskTier,
    pub matched: Vec<AttributeKey>,
}

impl Verdict {
    pub const fn is_prohibited(&self) -> bool {
        self.tier.is_prohibited()
    }
}

/// Assigns exactly one tier. Name and purpose are never consulted.
pub fn classify(input: &AssessmentInput) -> Verdict {
    for tier in [RiskTier::Prohibited, RiskTier::HighRisk, RiskTier::LimitedRisk] {
        let matched: Vec<AttributeKey> = RULE_TABLE
            .iter()
            .filter(|rule| rule.tier == tier && input.flag(rule.attribute))
            .map(|rule| rule.attribute)
            .collect();

        if !matched.is_empty() {
            return Verdict { tier, matched };
        }
    }

    Verdict {
        tier: RiskTier::MinimalRisk,
        matched: Vec::new(),
    }
}
