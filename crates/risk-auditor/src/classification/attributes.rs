use super::rules::RiskTier;
use serde::{Deserialize, Serialize};

/// Questionnaire sections, in the order the rule engine consults them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleGroup {
    ProhibitedPractices,
    HighRiskDomains,
    Transparency,
}

impl RuleGroup {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::ProhibitedPractices,
            Self::HighRiskDomains,
            Self::Transparency,
        ]
    }

    /// Tier assigned when any attribute of this group is answered yes.
    pub const fn tier(self) -> RiskTier {
        match self {
            Self::ProhibitedPractices => RiskTier::Prohibited,
            Self::HighRiskDomains => RiskTier::HighRisk,
            Self::Transparency => RiskTier::LimitedRisk,
        }
    }

    pub const fn heading(self) -> &'static str {
        match self {
            Self::ProhibitedPractices => "PROHIBITED AI PRACTICES ASSESSMENT",
            Self::HighRiskDomains => "HIGH-RISK AI PRACTICES ASSESSMENT",
            Self::Transparency => "TRANSPARENCY ASSESSMENT",
        }
    }
}

/// One yes/no questionnaire answer describing a practice or usage domain.
///
/// Variants are declared in questionnaire order; that order is the only order
/// used when reporting matched attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeKey {
    UsesSubliminalTechniques,
    ExploitsVulnerabilities,
    ConductsSocialScoring,
    UsesRealTimeBiometric,
    UsesEmotionRecognition,
    #[serde(rename = "createsFacialRecognitionDB")]
    CreatesFacialRecognitionDb,
    UsesPredictivePolicing,
    UsedInBiometrics,
    UsedInCriticalInfrastructure,
    UsedInEducation,
    UsedInEmployment,
    UsedInEssentialServices,
    UsedInLawEnforcement,
    UsedInMigration,
    UsedInJustice,
    IsSafetyComponent,
    InteractsWithHumans,
    GeneratesContent,
    UsesEmotionOrBiometric,
}

impl AttributeKey {
    pub const COUNT: usize = 19;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::UsesSubliminalTechniques,
            Self::ExploitsVulnerabilities,
            Self::ConductsSocialScoring,
            Self::UsesRealTimeBiometric,
            Self::UsesEmotionRecognition,
            Self::CreatesFacialRecognitionDb,
            Self::UsesPredictivePolicing,
            Self::UsedInBiometrics,
            Self::UsedInCriticalInfrastructure,
            Self::UsedInEducation,
            Self::UsedInEmployment,
            Self::UsedInEssentialServices,
            Self::UsedInLawEnforcement,
            Self::UsedInMigration,
            Self::UsedInJustice,
            Self::IsSafetyComponent,
            Self::InteractsWithHumans,
            Self::GeneratesContent,
            Self::UsesEmotionOrBiometric,
        ]
    }

    /// JSON/CSV field name used by the questionnaire client.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::UsesSubliminalTechniques => "usesSubliminalTechniques",
            Self::ExploitsVulnerabilities => "exploitsVulnerabilities",
            Self::ConductsSocialScoring => "conductsSocialScoring",
            Self::UsesRealTimeBiometric => "usesRealTimeBiometric",
            Self::UsesEmotionRecognition => "usesEmotionRecognition",
            Self::CreatesFacialRecognitionDb => "createsFacialRecognitionDB",
            Self::UsesPredictivePolicing => "usesPredictivePolicing",
            Self::UsedInBiometrics => "usedInBiometrics",
            Self::UsedInCriticalInfrastructure => "usedInCriticalInfrastructure",
            Self::UsedInEducation => "usedInEducation",
            Self::UsedInEmployment => "usedInEmployment",
            Self::UsedInEssentialServices => "usedInEssentialServices",
            Self::UsedInLawEnforcement => "usedInLawEnforcement",
            Self::UsedInMigration => "usedInMigration",
            Self::UsedInJustice => "usedInJustice",
            Self::IsSafetyComponent => "isSafetyComponent",
            Self::InteractsWithHumans => "interactsWithHumans",
            Self::GeneratesContent => "generatesContent",
            Self::UsesEmotionOrBiometric => "usesEmotionOrBiometric",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|key| key.wire_name() == name)
    }

    pub const fn group(self) -> RuleGroup {
        match self {
            Self::UsesSubliminalTechniques
            | Self::ExploitsVulnerabilities
            | Self::ConductsSocialScoring
            | Self::UsesRealTimeBiometric
            | Self::UsesEmotionRecognition
            | Self::CreatesFacialRecognitionDb
            | Self::UsesPredictivePolicing => RuleGroup::ProhibitedPractices,
            Self::UsedInBiometrics
            | Self::UsedInCriticalInfrastructure
            | Self::UsedInEducation
            | Self::UsedInEmployment
            | Self::UsedInEssentialServices
            | Self::UsedInLawEnforcement
            | Self::UsedInMigration
            | Self::UsedInJustice
            | Self::IsSafetyComponent => RuleGroup::HighRiskDomains,
            Self::InteractsWithHumans | Self::GeneratesContent | Self::UsesEmotionOrBiometric => {
                RuleGroup::Transparency
            }
        }
    }

    /// Short name of the practice or domain, used in console and report output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::UsesSubliminalTechniques => "Subliminal or manipulative techniques",
            Self::ExploitsVulnerabilities => "Exploitation of vulnerable groups",
            Self::ConductsSocialScoring => "Social scoring",
            Self::UsesRealTimeBiometric => "Real-time remote biometric identification",
            Self::UsesEmotionRecognition => "Emotion recognition at work or in education",
            Self::CreatesFacialRecognitionDb => "Untargeted facial image scraping",
            Self::UsesPredictivePolicing => "Predictive policing by profiling",
            Self::UsedInBiometrics => "Biometrics",
            Self::UsedInCriticalInfrastructure => "Critical infrastructure",
            Self::UsedInEducation => "Education and vocational training",
            Self::UsedInEmployment => "Employment and worker management",
            Self::UsedInEssentialServices => "Essential private and public services",
            Self::UsedInLawEnforcement => "Law enforcement",
            Self::UsedInMigration => "Migration, asylum and border control",
            Self::UsedInJustice => "Justice and democratic processes",
            Self::IsSafetyComponent => "Safety component of a regulated product",
            Self::InteractsWithHumans => "Direct interaction with people",
            Self::GeneratesContent => "Synthetic content generation",
            Self::UsesEmotionOrBiometric => "Emotion recognition or biometric categorisation",
        }
    }

    /// Yes/no question asked by the console questionnaire.
    pub const fn question(self) -> &'static str {
        match self {
            Self::UsesSubliminalTechniques => {
                "Does your system deploy subliminal or manipulative techniques to distort the behavior of persons?"
            }
            Self::ExploitsVulnerabilities => {
                "Does your system exploit any vulnerabilities of specific groups based on demographics?"
            }
            Self::ConductsSocialScoring => {
                "Does your system conduct social scoring for general purposes that could lead to detrimental or unfavourable treatment?"
            }
            Self::UsesRealTimeBiometric => {
                "Does your system use real-time remote biometric identification in publicly accessible spaces for law enforcement?"
            }
            Self::UsesEmotionRecognition => {
                "Does your system use emotion recognition in workplaces or educational institutions?"
            }
            Self::CreatesFacialRecognitionDb => {
                "Does your system create or expand facial recognition databases through untargeted scraping?"
            }
            Self::UsesPredictivePolicing => {
                "Does your system use predictive policing based solely on profiling or assessment of traits?"
            }
            Self::UsedInBiometrics => {
                "Is it used for biometric identification, categorisation, or emotion recognition?"
            }
            Self::UsedInCriticalInfrastructure => {
                "Is it used in critical infrastructure where it poses safety risks?"
            }
            Self::UsedInEducation => {
                "Is it used in education or vocational training with significant impact on access to education?"
            }
            Self::UsedInEmployment => {
                "Is it used in employment, worker management, or access to self-employment?"
            }
            Self::UsedInEssentialServices => {
                "Is it used to decide access to essential private or public services (e.g., credit scoring, social benefits)?"
            }
            Self::UsedInLawEnforcement => {
                "Is it used in law enforcement with significant impact on people's lives?"
            }
            Self::UsedInMigration => "Is it used in migration, asylum, or border control management?",
            Self::UsedInJustice => {
                "Is it used in the administration of justice or democratic processes?"
            }
            Self::IsSafetyComponent => {
                "Is your AI system a safety component of a product, or a product itself, covered by Union harmonisation legislation?"
            }
            Self::InteractsWithHumans => "Does your system interact with humans (e.g. chatbots)?",
            Self::GeneratesContent => {
                "Does your system generate or manipulate content (e.g. deepfakes)?"
            }
            Self::UsesEmotionOrBiometric => {
                "Does your system use emotion recognition or biometric categorization?"
            }
        }
    }
}
