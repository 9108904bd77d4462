use serde::Serialize;

use super::domain::{ConfidenceInterval, PriorityLabel, SchemeCategory};

/// Rounded per-factor detail surfaced with each recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticalAnalysis {
    pub demographic_match: f64,
    pub income_compatibility: f64,
    pub category_match: f64,
    pub priority_score: PriorityLabel,
    pub overall_probability: f64,
    pub expected_benefit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeRecommendation {
    pub name: String,
    pub description: String,
    pub category: SchemeCategory,
    pub benefits: String,
    pub duration: String,
    pub match_score: u8,
    pub probability_score: f64,
    pub confidence_interval: ConfidenceInterval,
    pub eligibility_reason: String,
    pub requirements: Vec<String>,
    pub statistical_analysis: StatisticalAnalysis,
    pub impact_score: f64,
    pub recommendation_score: f64,
    pub personalized_explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IncomeBracket {
    #[serde(rename = "Below Poverty Line")]
    BelowPovertyLine,
    #[serde(rename = "Low Income")]
    Low,
    #[serde(rename = "Lower Middle Income")]
    LowerMiddle,
    #[serde(rename = "Middle Income")]
    Middle,
}

impl IncomeBracket {
    pub fn from_income(income: f64) -> Self {
        if income < 100_000.0 {
            Self::BelowPovertyLine
        } else if income < 250_000.0 {
            Self::Low
        } else if income < 500_000.0 {
            Self::LowerMiddle
        } else {
            Self::Middle
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::BelowPovertyLine => "Below Poverty Line",
            Self::Low => "Low Income",
            Self::LowerMiddle => "Lower Middle Income",
            Self::Middle => "Middle Income",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecommendedFocus {
    #[serde(rename = "Immediate assistance recommended - High priority schemes available")]
    ImmediateAssistance,
    #[serde(rename = "Multiple welfare schemes match your profile")]
    MultipleSchemes,
    #[serde(rename = "Explore growth and development schemes")]
    GrowthSchemes,
}

impl RecommendedFocus {
    pub fn from_vulnerability(vulnerability_index: f64) -> Self {
        if vulnerability_index >= 0.7 {
            Self::ImmediateAssistance
        } else if vulnerability_index >= 0.5 {
            Self::MultipleSchemes
        } else {
            Self::GrowthSchemes
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::ImmediateAssistance => {
                "Immediate assistance recommended - High priority schemes available"
            }
            Self::MultipleSchemes => "Multiple welfare schemes match your profile",
            Self::GrowthSchemes => "Explore growth and development schemes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub vulnerability_index: f64,
    pub income_category: IncomeBracket,
    pub priority_categories: Vec<SchemeCategory>,
    pub recommended_focus: RecommendedFocus,
    pub total_eligible_schemes: usize,
    pub high_priority_schemes: usize,
}

/// Response for one eligibility check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityReport {
    pub success: bool,
    /// Size of the thresholded top list in `schemes`.
    pub count: usize,
    /// Size of the full ranked list before the top-N cut.
    pub total_eligible: usize,
    pub schemes: Vec<SchemeRecommendation>,
    pub user_profile: ProfileSummary,
}
