use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EligibilityError;

/// Sentinel token meaning "every category" or "every state".
pub const ALL_TOKEN: &str = "All";

/// Social category declared by the applicant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SocialCategory {
    #[default]
    General,
    Obc,
    Sc,
    St,
    Ews,
    /// The "All" token used by applicants who decline to classify.
    Unclassified,
    Other(String),
}

impl SocialCategory {
    pub fn from_token(raw: &str) -> Self {
        match raw.trim() {
            "" | "General" => Self::General,
            "OBC" => Self::Obc,
            "SC" => Self::Sc,
            "ST" => Self::St,
            "EWS" => Self::Ews,
            ALL_TOKEN => Self::Unclassified,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn token(&self) -> &str {
        match self {
            Self::General => "General",
            Self::Obc => "OBC",
            Self::Sc => "SC",
            Self::St => "ST",
            Self::Ews => "EWS",
            Self::Unclassified => ALL_TOKEN,
            Self::Other(token) => token,
        }
    }
}

impl From<String> for SocialCategory {
    fn from(value: String) -> Self {
        Self::from_token(&value)
    }
}

impl From<SocialCategory> for String {
    fn from(value: SocialCategory) -> Self {
        value.token().to_string()
    }
}

impl fmt::Display for SocialCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Scheme category as published by the catalog. Unknown labels are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SchemeCategory {
    Healthcare,
    Education,
    Housing,
    SocialWelfare,
    Agriculture,
    Finance,
    Employment,
    Other(String),
}

impl SchemeCategory {
    pub fn from_label(raw: &str) -> Self {
        match raw.trim() {
            "Healthcare" => Self::Healthcare,
            "Education" => Self::Education,
            "Housing" => Self::Housing,
            "Social Welfare" => Self::SocialWelfare,
            "Agriculture" => Self::Agriculture,
            "Finance" => Self::Finance,
            "Employment" => Self::Employment,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Housing => "Housing",
            Self::SocialWelfare => "Social Welfare",
            Self::Agriculture => "Agriculture",
            Self::Finance => "Finance",
            Self::Employment => "Employment",
            Self::Other(label) => label,
        }
    }

    /// Categories whose benefits are steered hardest towards low-income households.
    pub fn targets_low_income(&self) -> bool {
        matches!(
            self,
            Self::Healthcare | Self::Education | Self::SocialWelfare
        )
    }
}

impl From<String> for SchemeCategory {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<SchemeCategory> for String {
    fn from(value: SchemeCategory) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for SchemeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated applicant snapshot; immutable for the duration of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub income: f64,
    pub category: SocialCategory,
    pub state: String,
    pub gender: Option<String>,
}

/// Raw eligibility check payload, validated into a [`UserProfile`] before scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityRequest {
    pub age: i64,
    pub income: f64,
    #[serde(default)]
    pub category: Option<String>,
    pub state: String,
    #[serde(default)]
    pub gender: Option<String>,
}

impl TryFrom<EligibilityRequest> for UserProfile {
    type Error = EligibilityError;

    fn try_from(request: EligibilityRequest) -> Result<Self, Self::Error> {
        if request.age < 0 {
            return Err(EligibilityError::invalid_input(
                "age",
                format!("age must be non-negative, got {}", request.age),
            ));
        }
        let age = u32::try_from(request.age).map_err(|_| {
            EligibilityError::invalid_input("age", format!("age {} is out of range", request.age))
        })?;

        if !request.income.is_finite() {
            return Err(EligibilityError::invalid_input(
                "income",
                "income must be a finite number",
            ));
        }
        if request.income < 0.0 {
            return Err(EligibilityError::invalid_input(
                "income",
                format!("income must be non-negative, got {}", request.income),
            ));
        }

        let category = request
            .category
            .as_deref()
            .map(SocialCategory::from_token)
            .unwrap_or_default();
        let gender = request
            .gender
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Ok(Self {
            age,
            income: request.income,
            category,
            state: request.state.trim().to_string(),
            gender,
        })
    }
}

/// Discrete eligibility rules attached to a scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeCriteria {
    #[serde(default, alias = "min_age")]
    pub min_age: u32,
    #[serde(default = "default_max_age", alias = "max_age")]
    pub max_age: u32,
    /// `None` means the scheme carries no income ceiling.
    #[serde(default, alias = "max_income")]
    pub max_income: Option<f64>,
    #[serde(default = "all_tokens", alias = "categories")]
    pub eligible_categories: Vec<String>,
    #[serde(default = "all_tokens", alias = "states")]
    pub eligible_states: Vec<String>,
    #[serde(default, alias = "gender")]
    pub required_gender: Option<String>,
}

fn default_max_age() -> u32 {
    120
}

fn all_tokens() -> Vec<String> {
    vec![ALL_TOKEN.to_string()]
}

impl Default for SchemeCriteria {
    fn default() -> Self {
        Self {
            min_age: 0,
            max_age: default_max_age(),
            max_income: None,
            eligible_categories: all_tokens(),
            eligible_states: all_tokens(),
            required_gender: None,
        }
    }
}

impl SchemeCriteria {
    pub fn allows_all_categories(&self) -> bool {
        self.eligible_categories.iter().any(|token| token == ALL_TOKEN)
    }

    pub fn lists_category(&self, category: &SocialCategory) -> bool {
        self.eligible_categories
            .iter()
            .any(|token| token == category.token())
    }

    pub fn admits_category(&self, category: &SocialCategory) -> bool {
        self.allows_all_categories() || self.lists_category(category)
    }

    pub fn admits_state(&self, state: &str) -> bool {
        self.eligible_states
            .iter()
            .any(|token| token == ALL_TOKEN || token == state)
    }

    /// Gender the scheme is restricted to; the "All" token counts as no restriction.
    pub fn gender_requirement(&self) -> Option<&str> {
        self.required_gender
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case(ALL_TOKEN))
    }

    pub fn age_span(&self) -> u32 {
        self.max_age.saturating_sub(self.min_age)
    }
}

/// Published benefit range for a scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedBenefit {
    pub min: u64,
    pub max: u64,
    pub frequency: String,
}

impl ExpectedBenefit {
    pub fn unknown() -> Self {
        Self {
            min: 0,
            max: 0,
            frequency: "N/A".to_string(),
        }
    }

    /// Renders the range as e.g. `₹6,000 (Annual)` or `₹10,000 - ₹50,000 (Annual)`.
    pub fn describe(&self) -> String {
        let amount = if self.min == self.max {
            format_rupees(self.min as f64)
        } else {
            format!(
                "{} - {}",
                format_rupees(self.min as f64),
                format_rupees(self.max as f64)
            )
        };
        format!("{amount} ({})", self.frequency)
    }
}

/// Formats a whole-rupee amount with thousands separators.
pub fn format_rupees(amount: f64) -> String {
    let rounded = amount.round().max(0.0) as u64;
    let digits = rounded.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₹{grouped}")
}

/// Scheme as supplied by the external catalog. Read-only to the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeDefinition {
    pub name: String,
    pub description: String,
    pub category: SchemeCategory,
    pub benefits: String,
    #[serde(default = "default_duration")]
    pub duration: String,
    #[serde(default, alias = "eligibilityCriteria", alias = "eligibility_criteria")]
    pub criteria: SchemeCriteria,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_benefit: Option<ExpectedBenefit>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_deadline: Option<NaiveDate>,
}

fn default_duration() -> String {
    "Ongoing".to_string()
}

fn default_active() -> bool {
    true
}

impl SchemeDefinition {
    /// Whether the scheme is open for applications on `date`.
    pub fn is_open_on(&self, date: NaiveDate) -> bool {
        self.is_active
            && self
                .application_deadline
                .map(|deadline| deadline >= date)
                .unwrap_or(true)
    }
}

/// Coarse urgency label derived from the overall probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityLabel {
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "VERY HIGH")]
    VeryHigh,
}

impl PriorityLabel {
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.8 {
            Self::VeryHigh
        } else if probability >= 0.6 {
            Self::High
        } else if probability >= 0.4 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::VeryHigh => "VERY HIGH",
        }
    }
}

/// 95% interval around a point probability, serialized as `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval(pub f64, pub f64);

impl ConfidenceInterval {
    pub fn lower(&self) -> f64 {
        self.0
    }

    pub fn upper(&self) -> f64 {
        self.1
    }

    pub fn contains(&self, probability: f64) -> bool {
        self.0 <= probability && probability <= self.1
    }
}

/// Per-factor probabilities for one (user, scheme) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorProbabilities {
    pub age: f64,
    pub income: f64,
    pub category: f64,
    pub gender: f64,
}

impl FactorProbabilities {
    pub fn any_vetoed(&self) -> bool {
        self.age == 0.0 || self.income == 0.0 || self.category == 0.0 || self.gender == 0.0
    }
}

/// Transient scoring detail for a scheme that passed the eligibility gate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub factors: FactorProbabilities,
    pub overall_probability: f64,
    pub confidence_interval: ConfidenceInterval,
    pub match_score: u8,
    pub recommendation_score: f64,
    pub priority: PriorityLabel,
}

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(age: i64, income: f64) -> EligibilityRequest {
        EligibilityRequest {
            age,
            income,
            category: Some("SC".to_string()),
            state: " Bihar ".to_string(),
            gender: Some("  ".to_string()),
        }
    }

    #[test]
    fn request_converts_into_profile() {
        let profile = UserProfile::try_from(request(30, 1000.0)).expect("valid request");
        assert_eq!(profile.age, 30);
        assert_eq!(profile.category, SocialCategory::Sc);
        assert_eq!(profile.state, "Bihar");
        assert_eq!(profile.gender, None);
    }

    #[test]
    fn negative_values_are_rejected_per_field() {
        match UserProfile::try_from(request(-1, 1000.0)) {
            Err(EligibilityError::InvalidInput { field, .. }) => assert_eq!(field, "age"),
            other => panic!("expected age rejection, got {other:?}"),
        }
        match UserProfile::try_from(request(20, -5.0)) {
            Err(EligibilityError::InvalidInput { field, .. }) => assert_eq!(field, "income"),
            other => panic!("expected income rejection, got {other:?}"),
        }
        assert!(UserProfile::try_from(request(20, f64::NAN)).is_err());
    }

    #[test]
    fn missing_category_defaults_to_general() {
        let mut raw = request(30, 10.0);
        raw.category = None;
        let profile = UserProfile::try_from(raw).expect("valid request");
        assert_eq!(profile.category, SocialCategory::General);
    }

    #[test]
    fn criteria_accept_legacy_field_names() {
        let criteria: SchemeCriteria = serde_json::from_value(serde_json::json!({
            "min_age": 18,
            "max_age": 60,
            "max_income": 200000,
            "categories": ["SC", "ST"],
            "gender": "All"
        }))
        .expect("criteria parse");

        assert_eq!(criteria.min_age, 18);
        assert_eq!(criteria.max_income, Some(200000.0));
        assert!(criteria.lists_category(&SocialCategory::St));
        assert!(!criteria.allows_all_categories());
        assert!(criteria.admits_state("Kerala"));
        assert_eq!(criteria.gender_requirement(), None);
    }

    #[test]
    fn benefit_ranges_render_with_separators() {
        let fixed = ExpectedBenefit {
            min: 6000,
            max: 6000,
            frequency: "Annual".to_string(),
        };
        let range = ExpectedBenefit {
            min: 150000,
            max: 1000000,
            frequency: "Loan amount".to_string(),
        };
        assert_eq!(fixed.describe(), "₹6,000 (Annual)");
        assert_eq!(range.describe(), "₹150,000 - ₹1,000,000 (Loan amount)");
        assert_eq!(ExpectedBenefit::unknown().describe(), "₹0 (N/A)");
    }

    #[test]
    fn unknown_labels_round_trip_verbatim() {
        let category = SchemeCategory::from_label("Skilling");
        assert_eq!(category, SchemeCategory::Other("Skilling".to_string()));
        assert_eq!(String::from(category), "Skilling");
        assert_eq!(
            SchemeCategory::from_label("Social Welfare"),
            SchemeCategory::SocialWelfare
        );
    }
}
