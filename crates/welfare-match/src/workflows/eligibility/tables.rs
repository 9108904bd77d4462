use std::collections::HashMap;

use super::domain::{ExpectedBenefit, SchemeCategory, SchemeDefinition, SocialCategory};

pub const DEFAULT_CATEGORY_VULNERABILITY: f64 = 0.50;
pub const DEFAULT_PRIORITY_WEIGHT: f64 = 0.75;
pub const DEFAULT_IMPACT_SCORE: f64 = 0.70;

/// Static profile for a named scheme: how much it helps and what it pays out.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemeProfile {
    pub impact_score: f64,
    pub expected_benefit: ExpectedBenefit,
}

/// Process-wide constant lookup tables consumed by the scoring functions.
///
/// Built once at startup and shared by reference; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringTables {
    category_vulnerability: HashMap<SocialCategory, f64>,
    priority_weights: HashMap<SchemeCategory, f64>,
    scheme_profiles: HashMap<String, SchemeProfile>,
}

impl ScoringTables {
    pub fn standard() -> Self {
        let category_vulnerability = HashMap::from([
            (SocialCategory::St, 0.95),
            (SocialCategory::Sc, 0.90),
            (SocialCategory::Obc, 0.75),
            (SocialCategory::Ews, 0.85),
            (SocialCategory::General, 0.40),
            (SocialCategory::Unclassified, 0.50),
        ]);

        let priority_weights = HashMap::from([
            (SchemeCategory::Healthcare, 1.0),
            (SchemeCategory::Education, 0.95),
            (SchemeCategory::Housing, 0.85),
            (SchemeCategory::SocialWelfare, 0.90),
            (SchemeCategory::Agriculture, 0.80),
            (SchemeCategory::Finance, 0.70),
        ]);

        let scheme_profiles = [
            ("PM Kisan Samman Nidhi", 0.75, 6_000, 6_000, "Annual"),
            (
                "Ayushman Bharat",
                0.95,
                0,
                500_000,
                "Per incident (up to 5 lakh coverage)",
            ),
            (
                "Pradhan Mantri Awas Yojana",
                0.90,
                150_000,
                250_000,
                "One-time subsidy",
            ),
            ("National Scholarship Portal", 0.85, 10_000, 50_000, "Annual"),
            (
                "Pradhan Mantri Mudra Yojana",
                0.80,
                50_000,
                1_000_000,
                "Loan amount",
            ),
            (
                "Beti Bachao Beti Padhao",
                0.88,
                5_000,
                100_000,
                "Progressive savings",
            ),
        ]
        .into_iter()
        .map(|(name, impact_score, min, max, frequency)| {
            (
                name.to_string(),
                SchemeProfile {
                    impact_score,
                    expected_benefit: ExpectedBenefit {
                        min,
                        max,
                        frequency: frequency.to_string(),
                    },
                },
            )
        })
        .collect();

        Self {
            category_vulnerability,
            priority_weights,
            scheme_profiles,
        }
    }

    pub fn category_vulnerability(&self, category: &SocialCategory) -> f64 {
        self.category_vulnerability
            .get(category)
            .copied()
            .unwrap_or(DEFAULT_CATEGORY_VULNERABILITY)
    }

    pub fn priority_weight(&self, category: &SchemeCategory) -> f64 {
        self.priority_weights
            .get(category)
            .copied()
            .unwrap_or(DEFAULT_PRIORITY_WEIGHT)
    }

    pub fn profile(&self, scheme_name: &str) -> Option<&SchemeProfile> {
        self.scheme_profiles.get(scheme_name)
    }

    /// Impact score published by the catalog, else the named profile, else the default.
    pub fn impact_score(&self, scheme: &SchemeDefinition) -> f64 {
        scheme
            .impact_score
            .or_else(|| self.profile(&scheme.name).map(|profile| profile.impact_score))
            .unwrap_or(DEFAULT_IMPACT_SCORE)
    }

    pub fn expected_benefit(&self, scheme: &SchemeDefinition) -> ExpectedBenefit {
        scheme
            .expected_benefit
            .clone()
            .or_else(|| {
                self.profile(&scheme.name)
                    .map(|profile| profile.expected_benefit.clone())
            })
            .unwrap_or_else(ExpectedBenefit::unknown)
    }
}

impl Default for ScoringTables {
    fn default() -> Self {
        Self::standard()
    }
}
