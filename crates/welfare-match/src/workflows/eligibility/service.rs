use std::sync::Arc;

use tracing::{debug, info, warn};

use super::catalog::{validate_scheme, SchemeCatalog};
use super::config::RankingPolicy;
use super::domain::{round_to, EligibilityRequest, SchemeDefinition, ScoreBreakdown, UserProfile};
use super::explanation::{eligibility_reason, personalized_explanation};
use super::filter::rejection_reason;
use super::ranking::{filter_top_recommendations, rank_schemes, score_scheme};
use super::report::{EligibilityReport, SchemeRecommendation, StatisticalAnalysis};
use super::summary::summarize_profile;
use super::tables::ScoringTables;
use super::vulnerability::vulnerability_index;
use super::EligibilityError;

/// Service composing the eligibility gate, scoring models, and ranking policy over a
/// catalog snapshot. Holds no per-request state.
#[derive(Debug, Clone)]
pub struct EligibilityService {
    catalog: SchemeCatalog,
    tables: Arc<ScoringTables>,
    policy: RankingPolicy,
}

impl EligibilityService {
    pub fn new(catalog: SchemeCatalog, tables: Arc<ScoringTables>, policy: RankingPolicy) -> Self {
        Self {
            catalog,
            tables,
            policy,
        }
    }

    /// Service over `catalog` with the standard tables and ranking policy.
    pub fn with_catalog(catalog: SchemeCatalog) -> Self {
        Self::new(
            catalog,
            Arc::new(ScoringTables::standard()),
            RankingPolicy::default(),
        )
    }

    pub fn catalog(&self) -> &SchemeCatalog {
        &self.catalog
    }

    pub fn tables(&self) -> &ScoringTables {
        &self.tables
    }

    pub fn policy(&self) -> &RankingPolicy {
        &self.policy
    }

    /// Validate a raw request and rank the catalog for it.
    pub fn check(&self, request: EligibilityRequest) -> Result<EligibilityReport, EligibilityError> {
        let user = UserProfile::try_from(request)?;
        Ok(self.evaluate(&user))
    }

    /// Rank the catalog for an already validated profile.
    pub fn evaluate(&self, user: &UserProfile) -> EligibilityReport {
        let vulnerability = vulnerability_index(user, &self.tables);
        let mut ranked = Vec::new();

        for scheme in self.catalog.schemes() {
            if let Err(err) = validate_scheme(scheme) {
                warn!(scheme = %scheme.name, error = %err, "skipping malformed scheme");
                continue;
            }
            if let Some(rejection) = rejection_reason(user, &scheme.criteria) {
                debug!(scheme = %scheme.name, %rejection, "scheme filtered out");
                continue;
            }
            match score_scheme(user, scheme, vulnerability, &self.tables, &self.policy) {
                Some(breakdown) => ranked.push(self.recommendation(user, scheme, &breakdown)),
                None => debug!(scheme = %scheme.name, "probability below threshold"),
            }
        }

        rank_schemes(&mut ranked);
        for scheme in ranked.iter_mut() {
            let explanation = personalized_explanation(scheme, user, vulnerability);
            scheme.personalized_explanation = explanation;
        }

        let user_profile = summarize_profile(user, vulnerability, &ranked, &self.policy);
        let schemes = filter_top_recommendations(&ranked, &self.policy);

        info!(
            vulnerability,
            total_eligible = ranked.len(),
            recommended = schemes.len(),
            "eligibility check complete"
        );

        EligibilityReport {
            success: true,
            count: schemes.len(),
            total_eligible: ranked.len(),
            schemes,
            user_profile,
        }
    }

    fn recommendation(
        &self,
        user: &UserProfile,
        scheme: &SchemeDefinition,
        breakdown: &ScoreBreakdown,
    ) -> SchemeRecommendation {
        let factors = &breakdown.factors;
        let statistical_analysis = StatisticalAnalysis {
            demographic_match: round_to(factors.age, 3),
            income_compatibility: round_to(factors.income, 3),
            category_match: round_to(factors.category, 3),
            priority_score: breakdown.priority,
            overall_probability: round_to(breakdown.overall_probability, 3),
            expected_benefit: self.tables.expected_benefit(scheme).describe(),
        };

        SchemeRecommendation {
            name: scheme.name.clone(),
            description: scheme.description.clone(),
            category: scheme.category.clone(),
            benefits: scheme.benefits.clone(),
            duration: scheme.duration.clone(),
            match_score: breakdown.match_score,
            probability_score: round_to(breakdown.overall_probability, 3),
            confidence_interval: breakdown.confidence_interval,
            eligibility_reason: eligibility_reason(user, &scheme.criteria, &scheme.category),
            requirements: scheme.requirements.clone(),
            statistical_analysis,
            impact_score: self.tables.impact_score(scheme),
            recommendation_score: breakdown.recommendation_score,
            personalized_explanation: String::new(),
        }
    }
}
