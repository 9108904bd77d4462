use std::cmp::Ordering;

use super::config::RankingPolicy;
use super::confidence::confidence_interval;
use super::domain::{
    round_to, PriorityLabel, SchemeCategory, SchemeCriteria, SchemeDefinition, ScoreBreakdown,
    UserProfile,
};
use super::probability::{factor_probabilities, overall_probability};
use super::report::SchemeRecommendation;
use super::tables::ScoringTables;

const BASE_MATCH_SCORE: u8 = 85;
/// Impact assumed when a caller scores a scheme without one.
pub const FALLBACK_IMPACT: f64 = 0.8;

/// Heuristic fit on a 0-100 scale, computed independently of the probability model.
pub fn match_score(user: &UserProfile, criteria: &SchemeCriteria) -> u8 {
    let mut score = BASE_MATCH_SCORE;

    let span = criteria.age_span();
    let age_fraction = if span > 0 {
        (f64::from(user.age) - f64::from(criteria.min_age)) / f64::from(span)
    } else {
        0.5
    };
    if (0.3..=0.7).contains(&age_fraction) {
        score += 5;
    }

    let income_ratio = match criteria.max_income {
        Some(ceiling) if ceiling > 0.0 => user.income / ceiling,
        _ => 0.0,
    };
    if income_ratio < 0.5 {
        score += 10;
    } else if income_ratio < 0.75 {
        score += 5;
    }

    score.min(100)
}

/// Final ranking score: 60 points of probability, 20 of need, 10 of category priority and
/// 10 of scheme impact. Rounded to two decimals.
pub fn recommendation_score(
    probability: f64,
    category: &SchemeCategory,
    vulnerability_index: f64,
    impact: Option<f64>,
    tables: &ScoringTables,
) -> f64 {
    let category_weight = tables.priority_weight(category);
    let impact = impact.unwrap_or(FALLBACK_IMPACT);

    let total = probability * 60.0
        + vulnerability_index * 20.0
        + category_weight * 10.0
        + impact * 10.0;
    round_to(total.clamp(0.0, 100.0), 2)
}

/// Scores a scheme that already passed the eligibility gate.
///
/// Returns `None` when the overall probability falls below the policy floor.
pub fn score_scheme(
    user: &UserProfile,
    scheme: &SchemeDefinition,
    vulnerability_index: f64,
    tables: &ScoringTables,
    policy: &RankingPolicy,
) -> Option<ScoreBreakdown> {
    let factors = factor_probabilities(user, &scheme.criteria, &scheme.category, tables);
    let overall = overall_probability(&factors);
    if overall < policy.minimum_probability {
        return None;
    }

    // The published score is the three-decimal probability, so rank on that same value.
    let probability_score = round_to(overall, 3);
    let impact = tables.impact_score(scheme);

    Some(ScoreBreakdown {
        factors,
        overall_probability: overall,
        confidence_interval: confidence_interval(overall, policy.confidence_sample_size),
        match_score: match_score(user, &scheme.criteria),
        recommendation_score: recommendation_score(
            probability_score,
            &scheme.category,
            vulnerability_index,
            Some(impact),
            tables,
        ),
        priority: PriorityLabel::from_probability(overall),
    })
}

/// Sorts by recommendation score, highest first. Ties keep catalog order.
pub fn rank_schemes(recommendations: &mut [SchemeRecommendation]) {
    recommendations.sort_by(|left, right| {
        right
            .recommendation_score
            .partial_cmp(&left.recommendation_score)
            .unwrap_or(Ordering::Equal)
    });
}

/// Keeps ranked schemes meeting the score floor, capped at the policy maximum.
pub fn filter_top_recommendations(
    ranked: &[SchemeRecommendation],
    policy: &RankingPolicy,
) -> Vec<SchemeRecommendation> {
    ranked
        .iter()
        .filter(|scheme| scheme.recommendation_score >= policy.minimum_recommendation_score)
        .take(policy.max_recommendations)
        .cloned()
        .collect()
}
