//! Per-factor fit probabilities and their weighted combination.
//!
//! Every function here is total over its documented domain and returns a value in `[0, 1]`.

use super::domain::{
    FactorProbabilities, SchemeCategory, SchemeCriteria, SocialCategory, UserProfile,
};
use super::tables::ScoringTables;

pub const AGE_WEIGHT: f64 = 0.20;
pub const INCOME_WEIGHT: f64 = 0.35;
pub const CATEGORY_WEIGHT: f64 = 0.25;
pub const GENDER_WEIGHT: f64 = 0.10;
pub const LOCATION_WEIGHT: f64 = 0.10;
/// State eligibility is enforced by the filter; the weighted sum only carries a fixed credit.
pub const LOCATION_PLACEHOLDER: f64 = 0.8;

const STEEP_INCOME_DECAY: f64 = 2.5;
const GENTLE_INCOME_DECAY: f64 = 1.5;
const UNKNOWN_GENDER_PROBABILITY: f64 = 0.7;
const LISTED_CATEGORY_PROBABILITY: f64 = 0.95;

/// Bell curve over the eligible age range, normalized so the midpoint scores 1.
pub fn age_probability(age: u32, min_age: u32, max_age: u32) -> f64 {
    if age < min_age || age > max_age {
        return 0.0;
    }

    let mean = (f64::from(min_age) + f64::from(max_age)) / 2.0;
    let span = f64::from(max_age) - f64::from(min_age);
    if span == 0.0 {
        return if f64::from(age) == mean { 1.0 } else { 0.0 };
    }

    // density(age) / density(mean); the Gaussian normalization constant cancels.
    let std_dev = span / 4.0;
    let z = (f64::from(age) - mean) / std_dev;
    (-0.5 * z * z).exp().min(1.0)
}

/// Exponential decay in the income-to-ceiling ratio.
pub fn income_probability(income: f64, max_income: Option<f64>, category: &SchemeCategory) -> f64 {
    let ceiling = match max_income {
        Some(ceiling) => ceiling,
        None => return 1.0,
    };
    if income > ceiling {
        return 0.0;
    }
    if ceiling == 0.0 {
        return 1.0;
    }

    let decay_rate = if category.targets_low_income() {
        STEEP_INCOME_DECAY
    } else {
        GENTLE_INCOME_DECAY
    };
    (-decay_rate * (income / ceiling)).exp().min(1.0)
}

pub fn category_probability(
    category: &SocialCategory,
    criteria: &SchemeCriteria,
    tables: &ScoringTables,
) -> f64 {
    if criteria.allows_all_categories() {
        return 0.85 + 0.15 * tables.category_vulnerability(category);
    }
    if criteria.lists_category(category) {
        return LISTED_CATEGORY_PROBABILITY;
    }
    0.0
}

pub fn gender_probability(user_gender: Option<&str>, required_gender: Option<&str>) -> f64 {
    match (required_gender, user_gender) {
        (None, _) => 1.0,
        (Some(_), None) => UNKNOWN_GENDER_PROBABILITY,
        (Some(required), Some(gender)) if required.eq_ignore_ascii_case(gender.trim()) => 1.0,
        (Some(_), Some(_)) => 0.0,
    }
}

pub fn factor_probabilities(
    user: &UserProfile,
    criteria: &SchemeCriteria,
    category: &SchemeCategory,
    tables: &ScoringTables,
) -> FactorProbabilities {
    FactorProbabilities {
        age: age_probability(user.age, criteria.min_age, criteria.max_age),
        income: income_probability(user.income, criteria.max_income, category),
        category: category_probability(&user.category, criteria, tables),
        gender: gender_probability(user.gender.as_deref(), criteria.gender_requirement()),
    }
}

/// Weighted combination of the factor probabilities.
///
/// A factor that evaluates to exactly zero vetoes the match outright, even though the
/// eligibility filter screens the same conditions upstream.
pub fn overall_probability(factors: &FactorProbabilities) -> f64 {
    if factors.any_vetoed() {
        return 0.0;
    }

    let weighted = AGE_WEIGHT * factors.age
        + INCOME_WEIGHT * factors.income
        + CATEGORY_WEIGHT * factors.category
        + GENDER_WEIGHT * factors.gender
        + LOCATION_WEIGHT * LOCATION_PLACEHOLDER;
    weighted.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64, tolerance: f64) -> bool {
        (actual - expected).abs() <= tolerance
    }

    #[test]
    fn age_curve_peaks_at_midpoint_and_is_symmetric() {
        assert_eq!(age_probability(59, 18, 100), 1.0);
        assert_eq!(age_probability(18, 18, 100), age_probability(100, 18, 100));
        assert!(close(age_probability(18, 18, 100), (-2.0f64).exp(), 1e-12));
        assert!(close(age_probability(45, 18, 100), 0.792, 0.001));
        assert_eq!(age_probability(17, 18, 100), 0.0);
        assert_eq!(age_probability(101, 18, 100), 0.0);
    }

    #[test]
    fn degenerate_age_range_is_all_or_nothing() {
        assert_eq!(age_probability(30, 30, 30), 1.0);
        assert_eq!(age_probability(31, 30, 30), 0.0);
    }

    #[test]
    fn income_decay_depends_on_scheme_category() {
        let agriculture = income_probability(50_000.0, Some(200_000.0), &SchemeCategory::Agriculture);
        let healthcare = income_probability(50_000.0, Some(200_000.0), &SchemeCategory::Healthcare);
        assert!(close(agriculture, 0.687, 0.001));
        assert!(close(healthcare, (-0.625f64).exp(), 1e-12));
        assert!(healthcare < agriculture);
    }

    #[test]
    fn income_edge_cases() {
        let category = SchemeCategory::Finance;
        assert_eq!(income_probability(250_001.0, Some(250_000.0), &category), 0.0);
        assert_eq!(income_probability(0.0, Some(0.0), &category), 1.0);
        assert_eq!(income_probability(1_000_000.0, None, &category), 1.0);
        assert_eq!(income_probability(0.0, Some(100.0), &category), 1.0);
    }

    #[test]
    fn category_probability_prefers_vulnerable_groups_on_universal_schemes() {
        let tables = ScoringTables::standard();
        let universal = SchemeCriteria::default();
        assert!(close(
            category_probability(&SocialCategory::General, &universal, &tables),
            0.91,
            1e-12
        ));
        assert!(close(
            category_probability(&SocialCategory::St, &universal, &tables),
            0.9925,
            1e-12
        ));

        let listed = SchemeCriteria {
            eligible_categories: vec!["SC".to_string()],
            ..SchemeCriteria::default()
        };
        assert_eq!(category_probability(&SocialCategory::Sc, &listed, &tables), 0.95);
        assert_eq!(category_probability(&SocialCategory::Obc, &listed, &tables), 0.0);
    }

    #[test]
    fn gender_probability_table() {
        assert_eq!(gender_probability(Some("Male"), None), 1.0);
        assert_eq!(gender_probability(None, Some("Female")), 0.7);
        assert_eq!(gender_probability(Some("FEMALE"), Some("Female")), 1.0);
        assert_eq!(gender_probability(Some("Male"), Some("Female")), 0.0);
    }

    #[test]
    fn zero_factor_vetoes_overall_probability() {
        let factors = FactorProbabilities {
            age: 1.0,
            income: 1.0,
            category: 0.0,
            gender: 1.0,
        };
        assert_eq!(overall_probability(&factors), 0.0);
    }

    #[test]
    fn perfect_factors_cap_below_one_because_of_location_placeholder() {
        let factors = FactorProbabilities {
            age: 1.0,
            income: 1.0,
            category: 1.0,
            gender: 1.0,
        };
        assert!(close(overall_probability(&factors), 0.98, 1e-12));
    }
}
