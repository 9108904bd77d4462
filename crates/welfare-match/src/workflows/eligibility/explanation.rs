use super::domain::{format_rupees, SchemeCategory, SchemeCriteria, SocialCategory, UserProfile};
use super::report::SchemeRecommendation;

const MAX_REASONS: usize = 3;

/// Up to three short reasons why a ranked scheme suits the applicant.
pub fn personalized_explanation(
    scheme: &SchemeRecommendation,
    user: &UserProfile,
    vulnerability_index: f64,
) -> String {
    let mut reasons = Vec::with_capacity(4);

    let probability = scheme.probability_score;
    reasons.push(if probability >= 0.8 {
        "Excellent statistical match for your profile"
    } else if probability >= 0.6 {
        "Strong match based on your demographics"
    } else {
        "Good potential match"
    });

    if scheme.statistical_analysis.income_compatibility >= 0.8 {
        reasons.push("Your income level is highly suitable for this scheme");
    }

    if vulnerability_index >= 0.7 && scheme.category.targets_low_income() {
        reasons.push("Priority scheme for your current situation");
    }

    match scheme.category {
        SchemeCategory::Education if user.age <= 25 => {
            reasons.push("Age-appropriate educational opportunity");
        }
        SchemeCategory::Healthcare => {
            reasons.push("Essential healthcare coverage recommended");
        }
        SchemeCategory::Agriculture if user.income < 200_000.0 => {
            reasons.push("Direct financial support for agricultural activities");
        }
        _ => {}
    }

    reasons.truncate(MAX_REASONS);
    reasons.join(". ")
}

/// Plain-language account of which criteria the applicant satisfied.
pub fn eligibility_reason(
    user: &UserProfile,
    criteria: &SchemeCriteria,
    category: &SchemeCategory,
) -> String {
    let mut reasons = Vec::new();

    if user.age >= criteria.min_age && user.age <= criteria.max_age {
        reasons.push(format!(
            "Your age ({}) falls within the eligible range",
            user.age
        ));
    }

    if criteria
        .max_income
        .map(|ceiling| user.income <= ceiling)
        .unwrap_or(true)
    {
        reasons.push(format!(
            "Your income ({}) meets the criteria",
            format_rupees(user.income)
        ));
    }

    if criteria.admits_category(&user.category) {
        if user.category == SocialCategory::General {
            reasons.push("Available for all categories".to_string());
        } else {
            reasons.push(format!("Priority given to {} category", user.category));
        }
    }

    if reasons.is_empty() {
        reasons.push(format!(
            "You meet the basic requirements for {category} schemes"
        ));
    }

    reasons.join(". ")
}
