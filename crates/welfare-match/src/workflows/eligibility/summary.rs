use super::config::RankingPolicy;
use super::domain::{SchemeCategory, UserProfile};
use super::report::{IncomeBracket, ProfileSummary, RecommendedFocus, SchemeRecommendation};

/// Most frequent categories among the leading schemes; ties keep first-seen order.
fn priority_categories(
    ranked: &[SchemeRecommendation],
    policy: &RankingPolicy,
) -> Vec<SchemeCategory> {
    let mut counts: Vec<(SchemeCategory, usize)> = Vec::new();
    for scheme in ranked.iter().take(policy.summary_window) {
        match counts
            .iter_mut()
            .find(|(category, _)| *category == scheme.category)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((scheme.category.clone(), 1)),
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|left, right| right.1.cmp(&left.1));
    counts
        .into_iter()
        .take(policy.priority_category_count)
        .map(|(category, _)| category)
        .collect()
}

/// Person-level digest of the full ranked list (before the top-N cut).
pub fn summarize_profile(
    user: &UserProfile,
    vulnerability_index: f64,
    ranked: &[SchemeRecommendation],
    policy: &RankingPolicy,
) -> ProfileSummary {
    let high_priority_schemes = ranked
        .iter()
        .filter(|scheme| scheme.recommendation_score >= policy.high_priority_score)
        .count();

    ProfileSummary {
        vulnerability_index,
        income_category: IncomeBracket::from_income(user.income),
        priority_categories: priority_categories(ranked, policy),
        recommended_focus: RecommendedFocus::from_vulnerability(vulnerability_index),
        total_eligible_schemes: ranked.len(),
        high_priority_schemes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn income_brackets() {
        assert_eq!(IncomeBracket::from_income(99_999.0), IncomeBracket::BelowPovertyLine);
        assert_eq!(IncomeBracket::from_income(100_000.0), IncomeBracket::Low);
        assert_eq!(IncomeBracket::from_income(250_000.0), IncomeBracket::LowerMiddle);
        assert_eq!(IncomeBracket::from_income(500_000.0), IncomeBracket::Middle);
    }

    #[test]
    fn focus_follows_vulnerability() {
        assert_eq!(
            RecommendedFocus::from_vulnerability(0.7),
            RecommendedFocus::ImmediateAssistance
        );
        assert_eq!(
            RecommendedFocus::from_vulnerability(0.5),
            RecommendedFocus::MultipleSchemes
        );
        assert_eq!(
            RecommendedFocus::from_vulnerability(0.43),
            RecommendedFocus::GrowthSchemes
        );
    }
}
