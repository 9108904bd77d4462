use serde::{Deserialize, Serialize};

/// Thresholds that decide which scored schemes surface and how many.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingPolicy {
    /// Schemes below this overall probability are dropped before ranking.
    pub minimum_probability: f64,
    /// Ranked schemes below this recommendation score are left out of the top list.
    pub minimum_recommendation_score: f64,
    pub max_recommendations: usize,
    /// Recommendation score counted as "high priority" in the profile summary.
    pub high_priority_score: f64,
    pub summary_window: usize,
    pub priority_category_count: usize,
    /// Notional sample size behind the confidence interval.
    pub confidence_sample_size: u32,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            minimum_probability: 0.30,
            minimum_recommendation_score: 50.0,
            max_recommendations: 10,
            high_priority_score: 80.0,
            summary_window: 5,
            priority_category_count: 3,
            confidence_sample_size: super::confidence::DEFAULT_SAMPLE_SIZE,
        }
    }
}
