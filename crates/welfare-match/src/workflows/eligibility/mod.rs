//! Welfare scheme eligibility scoring and ranking.
//!
//! A request flows through the hard eligibility gate, the per-factor probability model,
//! the Wilson confidence estimate and the recommendation score before being ranked,
//! explained and summarized. Everything below the service is a pure function of the
//! profile, the catalog snapshot and the lookup tables.

pub mod catalog;
pub mod confidence;
pub mod config;
pub mod domain;
pub mod explanation;
pub mod filter;
pub mod probability;
pub mod ranking;
pub mod report;
pub mod router;
pub mod service;
pub mod summary;
pub mod tables;
pub mod vulnerability;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, SchemeCatalog};
pub use config::RankingPolicy;
pub use domain::{
    ConfidenceInterval, EligibilityRequest, ExpectedBenefit, PriorityLabel, SchemeCategory,
    SchemeCriteria, SchemeDefinition, ScoreBreakdown, SocialCategory, UserProfile,
};
pub use report::{
    EligibilityReport, IncomeBracket, ProfileSummary, RecommendedFocus, SchemeRecommendation,
    StatisticalAnalysis,
};
pub use router::eligibility_router;
pub use service::EligibilityService;
pub use tables::ScoringTables;

/// Error raised when a request cannot be scored.
#[derive(Debug, thiserror::Error)]
pub enum EligibilityError {
    #[error("invalid {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },
}

impl EligibilityError {
    pub(crate) fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }
}
