pub mod documents;
pub mod eligibility;
