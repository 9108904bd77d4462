use std::fmt;

use super::domain::{SchemeCriteria, UserProfile};

/// First criterion a profile failed against a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    BelowMinimumAge,
    AboveMaximumAge,
    IncomeAboveCeiling,
    CategoryNotEligible,
    GenderMismatch,
    StateNotEligible,
}

impl Rejection {
    pub const fn label(self) -> &'static str {
        match self {
            Rejection::BelowMinimumAge => "below minimum age",
            Rejection::AboveMaximumAge => "above maximum age",
            Rejection::IncomeAboveCeiling => "income above ceiling",
            Rejection::CategoryNotEligible => "category not eligible",
            Rejection::GenderMismatch => "gender mismatch",
            Rejection::StateNotEligible => "state not eligible",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hard pass/fail gate. An unknown user gender never fails the gate.
pub fn rejection_reason(user: &UserProfile, criteria: &SchemeCriteria) -> Option<Rejection> {
    if user.age < criteria.min_age {
        return Some(Rejection::BelowMinimumAge);
    }
    if user.age > criteria.max_age {
        return Some(Rejection::AboveMaximumAge);
    }
    if criteria
        .max_income
        .map(|ceiling| user.income > ceiling)
        .unwrap_or(false)
    {
        return Some(Rejection::IncomeAboveCeiling);
    }
    if !criteria.admits_category(&user.category) {
        return Some(Rejection::CategoryNotEligible);
    }
    if let (Some(required), Some(gender)) = (criteria.gender_requirement(), user.gender.as_deref())
    {
        if !required.eq_ignore_ascii_case(gender.trim()) {
            return Some(Rejection::GenderMismatch);
        }
    }
    if !criteria.admits_state(&user.state) {
        return Some(Rejection::StateNotEligible);
    }
    None
}

pub fn is_eligible(user: &UserProfile, criteria: &SchemeCriteria) -> bool {
    rejection_reason(user, criteria).is_none()
}
