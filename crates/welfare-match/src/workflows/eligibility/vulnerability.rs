use super::domain::{round_to, UserProfile};
use super::tables::ScoringTables;

/// Annual income treated as the poverty line.
pub const POVERTY_LINE: f64 = 100_000.0;
const INCOME_TAPER_CEILING: f64 = 500_000.0;

const INCOME_SHARE: f64 = 0.50;
const CATEGORY_SHARE: f64 = 0.30;
const AGE_SHARE: f64 = 0.20;

fn income_component(income: f64) -> f64 {
    if income <= POVERTY_LINE {
        1.0 - income / POVERTY_LINE
    } else {
        (1.0 - income / INCOME_TAPER_CEILING).max(0.0)
    }
}

fn age_component(age: u32) -> f64 {
    if age < 18 {
        0.8
    } else if age > 60 {
        0.7
    } else {
        0.3
    }
}

/// Person-level need estimate in `[0, 1]`, independent of any scheme.
pub fn vulnerability_index(user: &UserProfile, tables: &ScoringTables) -> f64 {
    let index = INCOME_SHARE * income_component(user.income)
        + CATEGORY_SHARE * tables.category_vulnerability(&user.category)
        + AGE_SHARE * age_component(user.age);
    round_to(index.clamp(0.0, 1.0), 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::eligibility::domain::SocialCategory;

    fn user(age: u32, income: f64, category: SocialCategory) -> UserProfile {
        UserProfile {
            age,
            income,
            category,
            state: "Bihar".to_string(),
            gender: None,
        }
    }

    #[test]
    fn low_income_general_farmer() {
        let tables = ScoringTables::standard();
        let index = vulnerability_index(&user(45, 50_000.0, SocialCategory::General), &tables);
        assert!((index - 0.43).abs() < 1e-9);
    }

    #[test]
    fn destitute_tribal_child_is_most_vulnerable() {
        let tables = ScoringTables::standard();
        let index = vulnerability_index(&user(8, 0.0, SocialCategory::St), &tables);
        assert!((index - 0.945).abs() < 1e-9);
    }

    #[test]
    fn income_component_restarts_above_the_poverty_line() {
        assert_eq!(income_component(POVERTY_LINE), 0.0);
        assert!(income_component(POVERTY_LINE + 1.0) > 0.79);
        assert_eq!(income_component(600_000.0), 0.0);
    }
}
