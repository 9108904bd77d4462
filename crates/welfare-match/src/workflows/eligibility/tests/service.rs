use super::common::*;

use crate::workflows::eligibility::domain::{SchemeCategory, SocialCategory};
use crate::workflows::eligibility::report::{IncomeBracket, RecommendedFocus};
use crate::workflows::eligibility::EligibilityError;

#[test]
fn negative_age_is_rejected_before_scoring() {
    let err = standard_service()
        .check(request(-1, 10_000.0))
        .expect_err("negative age is invalid");

    assert!(matches!(
        err,
        EligibilityError::InvalidInput { field: "age", .. }
    ));
}

#[test]
fn non_finite_or_negative_income_is_rejected() {
    for income in [f64::NAN, f64::INFINITY, -5.0] {
        let err = standard_service()
            .check(request(30, income))
            .expect_err("income is invalid");
        assert!(matches!(
            err,
            EligibilityError::InvalidInput { field: "income", .. }
        ));
    }
}

#[test]
fn missing_category_is_scored_as_general() {
    let mut raw = request(45, 50_000.0);
    raw.category = Some("   ".to_string());
    let blank = standard_service().check(raw).expect("blank category accepted");

    let general = standard_service()
        .check(request(45, 50_000.0))
        .expect("general accepted");

    assert_eq!(blank, general);
}

#[test]
fn malformed_schemes_are_skipped_without_failing_the_request() {
    let service = service_for(vec![
        scheme("Inverted", SchemeCategory::Housing, capped(60, 18, 300_000.0)),
        scheme("Valid", SchemeCategory::Housing, capped(18, 60, 300_000.0)),
    ]);

    let report = service.evaluate(&applicant(35, 90_000.0, SocialCategory::General));

    assert_eq!(report.total_eligible, 1);
    assert_eq!(report.schemes[0].name, "Valid");
}

#[test]
fn empty_catalog_yields_an_empty_successful_report() {
    let report = service_for(Vec::new()).evaluate(&applicant(35, 90_000.0, SocialCategory::Sc));

    assert!(report.success);
    assert_eq!(report.count, 0);
    assert!(report.user_profile.priority_categories.is_empty());
}

#[test]
fn profile_summary_reflects_need() {
    let report = standard_service().evaluate(&applicant(70, 20_000.0, SocialCategory::St));
    let summary = &report.user_profile;

    assert_eq!(summary.income_category, IncomeBracket::BelowPovertyLine);
    assert_eq!(summary.recommended_focus, RecommendedFocus::ImmediateAssistance);
    assert_close(summary.vulnerability_index, 0.825, 0.0005);
}

#[test]
fn repeated_checks_are_identical() {
    let service = standard_service();
    let user = applicant(19, 120_000.0, SocialCategory::Ews);

    assert_eq!(service.evaluate(&user), service.evaluate(&user));
}
