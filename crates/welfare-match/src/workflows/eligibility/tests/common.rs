use axum::response::Response;
use serde_json::Value;

use crate::workflows::eligibility::domain::{
    EligibilityRequest, SchemeCategory, SchemeCriteria, SchemeDefinition, SocialCategory,
    UserProfile,
};
use crate::workflows::eligibility::{EligibilityService, SchemeCatalog};

pub(super) fn applicant(age: u32, income: f64, category: SocialCategory) -> UserProfile {
    UserProfile {
        age,
        income,
        category,
        state: "Maharashtra".to_string(),
        gender: None,
    }
}

pub(super) fn request(age: i64, income: f64) -> EligibilityRequest {
    EligibilityRequest {
        age,
        income,
        category: Some("General".to_string()),
        state: "Maharashtra".to_string(),
        gender: None,
    }
}

pub(super) fn scheme(name: &str, category: SchemeCategory, criteria: SchemeCriteria) -> SchemeDefinition {
    SchemeDefinition {
        name: name.to_string(),
        description: format!("{name} description"),
        category,
        benefits: "Cash support".to_string(),
        duration: "Ongoing".to_string(),
        criteria,
        requirements: vec!["Aadhaar card".to_string()],
        impact_score: None,
        expected_benefit: None,
        is_active: true,
        application_deadline: None,
    }
}

pub(super) fn capped(min_age: u32, max_age: u32, max_income: f64) -> SchemeCriteria {
    SchemeCriteria {
        min_age,
        max_age,
        max_income: Some(max_income),
        ..SchemeCriteria::default()
    }
}

pub(super) fn standard_service() -> EligibilityService {
    EligibilityService::with_catalog(SchemeCatalog::standard())
}

pub(super) fn service_for(schemes: Vec<SchemeDefinition>) -> EligibilityService {
    EligibilityService::with_catalog(SchemeCatalog::new(schemes))
}

pub(super) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
