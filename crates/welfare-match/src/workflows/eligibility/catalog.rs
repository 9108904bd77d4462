use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use super::domain::{SchemeCategory, SchemeCriteria, SchemeDefinition};

/// Failure to load a catalog, or a single scheme that cannot be scored.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read scheme catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("scheme catalog must be a JSON array of schemes: {0}")]
    Format(#[from] serde_json::Error),
    #[error("scheme '{name}' is malformed: {reason}")]
    InvalidScheme { name: String, reason: String },
}

impl CatalogError {
    fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidScheme {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Structural checks a scheme must pass before it can be scored.
pub fn validate_scheme(scheme: &SchemeDefinition) -> Result<(), CatalogError> {
    if scheme.name.trim().is_empty() {
        return Err(CatalogError::invalid(&scheme.name, "name is blank"));
    }

    let criteria = &scheme.criteria;
    if criteria.min_age > criteria.max_age {
        return Err(CatalogError::invalid(
            &scheme.name,
            format!(
                "minimum age {} exceeds maximum age {}",
                criteria.min_age, criteria.max_age
            ),
        ));
    }
    if let Some(ceiling) = criteria.max_income {
        if ceiling.is_nan() || ceiling < 0.0 {
            return Err(CatalogError::invalid(
                &scheme.name,
                format!("income ceiling {ceiling} is not a non-negative amount"),
            ));
        }
    }
    if let Some(impact) = scheme.impact_score {
        if !(0.0..=1.0).contains(&impact) {
            return Err(CatalogError::invalid(
                &scheme.name,
                format!("impact score {impact} is outside [0, 1]"),
            ));
        }
    }
    if let Some(benefit) = &scheme.expected_benefit {
        if benefit.min > benefit.max {
            return Err(CatalogError::invalid(
                &scheme.name,
                "expected benefit minimum exceeds maximum",
            ));
        }
    }

    Ok(())
}

/// Immutable, cheaply cloneable snapshot of the scheme catalog.
///
/// Catalog order is significant: it breaks ties during ranking.
#[derive(Debug, Clone)]
pub struct SchemeCatalog {
    schemes: Arc<[SchemeDefinition]>,
}

impl SchemeCatalog {
    pub fn new(schemes: Vec<SchemeDefinition>) -> Self {
        Self {
            schemes: schemes.into(),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path.as_ref())?;
        let catalog = Self::from_reader(file)?;
        info!(
            path = %path.as_ref().display(),
            schemes = catalog.len(),
            "loaded scheme catalog"
        );
        Ok(catalog)
    }

    /// Parses a JSON array entry by entry; malformed or duplicate entries are logged and skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let entries: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
        let mut seen = HashSet::new();
        let mut schemes = Vec::with_capacity(entries.len());

        for (position, entry) in entries.into_iter().enumerate() {
            let scheme: SchemeDefinition = match serde_json::from_value(entry) {
                Ok(scheme) => scheme,
                Err(err) => {
                    warn!(position, error = %err, "skipping unreadable catalog entry");
                    continue;
                }
            };
            if let Err(err) = validate_scheme(&scheme) {
                warn!(position, error = %err, "skipping malformed catalog entry");
                continue;
            }
            if !seen.insert(scheme.name.clone()) {
                warn!(position, name = %scheme.name, "skipping duplicate catalog entry");
                continue;
            }
            schemes.push(scheme);
        }

        Ok(Self::new(schemes))
    }

    /// Reference catalog of central government schemes.
    pub fn standard() -> Self {
        Self::new(vec![
            scheme(
                "PM Kisan Samman Nidhi",
                "Financial assistance to small and marginal farmers",
                SchemeCategory::Agriculture,
                "₹6,000 per year in three installments",
                "Ongoing",
                SchemeCriteria {
                    min_age: 18,
                    max_age: 100,
                    max_income: Some(200_000.0),
                    ..SchemeCriteria::default()
                },
                &[
                    "Land ownership documents",
                    "Aadhaar card",
                    "Bank account details",
                ],
            ),
            scheme(
                "Ayushman Bharat",
                "Health insurance scheme for economically vulnerable families",
                SchemeCategory::Healthcare,
                "₹5 Lakh per family per year",
                "Ongoing",
                SchemeCriteria {
                    min_age: 0,
                    max_age: 120,
                    max_income: Some(100_000.0),
                    ..SchemeCriteria::default()
                },
                &["Ration card", "Income certificate", "Aadhaar card"],
            ),
            scheme(
                "Pradhan Mantri Awas Yojana",
                "Affordable housing for economically weaker sections",
                SchemeCategory::Housing,
                "Subsidy up to ₹2.5 Lakh",
                "Till 2026",
                SchemeCriteria {
                    min_age: 18,
                    max_age: 70,
                    max_income: Some(300_000.0),
                    ..SchemeCriteria::default()
                },
                &["Income certificate", "Aadhaar card", "Property documents"],
            ),
            scheme(
                "National Scholarship Portal",
                "Scholarships for students from minority communities and economically weaker sections",
                SchemeCategory::Education,
                "₹10,000 to ₹50,000 per year",
                "Academic year",
                SchemeCriteria {
                    min_age: 5,
                    max_age: 30,
                    max_income: Some(250_000.0),
                    eligible_categories: ["SC", "ST", "OBC", "EWS"]
                        .into_iter()
                        .map(String::from)
                        .collect(),
                    ..SchemeCriteria::default()
                },
                &[
                    "School/College ID",
                    "Income certificate",
                    "Caste certificate (if applicable)",
                ],
            ),
            scheme(
                "Pradhan Mantri Mudra Yojana",
                "Loans for small businesses and entrepreneurs",
                SchemeCategory::Finance,
                "Loans up to ₹10 Lakh",
                "Ongoing",
                SchemeCriteria {
                    min_age: 18,
                    max_age: 65,
                    max_income: Some(500_000.0),
                    ..SchemeCriteria::default()
                },
                &["Business plan", "Aadhaar card", "Bank statements"],
            ),
            scheme(
                "Beti Bachao Beti Padhao",
                "Scheme to save and educate girl children",
                SchemeCategory::SocialWelfare,
                "Education support and savings scheme",
                "Ongoing",
                SchemeCriteria {
                    min_age: 0,
                    max_age: 21,
                    max_income: Some(500_000.0),
                    required_gender: Some("Female".to_string()),
                    ..SchemeCriteria::default()
                },
                &["Birth certificate", "Aadhaar card", "Bank account"],
            ),
        ])
    }

    /// Snapshot containing only schemes that are active and still accepting applications.
    pub fn active_on(&self, date: NaiveDate) -> Self {
        Self::new(
            self.schemes
                .iter()
                .filter(|scheme| scheme.is_open_on(date))
                .cloned()
                .collect(),
        )
    }

    pub fn schemes(&self) -> &[SchemeDefinition] {
        &self.schemes
    }

    pub fn get(&self, name: &str) -> Option<&SchemeDefinition> {
        self.schemes.iter().find(|scheme| scheme.name == name)
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

impl Default for SchemeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn scheme(
    name: &str,
    description: &str,
    category: SchemeCategory,
    benefits: &str,
    duration: &str,
    criteria: SchemeCriteria,
    requirements: &[&str],
) -> SchemeDefinition {
    SchemeDefinition {
        name: name.to_string(),
        description: description.to_string(),
        category,
        benefits: benefits.to_string(),
        duration: duration.to_string(),
        criteria,
        requirements: requirements.iter().map(|item| item.to_string()).collect(),
        impact_score: None,
        expected_benefit: None,
        is_active: true,
        application_deadline: None,
    }
}
