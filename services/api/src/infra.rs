use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;
use welfare_match::error::AppError;
use welfare_match::workflows::eligibility::SchemeCatalog;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the catalog from `path` (or the built-in one) and keeps only schemes open on `today`.
pub(crate) fn load_catalog(path: Option<&Path>, today: NaiveDate) -> Result<SchemeCatalog, AppError> {
    let catalog = match path {
        Some(path) => SchemeCatalog::from_path(path)?,
        None => SchemeCatalog::standard(),
    };

    let snapshot = catalog.active_on(today);
    info!(
        loaded = catalog.len(),
        open = snapshot.len(),
        %today,
        "scheme catalog snapshot ready"
    );
    Ok(snapshot)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date")
    }

    #[test]
    fn builtin_catalog_is_used_without_a_path() {
        let catalog = load_catalog(None, today()).expect("builtin loads");
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn catalog_file_is_filtered_to_open_schemes() {
        let path = std::env::temp_dir().join(format!(
            "welfare-match-catalog-{}.json",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).expect("temp file");
        file.write_all(
            br#"[
                {"name": "Open", "description": "d", "category": "Housing", "benefits": "b"},
                {"name": "Closed", "description": "d", "category": "Housing", "benefits": "b",
                 "applicationDeadline": "2024-12-31"}
            ]"#,
        )
        .expect("write catalog");

        let catalog = load_catalog(Some(&path), today()).expect("file loads");
        std::fs::remove_file(&path).ok();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("Open").is_some());
    }

    #[test]
    fn missing_catalog_file_is_an_error() {
        let err = load_catalog(Some(Path::new("/nonexistent/schemes.json")), today())
            .expect_err("missing file fails");
        assert!(matches!(err, AppError::Catalog(_)));
    }

    #[test]
    fn parse_date_reports_bad_input() {
        assert_eq!(parse_date(" 2025-02-01 "), Ok(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()));
        assert!(parse_date("01/02/2025").is_err());
    }
}
