use crate::infra::{load_catalog, parse_date};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use welfare_match::config::AppConfig;
use welfare_match::error::AppError;
use welfare_match::workflows::documents::{extract_fields, ExtractedDocument};
use welfare_match::workflows::eligibility::{
    EligibilityReport, EligibilityRequest, EligibilityService, SchemeCatalog,
};

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Applicant age in whole years
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) age: i64,
    /// Annual household income in rupees
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) income: f64,
    /// Social category (General, OBC, SC, ST, EWS). Defaults to General.
    #[arg(long)]
    pub(crate) category: Option<String>,
    /// State of residence
    #[arg(long)]
    pub(crate) state: String,
    /// Applicant gender, if declared
    #[arg(long)]
    pub(crate) gender: Option<String>,
    /// Scheme catalog JSON file. Defaults to APP_CATALOG_PATH, then the built-in catalog.
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Date used to drop closed schemes (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the report as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SchemesArgs {
    /// Scheme catalog JSON file. Defaults to APP_CATALOG_PATH, then the built-in catalog.
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Date used to drop closed schemes (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct ExtractArgs {
    /// Text file produced by document recognition
    #[arg(long)]
    pub(crate) file: PathBuf,
}

fn resolve_catalog(
    catalog: Option<PathBuf>,
    today: Option<NaiveDate>,
) -> Result<SchemeCatalog, AppError> {
    let config = AppConfig::load()?;
    let path = catalog.or(config.catalog.path);
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    load_catalog(path.as_deref(), today)
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs {
        age,
        income,
        category,
        state,
        gender,
        catalog,
        today,
        json,
    } = args;

    let service = EligibilityService::with_catalog(resolve_catalog(catalog, today)?);
    let report = service.check(EligibilityRequest {
        age,
        income,
        category,
        state,
        gender,
    })?;

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Report payload unavailable: {err}"),
        }
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}

pub(crate) fn run_schemes(args: SchemesArgs) -> Result<(), AppError> {
    let catalog = resolve_catalog(args.catalog, args.today)?;
    println!("{} schemes open for applications", catalog.len());
    for scheme in catalog.schemes() {
        println!(
            "- {} [{}] {} | {}",
            scheme.name, scheme.category, scheme.benefits, scheme.duration
        );
    }
    Ok(())
}

pub(crate) fn run_extract(args: ExtractArgs) -> Result<(), AppError> {
    let text = std::fs::read_to_string(&args.file)?;
    print!("{}", render_document(&extract_fields(&text)));
    Ok(())
}

pub(crate) fn render_report(report: &EligibilityReport) -> String {
    let profile = &report.user_profile;
    let mut out = String::new();

    out.push_str(&format!(
        "Eligible schemes: {} ranked, {} recommended\n",
        report.total_eligible, report.count
    ));
    out.push_str(&format!(
        "Vulnerability index {:.3} | {} | {}\n",
        profile.vulnerability_index,
        profile.income_category.label(),
        profile.recommended_focus.message()
    ));
    if !profile.priority_categories.is_empty() {
        let categories: Vec<_> = profile
            .priority_categories
            .iter()
            .map(|category| category.label())
            .collect();
        out.push_str(&format!("Priority categories: {}\n", categories.join(", ")));
    }

    for (rank, scheme) in report.schemes.iter().enumerate() {
        out.push_str(&format!(
            "\n{}. {} ({}) score {:.2}\n",
            rank + 1,
            scheme.name,
            scheme.category,
            scheme.recommendation_score
        ));
        out.push_str(&format!(
            "   probability {:.3} [{:.3}, {:.3}] | match {} | priority {}\n",
            scheme.probability_score,
            scheme.confidence_interval.lower(),
            scheme.confidence_interval.upper(),
            scheme.match_score,
            scheme.statistical_analysis.priority_score.label()
        ));
        out.push_str(&format!("   benefits: {}\n", scheme.benefits));
        out.push_str(&format!(
            "   expected: {}\n",
            scheme.statistical_analysis.expected_benefit
        ));
        out.push_str(&format!("   why: {}\n", scheme.personalized_explanation));
        if !scheme.requirements.is_empty() {
            out.push_str(&format!("   bring: {}\n", scheme.requirements.join(", ")));
        }
    }

    out
}

fn render_document(document: &ExtractedDocument) -> String {
    let sections = [
        ("Emails", &document.emails),
        ("Phones", &document.phones),
        ("National ID numbers", &document.national_id_numbers),
        ("Tax ID numbers", &document.tax_id_numbers),
    ];

    let mut out = String::new();
    for (label, values) in sections {
        if values.is_empty() {
            out.push_str(&format!("{label}: none found\n"));
        } else {
            out.push_str(&format!("{label}: {}\n", values.join(", ")));
        }
    }
    out
}
